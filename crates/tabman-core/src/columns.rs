use tabman_model::{ColumnDef, ColumnId, ColumnType, ModelError, default_columns};
use tracing::debug;

/// Ordered set of column definitions.
///
/// Ids are unique and required columns are always visible. Columns are
/// only ever appended; there is no reordering or removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRegistry {
    columns: Vec<ColumnDef>,
}

impl Default for ColumnRegistry {
    fn default() -> Self {
        Self {
            columns: default_columns(),
        }
    }
}

impl ColumnRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a persisted column list. Later duplicates are dropped and
    /// required columns are forced visible.
    pub fn from_columns(columns: Vec<ColumnDef>) -> Self {
        let mut registry = Self {
            columns: Vec::with_capacity(columns.len()),
        };
        for mut column in columns {
            if column.required {
                column.visible = true;
            }
            registry.add(column);
        }
        registry
    }

    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    pub fn into_columns(self) -> Vec<ColumnDef> {
        self.columns
    }

    pub fn visible(&self) -> impl Iterator<Item = &ColumnDef> {
        self.columns.iter().filter(|column| column.visible)
    }

    pub fn get(&self, id: &ColumnId) -> Option<&ColumnDef> {
        self.columns.iter().find(|column| &column.id == id)
    }

    pub fn contains(&self, id: &ColumnId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Flip visibility of an optional column. Returns whether it changed.
    pub fn toggle_visibility(&mut self, id: &ColumnId) -> bool {
        match self.columns.iter_mut().find(|column| &column.id == id) {
            Some(column) if !column.required => {
                column.visible = !column.visible;
                true
            }
            Some(_) => {
                debug!(column = %id, "required column stays visible");
                false
            }
            None => false,
        }
    }

    /// Append `column` unless its id is taken. Returns whether it was added.
    pub fn add(&mut self, mut column: ColumnDef) -> bool {
        if self.contains(&column.id) {
            debug!(column = %column.id, "column already defined");
            return false;
        }
        if column.required {
            column.visible = true;
        }
        self.columns.push(column);
        true
    }

    pub fn add_from_label(
        &mut self,
        label: &str,
        column_type: ColumnType,
    ) -> Result<bool, ModelError> {
        let column = ColumnDef::from_label(label, column_type)?;
        Ok(self.add(column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: &str) -> ColumnId {
        ColumnId::new(value).unwrap()
    }

    #[test]
    fn toggle_skips_required_and_unknown() {
        let mut registry = ColumnRegistry::new();
        assert!(!registry.toggle_visibility(&id("name")));
        assert!(registry.get(&id("name")).unwrap().visible);
        assert!(!registry.toggle_visibility(&id("nope")));

        assert!(registry.toggle_visibility(&id("department")));
        assert!(registry.get(&id("department")).unwrap().visible);
    }

    #[test]
    fn adding_existing_label_is_a_no_op() {
        let mut registry = ColumnRegistry::new();
        let before = registry.len();
        assert!(!registry.add_from_label(" Location ", ColumnType::String).unwrap());
        assert_eq!(registry.len(), before);
    }

    #[test]
    fn added_columns_append_visible() {
        let mut registry = ColumnRegistry::new();
        assert!(registry.add_from_label("Start Date", ColumnType::String).unwrap());
        let last = registry.columns().last().unwrap();
        assert_eq!(last.id.as_str(), "startdate");
        assert_eq!(last.label, "Start Date");
        assert!(last.visible && !last.required);
    }

    #[test]
    fn blank_label_is_rejected() {
        let mut registry = ColumnRegistry::new();
        assert_eq!(
            registry.add_from_label("  ", ColumnType::String),
            Err(ModelError::EmptyColumnLabel("  ".to_string()))
        );
    }

    #[test]
    fn from_columns_repairs_persisted_lists() {
        let mut columns = default_columns();
        columns[0].visible = false;
        columns.push(columns[4].clone());
        let registry = ColumnRegistry::from_columns(columns);
        assert_eq!(registry.len(), 6);
        assert!(registry.get(&id("name")).unwrap().visible);
    }
}
