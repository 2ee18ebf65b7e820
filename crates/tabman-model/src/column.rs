use serde::{Deserialize, Serialize};

use crate::{ColumnId, ModelError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    #[default]
    String,
    Number,
    Email,
}

impl ColumnType {
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnType::String => "string",
            ColumnType::Number => "number",
            ColumnType::Email => "email",
        }
    }
}

/// Definition of one table column.
///
/// A `required` column is always visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub id: ColumnId,
    pub label: String,
    pub visible: bool,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    #[serde(default)]
    pub required: bool,
}

impl ColumnDef {
    pub fn new(id: ColumnId, label: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            id,
            label: label.into(),
            visible: true,
            column_type,
            required: false,
        }
    }

    /// Build a user-defined column from its label.
    ///
    /// The id is derived with [`ColumnId::from_label`], the label is trimmed,
    /// and the column starts visible and optional.
    pub fn from_label(label: &str, column_type: ColumnType) -> Result<Self, ModelError> {
        let id = ColumnId::from_label(label)?;
        Ok(Self::new(id, label.trim(), column_type))
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self.visible = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        if !self.required {
            self.visible = false;
        }
        self
    }
}

fn builtin(id: &'static str, label: &str, column_type: ColumnType) -> ColumnDef {
    ColumnDef {
        id: ColumnId::builtin(id),
        label: label.to_string(),
        visible: true,
        column_type,
        required: false,
    }
}

/// The column set a fresh table starts with.
pub fn default_columns() -> Vec<ColumnDef> {
    vec![
        builtin("name", "Name", ColumnType::String).required(),
        builtin("email", "Email", ColumnType::Email).required(),
        builtin("age", "Age", ColumnType::Number).required(),
        builtin("role", "Role", ColumnType::String).required(),
        builtin("department", "Department", ColumnType::String).hidden(),
        builtin("location", "Location", ColumnType::String).hidden(),
    ]
}
