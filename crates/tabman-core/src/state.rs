use tabman_ingest::{ImportOutcome, IngestError, export_csv, import_csv_with};
use tabman_model::{
    ColumnDef, ColumnId, ColumnType, ImportIssue, ModelError, Record, RecordId,
    RecordIdGenerator, SortDirection, Theme, ViewCriteria,
};
use tracing::{debug, info, warn};

use crate::view::{derive, page_count, paginate};
use crate::{ColumnRegistry, EditSessions, RecordStore, TableConfig};

/// All state behind one table: records, columns, criteria, open edits,
/// theme and the derived view.
///
/// Every mutation that can change the visible rows recomputes the view
/// before it returns, so [`TableState::view`] is never stale.
#[derive(Debug, Clone)]
pub struct TableState {
    store: RecordStore,
    columns: ColumnRegistry,
    criteria: ViewCriteria,
    edits: EditSessions,
    theme: Theme,
    config: TableConfig,
    view: Vec<usize>,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            store: RecordStore::new(),
            columns: ColumnRegistry::new(),
            criteria: ViewCriteria::default(),
            edits: EditSessions::new(),
            theme: Theme::default(),
            config: TableConfig::default(),
            view: Vec::new(),
        }
    }
}

impl TableState {
    pub fn new(config: TableConfig) -> Result<Self, ModelError> {
        config.validate()?;
        let criteria = ViewCriteria::default().with_rows_per_page(config.rows_per_page)?;
        Ok(Self {
            criteria,
            config,
            ..Self::default()
        })
    }

    pub fn with_records(mut self, records: Vec<Record>) -> Self {
        self.set_records(records);
        self
    }

    pub fn with_columns(mut self, columns: ColumnRegistry) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_id_generator(mut self, ids: RecordIdGenerator) -> Self {
        let records = self.store.records().to_vec();
        self.store = RecordStore::with_id_generator(ids);
        self.store.set_all(records);
        self
    }

    pub fn records(&self) -> &[Record] {
        self.store.records()
    }

    pub fn record(&self, id: &RecordId) -> Option<&Record> {
        self.store.get(id)
    }

    pub fn columns(&self) -> &ColumnRegistry {
        &self.columns
    }

    pub fn criteria(&self) -> &ViewCriteria {
        &self.criteria
    }

    pub fn edits(&self) -> &EditSessions {
        &self.edits
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Store indices of the derived view.
    pub fn view_indices(&self) -> &[usize] {
        &self.view
    }

    /// Filtered and sorted records.
    pub fn view(&self) -> Vec<&Record> {
        self.view
            .iter()
            .map(|&idx| &self.store.records()[idx])
            .collect()
    }

    /// Records on the current page.
    pub fn page_rows(&self) -> Vec<&Record> {
        paginate(&self.view, self.criteria.page, self.criteria.rows_per_page)
            .iter()
            .map(|&idx| &self.store.records()[idx])
            .collect()
    }

    pub fn page_count(&self) -> usize {
        page_count(self.view.len(), self.criteria.rows_per_page)
    }

    fn recompute(&mut self) {
        self.view = derive(self.store.records(), &self.criteria);
        debug!(
            total = self.store.len(),
            visible = self.view.len(),
            "view recomputed"
        );
    }

    // Criteria

    pub fn search(&mut self, query: impl Into<String>) {
        self.criteria.search_query = query.into();
        self.criteria.page = 0;
        self.recompute();
    }

    pub fn sort(&mut self, field: ColumnId, direction: SortDirection) {
        self.criteria.sort_field = Some(field);
        self.criteria.sort_direction = direction;
        self.recompute();
    }

    /// Header click: ascending on a new field, flipped on the active one.
    pub fn toggle_sort(&mut self, field: ColumnId) {
        let direction = if self.criteria.sort_field.as_ref() == Some(&field) {
            self.criteria.sort_direction.toggled()
        } else {
            SortDirection::Asc
        };
        self.sort(field, direction);
    }

    pub fn set_page(&mut self, page: usize) {
        self.criteria.page = page;
    }

    pub fn set_rows_per_page(&mut self, rows_per_page: usize) -> Result<(), ModelError> {
        if rows_per_page == 0 {
            return Err(ModelError::InvalidRowsPerPage(rows_per_page));
        }
        self.criteria.rows_per_page = rows_per_page;
        self.criteria.page = 0;
        Ok(())
    }

    // Columns

    pub fn toggle_column_visibility(&mut self, id: &ColumnId) -> bool {
        self.columns.toggle_visibility(id)
    }

    pub fn add_column(&mut self, column: ColumnDef) -> bool {
        self.columns.add(column)
    }

    pub fn add_column_from_label(
        &mut self,
        label: &str,
        column_type: ColumnType,
    ) -> Result<bool, ModelError> {
        self.columns.add_from_label(label, column_type)
    }

    // Edits

    pub fn begin_edit(&mut self, id: &RecordId) -> bool {
        match self.store.get(id) {
            Some(record) => self.edits.begin(record),
            None => {
                debug!(record = %id, "no record to edit");
                false
            }
        }
    }

    pub fn edit_field(&mut self, id: &RecordId, field: &str, value: &str) -> bool {
        self.edits.set_field(id, field, value)
    }

    /// Write `record` under `id` and close the session.
    pub fn commit_edit(&mut self, id: &RecordId, mut record: Record) -> bool {
        record.id = id.clone();
        self.edits.close(id);
        let updated = self.store.update(record);
        self.recompute();
        updated
    }

    pub fn commit_working_copy(&mut self, id: &RecordId) -> bool {
        match self.edits.close(id) {
            Some(working) => {
                let updated = self.store.update(working);
                self.recompute();
                updated
            }
            None => false,
        }
    }

    pub fn cancel_edit(&mut self, id: &RecordId) -> bool {
        self.edits.close(id).is_some()
    }

    pub fn cancel_all_edits(&mut self) -> usize {
        self.edits.clear_all()
    }

    /// Commit every open working copy in session order. Returns how many
    /// records were written.
    pub fn save_all_edits(&mut self) -> usize {
        let working = self.edits.drain();
        let saved = working
            .into_iter()
            .map(|record| self.store.update(record))
            .filter(|&updated| updated)
            .count();
        self.recompute();
        saved
    }

    // Records

    /// Id for a record about to be added.
    pub fn next_record_id(&mut self) -> RecordId {
        self.store.next_id()
    }

    pub fn add_record(&mut self, record: Record) -> RecordId {
        let id = self.store.add(record);
        self.recompute();
        id
    }

    pub fn delete_record(&mut self, id: &RecordId) -> bool {
        let removed = self.store.remove(id).is_some();
        if removed {
            self.edits.close(id);
            self.recompute();
        }
        removed
    }

    pub fn set_records(&mut self, records: Vec<Record>) {
        self.store.set_all(records);
        let store = &self.store;
        self.edits.retain(|id| store.contains(id));
        self.recompute();
    }

    // CSV

    /// Import `text`, replacing every record when it is accepted.
    pub fn import_csv(&mut self, text: &str) -> Result<usize, Vec<ImportIssue>> {
        let outcome = import_csv_with(text, self.store.id_generator_mut());
        self.apply_import(outcome)
    }

    /// Apply the result of an import run elsewhere, e.g. by
    /// [`tabman_ingest::import_csv_async`].
    pub fn apply_import(&mut self, outcome: ImportOutcome) -> Result<usize, Vec<ImportIssue>> {
        match outcome.into_result() {
            Ok(records) => {
                let count = records.len();
                self.set_records(records);
                info!(count, "records replaced by import");
                Ok(count)
            }
            Err(issues) => {
                warn!(issues = issues.len(), "import rejected, records unchanged");
                Err(issues)
            }
        }
    }

    /// The current view with visible columns as CSV text.
    pub fn export_csv(&self) -> Result<String, IngestError> {
        let csv = export_csv(self.view(), self.columns.columns())?;
        info!(rows = self.view.len(), "view exported");
        Ok(csv)
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }
}
