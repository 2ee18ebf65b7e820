//! Serializable table actions, the surface the CLI replays from scripts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tabman_model::{ColumnId, ColumnType, ImportIssue, Record, RecordId, SortDirection};
use tracing::debug;

use crate::{Result, TableState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum TableAction {
    Search {
        query: String,
    },
    Sort {
        field: ColumnId,
        #[serde(default)]
        direction: SortDirection,
    },
    ToggleSort {
        field: ColumnId,
    },
    SetPage {
        page: usize,
    },
    SetRowsPerPage {
        rows_per_page: usize,
    },
    ToggleColumnVisibility {
        id: ColumnId,
    },
    AddColumn {
        label: String,
        #[serde(default, rename = "type")]
        column_type: ColumnType,
    },
    AddRecord {
        name: String,
        email: String,
        age: i64,
        role: String,
        #[serde(default)]
        department: Option<String>,
        #[serde(default)]
        location: Option<String>,
        #[serde(default)]
        custom: BTreeMap<String, String>,
    },
    BeginEdit {
        id: RecordId,
    },
    EditField {
        id: RecordId,
        field: String,
        value: String,
    },
    /// Commit `record` when given, otherwise the tracked working copy.
    CommitEdit {
        id: RecordId,
        #[serde(default)]
        record: Option<Record>,
    },
    CancelEdit {
        id: RecordId,
    },
    CancelAllEdits,
    SaveAllEdits,
    DeleteRecord {
        id: RecordId,
    },
    ImportCsv {
        csv: String,
    },
    ExportCsv,
    ToggleTheme,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ActionOutcome {
    Applied,
    /// The action was a no-op, e.g. toggling a required column.
    Ignored,
    Added { id: RecordId },
    Imported { count: usize },
    ImportRejected { issues: Vec<ImportIssue> },
    Exported { csv: String },
}

impl TableAction {
    /// The `action` tag, safe to log without record contents.
    pub fn name(&self) -> &'static str {
        match self {
            TableAction::Search { .. } => "search",
            TableAction::Sort { .. } => "sort",
            TableAction::ToggleSort { .. } => "toggle_sort",
            TableAction::SetPage { .. } => "set_page",
            TableAction::SetRowsPerPage { .. } => "set_rows_per_page",
            TableAction::ToggleColumnVisibility { .. } => "toggle_column_visibility",
            TableAction::AddColumn { .. } => "add_column",
            TableAction::AddRecord { .. } => "add_record",
            TableAction::BeginEdit { .. } => "begin_edit",
            TableAction::EditField { .. } => "edit_field",
            TableAction::CommitEdit { .. } => "commit_edit",
            TableAction::CancelEdit { .. } => "cancel_edit",
            TableAction::CancelAllEdits => "cancel_all_edits",
            TableAction::SaveAllEdits => "save_all_edits",
            TableAction::DeleteRecord { .. } => "delete_record",
            TableAction::ImportCsv { .. } => "import_csv",
            TableAction::ExportCsv => "export_csv",
            TableAction::ToggleTheme => "toggle_theme",
        }
    }
}

impl ActionOutcome {
    fn from_changed(changed: bool) -> Self {
        if changed {
            ActionOutcome::Applied
        } else {
            ActionOutcome::Ignored
        }
    }
}

impl TableState {
    /// Apply one action.
    ///
    /// Rejected imports are an outcome, not an error; errors are invalid
    /// input such as zero rows per page or a blank column label.
    pub fn dispatch(&mut self, action: TableAction) -> Result<ActionOutcome> {
        debug!(action = action.name(), "dispatch");
        let outcome = match action {
            TableAction::Search { query } => {
                self.search(query);
                ActionOutcome::Applied
            }
            TableAction::Sort { field, direction } => {
                self.sort(field, direction);
                ActionOutcome::Applied
            }
            TableAction::ToggleSort { field } => {
                self.toggle_sort(field);
                ActionOutcome::Applied
            }
            TableAction::SetPage { page } => {
                self.set_page(page);
                ActionOutcome::Applied
            }
            TableAction::SetRowsPerPage { rows_per_page } => {
                self.set_rows_per_page(rows_per_page)?;
                ActionOutcome::Applied
            }
            TableAction::ToggleColumnVisibility { id } => {
                ActionOutcome::from_changed(self.toggle_column_visibility(&id))
            }
            TableAction::AddColumn { label, column_type } => {
                ActionOutcome::from_changed(self.add_column_from_label(&label, column_type)?)
            }
            TableAction::AddRecord {
                name,
                email,
                age,
                role,
                department,
                location,
                custom,
            } => {
                let mut record = Record::new(self.next_record_id(), name, email, age, role);
                record.department = department;
                record.location = location;
                record.custom = custom;
                ActionOutcome::Added {
                    id: self.add_record(record),
                }
            }
            TableAction::BeginEdit { id } => ActionOutcome::from_changed(self.begin_edit(&id)),
            TableAction::EditField { id, field, value } => {
                ActionOutcome::from_changed(self.edit_field(&id, &field, &value))
            }
            TableAction::CommitEdit { id, record } => {
                let committed = match record {
                    Some(record) => self.commit_edit(&id, record),
                    None => self.commit_working_copy(&id),
                };
                ActionOutcome::from_changed(committed)
            }
            TableAction::CancelEdit { id } => ActionOutcome::from_changed(self.cancel_edit(&id)),
            TableAction::CancelAllEdits => {
                ActionOutcome::from_changed(self.cancel_all_edits() > 0)
            }
            TableAction::SaveAllEdits => ActionOutcome::from_changed(self.save_all_edits() > 0),
            TableAction::DeleteRecord { id } => {
                ActionOutcome::from_changed(self.delete_record(&id))
            }
            TableAction::ImportCsv { csv } => match self.import_csv(&csv) {
                Ok(count) => ActionOutcome::Imported { count },
                Err(issues) => ActionOutcome::ImportRejected { issues },
            },
            TableAction::ExportCsv => ActionOutcome::Exported {
                csv: self.export_csv()?,
            },
            TableAction::ToggleTheme => {
                self.toggle_theme();
                ActionOutcome::Applied
            }
        };
        Ok(outcome)
    }

    /// Apply `actions` in order, stopping at the first error.
    pub fn dispatch_all<I>(&mut self, actions: I) -> Result<Vec<ActionOutcome>>
    where
        I: IntoIterator<Item = TableAction>,
    {
        actions
            .into_iter()
            .map(|action| self.dispatch(action))
            .collect()
    }
}
