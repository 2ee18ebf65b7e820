use chrono::Utc;
use serde::{Deserialize, Serialize};
use tabman_model::{ColumnDef, Theme, default_columns};

/// Newest preferences layout this build reads and writes.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Persisted table preferences.
///
/// Records, view criteria and edit sessions are never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub schema_version: u32,
    /// RFC 3339 time of the last save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<String>,
    pub columns: Vec<ColumnDef>,
    #[serde(default)]
    pub theme: Theme,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            saved_at: None,
            columns: default_columns(),
            theme: Theme::default(),
        }
    }
}

impl Preferences {
    pub fn new(columns: Vec<ColumnDef>, theme: Theme) -> Self {
        Self {
            columns,
            theme,
            ..Self::default()
        }
    }

    /// Stamp the save time.
    pub fn touch(&mut self) {
        self.schema_version = CURRENT_SCHEMA_VERSION;
        self.saved_at = Some(Utc::now().to_rfc3339());
    }
}

/// Just enough of the document to check its version before the full parse.
#[derive(Deserialize)]
pub(crate) struct VersionProbe {
    pub schema_version: u32,
}
