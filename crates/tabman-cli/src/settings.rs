//! Settings file (`tabman.toml`).
//!
//! ```toml
//! rows_per_page = 25
//! preferences_path = ".tabman/preferences.json"
//! export_file_name = "table-data.csv"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tabman_core::TableConfig;
use tabman_ingest::DEFAULT_EXPORT_FILE_NAME;
use tabman_model::DEFAULT_ROWS_PER_PAGE;

/// Settings file looked up in the working directory when `--config` is absent.
pub const DEFAULT_SETTINGS_FILE: &str = "tabman.toml";
pub const DEFAULT_PREFERENCES_PATH: &str = ".tabman/preferences.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub rows_per_page: usize,
    pub preferences_path: PathBuf,
    pub export_file_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            preferences_path: PathBuf::from(DEFAULT_PREFERENCES_PATH),
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
        }
    }
}

impl Settings {
    /// Load `explicit`, or `tabman.toml` when it exists, or the defaults.
    ///
    /// A missing explicit file is an error; a missing default file is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(DEFAULT_SETTINGS_FILE);
                if path.is_file() {
                    Self::from_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        let settings = Self::from_toml_str(&text)
            .with_context(|| format!("invalid settings file {}", path.display()))?;
        tracing::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let settings: Self = toml::from_str(text)?;
        if settings.rows_per_page == 0 {
            bail!("rows_per_page must be greater than zero");
        }
        if settings.export_file_name.trim().is_empty() {
            bail!("export_file_name must not be empty");
        }
        Ok(settings)
    }

    pub fn table_config(&self) -> TableConfig {
        TableConfig::default().with_rows_per_page(self.rows_per_page)
    }
}
