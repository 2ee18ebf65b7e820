use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{PersistError, Result};
use crate::types::{CURRENT_SCHEMA_VERSION, Preferences, VersionProbe};

/// Load preferences from `path`. A missing file yields the defaults.
pub fn load_preferences(path: &Path) -> Result<Preferences> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!("No preferences at {}, using defaults", path.display());
            return Ok(Preferences::default());
        }
        Err(source) => {
            return Err(PersistError::Io {
                operation: "read",
                path: path.to_path_buf(),
                source,
            });
        }
    };
    let prefs = parse_preferences(&text, path)?;
    tracing::info!("Loaded preferences from {}", path.display());
    Ok(prefs)
}

pub async fn load_preferences_async(path: PathBuf) -> Result<Preferences> {
    tokio::task::spawn_blocking(move || load_preferences(&path))
        .await
        .map_err(|e| PersistError::Task(e.to_string()))?
}

/// Parse a preferences document. `path` is only used in errors.
pub fn parse_preferences(text: &str, path: &Path) -> Result<Preferences> {
    let deserialization = |source: serde_json::Error| PersistError::Deserialization {
        path: path.to_path_buf(),
        source,
    };

    let probe: VersionProbe = serde_json::from_str(text).map_err(deserialization)?;
    if probe.schema_version > CURRENT_SCHEMA_VERSION {
        return Err(PersistError::UnsupportedVersion {
            found: probe.schema_version,
            max_supported: CURRENT_SCHEMA_VERSION,
            path: path.to_path_buf(),
        });
    }

    serde_json::from_str(text).map_err(deserialization)
}
