use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{PersistError, Result};
use crate::types::Preferences;

/// Write `prefs` as pretty JSON.
///
/// The document goes to a sibling temp file that is then renamed over
/// `path`, so a crash never leaves a half-written file behind.
pub fn save_preferences(prefs: &mut Preferences, path: &Path) -> Result<()> {
    prefs.touch();
    let mut bytes = serde_json::to_vec_pretty(prefs)
        .map_err(|source| PersistError::Serialization { source })?;
    bytes.push(b'\n');

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| PersistError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let temp_path = path.with_extension("json.tmp");
    let mut file = File::create(&temp_path).map_err(|source| PersistError::Io {
        operation: "create",
        path: temp_path.clone(),
        source,
    })?;
    file.write_all(&bytes).map_err(|source| PersistError::Io {
        operation: "write",
        path: temp_path.clone(),
        source,
    })?;
    file.sync_all().map_err(|source| PersistError::Io {
        operation: "sync",
        path: temp_path.clone(),
        source,
    })?;

    fs::rename(&temp_path, path).map_err(|source| PersistError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        columns = prefs.columns.len(),
        theme = prefs.theme.as_str(),
        "Saved preferences to {}",
        path.display()
    );
    Ok(())
}

/// [`save_preferences`] on the blocking pool. Returns the stamped copy.
pub async fn save_preferences_async(prefs: Preferences, path: PathBuf) -> Result<Preferences> {
    tokio::task::spawn_blocking(move || {
        let mut prefs = prefs;
        save_preferences(&mut prefs, &path).map(|()| prefs)
    })
    .await
    .map_err(|e| PersistError::Task(e.to_string()))?
}
