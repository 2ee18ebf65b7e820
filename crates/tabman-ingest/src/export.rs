//! CSV export of the current view.

use std::fs;
use std::path::Path;

use csv::{Terminator, WriterBuilder};
use tracing::info;

use tabman_model::{ColumnDef, Record};

use crate::error::{IngestError, Result};

/// File name offered when the caller does not choose one.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "table-data.csv";

/// Render records as CSV using the visible columns in registry order.
///
/// The header row holds column labels. Absent optional and custom values
/// render as empty strings.
pub fn export_csv<'a, I>(records: I, columns: &[ColumnDef]) -> Result<String>
where
    I: IntoIterator<Item = &'a Record>,
{
    let visible: Vec<&ColumnDef> = columns.iter().filter(|column| column.visible).collect();
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());
    writer.write_record(visible.iter().map(|column| column.label.as_str()))?;
    let mut rows = 0usize;
    for record in records {
        let cells: Vec<String> = visible
            .iter()
            .map(|column| record.field(column.id.as_str()).render().into_owned())
            .collect();
        writer.write_record(&cells)?;
        rows += 1;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| IngestError::CsvWrite(err.into_error().into()))?;
    info!(rows, columns = visible.len(), "exported CSV");
    Ok(String::from_utf8(bytes)?)
}

/// Write exported CSV text to `path`.
pub fn write_export(path: &Path, csv: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| IngestError::FileWrite {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, csv).map_err(|source| IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "wrote export");
    Ok(())
}

/// Read a CSV file for import.
pub fn read_import_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| IngestError::read(path, source))
}
