//! CSV import: header lookup, candidate building and validation.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{info, warn};

use tabman_model::{ImportIssue, Record, RecordId, RecordIdGenerator, parse_leading_int};
use tabman_validate::validate_records;

use crate::csv::{HeaderIndex, ParsedCsv, parse_csv};

/// Result of one import attempt.
///
/// An import is all or nothing: `Accepted` carries every parsed row,
/// `Rejected` carries every issue found and no records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ImportOutcome {
    Accepted { records: Vec<Record> },
    Rejected { issues: Vec<ImportIssue> },
}

impl ImportOutcome {
    pub fn parse_failure() -> Self {
        ImportOutcome::Rejected {
            issues: vec![ImportIssue::parse_failure()],
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, ImportOutcome::Accepted { .. })
    }

    pub fn records(&self) -> &[Record] {
        match self {
            ImportOutcome::Accepted { records } => records,
            ImportOutcome::Rejected { .. } => &[],
        }
    }

    pub fn issues(&self) -> &[ImportIssue] {
        match self {
            ImportOutcome::Accepted { .. } => &[],
            ImportOutcome::Rejected { issues } => issues,
        }
    }

    pub fn into_result(self) -> Result<Vec<Record>, Vec<ImportIssue>> {
        match self {
            ImportOutcome::Accepted { records } => Ok(records),
            ImportOutcome::Rejected { issues } => Err(issues),
        }
    }
}

/// Import CSV text with a freshly seeded id generator.
pub fn import_csv(text: &str) -> ImportOutcome {
    import_csv_bytes(text.as_bytes(), &mut RecordIdGenerator::new())
}

/// Import CSV text, drawing record ids from `ids`.
pub fn import_csv_with(text: &str, ids: &mut RecordIdGenerator) -> ImportOutcome {
    import_csv_bytes(text.as_bytes(), ids)
}

/// Import raw CSV bytes. Bytes that are not valid UTF-8 fail the whole file.
pub fn import_csv_bytes(bytes: &[u8], ids: &mut RecordIdGenerator) -> ImportOutcome {
    let parsed = match parse_csv(bytes) {
        Ok(parsed) => parsed,
        Err(error) => {
            warn!(%error, "CSV parse failed");
            return ImportOutcome::parse_failure();
        }
    };
    let candidates = build_candidates(&parsed, ids);
    let report = validate_records(&candidates);
    if report.has_errors() {
        warn!(
            rows = report.rows_checked,
            issues = report.error_count(),
            failing_rows = report.failing_rows(),
            "import rejected"
        );
        return ImportOutcome::Rejected {
            issues: report.issues,
        };
    }
    info!(rows = candidates.len(), "import accepted");
    ImportOutcome::Accepted {
        records: candidates,
    }
}

/// Parse on a blocking worker thread.
///
/// The caller must await the outcome before touching the table; a worker
/// that panics is reported as a file-level parse failure.
pub async fn import_csv_async(text: String) -> ImportOutcome {
    match tokio::task::spawn_blocking(move || import_csv(&text)).await {
        Ok(outcome) => outcome,
        Err(error) => {
            warn!(%error, "CSV import worker failed");
            ImportOutcome::parse_failure()
        }
    }
}

fn build_candidates(parsed: &ParsedCsv, ids: &mut RecordIdGenerator) -> Vec<Record> {
    let index = HeaderIndex::new(&parsed.headers);
    let mut seen: HashSet<RecordId> = HashSet::with_capacity(parsed.rows.len());
    parsed
        .rows
        .iter()
        .map(|row| {
            let id = ids.next_unused(|candidate| seen.contains(candidate));
            seen.insert(id.clone());
            build_candidate(&index, row, id)
        })
        .collect()
}

/// Map one data row onto the record shape.
///
/// Missing text becomes `""`, a missing or unparseable age becomes 0, and
/// empty optional fields stay absent.
pub fn build_candidate(index: &HeaderIndex, row: &[String], id: RecordId) -> Record {
    let text = |field: &str| index.value(row, field).unwrap_or_default().to_string();
    let age = index
        .value(row, "age")
        .and_then(parse_leading_int)
        .unwrap_or(0);
    let mut record = Record::new(id, text("name"), text("email"), age, text("role"));
    record.department = index.value(row, "department").map(str::to_string);
    record.location = index.value(row, "location").map(str::to_string);
    record
}
