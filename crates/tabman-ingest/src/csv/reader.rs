//! Raw CSV reading: one header row, then data rows.

use csv::ReaderBuilder;

/// Header row plus data rows as strings.
#[derive(Debug, Clone, Default)]
pub struct ParsedCsv {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Parse CSV bytes with a mandatory header row.
///
/// Blank lines are skipped and rows may be shorter or longer than the
/// header. Invalid UTF-8 or malformed quoting is an error.
pub fn parse_csv(bytes: &[u8]) -> Result<ParsedCsv, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(ParsedCsv { headers, rows })
}
