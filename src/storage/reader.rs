use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{MenuError, Result};
use crate::models::RawTable;

/// Read a CSV table (header row required) from any reader.
///
/// Fields are trimmed; short rows are padded with empty cells so every row
/// lines up with the header. A row with more fields than the header is
/// rejected.
pub fn read_table<R: Read>(reader: R) -> Result<RawTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for (row_num, record) in csv_reader.records().enumerate() {
        let record = record?;
        if record.len() > headers.len() {
            return Err(MenuError::MalformedRow {
                line: record
                    .position()
                    .map(|p| p.line() as usize)
                    .unwrap_or(row_num + 2),
                expected: headers.len(),
                found: record.len(),
            });
        }

        let mut fields: Vec<String> = record.iter().map(str::to_string).collect();
        if fields.len() < headers.len() {
            fields.resize(headers.len(), String::new());
        }
        rows.push(fields);
    }

    Ok(RawTable::new(headers, rows))
}

/// Load a CSV table from a file, failing early if the file does not exist.
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<RawTable> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(MenuError::MissingFile(path.to_path_buf()));
    }

    let table = read_table(File::open(path)?)?;
    tracing::info!(
        path = %path.display(),
        rows = table.len(),
        columns = table.headers.len(),
        "loaded menu"
    );
    Ok(table)
}
