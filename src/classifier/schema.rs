use strsim::jaro_winkler;

use crate::config::ColumnConfig;
use crate::error::{MenuError, Result};
use crate::models::{Dataset, MenuItem, RawTable};

/// Minimum similarity for a header to be offered as a suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Check that all required columns are present and parse each row.
///
/// Validation is all-or-nothing: a missing column or an unparseable number
/// rejects the whole table. Empty numeric cells become NaN.
pub fn validate(table: RawTable, columns: &ColumnConfig) -> Result<Dataset> {
    let missing: Vec<String> = columns
        .required()
        .iter()
        .filter(|c| table.column_index(c).is_none())
        .map(|c| c.to_string())
        .collect();

    if !missing.is_empty() {
        let suggestions = suggest_columns(&missing, &table.headers);
        return Err(MenuError::Schema {
            missing,
            suggestions,
        });
    }

    let [name_idx, selling_idx, cost_idx, units_idx] =
        columns.required().map(|c| table.column_index(c).unwrap_or_default());

    let RawTable { headers, rows } = table;
    let mut items = Vec::with_capacity(rows.len());

    for (row_num, fields) in rows.into_iter().enumerate() {
        // Header is line 1
        let line = row_num + 2;
        if fields.len() > headers.len() {
            return Err(MenuError::MalformedRow {
                line,
                expected: headers.len(),
                found: fields.len(),
            });
        }
        let cell = |idx: usize| fields.get(idx).map(String::as_str).unwrap_or("");

        let selling_price = parse_number(cell(selling_idx), line, &columns.selling_price)?;
        let cost_price = parse_number(cell(cost_idx), line, &columns.cost_price)?;
        let units_sold = parse_number(cell(units_idx), line, &columns.units_sold)?;

        let mut item = MenuItem::new(cell(name_idx), selling_price, cost_price, units_sold);
        item.fields = fields;
        items.push(item);
    }

    tracing::debug!(rows = items.len(), "validated menu");
    Ok(Dataset::new(headers, items))
}

/// Parse a numeric cell. Blank cells are treated as missing values (NaN).
fn parse_number(raw: &str, line: usize, column: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(f64::NAN);
    }

    trimmed.parse().map_err(|_| MenuError::InvalidNumber {
        line,
        column: column.to_string(),
        value: raw.to_string(),
    })
}

/// Pair each missing column with the most similar header, if any is close.
fn suggest_columns(missing: &[String], headers: &[String]) -> Vec<(String, String)> {
    missing
        .iter()
        .filter_map(|m| {
            headers
                .iter()
                .map(|h| (h, jaro_winkler(&h.to_lowercase(), &m.to_lowercase())))
                .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
                .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
                .map(|(h, _)| (m.clone(), h.clone()))
        })
        .collect()
}
