use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Missing required columns: {}{}", .missing.join(", "), suggestion_hint(.suggestions))]
    Schema {
        missing: Vec<String>,
        /// (missing column, closest header present in the file)
        suggestions: Vec<(String, String)>,
    },

    #[error("The menu has no dishes")]
    EmptyDataset,

    #[error("File not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Invalid number '{value}' in column '{column}' at line {line}")]
    InvalidNumber {
        line: usize,
        column: String,
        value: String,
    },

    #[error("Line {line} has {found} fields but the header has {expected}")]
    MalformedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Profit has not been computed for every dish")]
    ProfitNotComputed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

fn suggestion_hint(suggestions: &[(String, String)]) -> String {
    if suggestions.is_empty() {
        return String::new();
    }
    let hints: Vec<String> = suggestions
        .iter()
        .map(|(missing, found)| format!("'{}' for '{}'", found, missing))
        .collect();
    format!(" (did you mean {}?)", hints.join(", "))
}

pub type Result<T> = std::result::Result<T, MenuError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_message_lists_missing_columns() {
        let err = MenuError::Schema {
            missing: vec!["Cost_Price".to_string(), "Units_Sold".to_string()],
            suggestions: vec![],
        };
        assert_eq!(
            err.to_string(),
            "Missing required columns: Cost_Price, Units_Sold"
        );
    }

    #[test]
    fn test_schema_message_includes_suggestions() {
        let err = MenuError::Schema {
            missing: vec!["Units_Sold".to_string()],
            suggestions: vec![("Units_Sold".to_string(), "units_sold".to_string())],
        };
        assert_eq!(
            err.to_string(),
            "Missing required columns: Units_Sold (did you mean 'units_sold' for 'Units_Sold'?)"
        );
    }
}
