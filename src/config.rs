use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MenuError, Result};

/// Names of the input columns the classifier reads.
///
/// Matching is exact: case and spelling must agree with the header row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnConfig {
    pub name: String,
    pub selling_price: String,
    pub cost_price: String,
    pub units_sold: String,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            name: "Dish".to_string(),
            selling_price: "Selling_Price".to_string(),
            cost_price: "Cost_Price".to_string(),
            units_sold: "Units_Sold".to_string(),
        }
    }
}

impl ColumnConfig {
    /// Required columns in the order they are reported.
    pub fn required(&self) -> [&str; 4] {
        [
            self.name.as_str(),
            self.selling_price.as_str(),
            self.cost_price.as_str(),
            self.units_sold.as_str(),
        ]
    }
}

/// Runtime configuration, loadable from a JSON file.
///
/// Every field has a default, so a file only needs the keys it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub columns: ColumnConfig,

    /// Header used for the derived profit column in the output file.
    pub profit_column: String,

    /// Header used for the derived category column in the output file.
    pub category_column: String,

    pub currency_symbol: String,

    /// Default path for the optimized menu CSV.
    pub output: PathBuf,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            columns: ColumnConfig::default(),
            profit_column: "Profit".to_string(),
            category_column: "Category".to_string(),
            currency_symbol: "₹".to_string(),
            output: PathBuf::from("optimized_menu.csv"),
        }
    }
}

impl MenuConfig {
    /// Load configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(MenuError::MissingFile(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let config: MenuConfig = serde_json::from_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}
