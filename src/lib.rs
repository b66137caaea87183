pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod models;
pub mod storage;

pub use classifier::{analyze, MenuReport};
pub use config::{ColumnConfig, MenuConfig};
pub use error::{MenuError, Result};
pub use models::{Category, Dataset, MenuItem, RawTable};
