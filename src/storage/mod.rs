mod reader;
mod writer;

pub use reader::{load_table, read_table};
pub use writer::{save_classified, write_classified};
