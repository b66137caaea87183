mod category;
mod dataset;
mod dish;

pub use category::Category;
pub use dataset::{Dataset, RawTable};
pub use dish::MenuItem;
