use crate::models::MenuItem;

/// A table exactly as read from disk: header row plus string records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Position of a column by exact header name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Validated menu: typed dishes plus the original header row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub items: Vec<MenuItem>,
}

impl Dataset {
    pub fn new(headers: Vec<String>, items: Vec<MenuItem>) -> Self {
        Self { headers, items }
    }

    /// Build a dataset straight from typed items (no passthrough columns).
    pub fn from_items(items: Vec<MenuItem>) -> Self {
        Self {
            headers: Vec::new(),
            items,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter()
    }

    /// True once every dish has a category.
    pub fn is_classified(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(|i| i.category.is_some())
    }
}
