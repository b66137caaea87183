use crate::models::Category;

/// One dish from the menu spreadsheet.
///
/// `profit` and `category` start empty and are filled in by the classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub name: String,
    pub selling_price: f64,
    pub cost_price: f64,
    pub units_sold: f64,
    pub profit: Option<f64>,
    pub category: Option<Category>,

    /// The original record, in header order.
    pub fields: Vec<String>,
}

impl MenuItem {
    pub fn new(name: &str, selling_price: f64, cost_price: f64, units_sold: f64) -> Self {
        Self {
            name: name.to_string(),
            selling_price,
            cost_price,
            units_sold,
            profit: None,
            category: None,
            fields: Vec::new(),
        }
    }

    /// Unit margin: selling price minus cost price.
    #[inline]
    pub fn margin(&self) -> f64 {
        self.selling_price - self.cost_price
    }

    /// Profit times units sold.
    pub fn total_contribution(&self) -> Option<f64> {
        self.profit.map(|p| p * self.units_sold)
    }

    /// Canonical key for lookups (lowercase, trimmed name).
    pub fn key(&self) -> String {
        self.name.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margin_can_be_negative() {
        let item = MenuItem::new("Loss Leader", 40.0, 55.0, 10.0);
        assert_eq!(item.margin(), -15.0);
    }

    #[test]
    fn test_contribution_requires_profit() {
        let mut item = MenuItem::new("Masala Dosa", 120.0, 45.0, 30.0);
        assert_eq!(item.total_contribution(), None);

        item.profit = Some(item.margin());
        assert_eq!(item.total_contribution(), Some(2250.0));
    }

    #[test]
    fn test_key_is_case_insensitive() {
        let item = MenuItem::new("  Chicken Biryani ", 1.0, 1.0, 1.0);
        assert_eq!(item.key(), "chicken biryani");
    }
}
