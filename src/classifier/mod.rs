//! Menu-engineering classification.
//!
//! Pure pipeline: validate, derive profit, compute thresholds, classify and
//! aggregate. No I/O happens here.

pub mod quadrant;
pub mod schema;
pub mod summary;

pub use quadrant::{
    apply_thresholds, classify, compute_profit, compute_thresholds, mean, Thresholds,
};
pub use schema::validate;
pub use summary::{distribution, summarize, CategoryShare, CategorySummary};

use crate::config::ColumnConfig;
use crate::error::{MenuError, Result};
use crate::models::{Category, Dataset, MenuItem, RawTable};

/// Everything the presentation layer needs from one classification run.
#[derive(Debug, Clone)]
pub struct MenuReport {
    pub dataset: Dataset,
    pub thresholds: Thresholds,
    pub summary: Vec<CategorySummary>,
    pub distribution: Vec<CategoryShare>,
}

impl MenuReport {
    /// Dishes in a category, in input order.
    pub fn dishes_in(&self, category: Category) -> Vec<&MenuItem> {
        self.dataset
            .iter()
            .filter(|i| i.category == Some(category))
            .collect()
    }

    /// Dishes ordered by category, keeping input order within a category.
    pub fn sorted_by_category(&self) -> Vec<&MenuItem> {
        let mut items: Vec<&MenuItem> = self.dataset.iter().collect();
        items.sort_by_key(|i| i.category);
        items
    }

    pub fn summary_for(&self, category: Category) -> Option<&CategorySummary> {
        self.summary.iter().find(|s| s.category == category)
    }
}

/// Run the full pipeline on a raw table.
pub fn analyze(table: RawTable, columns: &ColumnConfig) -> Result<MenuReport> {
    let dataset = validate(table, columns)?;
    if dataset.is_empty() {
        return Err(MenuError::EmptyDataset);
    }

    let dataset = compute_profit(dataset);
    let thresholds = compute_thresholds(&dataset)?;
    let dataset = apply_thresholds(dataset, &thresholds)?;

    let summary = summarize(&dataset);
    let distribution = distribution(&dataset);

    tracing::info!(
        dishes = dataset.len(),
        categories = summary.len(),
        "classified menu"
    );

    Ok(MenuReport {
        dataset,
        thresholds,
        summary,
        distribution,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotel_menu() -> RawTable {
        let headers = ["Dish", "Selling_Price", "Cost_Price", "Units_Sold"];
        let rows = [
            ["Chicken Biryani", "250", "110", "320"],
            ["Paneer Butter Masala", "220", "90", "140"],
            ["Masala Dosa", "90", "35", "410"],
            ["Gobi Manchurian", "150", "95", "60"],
        ];
        RawTable::new(
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|v| v.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_analyze_hotel_menu() {
        let report = analyze(hotel_menu(), &ColumnConfig::default()).unwrap();

        // profits 140, 130, 55, 55 -> avg 95; units avg 232.5
        assert_eq!(report.thresholds.avg_profit, 95.0);
        assert_eq!(report.thresholds.avg_units, 232.5);

        let cats: Vec<Category> = report.dataset.iter().filter_map(|i| i.category).collect();
        assert_eq!(
            cats,
            vec![
                Category::Star,
                Category::Puzzle,
                Category::PlowHorse,
                Category::Dog
            ]
        );

        let total: usize = report.summary.iter().map(|s| s.item_count).sum();
        assert_eq!(total, 4);
    }

    #[test]
    fn test_analyze_rejects_header_only_table() {
        let mut table = hotel_menu();
        table.rows.clear();
        let err = analyze(table, &ColumnConfig::default()).unwrap_err();
        assert!(matches!(err, MenuError::EmptyDataset));
    }

    #[test]
    fn test_sorted_by_category_is_stable() {
        let report = analyze(hotel_menu(), &ColumnConfig::default()).unwrap();
        let names: Vec<&str> = report
            .sorted_by_category()
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "Chicken Biryani",
                "Paneer Butter Masala",
                "Masala Dosa",
                "Gobi Manchurian"
            ]
        );
        assert_eq!(report.dishes_in(Category::Dog).len(), 1);
        assert!(report.summary_for(Category::Star).is_some());
    }
}
