use unicode_width::UnicodeWidthStr;

use crate::classifier::{CategoryShare, CategorySummary, MenuReport, Thresholds};
use crate::interface::currency::format_currency;
use crate::models::{Category, MenuItem};

/// Width of a full bar in the distribution chart.
pub const CHART_WIDTH: usize = 40;

/// Terminal columns reserved for a category label.
pub const LABEL_WIDTH: usize = 14;

/// Display the classified menu, grouped by category.
pub fn display_classified_table(report: &MenuReport) {
    let items = report.sorted_by_category();
    if items.is_empty() {
        println!("No dishes to display.");
        return;
    }

    println!();
    println!("=== Categorized Dishes ===");
    println!();

    let name_width = name_width(&items);
    println!(
        "{:<width$} | {:>10} | {:>10} | {:>8} | {:>10} | Category",
        "Dish",
        "Selling",
        "Cost",
        "Units",
        "Profit",
        width = name_width
    );
    println!("{}", "-".repeat(name_width + 60));

    for item in items {
        println!(
            "{:<width$} | {:>10.2} | {:>10.2} | {:>8} | {:>10} | {}",
            item.name,
            item.selling_price,
            item.cost_price,
            item.units_sold,
            item.profit.map(|p| format!("{:.2}", p)).unwrap_or_default(),
            item.category.map(|c| c.display_label()).unwrap_or("-"),
            width = name_width
        );
    }
    println!();
}

/// Display category shares as a horizontal bar chart.
pub fn display_distribution(shares: &[CategoryShare]) {
    if shares.is_empty() {
        return;
    }

    println!("=== Category Distribution ===");
    println!();

    for share in shares {
        println!(
            "{} {:<chart$} {:>3} ({:>5.1}%)",
            pad_label(share.category.display_label()),
            bar(share.percent),
            share.count,
            share.percent,
            chart = CHART_WIDTH
        );
    }
    println!();
}

/// Display the averages used as quadrant thresholds.
pub fn display_thresholds(thresholds: &Thresholds, currency_symbol: &str) {
    println!(
        "Average profit: {}   Average units sold: {:.2}",
        format_currency(thresholds.avg_profit, currency_symbol),
        thresholds.avg_units
    );
    println!();
}

/// Display the per-category summary with currency-formatted totals.
pub fn display_summary(summary: &[CategorySummary], currency_symbol: &str) {
    if summary.is_empty() {
        println!("No categories to summarize.");
        return;
    }

    println!("=== Summary by Category ===");
    println!();
    println!(
        "{} | {:>5} | {:>10} | {:>16} | {:>14}",
        pad_label("Category"),
        "Items",
        "Units Sold",
        "Total Profit",
        "Avg Profit"
    );
    println!("{}", "-".repeat(72));

    for row in summary {
        println!(
            "{} | {:>5} | {:>10} | {:>16} | {:>14}",
            pad_label(row.category.display_label()),
            row.item_count,
            row.total_units_sold,
            format_currency(row.total_profit, currency_symbol),
            format_currency(row.avg_profit_per_item, currency_symbol)
        );
    }

    let total_items: usize = summary.iter().map(|s| s.item_count).sum();
    println!();
    println!("Total dishes: {}", total_items);
    println!();
}

/// Display the dishes of one category.
pub fn display_category_dishes(category: Category, dishes: &[&MenuItem], currency_symbol: &str) {
    println!();
    println!(
        "=== {} ({} dishes) - {} ===",
        category.display_label(),
        dishes.len(),
        category.advice()
    );
    println!();

    if dishes.is_empty() {
        println!("  (none)");
        println!();
        return;
    }

    for item in dishes {
        display_dish_line(item, currency_symbol);
    }
    println!();
}

/// Display a single dish on one line.
pub fn display_dish_line(item: &MenuItem, currency_symbol: &str) {
    let money = |v: Option<f64>| {
        v.map(|p| format_currency(p, currency_symbol))
            .unwrap_or_else(|| "-".to_string())
    };
    println!(
        "  {} - profit {} x {} sold = {}{}",
        item.name,
        money(item.profit),
        item.units_sold,
        money(item.total_contribution()),
        item.category
            .map(|c| format!(" [{}]", c.display_label()))
            .unwrap_or_default()
    );
}

fn name_width(items: &[&MenuItem]) -> usize {
    items
        .iter()
        .map(|i| i.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4)
}

/// Pad to `LABEL_WIDTH` terminal columns; icons count as two columns.
fn pad_label(label: &str) -> String {
    let fill = LABEL_WIDTH.saturating_sub(label.width());
    format!("{}{}", label, " ".repeat(fill))
}

fn bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * CHART_WIDTH as f64).round() as usize;
    "█".repeat(filled.min(CHART_WIDTH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_scales_to_chart_width() {
        assert_eq!(bar(100.0).chars().count(), CHART_WIDTH);
        assert_eq!(bar(50.0).chars().count(), CHART_WIDTH / 2);
        assert_eq!(bar(0.0), "");
    }

    #[test]
    fn test_labels_pad_to_same_display_width() {
        for category in Category::ALL {
            assert_eq!(pad_label(category.display_label()).width(), LABEL_WIDTH);
        }
        assert_eq!(pad_label("Category").width(), LABEL_WIDTH);
    }

    #[test]
    fn test_name_width_has_floor() {
        let short = MenuItem::new("Tea", 1.0, 1.0, 1.0);
        let long = MenuItem::new("Chicken Biryani", 1.0, 1.0, 1.0);
        assert_eq!(name_width(&[&short]), 4);
        assert_eq!(name_width(&[&short, &long]), 15);
    }
}
