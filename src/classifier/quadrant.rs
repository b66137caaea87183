use serde::Serialize;

use crate::error::{MenuError, Result};
use crate::models::{Category, Dataset};

/// Dataset-wide averages that split the menu into quadrants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Thresholds {
    pub avg_profit: f64,
    pub avg_units: f64,
}

impl Thresholds {
    /// Place a dish in its quadrant. Being exactly at the average counts as high.
    pub fn categorize(&self, profit: f64, units_sold: f64) -> Category {
        Category::from_quadrant(profit >= self.avg_profit, units_sold >= self.avg_units)
    }
}

/// Set `profit = selling_price - cost_price` on every dish.
///
/// No bounds checking: negative and non-finite values pass through.
pub fn compute_profit(mut dataset: Dataset) -> Dataset {
    for item in &mut dataset.items {
        item.profit = Some(item.margin());
    }
    dataset
}

/// Mean profit and mean units sold across the menu.
pub fn compute_thresholds(dataset: &Dataset) -> Result<Thresholds> {
    if dataset.is_empty() {
        return Err(MenuError::EmptyDataset);
    }

    let profits = dataset
        .iter()
        .map(|i| i.profit.ok_or(MenuError::ProfitNotComputed))
        .collect::<Result<Vec<f64>>>()?;

    let thresholds = Thresholds {
        avg_profit: mean(profits),
        avg_units: mean(dataset.iter().map(|i| i.units_sold)),
    };

    tracing::debug!(
        avg_profit = thresholds.avg_profit,
        avg_units = thresholds.avg_units,
        "computed thresholds"
    );
    Ok(thresholds)
}

/// Assign each dish a category against precomputed thresholds.
///
/// Any existing category is overwritten.
pub fn apply_thresholds(mut dataset: Dataset, thresholds: &Thresholds) -> Result<Dataset> {
    for item in &mut dataset.items {
        let profit = item.profit.ok_or(MenuError::ProfitNotComputed)?;
        item.category = Some(thresholds.categorize(profit, item.units_sold));
    }
    Ok(dataset)
}

/// Classify every dish by comparing its profit and units sold to the menu averages.
pub fn classify(dataset: Dataset) -> Result<Dataset> {
    let thresholds = compute_thresholds(&dataset)?;
    apply_thresholds(dataset, &thresholds)
}

/// Arithmetic mean ignoring NaN values. NaN if nothing remains.
pub fn mean<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    let (sum, count) = values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));

    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}
