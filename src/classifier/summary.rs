use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Category, Dataset};

/// Per-category rollup of a classified menu.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub category: Category,
    pub item_count: usize,
    pub total_units_sold: f64,
    pub total_profit: f64,
    pub avg_profit_per_item: f64,
}

/// Share of dishes in one category, for charting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: Category,
    pub count: usize,
    pub percent: f64,
}

#[derive(Default)]
struct Accumulator {
    count: usize,
    units: f64,
    profit: f64,
    profit_count: usize,
}

/// Group dishes by category and total them up.
///
/// Only categories that occur are returned, in `Category` order. Sums and
/// the mean skip NaN values. Unclassified dishes are ignored.
pub fn summarize(dataset: &Dataset) -> Vec<CategorySummary> {
    let mut groups: BTreeMap<Category, Accumulator> = BTreeMap::new();

    for item in dataset.iter() {
        let Some(category) = item.category else {
            continue;
        };
        let acc = groups.entry(category).or_default();
        acc.count += 1;
        if !item.units_sold.is_nan() {
            acc.units += item.units_sold;
        }
        if let Some(profit) = item.profit.filter(|p| !p.is_nan()) {
            acc.profit += profit;
            acc.profit_count += 1;
        }
    }

    groups
        .into_iter()
        .map(|(category, acc)| CategorySummary {
            category,
            item_count: acc.count,
            total_units_sold: acc.units,
            total_profit: acc.profit,
            avg_profit_per_item: if acc.profit_count > 0 {
                acc.profit / acc.profit_count as f64
            } else {
                f64::NAN
            },
        })
        .collect()
}

/// Count of dishes per category with their percentage of the menu.
pub fn distribution(dataset: &Dataset) -> Vec<CategoryShare> {
    let mut counts: BTreeMap<Category, usize> = BTreeMap::new();
    for category in dataset.iter().filter_map(|i| i.category) {
        *counts.entry(category).or_insert(0) += 1;
    }

    let total: usize = counts.values().sum();
    counts
        .into_iter()
        .map(|(category, count)| CategoryShare {
            category,
            count,
            percent: count as f64 * 100.0 / total as f64,
        })
        .collect()
}
