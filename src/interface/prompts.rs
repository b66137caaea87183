use std::path::{Path, PathBuf};

use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::classifier::MenuReport;
use crate::error::Result;
use crate::models::{Category, MenuItem};

/// Minimum similarity for a fuzzy dish match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// What the user picked from the explore menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExploreAction {
    Browse(Category),
    FindDish,
    ShowSummary,
    Save,
    Quit,
}

/// Prompt for the next action in the explore loop.
pub fn prompt_explore_action(report: &MenuReport) -> Result<ExploreAction> {
    let mut actions: Vec<ExploreAction> = Category::ALL
        .iter()
        .map(|c| ExploreAction::Browse(*c))
        .collect();
    actions.extend([
        ExploreAction::FindDish,
        ExploreAction::ShowSummary,
        ExploreAction::Save,
        ExploreAction::Quit,
    ]);

    let labels: Vec<String> = actions
        .iter()
        .map(|action| match action {
            ExploreAction::Browse(c) => {
                format!("{} ({})", c.display_label(), report.dishes_in(*c).len())
            }
            ExploreAction::FindDish => "Find a dish".to_string(),
            ExploreAction::ShowSummary => "Show summary".to_string(),
            ExploreAction::Save => "Save optimized menu".to_string(),
            ExploreAction::Quit => "Quit".to_string(),
        })
        .collect();

    let selection = Select::new()
        .with_prompt("What would you like to see?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(actions.get(selection).copied().unwrap_or(ExploreAction::Quit))
}

/// Prompt for a dish name, matching exactly first and then fuzzily.
///
/// Returns `None` if nothing matched or the user declined the suggestions.
pub fn prompt_dish_lookup<'a>(items: &[&'a MenuItem]) -> Result<Option<&'a MenuItem>> {
    let input: String = Input::new()
        .with_prompt("Dish name")
        .allow_empty(true)
        .interact_text()?;

    let query = input.trim().to_lowercase();
    if query.is_empty() {
        return Ok(None);
    }

    if let Some(item) = items.iter().find(|i| i.key() == query) {
        return Ok(Some(*item));
    }

    let candidates = fuzzy_candidates(items, &query);

    if candidates.is_empty() {
        println!("No matching dish found for '{}'", input.trim());
        return Ok(None);
    }

    if candidates.len() == 1 {
        let item = candidates[0];
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", item.name))
            .default(true)
            .interact()?;
        return Ok(confirm.then_some(item));
    }

    let mut options: Vec<String> = candidates.iter().map(|i| i.name.clone()).collect();
    options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(candidates.get(selection).copied())
}

/// Up to five dishes whose names resemble `query`, best match first.
pub fn fuzzy_candidates<'a>(items: &[&'a MenuItem], query: &str) -> Vec<&'a MenuItem> {
    let query = query.to_lowercase();
    let mut scored: Vec<(&MenuItem, f64)> = items
        .iter()
        .map(|i| (*i, jaro_winkler(&i.key(), &query)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.into_iter().take(5).map(|(i, _)| i).collect()
}

/// Prompt for where to save the optimized menu.
pub fn prompt_output_path(default: &Path) -> Result<PathBuf> {
    let input: String = Input::new()
        .with_prompt("Save optimized menu to")
        .default(default.display().to_string())
        .interact_text()?;

    Ok(PathBuf::from(input.trim()))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzzy_candidates_rank_best_first() {
        let biryani = MenuItem::new("Chicken Biryani", 250.0, 110.0, 320.0);
        let fried_rice = MenuItem::new("Chicken Fried Rice", 180.0, 70.0, 200.0);
        let dosa = MenuItem::new("Masala Dosa", 90.0, 35.0, 410.0);
        let items = [&biryani, &fried_rice, &dosa];

        let found = fuzzy_candidates(&items, "chiken biryani");
        assert_eq!(found.first().map(|i| i.name.as_str()), Some("Chicken Biryani"));
        assert!(found.iter().all(|i| i.name != "Masala Dosa"));
    }

    #[test]
    fn test_fuzzy_candidates_none_for_unrelated_query() {
        let dosa = MenuItem::new("Masala Dosa", 90.0, 35.0, 410.0);
        assert!(fuzzy_candidates(&[&dosa], "zzzz").is_empty());
    }
}
