pub mod currency;
pub mod prompts;
pub mod render;

pub use currency::format_currency;
pub use prompts::{
    fuzzy_candidates, prompt_dish_lookup, prompt_explore_action, prompt_output_path,
    prompt_yes_no, ExploreAction,
};
pub use render::{
    display_category_dishes, display_classified_table, display_dish_line, display_distribution,
    display_summary, display_thresholds,
};
