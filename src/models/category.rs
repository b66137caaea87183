use std::fmt;

use serde::{Deserialize, Serialize};

/// Menu-engineering quadrant of a dish.
///
/// Variant order is the display order used by summaries and charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// High profit, high popularity.
    Star,
    /// High profit, low popularity.
    Puzzle,
    /// Low profit, high popularity.
    #[serde(rename = "Plow Horse")]
    PlowHorse,
    /// Low profit, low popularity.
    Dog,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Star,
        Category::Puzzle,
        Category::PlowHorse,
        Category::Dog,
    ];

    /// Quadrant for a dish given whether it is at or above average on each axis.
    pub fn from_quadrant(high_profit: bool, high_popularity: bool) -> Self {
        match (high_profit, high_popularity) {
            (true, true) => Category::Star,
            (true, false) => Category::Puzzle,
            (false, true) => Category::PlowHorse,
            (false, false) => Category::Dog,
        }
    }

    /// Plain label, as written to CSV output.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Star => "Star",
            Category::Puzzle => "Puzzle",
            Category::PlowHorse => "Plow Horse",
            Category::Dog => "Dog",
        }
    }

    /// Label with an icon, for terminal display.
    pub fn display_label(&self) -> &'static str {
        match self {
            Category::Star => "⭐ Star",
            Category::Puzzle => "🧩 Puzzle",
            Category::PlowHorse => "🐎 Plow Horse",
            Category::Dog => "🐶 Dog",
        }
    }

    /// One-line advice for the quadrant.
    pub fn advice(&self) -> &'static str {
        match self {
            Category::Star => "keep prominent, protect quality",
            Category::Puzzle => "promote or reposition to lift sales",
            Category::PlowHorse => "review pricing or portion cost",
            Category::Dog => "consider removing or reworking",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_table() {
        assert_eq!(Category::from_quadrant(true, true), Category::Star);
        assert_eq!(Category::from_quadrant(true, false), Category::Puzzle);
        assert_eq!(Category::from_quadrant(false, true), Category::PlowHorse);
        assert_eq!(Category::from_quadrant(false, false), Category::Dog);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Category::PlowHorse.to_string(), "Plow Horse");
        assert_eq!(Category::Star.display_label(), "⭐ Star");
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&Category::PlowHorse).unwrap();
        assert_eq!(json, "\"Plow Horse\"");
    }

    #[test]
    fn test_display_order() {
        let mut shuffled = vec![
            Category::Dog,
            Category::Star,
            Category::PlowHorse,
            Category::Puzzle,
        ];
        shuffled.sort();
        assert_eq!(shuffled, Category::ALL.to_vec());
    }
}
