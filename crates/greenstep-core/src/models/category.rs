//! Action Categories
//!
//! Closed set of sustainability categories. Each one carries the icon shown
//! next to a logged action and the points suggested when logging it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a logged action
///
/// Serialized as its display label ("Energy Saving", ...). Labels the client
/// does not know deserialize to [`ActionCategory::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum ActionCategory {
    #[default]
    Recycling,
    EnergySaving,
    WaterConservation,
    SustainableTravel,
    ReducedWaste,
    Community,
    SustainableFood,
    Other,
}

impl ActionCategory {
    pub const ALL: [ActionCategory; 8] = [
        ActionCategory::Recycling,
        ActionCategory::EnergySaving,
        ActionCategory::WaterConservation,
        ActionCategory::SustainableTravel,
        ActionCategory::ReducedWaste,
        ActionCategory::Community,
        ActionCategory::SustainableFood,
        ActionCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ActionCategory::Recycling => "Recycling",
            ActionCategory::EnergySaving => "Energy Saving",
            ActionCategory::WaterConservation => "Water Conservation",
            ActionCategory::SustainableTravel => "Sustainable Travel",
            ActionCategory::ReducedWaste => "Reduced Waste",
            ActionCategory::Community => "Community",
            ActionCategory::SustainableFood => "Sustainable Food",
            ActionCategory::Other => "Other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ActionCategory::Recycling => "♻️",
            ActionCategory::EnergySaving => "💡",
            ActionCategory::WaterConservation => "💧",
            ActionCategory::SustainableTravel => "🚲",
            ActionCategory::ReducedWaste => "🛍️",
            ActionCategory::Community => "🧑‍🤝‍🧑",
            ActionCategory::SustainableFood => "🥕",
            ActionCategory::Other => "✨",
        }
    }

    pub fn default_points(&self) -> u32 {
        match self {
            ActionCategory::Recycling => 10,
            ActionCategory::EnergySaving => 15,
            ActionCategory::WaterConservation => 15,
            ActionCategory::SustainableTravel => 20,
            ActionCategory::ReducedWaste => 10,
            ActionCategory::Community => 25,
            ActionCategory::SustainableFood => 10,
            ActionCategory::Other => 5,
        }
    }

    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|category| category.label() == label)
            .unwrap_or(ActionCategory::Other)
    }
}

impl From<String> for ActionCategory {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<ActionCategory> for &'static str {
    fn from(category: ActionCategory) -> Self {
        category.label()
    }
}

impl fmt::Display for ActionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Categories offered by the goal form. Goals keep the category as free text.
pub const GOAL_CATEGORIES: &[&str] = &[
    "General",
    "Recycling",
    "Energy Saving",
    "Water Conservation",
    "Sustainable Travel",
    "Community",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        for category in ActionCategory::ALL {
            assert_eq!(ActionCategory::from_label(category.label()), category);
        }
    }

    #[test]
    fn test_unknown_label_falls_back_to_other() {
        assert_eq!(ActionCategory::from_label("Composting"), ActionCategory::Other);
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&ActionCategory::SustainableTravel).unwrap();
        assert_eq!(json, "\"Sustainable Travel\"");

        let parsed: ActionCategory = serde_json::from_str("\"Energy Saving\"").unwrap();
        assert_eq!(parsed, ActionCategory::EnergySaving);

        let unknown: ActionCategory = serde_json::from_str("\"Gardening\"").unwrap();
        assert_eq!(unknown, ActionCategory::Other);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ActionCategory::Community.default_points(), 25);
        assert_eq!(ActionCategory::Other.default_points(), 5);
        assert_eq!(ActionCategory::Recycling.icon(), "♻️");
    }
}
