//! Logged Actions
//!
//! An action is immutable once the server has stored it; the only follow-up
//! operation is deletion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::ActionCategory;
use super::entity::Entity;

/// A logged sustainability action (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub category: ActionCategory,
    pub points: u32,
    #[serde(default)]
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Assigned by the server on creation
    pub timestamp: DateTime<Utc>,
}

impl Action {
    /// Icon to render, falling back to the category's when the server sent none
    pub fn display_icon(&self) -> &str {
        if self.icon.is_empty() {
            self.category.icon()
        } else {
            &self.icon
        }
    }
}

impl Entity for Action {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Body of `POST /actions`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewAction {
    pub title: String,
    pub category: ActionCategory,
    pub points: u32,
    pub icon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NewAction {
    /// New action with the category's icon and suggested points
    pub fn new(title: impl Into<String>, category: ActionCategory) -> Self {
        Self {
            title: title.into(),
            category,
            points: category.default_points(),
            icon: category.icon().to_string(),
            description: None,
        }
    }

    pub fn with_points(mut self, points: u32) -> Self {
        self.points = points;
        self
    }

    /// Attach a description; blank text is treated as none
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = (!description.trim().is_empty()).then_some(description);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_action_uses_category_defaults() {
        let action = NewAction::new("Cycled to work", ActionCategory::SustainableTravel);
        assert_eq!(action.points, 20);
        assert_eq!(action.icon, "🚲");
        assert!(action.description.is_none());
    }

    #[test]
    fn test_points_override_and_blank_description() {
        let action = NewAction::new("Sorted glass", ActionCategory::Recycling)
            .with_points(40)
            .with_description("   ");
        assert_eq!(action.points, 40);
        assert!(action.description.is_none());
    }

    #[test]
    fn test_deserialize_server_action() {
        let action: Action = serde_json::from_str(
            r#"{"_id":"a1","title":"Shorter shower","category":"Water Conservation",
                "points":15,"icon":"💧","timestamp":"2024-03-01T08:30:00Z"}"#,
        )
        .unwrap();
        assert_eq!(action.id(), "a1");
        assert_eq!(action.category, ActionCategory::WaterConservation);
        assert_eq!(action.display_icon(), "💧");
    }
}
