//! Goals
//!
//! Progress is always clamped into `[0, target]` before it leaves the client.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// A user goal (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "general_category")]
    pub category: String,
    pub target: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub progress: f64,
    #[serde(default)]
    pub completed: bool,
}

fn general_category() -> String {
    "General".to_string()
}

impl Goal {
    /// Clamp a requested progress value into `[0, target]`
    pub fn clamp_progress(&self, value: f64) -> f64 {
        value.min(self.target).max(0.0)
    }

    /// Progress as a percentage of target, capped at 100
    pub fn percent_complete(&self) -> f64 {
        if self.target <= 0.0 {
            return 0.0;
        }
        (self.progress / self.target * 100.0).clamp(0.0, 100.0)
    }
}

impl Entity for Goal {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Body of `POST /goals`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewGoal {
    pub title: String,
    pub description: String,
    pub target: f64,
    pub unit: String,
    pub category: String,
}

impl NewGoal {
    pub fn new(title: impl Into<String>, target: f64, unit: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            target,
            unit: unit.into(),
            category: general_category(),
        }
    }
}

/// Body of `PATCH /goals/:id`. Unset fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GoalUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl GoalUpdate {
    /// Progress change for `goal`. Completed goals are frozen, so this is
    /// `None` for them and nothing should be sent.
    pub fn progress(goal: &Goal, value: f64) -> Option<Self> {
        if goal.completed {
            return None;
        }
        Some(Self {
            progress: Some(goal.clamp_progress(value)),
            ..Default::default()
        })
    }

    /// Flip completion. Completing fills progress up to target; reopening
    /// keeps whatever progress the goal has now.
    pub fn toggle_completion(goal: &Goal) -> Self {
        let completed = !goal.completed;
        let progress = if completed { goal.target } else { goal.progress };
        Self {
            completed: Some(completed),
            progress: Some(progress),
            ..Default::default()
        }
    }

    /// Full edit from the goal form
    pub fn edit(goal: &NewGoal) -> Self {
        Self {
            title: Some(goal.title.clone()),
            description: Some(goal.description.clone()),
            category: Some(goal.category.clone()),
            target: Some(goal.target),
            unit: Some(goal.unit.clone()),
            ..Default::default()
        }
    }

    /// Apply to a local copy, the way the server is expected to
    pub fn applied_to(&self, goal: &Goal) -> Goal {
        let mut next = goal.clone();
        if let Some(title) = &self.title {
            next.title = title.clone();
        }
        if let Some(description) = &self.description {
            next.description = description.clone();
        }
        if let Some(category) = &self.category {
            next.category = category.clone();
        }
        if let Some(target) = self.target {
            next.target = target;
        }
        if let Some(unit) = &self.unit {
            next.unit = unit.clone();
        }
        if let Some(progress) = self.progress {
            next.progress = progress;
        }
        if let Some(completed) = self.completed {
            next.completed = completed;
        }
        next
    }
}
