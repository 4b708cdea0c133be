//! Derived Views
//!
//! Read-only summaries computed from the partitions: level progression,
//! dashboard excerpts, category filtering and achievement progress. Nothing
//! here is stored; views recompute on every change.

use std::collections::BTreeSet;

use chrono::{Local, TimeZone};

use crate::models::{Action, ActionCategory, Goal};
use crate::state::UserState;

/// Points needed per level
pub const POINTS_PER_LEVEL: u32 = 100;

/// How many entries the dashboard lists
pub const DASHBOARD_LIMIT: usize = 3;

// ========================
// Levels
// ========================

/// Level reached with `points`: one level per hundred points, starting at 1
pub fn level_for_points(points: u32) -> u32 {
    points / POINTS_PER_LEVEL + 1
}

/// Points still missing before the next level
pub fn points_to_next_level(points: u32) -> u32 {
    POINTS_PER_LEVEL - points % POINTS_PER_LEVEL
}

/// Share of the current level already earned, in percent
pub fn level_progress_percent(points: u32) -> u32 {
    points % POINTS_PER_LEVEL * 100 / POINTS_PER_LEVEL
}

/// Level line shown in the header of the dashboard and profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelSummary {
    pub level: u32,
    pub points: u32,
    pub to_next: u32,
    pub percent: u32,
}

impl LevelSummary {
    pub fn from_points(points: u32) -> Self {
        Self {
            level: level_for_points(points),
            points,
            to_next: points_to_next_level(points),
            percent: level_progress_percent(points),
        }
    }

    /// Built from the server's point total for the signed-in user, never
    /// from whichever actions happen to be loaded.
    pub fn for_user(user: &UserState) -> Self {
        Self::from_points(user.points)
    }
}

// ========================
// Dashboard
// ========================

/// Most recent actions by timestamp, newest first
pub fn recent_actions(actions: &[Action], limit: usize) -> Vec<Action> {
    let mut sorted = actions.to_vec();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted.truncate(limit);
    sorted
}

/// Completed/active split plus the first few active goals
#[derive(Debug, Clone, PartialEq)]
pub struct GoalOverview {
    pub completed: usize,
    pub active: usize,
    pub highlighted: Vec<Goal>,
}

pub fn goal_overview(goals: &[Goal], limit: usize) -> GoalOverview {
    let completed = goals.iter().filter(|goal| goal.completed).count();
    let highlighted = goals
        .iter()
        .filter(|goal| !goal.completed)
        .take(limit)
        .cloned()
        .collect();
    GoalOverview {
        completed,
        active: goals.len() - completed,
        highlighted,
    }
}

// ========================
// Category Filter
// ========================

/// Category filter of the actions list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ActionCategory),
}

impl CategoryFilter {
    pub fn matches(&self, action: &Action) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => action.category == *category,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    /// Inverse of [`CategoryFilter::label`]; anything unknown means all
    pub fn from_label(label: &str) -> Self {
        ActionCategory::ALL
            .into_iter()
            .find(|category| category.label() == label)
            .map(CategoryFilter::Only)
            .unwrap_or(CategoryFilter::All)
    }
}

/// Distinct categories present in `actions`, sorted by label
pub fn categories_in(actions: &[Action]) -> Vec<ActionCategory> {
    let present: BTreeSet<_> = actions.iter().map(|action| action.category).collect();
    let mut categories: Vec<_> = present.into_iter().collect();
    categories.sort_by_key(|category| category.label());
    categories
}

/// Actions passing `filter`, newest first
pub fn filter_actions(actions: &[Action], filter: CategoryFilter) -> Vec<Action> {
    let matching: Vec<_> = actions
        .iter()
        .filter(|action| filter.matches(action))
        .cloned()
        .collect();
    recent_actions(&matching, matching.len())
}

// ========================
// Achievements
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Achievement {
    FirstSteps,
    GoalSetter,
    PointsCollector,
    ConsistentLogger,
}

impl Achievement {
    pub const ALL: [Achievement; 4] = [
        Achievement::FirstSteps,
        Achievement::GoalSetter,
        Achievement::PointsCollector,
        Achievement::ConsistentLogger,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Achievement::FirstSteps => "First Steps",
            Achievement::GoalSetter => "Goal Setter",
            Achievement::PointsCollector => "Points Collector",
            Achievement::ConsistentLogger => "Consistent Logger",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Achievement::FirstSteps => "Log 5 sustainable actions",
            Achievement::GoalSetter => "Create 3 goals",
            Achievement::PointsCollector => "Earn 250 points",
            Achievement::ConsistentLogger => "Log actions on 3 different days",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Achievement::FirstSteps => "🌱",
            Achievement::GoalSetter => "🎯",
            Achievement::PointsCollector => "🏆",
            Achievement::ConsistentLogger => "📅",
        }
    }

    pub fn target(&self) -> u32 {
        match self {
            Achievement::FirstSteps => 5,
            Achievement::GoalSetter => 3,
            Achievement::PointsCollector => 250,
            Achievement::ConsistentLogger => 3,
        }
    }
}

/// Progress towards one achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AchievementProgress {
    pub achievement: Achievement,
    /// Capped at the target
    pub current: u32,
}

impl AchievementProgress {
    pub fn unlocked(&self) -> bool {
        self.current >= self.achievement.target()
    }

    pub fn percent(&self) -> u32 {
        self.current * 100 / self.achievement.target()
    }
}

/// Progress on every achievement, derived from loaded actions and goals
/// and the points those actions earned. Days are counted in the browser's
/// local time zone.
pub fn achievements(actions: &[Action], goals: &[Goal], points: u32) -> Vec<AchievementProgress> {
    achievements_in(&Local, actions, goals, points)
}

/// [`achievements`] with distinct days counted in `zone`
pub fn achievements_in<Tz: TimeZone>(
    zone: &Tz,
    actions: &[Action],
    goals: &[Goal],
    points: u32,
) -> Vec<AchievementProgress> {
    let active_days: BTreeSet<_> = actions
        .iter()
        .map(|action| action.timestamp.with_timezone(zone).date_naive())
        .collect();

    Achievement::ALL
        .into_iter()
        .map(|achievement| {
            let raw = match achievement {
                Achievement::FirstSteps => count(actions.len()),
                Achievement::GoalSetter => count(goals.len()),
                Achievement::PointsCollector => points,
                Achievement::ConsistentLogger => count(active_days.len()),
            };
            AchievementProgress {
                achievement,
                current: raw.min(achievement.target()),
            }
        })
        .collect()
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
