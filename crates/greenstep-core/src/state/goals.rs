//! Goals Partition

use super::phase::{Phase, RequestStatus};
use crate::models::{remove_by_id, replace_by_id, Goal};

/// Goals read model
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalsState {
    pub goals: Vec<Goal>,
    pub status: RequestStatus,
}

/// Events of the goals partition
#[derive(Debug, Clone, PartialEq)]
pub enum GoalsEvent {
    Fetch(Phase<Vec<Goal>>),
    Create(Phase<Goal>),
    Update(Phase<Goal>),
    /// Success carries the id of the deleted goal
    Delete(Phase<String>),
}

impl GoalsEvent {
    pub fn operation(&self) -> &'static str {
        match self {
            GoalsEvent::Fetch(_) => "fetch_goals",
            GoalsEvent::Create(_) => "create_goal",
            GoalsEvent::Update(_) => "update_goal",
            GoalsEvent::Delete(_) => "delete_goal",
        }
    }
}

impl GoalsState {
    pub fn reduce(&mut self, event: GoalsEvent) {
        match event {
            GoalsEvent::Fetch(phase) => {
                if let Some(goals) = phase.settle(&mut self.status) {
                    self.goals = goals;
                }
            }
            GoalsEvent::Create(phase) => {
                if let Some(goal) = phase.settle(&mut self.status) {
                    self.goals.push(goal);
                }
            }
            GoalsEvent::Update(phase) => {
                if let Some(goal) = phase.settle(&mut self.status) {
                    replace_by_id(&mut self.goals, goal);
                }
            }
            GoalsEvent::Delete(phase) => {
                if let Some(id) = phase.settle(&mut self.status) {
                    remove_by_id(&mut self.goals, &id);
                }
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn find(&self, id: &str) -> Option<&Goal> {
        self.goals.iter().find(|goal| goal.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn goal(id: &str, progress: f64) -> Goal {
        Goal {
            id: id.into(),
            title: format!("Goal {id}"),
            description: String::new(),
            category: "General".into(),
            target: 10.0,
            unit: "times".into(),
            progress,
            completed: false,
        }
    }

    fn loaded(ids: &[&str]) -> GoalsState {
        let mut state = GoalsState::default();
        state.reduce(GoalsEvent::Fetch(Phase::Succeeded(
            ids.iter().map(|id| goal(id, 0.0)).collect(),
        )));
        state
    }

    #[test]
    fn test_create_appends() {
        let mut state = loaded(&["a"]);
        state.reduce(GoalsEvent::Create(Phase::Started));
        state.reduce(GoalsEvent::Create(Phase::Succeeded(goal("b", 0.0))));
        let ids: Vec<_> = state.goals.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert!(!state.status.loading);
    }

    #[test]
    fn test_update_replaces_by_id() {
        let mut state = loaded(&["a", "b"]);
        state.reduce(GoalsEvent::Update(Phase::Succeeded(goal("b", 7.0))));
        assert_eq!(state.find("b").unwrap().progress, 7.0);
        assert_eq!(state.goals.len(), 2);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut state = loaded(&["a"]);
        let before = state.goals.clone();
        state.reduce(GoalsEvent::Update(Phase::Succeeded(goal("zz", 3.0))));
        assert_eq!(state.goals, before);
    }

    #[test]
    fn test_failure_keeps_goals() {
        let mut state = loaded(&["a", "b"]);
        state.reduce(GoalsEvent::Delete(Phase::Started));
        state.reduce(GoalsEvent::Delete(Phase::Failed("Goal not found".into())));
        assert_eq!(state.goals.len(), 2);
        assert_eq!(state.status.error.as_deref(), Some("Goal not found"));
        assert!(!state.status.loading);
    }

    proptest! {
        #[test]
        fn prop_delete_removes_one_and_keeps_order(count in 1usize..12, pick in 0usize..12) {
            let ids: Vec<String> = (0..count).map(|i| format!("g{i}")).collect();
            let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
            let mut state = loaded(&refs);
            let victim = ids[pick % count].clone();

            state.reduce(GoalsEvent::Delete(Phase::Started));
            state.reduce(GoalsEvent::Delete(Phase::Succeeded(victim.clone())));

            let expected: Vec<&str> = refs.iter().copied().filter(|id| *id != victim).collect();
            let actual: Vec<&str> = state.goals.iter().map(|g| g.id.as_str()).collect();
            prop_assert_eq!(actual, expected);
            prop_assert!(!state.status.loading);
            prop_assert!(state.status.error.is_none());
        }

        #[test]
        fn prop_fetch_lifecycle(previous in 0usize..5, fetched in 0usize..5, fail in any::<bool>()) {
            let before: Vec<String> = (0..previous).map(|i| format!("old{i}")).collect();
            let before_refs: Vec<&str> = before.iter().map(String::as_str).collect();
            let mut state = loaded(&before_refs);
            let snapshot = state.goals.clone();
            let payload: Vec<Goal> = (0..fetched).map(|i| goal(&format!("new{i}"), 1.0)).collect();

            state.reduce(GoalsEvent::Fetch(Phase::Started));
            if fail {
                state.reduce(GoalsEvent::Fetch(Phase::Failed("Failed to fetch goals".into())));
                prop_assert_eq!(&state.goals, &snapshot);
                prop_assert_eq!(state.status.error.as_deref(), Some("Failed to fetch goals"));
            } else {
                state.reduce(GoalsEvent::Fetch(Phase::Succeeded(payload.clone())));
                prop_assert_eq!(&state.goals, &payload);
                prop_assert!(state.status.error.is_none());
            }
            prop_assert!(!state.status.loading);
        }
    }
}
