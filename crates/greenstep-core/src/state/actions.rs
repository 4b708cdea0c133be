//! Actions Partition

use super::phase::{Phase, RequestStatus};
use crate::models::{remove_by_id, Action, ActionStats};

/// Actions read model
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionsState {
    /// Logged actions, newest insertions first
    pub actions: Vec<Action>,
    pub stats: Option<ActionStats>,
    pub status: RequestStatus,
}

/// Events of the actions partition
#[derive(Debug, Clone, PartialEq)]
pub enum ActionsEvent {
    Fetch(Phase<Vec<Action>>),
    Log(Phase<Action>),
    /// Success carries the id of the deleted action
    Delete(Phase<String>),
    FetchStats(Phase<ActionStats>),
}

impl ActionsEvent {
    pub fn operation(&self) -> &'static str {
        match self {
            ActionsEvent::Fetch(_) => "fetch_actions",
            ActionsEvent::Log(_) => "log_action",
            ActionsEvent::Delete(_) => "delete_action",
            ActionsEvent::FetchStats(_) => "fetch_action_stats",
        }
    }
}

impl ActionsState {
    pub fn reduce(&mut self, event: ActionsEvent) {
        match event {
            ActionsEvent::Fetch(phase) => {
                if let Some(actions) = phase.settle(&mut self.status) {
                    self.actions = actions;
                }
            }
            ActionsEvent::Log(phase) => {
                if let Some(action) = phase.settle(&mut self.status) {
                    self.actions.insert(0, action);
                }
            }
            ActionsEvent::Delete(phase) => {
                if let Some(id) = phase.settle(&mut self.status) {
                    remove_by_id(&mut self.actions, &id);
                }
            }
            ActionsEvent::FetchStats(phase) => {
                if let Some(stats) = phase.settle(&mut self.status) {
                    self.stats = Some(stats);
                }
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Sum of the points of every loaded action
    pub fn total_points(&self) -> u32 {
        self.actions.iter().map(|action| action.points).sum()
    }
}
