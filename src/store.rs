//! Global Application State Store
//!
//! The core `AppState` wrapped in a Leptos reactive store. Each partition is
//! its own field, so a view reading goals does not re-run when the user
//! partition changes.

use greenstep_core::insights;
use greenstep_core::models::{Action, Goal};
use greenstep_core::AppState;
use leptos::prelude::*;
use reactive_stores::Store;

pub use greenstep_core::AppStateStoreFields;

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Read Helpers
// ========================

/// Authentication flag, only notifying when it flips
pub fn authenticated_memo(store: AppStore) -> Memo<bool> {
    Memo::new(move |_| store.user().read().is_authenticated)
}

pub fn store_goals(store: &AppStore) -> Vec<Goal> {
    store.goals().read().goals.clone()
}

pub fn store_actions(store: &AppStore) -> Vec<Action> {
    store.actions().read().actions.clone()
}

/// Find a loaded goal by ID
pub fn store_find_goal(store: &AppStore, id: &str) -> Option<Goal> {
    store.goals().read().find(id).cloned()
}

/// Achievement progress from whatever goals and actions are loaded
pub fn store_achievements(store: &AppStore) -> Vec<insights::AchievementProgress> {
    let actions = store.actions().read();
    let goals = store.goals().read();
    insights::achievements(&actions.actions, &goals.goals, actions.total_points())
}
