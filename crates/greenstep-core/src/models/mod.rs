//! Domain Models
//!
//! Records exchanged with the GreenStep API and the request bodies that
//! create or change them.

mod action;
mod category;
mod entity;
mod goal;
mod user;

pub use action::{Action, NewAction};
pub use category::{ActionCategory, GOAL_CATEGORIES};
pub use entity::{remove_by_id, replace_by_id, Entity};
pub use goal::{Goal, GoalUpdate, NewGoal};
pub use user::{AuthResponse, Credentials, ProfileEnvelope, ProfileUpdate, Registration, User};

/// Aggregates from `GET /actions/stats`. The shape is owned by the server.
pub type ActionStats = serde_json::Value;
