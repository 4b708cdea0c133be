//! UI Components
//!
//! Pages and the reusable Leptos components they are built from.

mod access_denied;
mod action_form;
mod actions_page;
mod auth_forms;
mod confirm_delete;
mod dashboard;
mod goal_form;
mod goals_page;
mod landing;
mod nav_bar;
mod profile_page;
mod status_line;

pub use access_denied::AccessDenied;
pub use action_form::ActionForm;
pub use actions_page::ActionsPage;
pub use auth_forms::{LoginForm, RegisterForm};
pub use confirm_delete::ConfirmDelete;
pub use dashboard::Dashboard;
pub use goal_form::GoalForm;
pub use goals_page::GoalsPage;
pub use landing::Landing;
pub use nav_bar::NavBar;
pub use profile_page::ProfilePage;
pub use status_line::StatusLine;
