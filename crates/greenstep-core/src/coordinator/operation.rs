//! Operation names and their fallback messages

/// Every coordinated operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Register,
    Login,
    FetchProfile,
    UpdateProfile,
    CheckAuth,
    FetchGoals,
    CreateGoal,
    UpdateGoal,
    DeleteGoal,
    FetchActions,
    LogAction,
    DeleteAction,
    FetchActionStats,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Register => "register",
            Operation::Login => "login",
            Operation::FetchProfile => "fetch_profile",
            Operation::UpdateProfile => "update_profile",
            Operation::CheckAuth => "check_auth",
            Operation::FetchGoals => "fetch_goals",
            Operation::CreateGoal => "create_goal",
            Operation::UpdateGoal => "update_goal",
            Operation::DeleteGoal => "delete_goal",
            Operation::FetchActions => "fetch_actions",
            Operation::LogAction => "log_action",
            Operation::DeleteAction => "delete_action",
            Operation::FetchActionStats => "fetch_action_stats",
        }
    }

    /// Message surfaced when the server gives no `message` of its own
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Operation::Register => "Registration failed",
            Operation::Login => "Login failed",
            Operation::FetchProfile => "Fetch profile failed",
            Operation::UpdateProfile => "Update profile failed",
            Operation::CheckAuth => "Authentication failed",
            Operation::FetchGoals => "Failed to fetch goals",
            Operation::CreateGoal => "Failed to create goal",
            Operation::UpdateGoal => "Failed to update goal",
            Operation::DeleteGoal => "Failed to delete goal",
            Operation::FetchActions => "Failed to fetch actions",
            Operation::LogAction => "Failed to log action",
            Operation::DeleteAction => "Failed to delete action",
            Operation::FetchActionStats => "Failed to fetch action stats",
        }
    }
}
