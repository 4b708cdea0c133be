//! Network Access Layer
//!
//! One HTTP call per domain operation. The route table is fixed; the
//! credential is passed in explicitly by the caller on every request.

mod http;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Method;

use crate::error::ApiResult;
use crate::models::{
    Action, ActionStats, AuthResponse, Credentials, Goal, GoalUpdate, NewAction, NewGoal,
    ProfileEnvelope, ProfileUpdate, Registration, User,
};
use crate::token::BearerToken;

pub use http::HttpApi;

/// Remote GreenStep API
///
/// Futures are `!Send`: everything runs on the browser's event loop.
#[async_trait(?Send)]
pub trait GreenApi {
    async fn register(&self, body: &Registration) -> ApiResult<AuthResponse>;
    async fn login(&self, body: &Credentials) -> ApiResult<AuthResponse>;
    async fn fetch_profile(&self, auth: Option<&BearerToken>) -> ApiResult<ProfileEnvelope>;
    async fn update_profile(&self, auth: Option<&BearerToken>, body: &ProfileUpdate) -> ApiResult<User>;

    async fn fetch_goals(&self, auth: Option<&BearerToken>) -> ApiResult<Vec<Goal>>;
    async fn create_goal(&self, auth: Option<&BearerToken>, body: &NewGoal) -> ApiResult<Goal>;
    async fn update_goal(&self, auth: Option<&BearerToken>, id: &str, body: &GoalUpdate) -> ApiResult<Goal>;
    async fn delete_goal(&self, auth: Option<&BearerToken>, id: &str) -> ApiResult<()>;

    async fn fetch_actions(&self, auth: Option<&BearerToken>) -> ApiResult<Vec<Action>>;
    async fn log_action(&self, auth: Option<&BearerToken>, body: &NewAction) -> ApiResult<Action>;
    async fn delete_action(&self, auth: Option<&BearerToken>, id: &str) -> ApiResult<()>;
    async fn fetch_action_stats(&self, auth: Option<&BearerToken>) -> ApiResult<ActionStats>;
}

/// Route of each operation, relative to the API root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Register,
    Login,
    FetchProfile,
    UpdateProfile,
    FetchGoals,
    CreateGoal,
    UpdateGoal(&'a str),
    DeleteGoal(&'a str),
    FetchActions,
    LogAction,
    DeleteAction(&'a str),
    FetchActionStats,
}

impl Endpoint<'_> {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::FetchProfile
            | Endpoint::FetchGoals
            | Endpoint::FetchActions
            | Endpoint::FetchActionStats => Method::GET,
            Endpoint::Register | Endpoint::Login | Endpoint::CreateGoal | Endpoint::LogAction => {
                Method::POST
            }
            Endpoint::UpdateProfile | Endpoint::UpdateGoal(_) => Method::PATCH,
            Endpoint::DeleteGoal(_) | Endpoint::DeleteAction(_) => Method::DELETE,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Endpoint::Register => "/users/register".to_string(),
            Endpoint::Login => "/users/login".to_string(),
            Endpoint::FetchProfile | Endpoint::UpdateProfile => "/users/profile".to_string(),
            Endpoint::FetchGoals | Endpoint::CreateGoal => "/goals".to_string(),
            Endpoint::UpdateGoal(id) | Endpoint::DeleteGoal(id) => format!("/goals/{}", segment(id)),
            Endpoint::FetchActions | Endpoint::LogAction => "/actions".to_string(),
            Endpoint::DeleteAction(id) => format!("/actions/{}", segment(id)),
            Endpoint::FetchActionStats => "/actions/stats".to_string(),
        }
    }
}

fn segment(id: &str) -> impl std::fmt::Display + '_ {
    utf8_percent_encode(id, NON_ALPHANUMERIC)
}
