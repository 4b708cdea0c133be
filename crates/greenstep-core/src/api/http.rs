//! HTTP client for the GreenStep REST API

use async_trait::async_trait;
use reqwest::{header, Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use super::{Endpoint, GreenApi};
use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{
    Action, ActionStats, AuthResponse, Credentials, Goal, GoalUpdate, NewAction, NewGoal,
    ProfileEnvelope, ProfileUpdate, Registration, User,
};
use crate::token::BearerToken;

/// Error body the API sends alongside non-success statuses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// reqwest-backed [`GreenApi`]. Single attempt per call, no timeout.
#[derive(Debug, Clone)]
pub struct HttpApi {
    config: ApiConfig,
    client: Client,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn request(&self, endpoint: Endpoint<'_>, auth: Option<&BearerToken>) -> RequestBuilder {
        let url = self.config.url(&endpoint.path());
        debug!(method = %endpoint.method(), %url, authenticated = auth.is_some(), "api request");

        let builder = self.client.request(endpoint.method(), url);
        match auth {
            Some(token) => builder.header(header::AUTHORIZATION, token.header_value()),
            None => builder,
        }
    }

    async fn read_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = Self::check(request.send().await?).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn read_empty(&self, request: RequestBuilder) -> ApiResult<()> {
        Self::check(request.send().await?).await?;
        Ok(())
    }

    async fn check(response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|body| body.message)
            .filter(|message| !message.is_empty());
        Err(ApiError::Server {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait(?Send)]
impl GreenApi for HttpApi {
    async fn register(&self, body: &Registration) -> ApiResult<AuthResponse> {
        self.read_json(self.request(Endpoint::Register, None).json(body)).await
    }

    async fn login(&self, body: &Credentials) -> ApiResult<AuthResponse> {
        self.read_json(self.request(Endpoint::Login, None).json(body)).await
    }

    async fn fetch_profile(&self, auth: Option<&BearerToken>) -> ApiResult<ProfileEnvelope> {
        self.read_json(self.request(Endpoint::FetchProfile, auth)).await
    }

    async fn update_profile(&self, auth: Option<&BearerToken>, body: &ProfileUpdate) -> ApiResult<User> {
        self.read_json(self.request(Endpoint::UpdateProfile, auth).json(body)).await
    }

    async fn fetch_goals(&self, auth: Option<&BearerToken>) -> ApiResult<Vec<Goal>> {
        self.read_json(self.request(Endpoint::FetchGoals, auth)).await
    }

    async fn create_goal(&self, auth: Option<&BearerToken>, body: &NewGoal) -> ApiResult<Goal> {
        self.read_json(self.request(Endpoint::CreateGoal, auth).json(body)).await
    }

    async fn update_goal(&self, auth: Option<&BearerToken>, id: &str, body: &GoalUpdate) -> ApiResult<Goal> {
        self.read_json(self.request(Endpoint::UpdateGoal(id), auth).json(body)).await
    }

    async fn delete_goal(&self, auth: Option<&BearerToken>, id: &str) -> ApiResult<()> {
        self.read_empty(self.request(Endpoint::DeleteGoal(id), auth)).await
    }

    async fn fetch_actions(&self, auth: Option<&BearerToken>) -> ApiResult<Vec<Action>> {
        self.read_json(self.request(Endpoint::FetchActions, auth)).await
    }

    async fn log_action(&self, auth: Option<&BearerToken>, body: &NewAction) -> ApiResult<Action> {
        self.read_json(self.request(Endpoint::LogAction, auth).json(body)).await
    }

    async fn delete_action(&self, auth: Option<&BearerToken>, id: &str) -> ApiResult<()> {
        self.read_empty(self.request(Endpoint::DeleteAction(id), auth)).await
    }

    async fn fetch_action_stats(&self, auth: Option<&BearerToken>) -> ApiResult<ActionStats> {
        self.read_json(self.request(Endpoint::FetchActionStats, auth)).await
    }
}
