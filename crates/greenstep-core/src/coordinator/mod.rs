//! Async Operation Coordinator
//!
//! Runs one named operation per call: dispatches `Started`, performs the
//! single network call, then dispatches `Succeeded` or `Failed`. Failures are
//! absorbed into partition state; the caller only gets the message back.
//!
//! Operations on the same partition are not fenced. When two overlap, the
//! one whose response arrives last decides the partition's final state.

mod operation;

#[cfg(test)]
mod tests;

use std::future::Future;

use tracing::{debug, info, warn};

use crate::api::GreenApi;
use crate::error::{ApiError, ApiResult, OperationError};
use crate::models::{
    Action, ActionStats, Credentials, Goal, GoalUpdate, NewAction, NewGoal, ProfileUpdate,
    Registration, User,
};
use crate::state::{ActionsEvent, Dispatch, Event, GoalsEvent, Phase, UserEvent};
use crate::token::{BearerToken, TokenStore};

pub use operation::Operation;

/// Bridges view actions to the API and back into the store
pub struct Coordinator<A, T, D> {
    api: A,
    tokens: T,
    state: D,
}

impl<A, T, D> Coordinator<A, T, D>
where
    A: GreenApi,
    T: TokenStore,
    D: Dispatch,
{
    pub fn new(api: A, tokens: T, state: D) -> Self {
        Self { api, tokens, state }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn tokens(&self) -> &T {
        &self.tokens
    }

    pub fn state(&self) -> &D {
        &self.state
    }

    // ========================
    // Lifecycle
    // ========================

    async fn execute<R, F>(
        &self,
        operation: Operation,
        event: impl Fn(Phase<R>) -> Event,
        request: F,
    ) -> Result<R, OperationError>
    where
        R: Clone,
        F: Future<Output = ApiResult<R>>,
    {
        debug!(operation = operation.name(), "operation started");
        self.state.dispatch(event(Phase::Started));

        match request.await {
            Ok(payload) => {
                debug!(operation = operation.name(), "operation succeeded");
                self.state.dispatch(event(Phase::Succeeded(payload.clone())));
                Ok(payload)
            }
            Err(err) => {
                let message = err.user_message(operation.fallback_message());
                warn!(operation = operation.name(), error = %err, %message, "operation failed");
                self.state.dispatch(event(Phase::Failed(message.clone())));
                Err(OperationError::new(message))
            }
        }
    }

    fn credential(&self) -> Option<BearerToken> {
        self.tokens.load()
    }

    // ========================
    // User Operations
    // ========================

    pub async fn register(&self, body: &Registration) -> Result<User, OperationError> {
        let auth = self
            .execute(Operation::Register, |phase| UserEvent::Register(phase).into(), async {
                let auth = self.api.register(body).await?;
                self.tokens.save(&auth.token);
                Ok::<_, ApiError>(auth)
            })
            .await?;
        info!(user = %auth.user.id, "registered and signed in");
        Ok(auth.user)
    }

    pub async fn login(&self, body: &Credentials) -> Result<User, OperationError> {
        let auth = self
            .execute(Operation::Login, |phase| UserEvent::Login(phase).into(), async {
                let auth = self.api.login(body).await?;
                self.tokens.save(&auth.token);
                Ok::<_, ApiError>(auth)
            })
            .await?;
        info!(user = %auth.user.id, "signed in");
        Ok(auth.user)
    }

    pub async fn fetch_profile(&self) -> Result<User, OperationError> {
        let token = self.credential();
        self.execute(Operation::FetchProfile, |phase| UserEvent::FetchProfile(phase).into(), async {
            Ok::<_, ApiError>(self.api.fetch_profile(token.as_ref()).await?.user)
        })
        .await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, OperationError> {
        let token = self.credential();
        self.execute(Operation::UpdateProfile, |phase| UserEvent::UpdateProfile(phase).into(), async {
            self.api.update_profile(token.as_ref(), update).await
        })
        .await
    }

    /// Validate the persisted token. Without one this fails at once and
    /// never touches the network; a rejected token is forgotten.
    pub async fn check_auth(&self) -> Result<User, OperationError> {
        let token = self.credential();
        self.execute(Operation::CheckAuth, |phase| UserEvent::CheckAuth(phase).into(), async {
            let token = token.ok_or(ApiError::MissingToken)?;
            match self.api.fetch_profile(Some(&token)).await {
                Ok(envelope) => Ok(envelope.user),
                Err(err) => {
                    info!("persisted token rejected, clearing it");
                    self.tokens.clear();
                    Err(err)
                }
            }
        })
        .await
    }

    /// Forget the token and clear every partition
    pub fn logout(&self) {
        self.tokens.clear();
        self.state.dispatch(Event::SessionReset);
        info!("signed out");
    }

    // ========================
    // Goal Operations
    // ========================

    pub async fn fetch_goals(&self) -> Result<Vec<Goal>, OperationError> {
        let token = self.credential();
        self.execute(Operation::FetchGoals, |phase| GoalsEvent::Fetch(phase).into(), async {
            self.api.fetch_goals(token.as_ref()).await
        })
        .await
    }

    pub async fn create_goal(&self, goal: &NewGoal) -> Result<Goal, OperationError> {
        let token = self.credential();
        self.execute(Operation::CreateGoal, |phase| GoalsEvent::Create(phase).into(), async {
            self.api.create_goal(token.as_ref(), goal).await
        })
        .await
    }

    pub async fn update_goal(&self, id: &str, update: &GoalUpdate) -> Result<Goal, OperationError> {
        let token = self.credential();
        self.execute(Operation::UpdateGoal, |phase| GoalsEvent::Update(phase).into(), async {
            self.api.update_goal(token.as_ref(), id, update).await
        })
        .await
    }

    pub async fn delete_goal(&self, id: &str) -> Result<(), OperationError> {
        let token = self.credential();
        self.execute(Operation::DeleteGoal, |phase| GoalsEvent::Delete(phase).into(), async {
            self.api.delete_goal(token.as_ref(), id).await?;
            Ok::<_, ApiError>(id.to_string())
        })
        .await
        .map(|_| ())
    }

    /// Clamp and send a new progress value. Completed goals are left alone
    /// and yield `Ok(None)` without a request.
    pub async fn set_goal_progress(&self, goal: &Goal, value: f64) -> Result<Option<Goal>, OperationError> {
        match GoalUpdate::progress(goal, value) {
            Some(update) => self.update_goal(&goal.id, &update).await.map(Some),
            None => Ok(None),
        }
    }

    pub async fn toggle_goal_completion(&self, goal: &Goal) -> Result<Goal, OperationError> {
        self.update_goal(&goal.id, &GoalUpdate::toggle_completion(goal)).await
    }

    // ========================
    // Action Operations
    // ========================

    pub async fn fetch_actions(&self) -> Result<Vec<Action>, OperationError> {
        let token = self.credential();
        self.execute(Operation::FetchActions, |phase| ActionsEvent::Fetch(phase).into(), async {
            self.api.fetch_actions(token.as_ref()).await
        })
        .await
    }

    pub async fn log_action(&self, action: &NewAction) -> Result<Action, OperationError> {
        let token = self.credential();
        self.execute(Operation::LogAction, |phase| ActionsEvent::Log(phase).into(), async {
            self.api.log_action(token.as_ref(), action).await
        })
        .await
    }

    pub async fn delete_action(&self, id: &str) -> Result<(), OperationError> {
        let token = self.credential();
        self.execute(Operation::DeleteAction, |phase| ActionsEvent::Delete(phase).into(), async {
            self.api.delete_action(token.as_ref(), id).await?;
            Ok::<_, ApiError>(id.to_string())
        })
        .await
        .map(|_| ())
    }

    pub async fn fetch_action_stats(&self) -> Result<ActionStats, OperationError> {
        let token = self.credential();
        self.execute(Operation::FetchActionStats, |phase| ActionsEvent::FetchStats(phase).into(), async {
            self.api.fetch_action_stats(token.as_ref()).await
        })
        .await
    }
}
