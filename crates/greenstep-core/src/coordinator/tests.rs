//! Coordinator Tests
//!
//! Drives the coordinator against a scripted in-memory API on a
//! current-thread runtime.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use futures::channel::oneshot;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use super::Coordinator;
use crate::api::GreenApi;
use crate::error::{ApiError, ApiResult};
use crate::models::{
    Action, ActionCategory, ActionStats, AuthResponse, Credentials, Goal, GoalUpdate, NewAction,
    NewGoal, ProfileEnvelope, ProfileUpdate, Registration, User,
};
use crate::state::AppState;
use crate::token::{BearerToken, MemoryTokenStore, TokenStore};

type Outcome = Result<Value, (u16, Option<String>)>;

enum Reply {
    Now(Outcome),
    Later(oneshot::Receiver<Outcome>),
}

#[derive(Debug, Clone, PartialEq)]
struct Call {
    name: &'static str,
    auth: Option<BearerToken>,
    id: Option<String>,
    body: Option<Value>,
}

/// API double answering from a queue of scripted replies
#[derive(Default)]
struct ScriptedApi {
    script: RefCell<VecDeque<Reply>>,
    calls: RefCell<Vec<Call>>,
}

impl ScriptedApi {
    fn reply(&self, value: Value) {
        self.script.borrow_mut().push_back(Reply::Now(Ok(value)));
    }

    fn fail(&self, status: u16, message: Option<&str>) {
        self.script
            .borrow_mut()
            .push_back(Reply::Now(Err((status, message.map(str::to_string)))));
    }

    fn defer(&self) -> oneshot::Sender<Outcome> {
        let (tx, rx) = oneshot::channel();
        self.script.borrow_mut().push_back(Reply::Later(rx));
        tx
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    async fn answer<T: DeserializeOwned>(
        &self,
        name: &'static str,
        auth: Option<&BearerToken>,
        id: Option<&str>,
        body: Option<Value>,
    ) -> ApiResult<T> {
        self.calls.borrow_mut().push(Call {
            name,
            auth: auth.cloned(),
            id: id.map(str::to_string),
            body,
        });

        let next = self.script.borrow_mut().pop_front();
        let outcome = match next {
            Some(Reply::Now(outcome)) => outcome,
            Some(Reply::Later(rx)) => rx.await.expect("deferred reply dropped"),
            None => panic!("no scripted reply for {name}"),
        };
        match outcome {
            Ok(value) => Ok(serde_json::from_value(value)?),
            Err((status, message)) => Err(ApiError::Server { status, message }),
        }
    }
}

fn to_json<T: serde::Serialize>(body: &T) -> Option<Value> {
    Some(serde_json::to_value(body).expect("serializable body"))
}

#[async_trait(?Send)]
impl GreenApi for ScriptedApi {
    async fn register(&self, body: &Registration) -> ApiResult<AuthResponse> {
        self.answer("register", None, None, to_json(body)).await
    }

    async fn login(&self, body: &Credentials) -> ApiResult<AuthResponse> {
        self.answer("login", None, None, to_json(body)).await
    }

    async fn fetch_profile(&self, auth: Option<&BearerToken>) -> ApiResult<ProfileEnvelope> {
        self.answer("fetch_profile", auth, None, None).await
    }

    async fn update_profile(&self, auth: Option<&BearerToken>, body: &ProfileUpdate) -> ApiResult<User> {
        self.answer("update_profile", auth, None, to_json(body)).await
    }

    async fn fetch_goals(&self, auth: Option<&BearerToken>) -> ApiResult<Vec<Goal>> {
        self.answer("fetch_goals", auth, None, None).await
    }

    async fn create_goal(&self, auth: Option<&BearerToken>, body: &NewGoal) -> ApiResult<Goal> {
        self.answer("create_goal", auth, None, to_json(body)).await
    }

    async fn update_goal(&self, auth: Option<&BearerToken>, id: &str, body: &GoalUpdate) -> ApiResult<Goal> {
        self.answer("update_goal", auth, Some(id), to_json(body)).await
    }

    async fn delete_goal(&self, auth: Option<&BearerToken>, id: &str) -> ApiResult<()> {
        self.answer("delete_goal", auth, Some(id), None).await
    }

    async fn fetch_actions(&self, auth: Option<&BearerToken>) -> ApiResult<Vec<Action>> {
        self.answer("fetch_actions", auth, None, None).await
    }

    async fn log_action(&self, auth: Option<&BearerToken>, body: &NewAction) -> ApiResult<Action> {
        self.answer("log_action", auth, None, to_json(body)).await
    }

    async fn delete_action(&self, auth: Option<&BearerToken>, id: &str) -> ApiResult<()> {
        self.answer("delete_action", auth, Some(id), None).await
    }

    async fn fetch_action_stats(&self, auth: Option<&BearerToken>) -> ApiResult<ActionStats> {
        self.answer("fetch_action_stats", auth, None, None).await
    }
}

type TestCoordinator = Coordinator<ScriptedApi, MemoryTokenStore, RefCell<AppState>>;

fn coordinator(token: Option<&str>) -> TestCoordinator {
    let tokens = match token {
        Some(token) => MemoryTokenStore::with_token(BearerToken::new(token)),
        None => MemoryTokenStore::new(),
    };
    let state = RefCell::new(AppState::new(tokens.load()));
    Coordinator::new(ScriptedApi::default(), tokens, state)
}

fn snapshot(c: &TestCoordinator) -> AppState {
    c.state().borrow().clone()
}

fn user_json() -> Value {
    json!({"_id": "u1", "name": "Ada", "email": "a@b.com", "level": 2, "points": 120,
           "achievements": ["first-steps"]})
}

fn goal_json(id: &str, progress: f64, completed: bool) -> Value {
    json!({"_id": id, "title": "Bike to work", "description": "", "category": "General",
           "target": 10.0, "unit": "times", "progress": progress, "completed": completed})
}

fn action_json(id: &str, day: u32) -> Value {
    json!({"_id": id, "title": format!("Action {id}"), "category": "Recycling", "points": 10,
           "icon": "♻️", "timestamp": format!("2024-03-{day:02}T09:00:00Z")})
}

fn goal(id: &str, progress: f64, completed: bool) -> Goal {
    serde_json::from_value(goal_json(id, progress, completed)).unwrap()
}

// ========================
// User
// ========================

#[tokio::test]
async fn test_login_persists_token_and_signs_in() {
    let c = coordinator(None);
    c.api().reply(json!({"user": user_json(), "token": "t0k"}));

    let user = c
        .login(&Credentials {
            email: "a@b.com".into(),
            password: "x".into(),
        })
        .await
        .unwrap();

    assert_eq!(user.name, "Ada");
    assert_eq!(c.tokens().load(), Some(BearerToken::new("t0k")));

    let state = snapshot(&c);
    assert!(state.user.is_authenticated);
    assert_eq!(state.user.name.as_deref(), Some("Ada"));
    assert_eq!(state.user.points, 120);
    assert_eq!(state.user.level, 2);
    assert!(!state.user.status.loading);
    assert!(state.user.status.error.is_none());

    let calls = c.api().calls();
    assert_eq!(calls[0].name, "login");
    assert!(calls[0].auth.is_none());
    assert_eq!(calls[0].body, Some(json!({"email": "a@b.com", "password": "x"})));
}

#[tokio::test]
async fn test_requests_after_login_carry_token() {
    let c = coordinator(None);
    c.api().reply(json!({"user": user_json(), "token": "t0k"}));
    c.api().reply(json!([]));

    c.login(&Credentials {
        email: "a@b.com".into(),
        password: "x".into(),
    })
    .await
    .unwrap();
    c.fetch_goals().await.unwrap();

    let calls = c.api().calls();
    assert_eq!(calls[1].name, "fetch_goals");
    assert_eq!(calls[1].auth, Some(BearerToken::new("t0k")));
}

#[tokio::test]
async fn test_register_failure_surfaces_server_message() {
    let c = coordinator(None);
    c.api().fail(400, Some("User already exists"));

    let err = c
        .register(&Registration {
            name: "Ada".into(),
            email: "a@b.com".into(),
            password: "x".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.message(), "User already exists");
    assert!(c.tokens().load().is_none());
    let state = snapshot(&c);
    assert!(!state.user.is_authenticated);
    assert_eq!(state.user.status.error.as_deref(), Some("User already exists"));
    assert!(!state.user.status.loading);
}

#[tokio::test]
async fn test_failure_without_message_uses_fallback() {
    let c = coordinator(Some("t0k"));
    c.api().fail(500, None);

    let err = c.fetch_goals().await.unwrap_err();
    assert_eq!(err.message(), "Failed to fetch goals");
    assert_eq!(
        snapshot(&c).goals.status.error.as_deref(),
        Some("Failed to fetch goals")
    );
}

#[tokio::test]
async fn test_check_auth_without_token_skips_network() {
    let c = coordinator(None);

    let err = c.check_auth().await.unwrap_err();

    assert_eq!(err.message(), "No token found");
    assert!(c.api().calls().is_empty());
    let state = snapshot(&c);
    assert!(!state.user.is_authenticated);
    assert!(!state.user.status.loading);
    assert_eq!(state.user.status.error.as_deref(), Some("No token found"));
}

#[tokio::test]
async fn test_check_auth_restores_session() {
    let c = coordinator(Some("t0k"));
    c.api().reply(json!({"user": user_json()}));

    c.check_auth().await.unwrap();

    let state = snapshot(&c);
    assert!(state.user.is_authenticated);
    assert!(state.user.achievements.contains("first-steps"));
    assert_eq!(state.user.level, 2);
    assert_eq!(c.api().calls()[0].auth, Some(BearerToken::new("t0k")));
}

#[tokio::test]
async fn test_check_auth_rejected_token_is_cleared() {
    let c = coordinator(Some("stale"));
    c.api().fail(401, Some("Not authorized, token failed"));

    let err = c.check_auth().await.unwrap_err();

    assert_eq!(err.message(), "Not authorized, token failed");
    assert!(c.tokens().load().is_none());
    let state = snapshot(&c);
    assert!(!state.user.is_authenticated);
    assert!(state.user.token.is_none());
}

#[tokio::test]
async fn test_update_profile() {
    let c = coordinator(Some("t0k"));
    c.api().reply(json!({"user": user_json()}));
    c.api().reply(json!({"_id": "u1", "name": "Grace", "email": "g@b.com"}));

    c.fetch_profile().await.unwrap();
    c.update_profile(&ProfileUpdate {
        name: Some("Grace".into()),
        email: Some("g@b.com".into()),
        password: None,
    })
    .await
    .unwrap();

    let state = snapshot(&c);
    assert_eq!(state.user.name.as_deref(), Some("Grace"));
    assert_eq!(state.user.email.as_deref(), Some("g@b.com"));
    assert_eq!(state.user.points, 120);
    assert_eq!(
        c.api().calls()[1].body,
        Some(json!({"name": "Grace", "email": "g@b.com"}))
    );
}

#[tokio::test]
async fn test_logout_resets_everything() {
    let c = coordinator(None);
    c.api().reply(json!({"user": user_json(), "token": "t0k"}));
    c.api().reply(json!([goal_json("g1", 0.0, false)]));
    c.api().reply(json!([action_json("a1", 1)]));

    c.login(&Credentials {
        email: "a@b.com".into(),
        password: "x".into(),
    })
    .await
    .unwrap();
    c.fetch_goals().await.unwrap();
    c.fetch_actions().await.unwrap();

    c.logout();

    assert!(c.tokens().load().is_none());
    assert_eq!(snapshot(&c), AppState::default());
}

// ========================
// Goals
// ========================

#[tokio::test]
async fn test_create_goal_appends_fresh_goal() {
    let c = coordinator(Some("t0k"));
    c.api().reply(json!([goal_json("g0", 5.0, false)]));
    c.api().reply(goal_json("g1", 0.0, false));

    c.fetch_goals().await.unwrap();
    let created = c
        .create_goal(&NewGoal::new("Bike to work", 10.0, "times"))
        .await
        .unwrap();

    assert_eq!(created.progress, 0.0);
    let state = snapshot(&c);
    assert_eq!(state.goals.goals.len(), 2);
    let last = state.goals.goals.last().unwrap();
    assert_eq!(last.id, "g1");
    assert_eq!(last.title, "Bike to work");
    assert_eq!(last.progress, 0.0);
    assert!(!last.completed);

    let body = c.api().calls()[1].body.clone().unwrap();
    assert_eq!(body["title"], "Bike to work");
    assert_eq!(body["target"], 10.0);
    assert_eq!(body["unit"], "times");
}

#[tokio::test]
async fn test_goal_progress_clamped_before_sending() {
    let c = coordinator(Some("t0k"));
    c.api().reply(goal_json("g1", 10.0, false));

    let updated = c
        .set_goal_progress(&goal("g1", 4.0, false), 25.0)
        .await
        .unwrap();

    assert_eq!(updated.map(|g| g.progress), Some(10.0));
    let call = &c.api().calls()[0];
    assert_eq!(call.id.as_deref(), Some("g1"));
    assert_eq!(call.body, Some(json!({"progress": 10.0})));
}

#[tokio::test]
async fn test_completed_goal_progress_not_sent() {
    let c = coordinator(Some("t0k"));
    let result = c.set_goal_progress(&goal("g1", 10.0, true), 3.0).await.unwrap();
    assert!(result.is_none());
    assert!(c.api().calls().is_empty());
    assert!(!snapshot(&c).goals.status.loading);
}

#[tokio::test]
async fn test_toggle_completion_round_trip() {
    let c = coordinator(Some("t0k"));
    c.api().reply(json!([goal_json("g1", 3.0, false)]));
    c.api().reply(goal_json("g1", 10.0, true));
    c.api().reply(goal_json("g1", 10.0, false));

    c.fetch_goals().await.unwrap();
    let original = snapshot(&c).goals.goals[0].clone();
    let completed = c.toggle_goal_completion(&original).await.unwrap();
    let reopened = c.toggle_goal_completion(&completed).await.unwrap();

    let calls = c.api().calls();
    assert_eq!(calls[1].body, Some(json!({"progress": 10.0, "completed": true})));
    assert_eq!(calls[2].body, Some(json!({"progress": 10.0, "completed": false})));
    assert_eq!(reopened.progress, 10.0);

    let state = snapshot(&c);
    assert!(!state.goals.goals[0].completed);
    assert_eq!(state.goals.goals[0].progress, 10.0);
}

#[tokio::test]
async fn test_delete_goal_removes_entry() {
    let c = coordinator(Some("t0k"));
    c.api().reply(json!([
        goal_json("g1", 0.0, false),
        goal_json("g2", 0.0, false),
        goal_json("g3", 0.0, false)
    ]));
    c.api().reply(Value::Null);

    c.fetch_goals().await.unwrap();
    c.delete_goal("g2").await.unwrap();

    let ids: Vec<_> = snapshot(&c).goals.goals.into_iter().map(|g| g.id).collect();
    assert_eq!(ids, ["g1", "g3"]);
}

// ========================
// Actions
// ========================

#[tokio::test]
async fn test_log_action_prepends() {
    let c = coordinator(Some("t0k"));
    c.api().reply(json!([action_json("a1", 20)]));
    c.api().reply(action_json("a2", 1));

    c.fetch_actions().await.unwrap();
    let logged = c
        .log_action(&NewAction::new("Cycled", ActionCategory::SustainableTravel))
        .await
        .unwrap();

    assert_eq!(logged.id, "a2");
    let ids: Vec<_> = snapshot(&c).actions.actions.into_iter().map(|a| a.id).collect();
    assert_eq!(ids, ["a2", "a1"]);

    let body = c.api().calls()[1].body.clone().unwrap();
    assert_eq!(body["category"], "Sustainable Travel");
    assert_eq!(body["points"], 20);
    assert_eq!(body["icon"], "🚲");
}

#[tokio::test]
async fn test_failed_fetch_keeps_prior_actions() {
    let c = coordinator(Some("t0k"));
    c.api().reply(json!([action_json("a1", 1), action_json("a2", 2)]));
    c.api().fail(503, Some("Service unavailable"));

    c.fetch_actions().await.unwrap();
    let before = snapshot(&c).actions.actions;
    c.fetch_actions().await.unwrap_err();

    let state = snapshot(&c);
    assert_eq!(state.actions.actions, before);
    assert_eq!(state.actions.status.error.as_deref(), Some("Service unavailable"));
    assert!(!state.actions.status.loading);
}

#[tokio::test]
async fn test_delete_action_and_stats() {
    let c = coordinator(Some("t0k"));
    c.api().reply(json!([action_json("a1", 1), action_json("a2", 2)]));
    c.api().reply(Value::Null);
    c.api().reply(json!({"totalPoints": 10, "count": 1}));

    c.fetch_actions().await.unwrap();
    c.delete_action("a1").await.unwrap();
    c.fetch_action_stats().await.unwrap();

    let state = snapshot(&c);
    let ids: Vec<_> = state.actions.actions.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["a2"]);
    assert_eq!(c.api().calls()[1].id.as_deref(), Some("a1"));
    assert_eq!(state.actions.stats, Some(json!({"totalPoints": 10, "count": 1})));
    assert!(state.actions.status.error.is_none());
}

// ========================
// Concurrency
// ========================

#[tokio::test]
async fn test_loading_visible_while_pending() {
    let c = coordinator(Some("t0k"));
    let tx = c.api().defer();

    let observe = async {
        tokio::task::yield_now().await;
        let pending = snapshot(&c);
        tx.send(Ok(json!([goal_json("g1", 0.0, false)]))).unwrap();
        pending
    };
    let (result, pending) = futures::join!(c.fetch_goals(), observe);

    assert!(pending.goals.status.loading);
    assert!(pending.goals.goals.is_empty());
    assert!(result.is_ok());
    assert!(!snapshot(&c).goals.status.loading);
}

#[tokio::test]
async fn test_same_partition_last_resolved_wins() {
    let c = coordinator(Some("t0k"));
    let first = c.api().defer();
    let second = c.api().defer();

    let resolve = async {
        tokio::task::yield_now().await;
        second.send(Ok(json!([goal_json("second", 0.0, false)]))).unwrap();
        tokio::task::yield_now().await;
        first.send(Ok(json!([goal_json("first", 0.0, false)]))).unwrap();
    };
    let (a, b, ()) = futures::join!(c.fetch_goals(), c.fetch_goals(), resolve);
    assert!(a.is_ok() && b.is_ok());

    // The earlier request resolved last, so its payload stands.
    let ids: Vec<_> = snapshot(&c).goals.goals.into_iter().map(|g| g.id).collect();
    assert_eq!(ids, ["first"]);
}

#[tokio::test]
async fn test_partitions_do_not_interact() {
    let c = coordinator(Some("t0k"));
    let goals_tx = c.api().defer();
    c.api().fail(500, None);

    let finish = async {
        tokio::task::yield_now().await;
        let mid = snapshot(&c);
        goals_tx.send(Ok(json!([]))).unwrap();
        mid
    };
    let (goals, actions, mid) = futures::join!(c.fetch_goals(), c.fetch_actions(), finish);

    assert!(goals.is_ok());
    assert_eq!(actions.unwrap_err().message(), "Failed to fetch actions");
    assert!(mid.goals.status.loading);
    assert!(mid.goals.status.error.is_none());
    assert!(!mid.actions.status.loading);
    assert_eq!(mid.actions.status.error.as_deref(), Some("Failed to fetch actions"));
}
