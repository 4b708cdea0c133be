//! User/Session Partition

use std::collections::BTreeSet;

use super::phase::{Phase, RequestStatus};
use crate::models::{AuthResponse, User};
use crate::token::BearerToken;

/// Session read model
#[derive(Debug, Clone, PartialEq)]
pub struct UserState {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    /// Level as last reported by the server. Displays derive the level from
    /// `points` instead.
    pub level: u32,
    pub points: u32,
    pub achievements: BTreeSet<String>,
    pub is_authenticated: bool,
    pub token: Option<BearerToken>,
    pub status: RequestStatus,
}

impl Default for UserState {
    fn default() -> Self {
        Self {
            id: None,
            name: None,
            email: None,
            level: 1,
            points: 0,
            achievements: BTreeSet::new(),
            is_authenticated: false,
            token: None,
            status: RequestStatus::default(),
        }
    }
}

/// Events of the user partition
#[derive(Debug, Clone, PartialEq)]
pub enum UserEvent {
    Register(Phase<AuthResponse>),
    Login(Phase<AuthResponse>),
    FetchProfile(Phase<User>),
    UpdateProfile(Phase<User>),
    CheckAuth(Phase<User>),
}

impl UserEvent {
    pub fn operation(&self) -> &'static str {
        match self {
            UserEvent::Register(_) => "register",
            UserEvent::Login(_) => "login",
            UserEvent::FetchProfile(_) => "fetch_profile",
            UserEvent::UpdateProfile(_) => "update_profile",
            UserEvent::CheckAuth(_) => "check_auth",
        }
    }
}

impl UserState {
    /// Anonymous session that still remembers a persisted token
    pub fn restored(token: Option<BearerToken>) -> Self {
        Self {
            token,
            ..Self::default()
        }
    }

    pub fn reduce(&mut self, event: UserEvent) {
        match event {
            UserEvent::Register(phase) | UserEvent::Login(phase) => {
                if let Some(auth) = phase.settle(&mut self.status) {
                    self.sign_in(auth);
                }
            }
            UserEvent::FetchProfile(phase) => {
                if let Some(user) = phase.settle(&mut self.status) {
                    self.load_profile(user);
                }
            }
            UserEvent::UpdateProfile(phase) => {
                if let Some(user) = phase.settle(&mut self.status) {
                    self.name = Some(user.name);
                    self.email = Some(user.email);
                }
            }
            UserEvent::CheckAuth(phase) => {
                let rejected = matches!(phase, Phase::Failed(_));
                if let Some(user) = phase.settle(&mut self.status) {
                    self.load_profile(user);
                }
                if rejected {
                    self.is_authenticated = false;
                    self.token = None;
                }
            }
        }
    }

    /// Back to the anonymous default, token included
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn sign_in(&mut self, auth: AuthResponse) {
        let AuthResponse { user, token } = auth;
        self.is_authenticated = true;
        self.token = Some(token);
        self.id = Some(user.id);
        self.name = Some(user.name);
        self.email = Some(user.email);
        self.level = user.level;
        self.points = user.points;
    }

    fn load_profile(&mut self, user: User) {
        self.is_authenticated = true;
        self.id = Some(user.id);
        self.name = Some(user.name);
        self.email = Some(user.email);
        self.level = user.level;
        self.points = user.points;
        self.achievements = user.achievements;
    }
}
