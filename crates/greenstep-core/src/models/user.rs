//! User Records
//!
//! Profile and gamification fields as the server reports them, plus the
//! request bodies of the user endpoints.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::entity::Entity;
use crate::token::BearerToken;

/// Signed-in user's profile (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default = "first_level")]
    pub level: u32,
    #[serde(default)]
    pub points: u32,
    /// Ids of unlocked achievements
    #[serde(default)]
    pub achievements: BTreeSet<String>,
}

fn first_level() -> u32 {
    1
}

impl Entity for User {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Body of `POST /users/login`
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of `POST /users/register`
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Response of login and register
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: BearerToken,
}

/// Response of `GET /users/profile`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProfileEnvelope {
    pub user: User,
}

/// Body of `PATCH /users/profile`. Unset fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}
