//! Bearer Credentials
//!
//! The authentication token is an explicit value handed to every network
//! call. Where it lives between sessions is up to the [`TokenStore`].

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Opaque token proving the user is signed in
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(***)")
    }
}

/// Durable home of the token across restarts
pub trait TokenStore {
    fn load(&self) -> Option<BearerToken>;
    fn save(&self, token: &BearerToken);
    fn clear(&self);
}

impl<T: TokenStore + ?Sized> TokenStore for Rc<T> {
    fn load(&self) -> Option<BearerToken> {
        (**self).load()
    }

    fn save(&self, token: &BearerToken) {
        (**self).save(token)
    }

    fn clear(&self) {
        (**self).clear()
    }
}

/// Token store that forgets everything on drop
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<BearerToken>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: BearerToken) -> Self {
        Self {
            token: RefCell::new(Some(token)),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<BearerToken> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &BearerToken) {
        *self.token.borrow_mut() = Some(token.clone());
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}
