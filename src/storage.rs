//! Token persistence in `window.localStorage`

use greenstep_core::config::TOKEN_STORAGE_KEY;
use greenstep_core::{BearerToken, TokenStore};
use tracing::warn;
use web_sys::Storage;

/// Keeps the bearer token in local storage so a reload stays signed in.
/// Storage failures are logged; the session then just isn't persisted.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTokenStore;

impl LocalTokenStore {
    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<BearerToken> {
        Self::storage()?
            .get_item(TOKEN_STORAGE_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
            .map(BearerToken::new)
    }

    fn save(&self, token: &BearerToken) {
        let saved = Self::storage().map(|storage| storage.set_item(TOKEN_STORAGE_KEY, token.as_str()));
        if !matches!(saved, Some(Ok(()))) {
            warn!("could not persist token");
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            if storage.remove_item(TOKEN_STORAGE_KEY).is_err() {
                warn!("could not remove persisted token");
            }
        }
    }
}
