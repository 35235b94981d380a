//! Bearer token registry.
//!
//! Maps opaque high-entropy tokens to user ids. A token is issued on login
//! and on registration, and a user may hold several at once (one per
//! device). Tokens carry no expiry; only an explicit logout revokes the
//! token supplied with that request. Nothing here survives a restart.

use std::{collections::HashMap, sync::Arc};

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::RngCore;
use tokio::sync::RwLock;

/// Shared token-to-user mapping. Each insert/lookup/remove takes the lock
/// once, so concurrent requests observe whole operations only.
#[derive(Clone, Default)]
pub struct TokenRegistry {
    tokens: Arc<RwLock<HashMap<String, i32>>>,
}

impl TokenRegistry {
    /// Generates a fresh token and records it for `user_id`.
    pub async fn issue(&self, user_id: i32) -> String {
        let token = generate_token();

        self.tokens.write().await.insert(token.clone(), user_id);

        token
    }

    /// Looks up the user behind a presented token.
    pub async fn resolve(&self, token: &str) -> Option<i32> {
        self.tokens.read().await.get(token).copied()
    }

    /// Removes a single token, leaving the user's other devices logged in.
    /// Returns whether the token was registered.
    pub async fn revoke(&self, token: &str) -> bool {
        self.tokens.write().await.remove(token).is_some()
    }
}

fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);

    URL_SAFE_NO_PAD.encode(bytes)
}
