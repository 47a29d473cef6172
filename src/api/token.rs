//! In-memory access credential. The token never touches disk and is replaced
//! wholesale on login and on refresh. A generation counter lets the HTTP
//! client tell whether the credential changed while a request was in flight,
//! which is what keeps concurrent 401s down to a single refresh call.

use base64ct::{Base64UrlUnpadded, Encoding};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use std::sync::{PoisonError, RwLock};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

#[derive(Default)]
struct TokenState {
    token: Option<SecretString>,
    generation: u64,
}

/// Credential as seen by one outbound request.
#[derive(Clone)]
pub struct TokenSnapshot {
    pub token: Option<SecretString>,
    pub generation: u64,
}

#[derive(Default)]
pub struct TokenStore {
    state: RwLock<TokenState>,
}

impl TokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current credential and returns the new generation.
    pub fn set(&self, token: SecretString) -> u64 {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.token = Some(token);
        state.generation += 1;
        state.generation
    }

    /// Drops the current credential. Always counts as a credential change, so
    /// requests that were waiting on a refresh see that it was abandoned.
    pub fn clear(&self) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.token = None;
        state.generation += 1;
    }

    #[must_use]
    pub fn snapshot(&self) -> TokenSnapshot {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        TokenSnapshot {
            token: state.token.clone(),
            generation: state.generation,
        }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .generation
    }

    #[must_use]
    pub fn is_present(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .token
            .is_some()
    }

    /// Time left before the credential's `exp` claim, when it is a JWT.
    /// The signature is not verified; this is for display and diagnostics only.
    #[must_use]
    pub fn expires_in(&self) -> Option<Duration> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        let token = state.token.as_ref()?;
        let exp = jwt_expiry(token.expose_secret())?;
        let now = SystemTime::now().duration_since(UNIX_EPOCH).ok()?.as_secs();
        Some(Duration::from_secs(exp.saturating_sub(now)))
    }
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore")
            .field("token", &"***")
            .field("generation", &self.generation())
            .finish()
    }
}

/// Reads the `exp` claim from a JWT payload without verifying it.
pub(crate) fn jwt_expiry(token: &str) -> Option<u64> {
    let mut parts = token.split('.');
    let (_header, payload, _signature) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let decoded = Base64UrlUnpadded::decode_vec(payload.trim_end_matches('=')).ok()?;
    let claims: Value = serde_json::from_slice(&decoded).ok()?;
    claims.get("exp").and_then(Value::as_u64)
}
