//! Session store shared across all components.
//!
//! Replaces a module-global token cache with a `Signal` provided as root
//! context: every mutation flows through the signal, so components see
//! session changes reactively, and the bearer token is re-read right
//! before each network call.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use super::identity_client::{IdentityClient, SessionTokens};

/// Seconds of remaining validity under which a cached token is refreshed
/// instead of reused.
const TOKEN_EXPIRY_MARGIN_SECS: i64 = 60;

/// The authenticated principal tracked by the identity provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub user_id: String,
    pub email: Option<String>,
    pub id_token: String,
    pub refresh_token: String,
    /// Unix seconds after which `id_token` is no longer valid.
    pub token_expires_at: i64,
}

impl SessionUser {
    pub fn from_tokens(tokens: SessionTokens) -> Self {
        Self {
            user_id: tokens.user_id,
            email: tokens.email,
            id_token: tokens.id_token,
            refresh_token: tokens.refresh_token,
            token_expires_at: chrono::Utc::now().timestamp() + tokens.expires_in as i64,
        }
    }

    fn token_is_fresh(&self) -> bool {
        chrono::Utc::now().timestamp() + TOKEN_EXPIRY_MARGIN_SECS < self.token_expires_at
    }
}

/// App-wide session state: unresolved until the persisted session has been
/// restored, then either anonymous or authenticated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<SessionUser>,
    pub resolved: bool,
}

/// The session store provided as context at the top of the app.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Restore the persisted provider session at startup, refreshing a stale
/// token before publishing it.
pub async fn restore_session(mut session: Signal<SessionState>) {
    let user = match load_stored() {
        Some(user) if user.token_is_fresh() => Some(user),
        Some(user) => match IdentityClient::from_env().refresh(&user.refresh_token).await {
            Ok(tokens) => {
                let fresh = SessionUser::from_tokens(tokens);
                store(&fresh);
                Some(fresh)
            }
            Err(e) => {
                tracing::warn!("session restore failed: {e}");
                clear_stored();
                None
            }
        },
        None => None,
    };
    session.set(SessionState {
        user,
        resolved: true,
    });
}

/// Install freshly minted tokens as the active session and persist them.
pub fn establish_session(session: &mut Signal<SessionState>, tokens: SessionTokens) {
    let user = SessionUser::from_tokens(tokens);
    store(&user);
    session.set(SessionState {
        user: Some(user),
        resolved: true,
    });
}

/// Sign out: clear the persisted session and the store.
pub fn clear_session(session: &mut Signal<SessionState>) {
    clear_stored();
    session.set(SessionState {
        user: None,
        resolved: true,
    });
}

/// Bearer token for the current session, refreshed through the identity
/// provider when the cached one is close to expiry. `None` when anonymous
/// or when the refresh fails.
pub async fn current_id_token(mut session: Signal<SessionState>) -> Option<String> {
    let user = session.read().user.clone()?;
    if user.token_is_fresh() {
        return Some(user.id_token);
    }
    match IdentityClient::from_env().refresh(&user.refresh_token).await {
        Ok(tokens) => {
            let fresh = SessionUser::from_tokens(tokens);
            store(&fresh);
            let token = fresh.id_token.clone();
            // A sign-in/out may have raced the refresh; publish only if the
            // session still belongs to the same user.
            let mut state = session.write();
            if state.user.as_ref().map(|u| u.user_id.as_str()) == Some(fresh.user_id.as_str()) {
                state.user = Some(fresh);
            }
            Some(token)
        }
        Err(e) => {
            tracing::warn!("token refresh failed: {e}");
            None
        }
    }
}

// ─── Persistence ─────────────────────────────────────────────────────────────

#[cfg(target_family = "wasm")]
const STORAGE_KEY: &str = "paylink.session";

#[cfg(target_family = "wasm")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(target_family = "wasm")]
fn load_stored() -> Option<SessionUser> {
    let raw = local_storage()?.get_item(STORAGE_KEY).ok().flatten()?;
    serde_json::from_str(&raw).ok()
}

#[cfg(target_family = "wasm")]
fn store(user: &SessionUser) {
    if let (Some(storage), Ok(raw)) = (local_storage(), serde_json::to_string(user)) {
        let _ = storage.set_item(STORAGE_KEY, &raw);
    }
}

#[cfg(target_family = "wasm")]
fn clear_stored() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(STORAGE_KEY);
    }
}

// Non-WASM stubs for type checking
#[cfg(not(target_family = "wasm"))]
fn load_stored() -> Option<SessionUser> {
    None
}

#[cfg(not(target_family = "wasm"))]
fn store(_user: &SessionUser) {}

#[cfg(not(target_family = "wasm"))]
fn clear_stored() {}
