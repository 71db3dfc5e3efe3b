//! HTTP client for the external identity provider.
//!
//! The provider is an opaque token service: password sign-in, federated
//! (Google) sign-in via a provider-hosted redirect, and refresh-token
//! exchange. Provider origin and API key come from compile-time env vars,
//! defaulting to a local auth emulator.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::http;

const DEFAULT_AUTH_URL: &str = "http://localhost:9099";

/// Identity provider origin from compile-time env vars.
fn auth_url() -> String {
    option_env!("PAYLINK_AUTH_URL")
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_AUTH_URL)
        .trim_end_matches('/')
        .to_string()
}

fn api_key() -> String {
    option_env!("PAYLINK_AUTH_KEY")
        .filter(|key| !key.is_empty())
        .unwrap_or("dev")
        .to_string()
}

// ─── Request/Response types ──────────────────────────────────────────────────

#[derive(Serialize)]
struct PasswordSignInRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct FederatedSignInRequest<'a> {
    provider: &'a str,
    provider_token: &'a str,
    request_uri: &'a str,
}

#[derive(Serialize)]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
}

/// Tokens minted by the provider for one session.
#[derive(Clone, Debug, Deserialize)]
pub struct SessionTokens {
    pub user_id: String,
    #[serde(default)]
    pub email: Option<String>,
    pub id_token: String,
    pub refresh_token: String,
    /// Seconds until `id_token` expires.
    pub expires_in: u64,
}

#[derive(Deserialize)]
struct ProviderError {
    error: ProviderErrorBody,
}

#[derive(Deserialize)]
struct ProviderErrorBody {
    message: String,
}

/// Identity failures surfaced to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// The provider rejected the request (bad credentials, disabled
    /// account, ...).
    Provider(String),
    /// The request never resolved to a provider answer.
    Network(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Provider(msg) | AuthError::Network(msg) => write!(f, "{msg}"),
        }
    }
}

/// Human-readable message for a provider error code.
fn human_message(code: &str) -> String {
    match code {
        "INVALID_CREDENTIALS" | "INVALID_PASSWORD" | "EMAIL_NOT_FOUND" => {
            "Invalid email or password".to_string()
        }
        "USER_DISABLED" => "This account has been disabled".to_string(),
        "TOO_MANY_ATTEMPTS" => "Too many attempts, try again later".to_string(),
        other => other.to_string(),
    }
}

// ─── Client ──────────────────────────────────────────────────────────────────

pub struct IdentityClient {
    base_url: String,
    api_key: String,
}

impl IdentityClient {
    pub fn from_env() -> Self {
        Self {
            base_url: auth_url(),
            api_key: api_key(),
        }
    }

    /// Email/password sign-in.
    pub async fn sign_in_with_email(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SessionTokens, AuthError> {
        self.token_request("/v1/session", &PasswordSignInRequest { email, password })
            .await
    }

    /// Exchange the credential left by the provider-hosted Google flow for
    /// a session.
    pub async fn sign_in_with_google(
        &self,
        provider_token: &str,
        request_uri: &str,
    ) -> Result<SessionTokens, AuthError> {
        self.token_request(
            "/v1/session/federated",
            &FederatedSignInRequest {
                provider: "google.com",
                provider_token,
                request_uri,
            },
        )
        .await
    }

    /// Trade a refresh token for a fresh id token.
    pub async fn refresh(&self, refresh_token: &str) -> Result<SessionTokens, AuthError> {
        self.token_request("/v1/session/refresh", &RefreshRequest { refresh_token })
            .await
    }

    /// Provider-hosted Google sign-in page. The provider redirects back to
    /// `redirect_uri` with `#provider_token=...` in the fragment.
    pub fn google_authorize_url(&self, redirect_uri: &str) -> String {
        format!(
            "{}/v1/oauth/google/authorize?key={}&redirect_uri={}",
            self.base_url,
            self.api_key,
            urlencoding::encode(redirect_uri)
        )
    }

    async fn token_request<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<SessionTokens, AuthError> {
        let body = serde_json::to_string(body).map_err(|e| AuthError::Network(e.to_string()))?;
        let url = format!("{}{}?key={}", self.base_url, path, self.api_key);
        let resp = http::request(&url, "POST", None, Some(body))
            .await
            .map_err(AuthError::Network)?;
        if !(200..300).contains(&resp.status) {
            let code = serde_json::from_str::<ProviderError>(&resp.body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| format!("auth error {}", resp.status));
            return Err(AuthError::Provider(human_message(&code)));
        }
        serde_json::from_str(&resp.body)
            .map_err(|e| AuthError::Network(format!("Parse session response: {e}")))
    }
}

// ─── Redirect-flow helpers ───────────────────────────────────────────────────

/// Begin the provider-hosted Google flow by leaving for the authorize page.
pub fn start_google_sign_in() {
    #[cfg(target_family = "wasm")]
    {
        let url = IdentityClient::from_env().google_authorize_url(&page_url());
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().assign(&url) {
                tracing::error!("failed to open provider sign-in: {e:?}");
            }
        }
    }
}

/// Current page URL without any fragment; doubles as the OAuth redirect
/// target.
pub fn page_url() -> String {
    #[cfg(target_family = "wasm")]
    {
        web_sys::window()
            .and_then(|w| w.location().href().ok())
            .and_then(|href| href.split('#').next().map(str::to_string))
            .unwrap_or_default()
    }
    #[cfg(not(target_family = "wasm"))]
    {
        String::new()
    }
}

/// Credential left in the URL fragment by the provider redirect. The
/// fragment is cleared so a reload does not replay the sign-in.
pub fn take_provider_token() -> Option<String> {
    #[cfg(target_family = "wasm")]
    {
        let window = web_sys::window()?;
        let hash = window.location().hash().ok()?;
        let fragment = hash.strip_prefix('#').unwrap_or(&hash);
        if fragment.is_empty() {
            return None;
        }
        let params = web_sys::UrlSearchParams::new_with_str(fragment).ok()?;
        let token = params.get("provider_token")?;
        let _ = window.location().set_hash("");
        Some(token)
    }
    #[cfg(not(target_family = "wasm"))]
    {
        None
    }
}
