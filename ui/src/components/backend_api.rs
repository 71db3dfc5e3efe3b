//! HTTP client for the payment-link backend.

use serde::Serialize;
use std::fmt;

use paylink_common::order::OrderDto;
use paylink_common::profile::{MeResponse, RegisterRequest};

use super::http;

/// Backend origin from compile-time env vars; empty means same-origin.
fn api_url() -> String {
    option_env!("PAYLINK_API_URL")
        .filter(|url| !url.is_empty())
        .unwrap_or("")
        .trim_end_matches('/')
        .to_string()
}

/// Backend call failures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// Non-success HTTP status, with the response body when one was sent.
    Http { status: u16, body: String },
    Network(String),
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http { status: _, body } if !body.is_empty() => write!(f, "{body}"),
            ApiError::Http { status, .. } => write!(f, "backend error {status}"),
            ApiError::Network(msg) | ApiError::Parse(msg) => write!(f, "{msg}"),
        }
    }
}

/// Body of `POST /api/orders`.
#[derive(Clone, Debug, Serialize)]
pub struct CreateOrderRequest {
    pub amount: f64,
    pub description: String,
    pub email: String,
    pub currency: String,
    pub business_id: String,
}

pub struct BackendApi {
    base_url: String,
}

impl BackendApi {
    pub fn from_env() -> Self {
        Self {
            base_url: api_url(),
        }
    }

    /// Profile + businesses of the signed-in user.
    pub async fn fetch_me(&self, token: &str) -> Result<MeResponse, ApiError> {
        let body = self.get("/api/user", Some(token)).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Parse(format!("Parse profile: {e}")))
    }

    /// Create a backend account. Unauthenticated: this runs before the
    /// very first sign-in.
    pub async fn register_account(&self, req: &RegisterRequest) -> Result<(), ApiError> {
        let body = serde_json::to_string(req).map_err(|e| ApiError::Parse(e.to_string()))?;
        self.post("/api/user", None, body).await?;
        Ok(())
    }

    /// Orders of one business, in the backend's order.
    pub async fn list_orders(
        &self,
        token: &str,
        business_id: &str,
    ) -> Result<Vec<OrderDto>, ApiError> {
        let path = format!("/api/orders?business_id={}", urlencoding::encode(business_id));
        let body = self.get(&path, Some(token)).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Parse(format!("Parse orders: {e}")))
    }

    /// Create an order; returns the backend's view of it.
    pub async fn create_order(
        &self,
        token: &str,
        req: &CreateOrderRequest,
    ) -> Result<OrderDto, ApiError> {
        let body = serde_json::to_string(req).map_err(|e| ApiError::Parse(e.to_string()))?;
        let resp = self.post("/api/orders", Some(token), body).await?;
        serde_json::from_str(&resp)
            .map_err(|e| ApiError::Parse(format!("Parse created order: {e}")))
    }

    async fn get(&self, path: &str, bearer: Option<&str>) -> Result<String, ApiError> {
        self.send(path, "GET", bearer, None).await
    }

    async fn post(
        &self,
        path: &str,
        bearer: Option<&str>,
        body: String,
    ) -> Result<String, ApiError> {
        self.send(path, "POST", bearer, Some(body)).await
    }

    async fn send(
        &self,
        path: &str,
        method: &str,
        bearer: Option<&str>,
        body: Option<String>,
    ) -> Result<String, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let resp = http::request(&url, method, bearer, body)
            .await
            .map_err(ApiError::Network)?;
        if !(200..300).contains(&resp.status) {
            return Err(ApiError::Http {
                status: resp.status,
                body: resp.body,
            });
        }
        Ok(resp.body)
    }
}
