//! Browser HTTP plumbing shared by the identity and backend clients.
//!
//! Returns the raw status and body text; each client applies its own error
//! policy on top (the backend surfaces response bodies verbatim, the
//! identity client maps provider error codes).

/// Status code and body text of a completed request.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

#[cfg(target_family = "wasm")]
pub async fn request(
    url: &str,
    method: &str,
    bearer: Option<&str>,
    body: Option<String>,
) -> Result<HttpResponse, String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let opts = web_sys::RequestInit::new();
    opts.set_method(method);
    opts.set_mode(web_sys::RequestMode::Cors);

    if let Some(b) = body.as_deref() {
        opts.set_body(&wasm_bindgen::JsValue::from_str(b));
    }

    let request = web_sys::Request::new_with_str_and_init(url, &opts)
        .map_err(|e| format!("Failed to create request: {:?}", e))?;

    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| format!("Failed to set header: {:?}", e))?;
    }
    if let Some(token) = bearer {
        request
            .headers()
            .set("Authorization", &format!("Bearer {token}"))
            .map_err(|e| format!("Failed to set header: {:?}", e))?;
    }

    let window = web_sys::window().ok_or("No window")?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("Fetch failed: {:?}", e))?;

    let resp: web_sys::Response = resp_value
        .dyn_into()
        .map_err(|_| "Response is not a Response object".to_string())?;

    let text = JsFuture::from(
        resp.text()
            .map_err(|e| format!("Failed to get text: {:?}", e))?,
    )
    .await
    .map_err(|e| format!("Failed to read body: {:?}", e))?;

    Ok(HttpResponse {
        status: resp.status(),
        body: text.as_string().unwrap_or_default(),
    })
}

// Non-WASM stub for type checking
#[cfg(not(target_family = "wasm"))]
pub async fn request(
    url: &str,
    _method: &str,
    _bearer: Option<&str>,
    _body: Option<String>,
) -> Result<HttpResponse, String> {
    Err(format!("HTTP client only available in WASM ({url})"))
}
