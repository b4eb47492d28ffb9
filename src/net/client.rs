//! Outbound request gateway with transparent refresh-on-401.
//!
//! [`send_with_refresh`] wraps an arbitrary outbound call: it attaches
//! the current access credential, and on an authorization failure
//! performs exactly one session refresh followed by exactly one retry,
//! flagged explicitly via [`Attempt::is_retry`]. A second authorization
//! failure (or a failed refresh) is terminal: the credential store is
//! cleared and the caller gets [`ApiError::SessionExpired`]. The bound
//! is structural, never recursive, so refresh storms cost at most one
//! extra round trip per call.
//!
//! The wrapper is generic over the call and refresh effects so the
//! retry protocol is exercised by native tests; the typed helpers at
//! the bottom plug in real `gloo-net` requests in the browser.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::future::Future;

use serde::de::DeserializeOwned;

use crate::net::error::ApiError;
use crate::session::store;

/// HTTP status signalling an authorization failure.
pub const UNAUTHORIZED: u16 = 401;

/// One attempt of an outbound call.
#[derive(Clone, Debug, Default)]
pub struct Attempt {
    /// Access credential to attach, if the caller did not opt out.
    pub bearer: Option<String>,
    /// True only for the single retry issued after a refresh.
    pub is_retry: bool,
}

/// Raw response as seen by the gateway.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issue `issue`, refreshing the session at most once on authorization
/// failure. `with_auth = false` opts out of both the bearer header and
/// the refresh-and-retry cycle.
pub async fn send_with_refresh<C, CFut, R, RFut>(
    mut issue: C,
    refresh: R,
    with_auth: bool,
) -> Result<RawResponse, ApiError>
where
    C: FnMut(Attempt) -> CFut,
    CFut: Future<Output = Result<RawResponse, String>>,
    R: FnOnce() -> RFut,
    RFut: Future<Output = Result<(), ApiError>>,
{
    let bearer = if with_auth { store::access() } else { None };
    let first = issue(Attempt { bearer, is_retry: false })
        .await
        .map_err(ApiError::Network)?;

    if first.status != UNAUTHORIZED || !with_auth {
        return into_result(first);
    }

    if refresh().await.is_err() {
        leptos::logging::warn!("session refresh failed; ending session");
        store::clear();
        return Err(ApiError::SessionExpired);
    }

    let retry = issue(Attempt {
        bearer: store::access(),
        is_retry: true,
    })
    .await
    .map_err(ApiError::Network)?;

    if retry.status == UNAUTHORIZED {
        leptos::logging::warn!("authorization failed after refresh; ending session");
        store::clear();
        return Err(ApiError::SessionExpired);
    }

    into_result(retry)
}

fn into_result(response: RawResponse) -> Result<RawResponse, ApiError> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Validation(error_message(&response)))
    }
}

/// Human-readable message from an error body: the service reports either
/// `detail` or `message`; fall back to the status code.
pub fn error_message(response: &RawResponse) -> String {
    serde_json::from_str::<serde_json::Value>(&response.body)
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .and_then(|d| d.as_str().map(ToOwned::to_owned))
                .or_else(|| {
                    value
                        .get("message")
                        .and_then(|m| m.as_str().map(ToOwned::to_owned))
                })
        })
        .unwrap_or_else(|| format!("request failed with status {}", response.status))
}

/// Base address of the credential/agent API. Overridable at build time.
pub fn api_base() -> &'static str {
    option_env!("AGENTDECK_API_BASE").unwrap_or("http://localhost:8000")
}

/// Absolute URL for an API path. Already-absolute paths pass through.
pub fn api_url(path: &str) -> String {
    if path.starts_with("http") {
        path.to_owned()
    } else {
        format!("{}{path}", api_base())
    }
}

/// Method verbs supported by the typed helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[cfg(feature = "hydrate")]
pub(crate) async fn issue_http(
    method: Method,
    url: &str,
    body: Option<&serde_json::Value>,
    bearer: Option<&str>,
) -> Result<RawResponse, String> {
    use gloo_net::http::Request;

    let builder = match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Delete => Request::delete(url),
    };
    let builder = match bearer {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    };
    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .json(json)
            .map_err(|e| e.to_string())?,
        None => builder.build().map_err(|e| e.to_string())?,
    };

    let response = request.send().await.map_err(|e| e.to_string())?;
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    Ok(RawResponse { status, body: text })
}

/// Issue an authorized JSON request and decode the response body.
#[cfg(feature = "hydrate")]
pub async fn request<T: DeserializeOwned>(
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
    with_auth: bool,
) -> Result<T, ApiError> {
    let response = send_raw(method, path, body, with_auth).await?;
    serde_json::from_str(&response.body)
        .map_err(|e| ApiError::Network(format!("invalid response body: {e}")))
}

/// Issue an authorized request, discarding the response body.
#[cfg(feature = "hydrate")]
pub async fn send(
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
    with_auth: bool,
) -> Result<(), ApiError> {
    send_raw(method, path, body, with_auth).await.map(|_| ())
}

#[cfg(feature = "hydrate")]
async fn send_raw(
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
    with_auth: bool,
) -> Result<RawResponse, ApiError> {
    let url = api_url(path);
    send_with_refresh(
        |attempt| {
            let url = url.clone();
            let body = body.clone();
            async move { issue_http(method, &url, body.as_ref(), attempt.bearer.as_deref()).await }
        },
        crate::session::service::refresh,
        with_auth,
    )
    .await
}

// Native builds have no browser fetch; callers see a transport failure.

#[cfg(not(feature = "hydrate"))]
pub async fn request<T: DeserializeOwned>(
    _method: Method,
    _path: &str,
    _body: Option<serde_json::Value>,
    _with_auth: bool,
) -> Result<T, ApiError> {
    Err(ApiError::Network("not available off-browser".to_owned()))
}

#[cfg(not(feature = "hydrate"))]
pub async fn send(
    _method: Method,
    _path: &str,
    _body: Option<serde_json::Value>,
    _with_auth: bool,
) -> Result<(), ApiError> {
    Err(ApiError::Network("not available off-browser".to_owned()))
}
