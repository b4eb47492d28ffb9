//! Credential-issuing network operations.
//!
//! Stateless request/response calls against the external credential
//! service. `login`, `exchange_social_code`, and `refresh` write the
//! returned token pair into the credential store as their sole side
//! effect beyond returning data; callers never write credentials
//! themselves. These endpoints are deliberately *not* routed through the
//! request gateway: the refresh protocol must never recurse into itself.
//!
//! Real HTTP (via `gloo-net`) runs only in the browser; off-browser
//! builds return inert failures, mirroring "no session" everywhere.

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;

use std::future::Future;

use crate::net::error::ApiError;
use crate::net::types::{Ack, Profile, SignupRequest, TokenPair, VerifyEmailOutcome};
use crate::session::store;

#[cfg(feature = "hydrate")]
use crate::net::client::{self, Method};
#[cfg(feature = "hydrate")]
use crate::net::types::{AuthUrl, EmailRequest, LoginRequest, ResetPasswordRequest};

#[cfg(not(feature = "hydrate"))]
fn off_browser() -> ApiError {
    ApiError::Network("not available off-browser".to_owned())
}

/// One plain (non-gateway) JSON call. Failures surface as
/// [`ApiError::Validation`] with the service's `detail`/`message` text.
#[cfg(feature = "hydrate")]
async fn call<T: serde::de::DeserializeOwned>(
    method: Method,
    path: &str,
    body: Option<&serde_json::Value>,
    bearer: Option<&str>,
) -> Result<T, ApiError> {
    let response = client::issue_http(method, &client::api_url(path), body, bearer)
        .await
        .map_err(ApiError::Network)?;
    if !response.is_success() {
        return Err(ApiError::Validation(client::error_message(&response)));
    }
    serde_json::from_str(&response.body)
        .map_err(|e| ApiError::Network(format!("invalid response body: {e}")))
}

#[cfg(feature = "hydrate")]
fn json_body<B: serde::Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Network(e.to_string()))
}

/// `POST /auth/signup`.
pub async fn signup(request: &SignupRequest) -> Result<Ack, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = json_body(request)?;
        call(Method::Post, "/auth/signup", Some(&body), None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(off_browser())
    }
}

/// `POST /auth/login`. Stores the returned pair on success.
pub async fn login(email: &str, password: &str) -> Result<TokenPair, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = json_body(&LoginRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        })?;
        let pair: TokenPair = call(Method::Post, "/auth/login", Some(&body), None).await?;
        store::store(&pair.access_token, &pair.refresh_token);
        Ok(pair)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(off_browser())
    }
}

/// `GET /auth/verify?token=`.
pub async fn verify_email(token: &str) -> Result<VerifyEmailOutcome, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let path = format!("/auth/verify?token={}", urlencoding::encode(token));
        call(Method::Get, &path, None, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(off_browser())
    }
}

/// `POST /auth/verify/resend`.
pub async fn resend_verification(email: &str) -> Result<Ack, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = json_body(&EmailRequest {
            email: email.to_owned(),
        })?;
        call(Method::Post, "/auth/verify/resend", Some(&body), None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(off_browser())
    }
}

/// `POST /auth/password/forgot`.
pub async fn forgot_password(email: &str) -> Result<Ack, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = json_body(&EmailRequest {
            email: email.to_owned(),
        })?;
        call(Method::Post, "/auth/password/forgot", Some(&body), None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(off_browser())
    }
}

/// `POST /auth/password/reset`.
pub async fn reset_password(token: &str, new_password: &str) -> Result<Ack, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = json_body(&ResetPasswordRequest {
            token: token.to_owned(),
            new_password: new_password.to_owned(),
        })?;
        call(Method::Post, "/auth/password/reset", Some(&body), None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, new_password);
        Err(off_browser())
    }
}

/// `POST /auth/refresh` (form-encoded refresh token). Stores the new
/// pair on success; a rejection clears the store and is terminal.
pub async fn refresh() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let Some(token) = store::refresh_token() else {
            return Err(ApiError::SessionExpired);
        };
        let body = format!("refresh_token={}", urlencoding::encode(&token));
        let request = gloo_net::http::Request::post(&client::api_url("/auth/refresh"))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            store::clear();
            return Err(ApiError::SessionExpired);
        }
        let pair: TokenPair = response
            .json()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        store::store(&pair.access_token, &pair.refresh_token);
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(off_browser())
    }
}

/// `POST /auth/logout?refresh_token=`. Best-effort server revoke: the
/// response and any failure are discarded. The caller has already
/// cleared local credentials by the time this runs.
pub async fn logout_notify(refresh_token: Option<String>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(token) = refresh_token else { return };
        let url = client::api_url(&format!(
            "/auth/logout?refresh_token={}",
            urlencoding::encode(&token)
        ));
        let _ = gloo_net::http::Request::post(&url).send().await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = refresh_token;
    }
}

/// Result of one profile fetch attempt, as seen by the fail-soft
/// protocol.
#[derive(Clone, Debug, PartialEq)]
pub enum ProfileAttempt {
    Fetched(Profile),
    Unauthorized,
    Failed,
}

/// Fail-soft profile protocol: on authorization failure, refresh once
/// and retry once; any failure on the retry path clears the credential
/// store and resolves to `None`. Never errors, so callers degrade to
/// "logged out" instead of crashing.
pub(crate) async fn profile_with<F, FFut, R, RFut>(mut fetch: F, refresh: R) -> Option<Profile>
where
    F: FnMut(Option<String>) -> FFut,
    FFut: Future<Output = ProfileAttempt>,
    R: FnOnce() -> RFut,
    RFut: Future<Output = Result<(), ApiError>>,
{
    match fetch(store::access()).await {
        ProfileAttempt::Fetched(profile) => Some(profile),
        ProfileAttempt::Failed => None,
        ProfileAttempt::Unauthorized => {
            if refresh().await.is_err() {
                leptos::logging::warn!("profile refresh failed; dropping session");
                store::clear();
                return None;
            }
            match fetch(store::access()).await {
                ProfileAttempt::Fetched(profile) => Some(profile),
                _ => {
                    leptos::logging::warn!("profile retry failed; dropping session");
                    store::clear();
                    None
                }
            }
        }
    }
}

/// `GET /auth/me` with the fail-soft single-refresh contract.
pub async fn fetch_profile() -> Option<Profile> {
    #[cfg(feature = "hydrate")]
    {
        profile_with(
            |bearer| async move {
                let url = client::api_url("/auth/me");
                match client::issue_http(Method::Get, &url, None, bearer.as_deref()).await {
                    Ok(response) if response.status == client::UNAUTHORIZED => {
                        ProfileAttempt::Unauthorized
                    }
                    Ok(response) if response.is_success() => {
                        match serde_json::from_str(&response.body) {
                            Ok(profile) => ProfileAttempt::Fetched(profile),
                            Err(_) => ProfileAttempt::Failed,
                        }
                    }
                    _ => ProfileAttempt::Failed,
                }
            },
            refresh,
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// `GET /auth/google/start`.
pub async fn social_auth_url() -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response: AuthUrl = call(Method::Get, "/auth/google/start", None, None).await?;
        Ok(response.auth_url)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(off_browser())
    }
}

/// `POST /auth/google/callback?code=`. Stores the returned pair.
pub async fn exchange_social_code(code: &str) -> Result<TokenPair, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let path = format!("/auth/google/callback?code={}", urlencoding::encode(code));
        let pair: TokenPair = call(Method::Post, &path, None, None).await?;
        store::store(&pair.access_token, &pair.refresh_token);
        Ok(pair)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = code;
        Err(off_browser())
    }
}
