//! Agent configuration API.
//!
//! CRUD over the authorized request gateway: every call here attaches
//! the access credential and inherits the transparent refresh-on-401
//! protocol. A [`ApiError::SessionExpired`] result means the session is
//! already torn down and the screen should redirect to sign-in.

#[cfg(test)]
#[path = "agents_test.rs"]
mod agents_test;

use crate::net::client::{self, Method};
use crate::net::error::ApiError;
use crate::net::types::{AgentConfig, AgentDraft};

fn item_path(id: &str) -> String {
    format!("/agents/{}", urlencoding::encode(id))
}

pub async fn list() -> Result<Vec<AgentConfig>, ApiError> {
    client::request(Method::Get, "/agents", None, true).await
}

pub async fn get(id: &str) -> Result<AgentConfig, ApiError> {
    client::request(Method::Get, &item_path(id), None, true).await
}

pub async fn create(draft: &AgentDraft) -> Result<AgentConfig, ApiError> {
    let body = serde_json::to_value(draft).map_err(|e| ApiError::Network(e.to_string()))?;
    client::request(Method::Post, "/agents", Some(body), true).await
}

pub async fn update(id: &str, draft: &AgentDraft) -> Result<AgentConfig, ApiError> {
    let body = serde_json::to_value(draft).map_err(|e| ApiError::Network(e.to_string()))?;
    client::request(Method::Put, &item_path(id), Some(body), true).await
}

pub async fn remove(id: &str) -> Result<(), ApiError> {
    client::send(Method::Delete, &item_path(id), None, true).await
}
