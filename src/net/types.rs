//! Wire types for the credential service and the agent configuration API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Bearer credential pair as issued by the service.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

/// Generic acknowledgement body (`{ok, message?}`).
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Ack {
    pub ok: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Outcome of `GET /auth/verify`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct VerifyEmailOutcome {
    pub verified: bool,
    pub message: String,
}

/// Body of `GET /auth/google/start`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct AuthUrl {
    pub auth_url: String,
}

/// A workspace the user belongs to. Roles are read-only data here; this
/// client enforces no permission policy.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Membership {
    pub workspace_id: String,
    pub workspace_name: String,
    pub role: String,
    pub joined_at: String,
}

/// User profile snapshot from `GET /auth/me`. Fetched fresh after every
/// credential change, never patched piecemeal.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Profile {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub is_subscribed: bool,
    #[serde(default)]
    pub memberships: Vec<Membership>,
}

/// Body of `POST /auth/signup`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invite: Option<String>,
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of the email-only operations (resend verification, forgot
/// password).
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct EmailRequest {
    pub email: String,
}

/// Body of `POST /auth/password/reset`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

/// A stored conversational agent configuration.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct AgentConfig {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub model: String,
    #[serde(default)]
    pub system_prompt: String,
    pub is_active: bool,
}

/// Fields the user edits when creating or updating an agent.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct AgentDraft {
    pub name: String,
    pub description: String,
    pub model: String,
    pub system_prompt: String,
}
