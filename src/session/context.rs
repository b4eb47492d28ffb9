//! Tab-wide session state and its orchestration.
//!
//! One `RwSignal<SessionState>` owns the reactive session for the whole
//! tab. The lifecycle is bootstrapping → anonymous | authenticated, and
//! authenticated → anonymous on logout or terminal refresh failure;
//! nothing ever re-enters bootstrapping. All mutation goes through the
//! named operations below — the only exception is the pair of hydration
//! setters used by the social-login callback.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::{Ack, Profile, SignupRequest};
use crate::session::{gate, service, store};
use crate::util::nav;

/// Reactive session state shared by every screen in the tab.
///
/// The credential fields are an in-memory cache for synchronous reads
/// during a render cycle; the credential store remains the owner.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<Profile>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    /// True only during the one-time bootstrap; never set again.
    pub is_loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            access_token: None,
            refresh_token: None,
            is_loading: true,
        }
    }
}

impl SessionState {
    /// Derived, never stored independently: authenticated means a user
    /// profile plus both credentials.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.access_token.is_some() && self.refresh_token.is_some()
    }

    /// Cache the current credential pair for synchronous reads.
    pub fn adopt_tokens(&mut self, access: Option<String>, refresh: Option<String>) {
        self.access_token = access;
        self.refresh_token = refresh;
    }

    /// Apply the outcome of a profile fetch. `None` means the fetch and
    /// its single refresh retry both failed: degrade to anonymous and
    /// drop the stored pair.
    pub fn resolve_profile(&mut self, profile: Option<Profile>) {
        match profile {
            Some(user) => {
                self.user = Some(user);
                self.adopt_tokens(store::access(), store::refresh_token());
            }
            None => {
                self.reset();
                store::clear();
            }
        }
    }

    /// Back to anonymous. Leaves `is_loading` untouched: there is no
    /// path back into bootstrapping.
    pub fn reset(&mut self) {
        self.user = None;
        self.access_token = None;
        self.refresh_token = None;
    }
}

pub type Session = RwSignal<SessionState>;

/// The session signal provided by [`crate::app::App`].
pub fn use_session() -> Session {
    expect_context::<Session>()
}

/// One-time startup: resolve stored credentials (if any) against the
/// backend, then leave the bootstrapping state for good.
pub async fn bootstrap(session: Session) {
    if !store::has_pair() {
        session.update(|s| s.is_loading = false);
        return;
    }
    session.update(|s| s.adopt_tokens(store::access(), store::refresh_token()));
    let profile = service::fetch_profile().await;
    session.update(|s| {
        s.resolve_profile(profile);
        s.is_loading = false;
    });
}

/// Password login followed by a fresh profile fetch. State is mutated
/// only when both steps succeed, so a failed login leaves any prior
/// state untouched.
pub async fn login(session: Session, email: &str, password: &str) -> Result<(), ApiError> {
    service::login(email, password).await?;
    let profile = service::fetch_profile().await;
    if profile.is_none() {
        store::clear();
        return Err(ApiError::Network(
            "could not load profile after sign-in".to_owned(),
        ));
    }
    session.update(|s| s.resolve_profile(profile));
    Ok(())
}

/// Create an account. Issues no credentials; the user signs in after
/// verifying their email.
pub async fn signup(request: &SignupRequest) -> Result<Ack, ApiError> {
    service::signup(request).await
}

/// Synchronous, unconditional logout: local state first, then the
/// best-effort server revoke, then a hard navigation to sign-in. The UI
/// can never observe a stale authenticated state, even if the revoke
/// call hangs.
pub fn logout(session: Session) {
    let refresh_token = store::refresh_token();
    session.update(SessionState::reset);
    store::clear();
    spawn_revoke(refresh_token);
    nav::replace(gate::LOGIN_ROUTE);
}

#[cfg(feature = "hydrate")]
fn spawn_revoke(refresh_token: Option<String>) {
    leptos::task::spawn_local(async move {
        service::logout_notify(refresh_token).await;
    });
}

#[cfg(not(feature = "hydrate"))]
fn spawn_revoke(_refresh_token: Option<String>) {}

/// Re-fetch the profile snapshot after a credential change. Fail-soft: a
/// failed fetch degrades the session to anonymous.
pub async fn refresh_profile(session: Session) {
    if !store::has_pair() {
        session.update(|s| {
            s.reset();
        });
        return;
    }
    session.update(|s| s.adopt_tokens(store::access(), store::refresh_token()));
    let profile = service::fetch_profile().await;
    session.update(|s| s.resolve_profile(profile));
}

/// Start the social-login redirect flow: fetch the provider URL and
/// leave the app.
pub async fn login_with_google() -> Result<(), ApiError> {
    let auth_url = service::social_auth_url().await?;
    nav::assign(&auth_url);
    Ok(())
}

/// Hydration setter for the social-login callback, which already holds a
/// fresh pair and must not wait for a second profile round trip.
/// Ordinary screens go through [`login`] / [`refresh_profile`] instead.
pub fn hydrate_tokens(session: Session, access: &str, refresh: &str) {
    session.update(|s| s.adopt_tokens(Some(access.to_owned()), Some(refresh.to_owned())));
}

/// Companion hydration setter: install the profile fetched by the
/// callback and end any residual bootstrap hold.
pub fn hydrate_user(session: Session, user: Profile) {
    session.update(|s| {
        s.user = Some(user);
        s.is_loading = false;
    });
}
