//! Google sign-in callback.
//!
//! The provider redirects here with a one-time `code`. The exchange must
//! happen exactly once even if the effect fires twice for the same
//! navigation, so all observable work sits behind an [`ExchangeGuard`]
//! claim. The guard is released on failure so a fresh callback can retry.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::session::context::use_session;
use crate::session::guard::ExchangeGuard;

#[component]
pub fn OauthCallbackPage() -> impl IntoView {
    let session = use_session();
    let query = use_query_map();
    let guard = Rc::new(ExchangeGuard::new());

    Effect::new(move || {
        let params = query.get();
        let code = params.get("code");
        let provider_error = params.get("error");
        let return_to = params.get("state").unwrap_or_default();

        if !guard.claim() {
            return;
        }

        if provider_error.is_some() {
            crate::util::nav::replace("/login?error=google_cancelled");
            return;
        }
        let Some(code) = code else {
            crate::util::nav::replace("/login?error=no_code");
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let guard = Rc::clone(&guard);
            leptos::task::spawn_local(async move {
                match crate::session::service::exchange_social_code(&code).await {
                    Ok(pair) => {
                        crate::session::context::hydrate_tokens(
                            session,
                            &pair.access_token,
                            &pair.refresh_token,
                        );
                        if let Some(user) = crate::session::service::fetch_profile().await {
                            crate::session::context::hydrate_user(session, user);
                        }
                        let destination = if return_to.starts_with('/') {
                            return_to
                        } else {
                            crate::session::gate::DASHBOARD_ROUTE.to_string()
                        };
                        crate::util::nav::replace(&destination);
                    }
                    Err(err) => {
                        leptos::logging::warn!("social code exchange failed: {err}");
                        guard.release();
                        crate::util::nav::replace("/login?error=google_signin_failed");
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, code, return_to);
        }
    });

    view! {
        <div class="auth-page">
            <p>"Completing sign-in..."</p>
        </div>
    }
}
