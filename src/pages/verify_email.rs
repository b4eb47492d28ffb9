//! Email verification landing pages.
//!
//! `/verify-email` is the informational screen shown right after signup.
//! `/auth/verify?token=...` is the emailed link target: it redeems the
//! token once and reports the outcome.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::net::types::VerifyEmailOutcome;

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <h1>"Verify your email"</h1>
            <p class="auth-page__notice">
                "We sent a verification link to your inbox. Open it to activate your account."
            </p>
            <p class="auth-page__links">
                <a href="/login">"Back to sign in"</a>
            </p>
        </div>
    }
}

#[component]
pub fn VerifyTokenPage() -> impl IntoView {
    let query = use_query_map();
    let token = move || query.get().get("token").unwrap_or_default();

    let outcome = LocalResource::new(move || {
        let token_value = token();
        async move {
            if token_value.is_empty() {
                return Err("This verification link is missing its token.".to_string());
            }
            crate::session::service::verify_email(&token_value)
                .await
                .map_err(|err| err.to_string())
        }
    });

    view! {
        <div class="auth-page">
            <h1>"Verify your email"</h1>
            {move || match outcome.get() {
                None => view! { <p>"Verifying..."</p> }.into_any(),
                Some(Ok(VerifyEmailOutcome { verified: true, message })) => view! {
                    <div>
                        <p class="auth-page__notice">{message}</p>
                        <p class="auth-page__links">
                            <a href="/login">"Continue to sign in"</a>
                        </p>
                    </div>
                }
                .into_any(),
                Some(Ok(VerifyEmailOutcome { message, .. })) | Some(Err(message)) => view! {
                    <div>
                        <p class="auth-page__error">{message}</p>
                        <p class="auth-page__links">
                            <a href="/signup">"Back to signup"</a>
                        </p>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
