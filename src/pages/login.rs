//! Sign-in page: password login plus the Google handoff.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::session::context::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let session_expired = move || query.get().get("session_expired").is_some();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            pending.set(true);
            error.set(None);
            let email_value = email.get();
            let password_value = password.get();
            leptos::task::spawn_local(async move {
                match crate::session::context::login(session, &email_value, &password_value).await {
                    Ok(()) => {
                        crate::util::nav::replace(crate::session::gate::DASHBOARD_ROUTE);
                    }
                    Err(err) => {
                        error.set(Some(err.to_string()));
                        pending.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
        }
    };

    let google = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(err) = crate::session::context::login_with_google().await {
                error.set(Some(err.to_string()));
            }
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Agentdeck"</h1>

            <Show when=session_expired>
                <p class="auth-page__notice">"Your session expired. Please sign in again."</p>
            </Show>

            <form class="auth-page__form" on:submit=submit>
                <label>
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                {move || {
                    error.get().map(|message| view! { <p class="auth-page__error">{message}</p> })
                }}
                <button type="submit" class="btn btn--primary" disabled=move || pending.get()>
                    "Sign in"
                </button>
            </form>

            <button class="btn auth-page__google" on:click=google>
                "Sign in with Google"
            </button>

            <p class="auth-page__links">
                <a href="/forgot-password">"Forgot password?"</a>
                " · "
                <a href="/signup">"Create an account"</a>
            </p>
        </div>
    }
}
