//! Set a new password from an emailed reset token.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let query = use_query_map();

    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let done = RwSignal::new(false);
    let pending = RwSignal::new(false);

    let token = move || query.get().get("token").unwrap_or_default();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get() {
            return;
        }
        if password.get() != confirm.get() {
            error.set(Some("Passwords do not match.".to_string()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            pending.set(true);
            error.set(None);
            let token_value = token();
            let password_value = password.get();
            leptos::task::spawn_local(async move {
                match crate::session::service::reset_password(&token_value, &password_value).await {
                    Ok(_) => done.set(true),
                    Err(err) => {
                        error.set(Some(err.to_string()));
                        pending.set(false);
                    }
                }
            });
        }
    };

    view! {
        <div class="auth-page">
            <h1>"Choose a new password"</h1>

            <Show
                when=move || done.get()
                fallback=move || {
                    view! {
                        <Show
                            when=move || !token().is_empty()
                            fallback=|| {
                                view! {
                                    <p class="auth-page__error">
                                        "This reset link is missing its token. Request a new one."
                                    </p>
                                }
                            }
                        >
                            <form class="auth-page__form" on:submit=submit>
                                <label>
                                    "New password"
                                    <input
                                        type="password"
                                        prop:value=move || password.get()
                                        on:input=move |ev| password.set(event_target_value(&ev))
                                    />
                                </label>
                                <label>
                                    "Confirm password"
                                    <input
                                        type="password"
                                        prop:value=move || confirm.get()
                                        on:input=move |ev| confirm.set(event_target_value(&ev))
                                    />
                                </label>
                                <button type="submit" class="btn btn--primary" disabled=move || pending.get()>
                                    "Reset password"
                                </button>
                            </form>
                        </Show>
                    }
                }
            >
                <p class="auth-page__notice">"Password updated. You can sign in now."</p>
            </Show>

            {move || error.get().map(|message| view! { <p class="auth-page__error">{message}</p> })}

            <p class="auth-page__links">
                <a href="/login">"Back to sign in"</a>
            </p>
        </div>
    }
}
