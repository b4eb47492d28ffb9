//! Request a password reset email.

use leptos::prelude::*;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitted = RwSignal::new(false);
    let pending = RwSignal::new(false);

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
            leptos::task::spawn_local(async move {
                match crate::session::service::forgot_password(&email_value).await {
                    Ok(_) => submitted.set(true),
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
            <h1>"Reset your password"</h1>

            <Show
                when=move || submitted.get()
                fallback=move || {
                    view! {
                        <form class="auth-page__form" on:submit=submit>
                            <label>
                                "Email"
                                <input
                                    type="email"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                />
                            </label>
                            <button type="submit" class="btn btn--primary" disabled=move || pending.get()>
                                "Send reset link"
                            </button>
                        </form>
                    }
                }
            >
                <p class="auth-page__notice">
                    "If that address has an account, a reset link is on its way."
                </p>
            </Show>

            {move || error.get().map(|message| view! { <p class="auth-page__error">{message}</p> })}

            <p class="auth-page__links">
                <a href="/login">"Back to sign in"</a>
            </p>
        </div>
    }
}
