//! Account creation page.

use leptos::prelude::*;

#[component]
pub fn SignupPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
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
            let request = crate::net::types::SignupRequest {
                email: email.get(),
                password: password.get(),
                first_name: first_name.get(),
                last_name: last_name.get(),
                invite: None,
            };
            leptos::task::spawn_local(async move {
                match crate::session::context::signup(&request).await {
                    Ok(_) => submitted.set(true),
                    Err(err) => {
                        error.set(Some(err.to_string()));
                        pending.set(false);
                    }
                }
            });
        }
    };

    let resend = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let email_value = email.get();
            leptos::task::spawn_local(async move {
                if let Err(err) = crate::session::service::resend_verification(&email_value).await {
                    error.set(Some(err.to_string()));
                }
            });
        }
    };

    view! {
        <div class="auth-page">
            <h1>"Create your account"</h1>

            <Show
                when=move || submitted.get()
                fallback=move || {
                    view! {
                        <form class="auth-page__form" on:submit=submit>
                            <label>
                                "First name"
                                <input
                                    type="text"
                                    prop:value=move || first_name.get()
                                    on:input=move |ev| first_name.set(event_target_value(&ev))
                                />
                            </label>
                            <label>
                                "Last name"
                                <input
                                    type="text"
                                    prop:value=move || last_name.get()
                                    on:input=move |ev| last_name.set(event_target_value(&ev))
                                />
                            </label>
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
                            <button type="submit" class="btn btn--primary" disabled=move || pending.get()>
                                "Sign up"
                            </button>
                        </form>
                    }
                }
            >
                <p class="auth-page__notice">
                    "Check your inbox to verify your email address."
                </p>
                <button class="btn" on:click=resend>
                    "Resend verification email"
                </button>
            </Show>

            {move || error.get().map(|message| view! { <p class="auth-page__error">{message}</p> })}

            <p class="auth-page__links">
                <a href="/login">"Already have an account? Sign in"</a>
            </p>
        </div>
    }
}
