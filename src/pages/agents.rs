//! Agent configuration management screen.

use leptos::prelude::*;

use crate::net::agents;
use crate::net::error::ApiError;
use crate::net::types::AgentDraft;
use crate::session::gate;
use crate::util::nav;

#[component]
pub fn AgentsPage() -> impl IntoView {
    let listing = LocalResource::new(agents::list);

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let model = RwSignal::new("claude-sonnet-4".to_string());
    let system_prompt = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let handle_api_error = move |err: ApiError| {
        if matches!(err, ApiError::SessionExpired) {
            nav::replace(gate::SESSION_EXPIRED_ROUTE);
        } else {
            error.set(Some(err.to_string()));
        }
    };
    #[cfg(not(feature = "hydrate"))]
    let _ = handle_api_error;

    let create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get() || name.get().trim().is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            pending.set(true);
            error.set(None);
            let draft = AgentDraft {
                name: name.get().trim().to_string(),
                description: description.get(),
                model: model.get(),
                system_prompt: system_prompt.get(),
            };
            leptos::task::spawn_local(async move {
                match agents::create(&draft).await {
                    Ok(_) => {
                        name.set(String::new());
                        description.set(String::new());
                        system_prompt.set(String::new());
                        listing.refetch();
                    }
                    Err(err) => handle_api_error(err),
                }
                pending.set(false);
            });
        }
    };

    let delete = move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match agents::remove(&id).await {
                Ok(()) => listing.refetch(),
                Err(err) => handle_api_error(err),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };

    view! {
        <div class="agents">
            <header class="agents__header">
                <h1>"Agents"</h1>
                <a href="/dashboard">"Back to dashboard"</a>
            </header>

            {move || error.get().map(|message| view! { <p class="agents__error">{message}</p> })}

            <section class="agents__list">
                {move || match listing.get() {
                    None => view! { <p>"Loading..."</p> }.into_any(),
                    Some(Err(ApiError::SessionExpired)) => {
                        nav::replace(gate::SESSION_EXPIRED_ROUTE);
                        ().into_any()
                    }
                    Some(Err(err)) => {
                        view! { <p class="agents__error">{err.to_string()}</p> }.into_any()
                    }
                    Some(Ok(list)) => view! {
                        <ul>
                            {list
                                .into_iter()
                                .map(|agent| {
                                    let id = agent.id.clone();
                                    view! {
                                        <li class="agents__item">
                                            <strong>{agent.name}</strong>
                                            <span class="agents__model">{agent.model}</span>
                                            <p>{agent.description}</p>
                                            <button class="btn" on:click=move |_| delete(id.clone())>
                                                "Delete"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                    .into_any(),
                }}
            </section>

            <section class="agents__create">
                <h2>"New agent"</h2>
                <form on:submit=create>
                    <label>
                        "Name"
                        <input
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Description"
                        <input
                            type="text"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Model"
                        <input
                            type="text"
                            prop:value=move || model.get()
                            on:input=move |ev| model.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "System prompt"
                        <textarea
                            prop:value=move || system_prompt.get()
                            on:input=move |ev| system_prompt.set(event_target_value(&ev))
                        />
                    </label>
                    <button type="submit" class="btn btn--primary" disabled=move || pending.get()>
                        "Create agent"
                    </button>
                </form>
            </section>
        </div>
    }
}
