//! Signed-in landing page.

use leptos::prelude::*;

use crate::net::agents;
use crate::net::error::ApiError;
use crate::session::context::{self, use_session};
use crate::session::gate;
use crate::util::nav;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();

    let agents = LocalResource::new(agents::list);

    let greeting = move || {
        session
            .get()
            .user
            .map_or_else(|| "Welcome".to_string(), |u| format!("Welcome, {}", u.first_name))
    };

    let workspaces = move || {
        session
            .get()
            .user
            .map(|u| u.memberships)
            .unwrap_or_default()
    };

    view! {
        <div class="dashboard">
            <header class="dashboard__header">
                <h1>{greeting}</h1>
                <button class="btn" on:click=move |_| context::logout(session)>
                    "Sign out"
                </button>
            </header>

            <section class="dashboard__workspaces">
                <h2>"Workspaces"</h2>
                <ul>
                    <For
                        each=workspaces
                        key=|m| m.workspace_id.clone()
                        let:membership
                    >
                        <li>{membership.workspace_name.clone()} " (" {membership.role.clone()} ")"</li>
                    </For>
                </ul>
            </section>

            <section class="dashboard__agents">
                <h2>"Agents"</h2>
                {move || match agents.get() {
                    None => view! { <p>"Loading agents..."</p> }.into_any(),
                    Some(Err(ApiError::SessionExpired)) => {
                        nav::replace(gate::SESSION_EXPIRED_ROUTE);
                        ().into_any()
                    }
                    Some(Err(err)) => {
                        view! { <p class="dashboard__error">{err.to_string()}</p> }.into_any()
                    }
                    Some(Ok(list)) if list.is_empty() => {
                        view! { <p>"No agents yet. " <a href="/agents">"Create one."</a></p> }
                            .into_any()
                    }
                    Some(Ok(list)) => view! {
                        <div>
                            <ul>
                                {list
                                    .into_iter()
                                    .map(|agent| {
                                        view! {
                                            <li>
                                                <strong>{agent.name}</strong>
                                                " · "
                                                {agent.model}
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                            <a href="/agents">"Manage agents"</a>
                        </div>
                    }
                    .into_any(),
                }}
            </section>
        </div>
    }
}
