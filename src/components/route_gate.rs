//! Render-blocking route gate component.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::session::context::use_session;
use crate::session::gate::{self, GateDecision};
use crate::session::store;
use crate::util::nav;

/// Wraps the routed content and re-evaluates the gate decision on every
/// path or session-state change. Protected content never renders, not
/// even for one frame, while the credential store is empty; the
/// redirects themselves run from an effect, not from the render pass.
#[component]
pub fn RouteGate(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let pathname = use_location().pathname;

    let decision = move || {
        let state = session.get();
        gate::decide(
            &pathname.get(),
            store::has_pair(),
            state.is_loading,
            state.is_authenticated(),
        )
    };

    Effect::new(move || match decision() {
        GateDecision::RedirectToLogin => nav::replace(gate::LOGIN_ROUTE),
        GateDecision::RedirectToDashboard => nav::replace(gate::DASHBOARD_ROUTE),
        GateDecision::Allow | GateDecision::AwaitSession => {}
    });

    move || match decision() {
        GateDecision::Allow => children().into_any(),
        GateDecision::RedirectToLogin | GateDecision::RedirectToDashboard => ().into_any(),
        GateDecision::AwaitSession => view! {
            <div class="route-gate__loading">
                <p>"Loading..."</p>
            </div>
        }
        .into_any(),
    }
}
