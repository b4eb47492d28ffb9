//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_gate::RouteGate;
use crate::pages::{
    agents::AgentsPage, dashboard::DashboardPage, forgot_password::ForgotPasswordPage,
    login::LoginPage, oauth_callback::OauthCallbackPage, reset_password::ResetPasswordPage,
    signup::SignupPage,
    verify_email::{VerifyEmailPage, VerifyTokenPage},
};
use crate::session::context::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared session signal, kicks off the bootstrap profile
/// fetch, and wires every route behind the [`RouteGate`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(crate::session::context::bootstrap(session));

    view! {
        <Stylesheet id="leptos" href="/pkg/agentdeck.css"/>
        <Title text="Agentdeck"/>

        <Router>
            <RouteGate>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                    <Route path=StaticSegment("reset-password") view=ResetPasswordPage/>
                    <Route path=StaticSegment("verify-email") view=VerifyEmailPage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("verify")) view=VerifyTokenPage/>
                    <Route
                        path=(StaticSegment("oauth"), StaticSegment("google"), StaticSegment("callback"))
                        view=OauthCallbackPage
                    />
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("agents") view=AgentsPage/>
                    <Route path=StaticSegment("") view=DashboardPage/>
                </Routes>
            </RouteGate>
        </Router>
    }
}
