//! Route gating: the synchronous render decision for a path.
//!
//! The decision reads credential *presence* straight from the store,
//! bypassing the session signal, which may still be bootstrapping. That
//! two-tier check is deliberate: storage presence answers "may this
//! render at all" before first paint, the resolved session answers "is
//! this user fully signed in". Collapsing them would reintroduce the
//! protected-content flash this design exists to avoid.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

/// Path prefixes reachable with no credentials. Everything else is
/// protected. Immutable process-wide configuration.
pub const PUBLIC_ROUTES: &[&str] = &[
    "/login",
    "/signup",
    "/forgot-password",
    "/reset-password",
    "/verify-email",
    "/auth/verify",
    "/oauth/google/callback",
];

pub const LOGIN_ROUTE: &str = "/login";
pub const SIGNUP_ROUTE: &str = "/signup";
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Sign-in route with the indicator shown after a terminal refresh
/// failure.
pub const SESSION_EXPIRED_ROUTE: &str = "/login?session_expired=true";

pub fn is_public(path: &str) -> bool {
    PUBLIC_ROUTES.iter().any(|route| path.starts_with(route))
}

/// What the router may render for the current path right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Render the requested screen.
    Allow,
    /// Protected path without credentials: render nothing, redirect to
    /// sign-in.
    RedirectToLogin,
    /// Fully signed in on the sign-in/sign-up screen: bounce to the
    /// dashboard.
    RedirectToDashboard,
    /// Credentials exist but the session is still bootstrapping: hold
    /// rendering behind a loading indicator.
    AwaitSession,
}

/// Decide synchronously, before children render.
///
/// `has_credentials` must come from the credential store, not the
/// session signal. With credentials present, an unresolved session is
/// allowed to render protected paths: the pair existing is enough to
/// avoid bouncing to sign-in while the profile fetch is in flight.
pub fn decide(
    path: &str,
    has_credentials: bool,
    is_loading: bool,
    is_authenticated: bool,
) -> GateDecision {
    if !has_credentials {
        return if is_public(path) {
            GateDecision::Allow
        } else {
            GateDecision::RedirectToLogin
        };
    }
    if is_loading {
        return GateDecision::AwaitSession;
    }
    if is_authenticated && (path == LOGIN_ROUTE || path == SIGNUP_ROUTE) {
        return GateDecision::RedirectToDashboard;
    }
    GateDecision::Allow
}
