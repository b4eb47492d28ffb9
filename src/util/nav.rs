//! Hard navigation helpers.
//!
//! Router navigation keeps history entries alive; these wrappers are for
//! redirects that must not leave a stale authenticated page reachable via
//! the back button, and for leaving the app entirely. They require a
//! browser environment and are inert elsewhere.

/// Replace the current history entry with `path`.
pub fn replace(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().replace(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}

/// Navigate to an absolute address (identity-provider handoff).
pub fn assign(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(url);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}
