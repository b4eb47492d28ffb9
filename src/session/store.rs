//! Credential store: single source of truth for the bearer token pair.
//!
//! Tokens live in tab-scoped `sessionStorage` (cleared when the tab
//! closes) under fixed keys. Off-browser builds keep the pair in a
//! thread-local map so the same contract holds in native tests.
//!
//! The pair is atomic: `store` writes both, `clear` removes both, and
//! `has_pair` demands both, so readers never act on a half-written
//! state. A missing storage medium (e.g. privacy mode) degrades to
//! "no session", never an error.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

const ACCESS_TOKEN_KEY: &str = "access_token";
const REFRESH_TOKEN_KEY: &str = "refresh_token";

#[cfg(feature = "hydrate")]
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

#[cfg(not(feature = "hydrate"))]
thread_local! {
    static TOKENS: std::cell::RefCell<std::collections::HashMap<&'static str, String>> =
        std::cell::RefCell::new(std::collections::HashMap::new());
}

fn read(key: &'static str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        session_storage().and_then(|s| s.get_item(key).ok().flatten())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        TOKENS.with(|t| t.borrow().get(key).cloned())
    }
}

/// Current access credential, if any.
pub fn access() -> Option<String> {
    read(ACCESS_TOKEN_KEY)
}

/// Current refresh credential, if any.
pub fn refresh_token() -> Option<String> {
    read(REFRESH_TOKEN_KEY)
}

/// Write both credentials. There is no way to write only one.
pub fn store(access: &str, refresh: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = session_storage() {
            let _ = storage.set_item(ACCESS_TOKEN_KEY, access);
            let _ = storage.set_item(REFRESH_TOKEN_KEY, refresh);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        TOKENS.with(|t| {
            let mut map = t.borrow_mut();
            map.insert(ACCESS_TOKEN_KEY, access.to_owned());
            map.insert(REFRESH_TOKEN_KEY, refresh.to_owned());
        });
    }
}

/// Drop both credentials.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = session_storage() {
            let _ = storage.remove_item(ACCESS_TOKEN_KEY);
            let _ = storage.remove_item(REFRESH_TOKEN_KEY);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        TOKENS.with(|t| {
            let mut map = t.borrow_mut();
            map.remove(ACCESS_TOKEN_KEY);
            map.remove(REFRESH_TOKEN_KEY);
        });
    }
}

/// True only when both credentials are present. A lone credential reads
/// as "no session".
pub fn has_pair() -> bool {
    access().is_some() && refresh_token().is_some()
}
