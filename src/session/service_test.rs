use std::cell::Cell;
use std::rc::Rc;

use futures::executor::block_on;

use super::*;
use crate::net::types::Membership;

fn sample_profile() -> Profile {
    Profile {
        id: "u-1".to_owned(),
        email: "a@b.com".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Byron".to_owned(),
        is_active: true,
        is_subscribed: false,
        memberships: vec![Membership {
            workspace_id: "w-1".to_owned(),
            workspace_name: "Research".to_owned(),
            role: "member".to_owned(),
            joined_at: "2024-01-01T00:00:00Z".to_owned(),
        }],
    }
}

// =============================================================
// Fail-soft profile protocol
// =============================================================

#[test]
fn profile_resolves_on_first_fetch() {
    store::clear();
    store::store("acc", "ref");

    let fetches = Rc::new(Cell::new(0u32));
    let fetch = |bearer: Option<String>| {
        let fetches = Rc::clone(&fetches);
        async move {
            fetches.set(fetches.get() + 1);
            assert_eq!(bearer.as_deref(), Some("acc"));
            ProfileAttempt::Fetched(sample_profile())
        }
    };
    let refresh = || async { panic!("no refresh on a clean fetch") };

    let profile = block_on(profile_with(fetch, refresh));

    assert_eq!(profile.map(|p| p.id), Some("u-1".to_owned()));
    assert_eq!(fetches.get(), 1);
    assert!(store::has_pair(), "success leaves the store intact");
}

#[test]
fn unauthorized_then_refresh_then_retry_succeeds() {
    store::clear();
    store::store("stale", "ref-1");

    let fetches = Rc::new(Cell::new(0u32));
    let fetch = |bearer: Option<String>| {
        let fetches = Rc::clone(&fetches);
        async move {
            fetches.set(fetches.get() + 1);
            if fetches.get() == 1 {
                ProfileAttempt::Unauthorized
            } else {
                assert_eq!(bearer.as_deref(), Some("fresh"));
                ProfileAttempt::Fetched(sample_profile())
            }
        }
    };
    let refresh = || async {
        store::store("fresh", "ref-2");
        Ok(())
    };

    let profile = block_on(profile_with(fetch, refresh));

    assert!(profile.is_some());
    assert_eq!(fetches.get(), 2, "exactly one retry");
}

#[test]
fn refresh_failure_clears_store_and_resolves_none() {
    store::clear();
    store::store("stale", "ref-1");

    let fetches = Rc::new(Cell::new(0u32));
    let fetch = |_bearer: Option<String>| {
        let fetches = Rc::clone(&fetches);
        async move {
            fetches.set(fetches.get() + 1);
            ProfileAttempt::Unauthorized
        }
    };
    let refresh = || async { Err(ApiError::SessionExpired) };

    let profile = block_on(profile_with(fetch, refresh));

    assert!(profile.is_none(), "fail-soft: never an error");
    assert_eq!(fetches.get(), 1, "no retry without a successful refresh");
    assert!(!store::has_pair());
}

#[test]
fn retry_failure_clears_store_and_resolves_none() {
    store::clear();
    store::store("stale", "ref-1");

    let fetches = Rc::new(Cell::new(0u32));
    let fetch = |_bearer: Option<String>| {
        let fetches = Rc::clone(&fetches);
        async move {
            fetches.set(fetches.get() + 1);
            ProfileAttempt::Unauthorized
        }
    };
    let refresh = || async {
        store::store("fresh", "ref-2");
        Ok(())
    };

    let profile = block_on(profile_with(fetch, refresh));

    assert!(profile.is_none());
    assert_eq!(fetches.get(), 2, "one retry, never more");
    assert!(!store::has_pair());
}

#[test]
fn non_auth_failure_resolves_none_without_clearing() {
    store::clear();
    store::store("acc", "ref");

    let fetch = |_bearer: Option<String>| async move { ProfileAttempt::Failed };
    let refresh = || async { panic!("transport failure is not an authorization failure") };

    let profile = block_on(profile_with(fetch, refresh));

    assert!(profile.is_none());
    assert!(
        store::has_pair(),
        "a transient failure does not end the session"
    );
}
