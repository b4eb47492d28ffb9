use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::executor::block_on;

use super::*;
use crate::session::store;

fn response(status: u16, body: &str) -> RawResponse {
    RawResponse {
        status,
        body: body.to_owned(),
    }
}

// =============================================================
// Single-retry bound
// =============================================================

#[test]
fn repeated_401_triggers_exactly_one_refresh_and_one_retry() {
    store::clear();
    store::store("stale", "refresh-1");

    let calls = Rc::new(Cell::new(0u32));
    let refreshes = Rc::new(Cell::new(0u32));

    let issue = |_attempt: Attempt| {
        let calls = Rc::clone(&calls);
        async move {
            calls.set(calls.get() + 1);
            Ok(response(401, ""))
        }
    };
    let refresh = || {
        let refreshes = Rc::clone(&refreshes);
        async move {
            refreshes.set(refreshes.get() + 1);
            store::store("fresh", "refresh-2");
            Ok(())
        }
    };

    let result = block_on(send_with_refresh(issue, refresh, true));

    assert_eq!(result, Err(ApiError::SessionExpired));
    assert_eq!(calls.get(), 2, "original call plus exactly one retry");
    assert_eq!(refreshes.get(), 1);
    assert!(!store::has_pair(), "terminal failure clears the store");
}

#[test]
fn retry_after_successful_refresh_is_transparent_to_the_caller() {
    store::clear();
    store::store("stale", "refresh-1");

    let attempts = Rc::new(RefCell::new(Vec::<Attempt>::new()));

    let issue = |attempt: Attempt| {
        let attempts = Rc::clone(&attempts);
        async move {
            let nth = attempts.borrow().len();
            attempts.borrow_mut().push(attempt);
            if nth == 0 {
                Ok(response(401, ""))
            } else {
                Ok(response(200, r#"{"ok":true}"#))
            }
        }
    };
    let refresh = || async {
        store::store("fresh", "refresh-2");
        Ok(())
    };

    let result = block_on(send_with_refresh(issue, refresh, true));

    let body = result.expect("retried call should succeed").body;
    assert_eq!(body, r#"{"ok":true}"#);

    let attempts = attempts.borrow();
    assert_eq!(attempts.len(), 2);
    assert!(!attempts[0].is_retry);
    assert_eq!(attempts[0].bearer.as_deref(), Some("stale"));
    assert!(attempts[1].is_retry);
    assert_eq!(
        attempts[1].bearer.as_deref(),
        Some("fresh"),
        "retry carries the refreshed access credential"
    );
}

#[test]
fn refresh_failure_is_terminal_without_a_retry() {
    store::clear();
    store::store("stale", "refresh-1");

    let calls = Rc::new(Cell::new(0u32));
    let issue = |_attempt: Attempt| {
        let calls = Rc::clone(&calls);
        async move {
            calls.set(calls.get() + 1);
            Ok(response(401, ""))
        }
    };
    let refresh = || async { Err(ApiError::SessionExpired) };

    let result = block_on(send_with_refresh(issue, refresh, true));

    assert_eq!(result, Err(ApiError::SessionExpired));
    assert_eq!(calls.get(), 1, "no retry when refresh fails");
    assert!(!store::has_pair());
}

// =============================================================
// Opt-out and pass-through paths
// =============================================================

#[test]
fn opted_out_call_never_refreshes_on_401() {
    store::clear();
    store::store("acc", "ref");

    let refreshes = Rc::new(Cell::new(0u32));
    let issue = |attempt: Attempt| async move {
        assert!(attempt.bearer.is_none(), "opt-out must not attach a bearer");
        Ok(response(401, r#"{"detail":"credentials required"}"#))
    };
    let refresh = || {
        let refreshes = Rc::clone(&refreshes);
        async move {
            refreshes.set(refreshes.get() + 1);
            Ok(())
        }
    };

    let result = block_on(send_with_refresh(issue, refresh, false));

    assert_eq!(
        result,
        Err(ApiError::Validation("credentials required".to_owned()))
    );
    assert_eq!(refreshes.get(), 0);
    assert!(store::has_pair(), "opt-out failures never clear the store");
}

#[test]
fn success_passes_through_without_refresh() {
    store::clear();
    store::store("acc", "ref");

    let issue = |attempt: Attempt| async move {
        assert_eq!(attempt.bearer.as_deref(), Some("acc"));
        assert!(!attempt.is_retry);
        Ok(response(200, "{}"))
    };
    let refresh = || async { panic!("refresh must not run on success") };

    let result = block_on(send_with_refresh(issue, refresh, true));
    assert!(result.is_ok());
}

#[test]
fn non_auth_failure_surfaces_as_validation() {
    store::clear();
    let issue =
        |_attempt: Attempt| async move { Ok(response(422, r#"{"detail":"email taken"}"#)) };
    let refresh = || async { panic!("422 is not an authorization failure") };

    let result = block_on(send_with_refresh(issue, refresh, false));
    assert_eq!(result, Err(ApiError::Validation("email taken".to_owned())));
}

#[test]
fn transport_failure_surfaces_as_network_error() {
    store::clear();
    let issue = |_attempt: Attempt| async move {
        Err::<RawResponse, String>("connection refused".to_owned())
    };
    let refresh = || async { Ok(()) };

    let result = block_on(send_with_refresh(issue, refresh, true));
    assert_eq!(
        result,
        Err(ApiError::Network("connection refused".to_owned()))
    );
}

// =============================================================
// Error message extraction
// =============================================================

#[test]
fn error_message_prefers_detail_then_message() {
    let detail = response(400, r#"{"detail":"bad password","message":"ignored"}"#);
    assert_eq!(error_message(&detail), "bad password");

    let message = response(400, r#"{"message":"try again"}"#);
    assert_eq!(error_message(&message), "try again");
}

#[test]
fn error_message_falls_back_to_status() {
    let garbled = response(503, "<html>oops</html>");
    assert_eq!(error_message(&garbled), "request failed with status 503");
}
