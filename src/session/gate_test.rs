use super::*;

// =============================================================
// Route classification
// =============================================================

#[test]
fn public_prefixes_match_by_prefix() {
    assert!(is_public("/login"));
    assert!(is_public("/reset-password?token=abc"));
    assert!(is_public("/oauth/google/callback"));
    assert!(is_public("/auth/verify"));
}

#[test]
fn everything_else_is_protected() {
    assert!(!is_public("/"));
    assert!(!is_public("/dashboard"));
    assert!(!is_public("/agents"));
    assert!(!is_public("/settings"));
}

// =============================================================
// Gate decisions
// =============================================================

#[test]
fn no_credentials_on_protected_path_redirects_regardless_of_loading() {
    // Storage presence wins over the session signal in both phases.
    assert_eq!(
        decide("/dashboard", false, true, false),
        GateDecision::RedirectToLogin
    );
    assert_eq!(
        decide("/dashboard", false, false, false),
        GateDecision::RedirectToLogin
    );
}

#[test]
fn no_credentials_on_public_path_renders() {
    assert_eq!(decide("/login", false, true, false), GateDecision::Allow);
    assert_eq!(
        decide("/forgot-password", false, false, false),
        GateDecision::Allow
    );
}

#[test]
fn credentials_hold_rendering_while_bootstrapping() {
    assert_eq!(
        decide("/dashboard", true, true, false),
        GateDecision::AwaitSession
    );
    assert_eq!(decide("/login", true, true, false), GateDecision::AwaitSession);
}

#[test]
fn resolved_session_bounces_sign_in_screens_to_dashboard() {
    assert_eq!(
        decide("/login", true, false, true),
        GateDecision::RedirectToDashboard
    );
    assert_eq!(
        decide("/signup", true, false, true),
        GateDecision::RedirectToDashboard
    );
}

#[test]
fn credentials_without_resolved_profile_still_render_protected_paths() {
    // The pair existing is enough; the profile fetch may still be in
    // flight after bootstrap degraded nothing.
    assert_eq!(decide("/dashboard", true, false, false), GateDecision::Allow);
}

#[test]
fn authenticated_user_renders_protected_paths() {
    assert_eq!(decide("/dashboard", true, false, true), GateDecision::Allow);
    assert_eq!(decide("/agents", true, false, true), GateDecision::Allow);
}

#[test]
fn unauthenticated_resolved_session_may_sit_on_sign_in() {
    // Tokens present but profile resolution failed softly: no bounce.
    assert_eq!(decide("/login", true, false, false), GateDecision::Allow);
}
