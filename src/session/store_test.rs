use super::*;

// =============================================================
// Pair atomicity
// =============================================================

#[test]
fn empty_store_has_no_pair() {
    clear();
    assert!(access().is_none());
    assert!(refresh_token().is_none());
    assert!(!has_pair());
}

#[test]
fn store_writes_both_credentials() {
    clear();
    store("acc-1", "ref-1");
    assert_eq!(access().as_deref(), Some("acc-1"));
    assert_eq!(refresh_token().as_deref(), Some("ref-1"));
    assert!(has_pair());
}

#[test]
fn clear_removes_both_credentials() {
    clear();
    store("acc-1", "ref-1");
    clear();
    assert!(access().is_none());
    assert!(refresh_token().is_none());
    assert!(!has_pair());
}

#[test]
fn store_overwrites_previous_pair_completely() {
    clear();
    store("acc-1", "ref-1");
    store("acc-2", "ref-2");
    assert_eq!(access().as_deref(), Some("acc-2"));
    assert_eq!(refresh_token().as_deref(), Some("ref-2"));
}

#[test]
fn pair_is_never_partial_across_operation_sequences() {
    clear();
    // Every public mutation writes or removes the whole pair; walk a
    // sequence and check the invariant after each step.
    fn assert_whole_pair() {
        assert_eq!(access().is_some(), refresh_token().is_some());
    }
    store("a", "b");
    assert_whole_pair();
    clear();
    assert_whole_pair();
    store("c", "d");
    assert_whole_pair();
    store("e", "f");
    assert_whole_pair();
    clear();
    assert_whole_pair();
}

#[test]
fn opaque_values_round_trip_unmodified() {
    clear();
    let access_token = "eyJhbGciOiJIUzI1NiJ9.e30.sig==";
    let refresh = "d2VpcmQvdmFsdWUrd2l0aD1wYWRkaW5n";
    store(access_token, refresh);
    assert_eq!(access().as_deref(), Some(access_token));
    assert_eq!(refresh_token().as_deref(), Some(refresh));
}
