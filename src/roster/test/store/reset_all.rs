use super::*;

/// Tests the unconditional admin reset.
///
/// A store with 3 claims and 2 pending applications is cleared completely,
/// and the persisted snapshot reflects the empty maps.
///
/// Expected: zero claims, zero pending, snapshot empty on reload
#[test]
fn clears_claims_and_pending() {
    let (_dir, mut store) = temp_store();

    claim(&mut store, "user-1", "Code-Man", 0);
    claim(&mut store, "user-2", "Ares", 0);
    claim(&mut store, "user-3", "Brianna", 0);
    store
        .submit_application("user-4", "Enigma", "msg-4", false)
        .unwrap();
    store
        .submit_application("user-5", "BoraLo", "msg-5", true)
        .unwrap();
    assert_eq!(store.claim_count(), 3);
    assert_eq!(store.pending_count(), 2);

    store.reset_all().unwrap();

    assert_eq!(store.claim_count(), 0);
    assert_eq!(store.pending_count(), 0);

    let reloaded = RosterStore::load(store.path()).unwrap();
    assert_eq!(reloaded.claim_count(), 0);
    assert_eq!(reloaded.pending_count(), 0);
}

/// Tests resetting an already-empty store.
///
/// Expected: Ok, still empty
#[test]
fn is_a_no_op_on_empty_store() {
    let (_dir, mut store) = temp_store();

    store.reset_all().unwrap();

    assert_eq!(store.claim_count(), 0);
    assert_eq!(store.pending_count(), 0);
}
