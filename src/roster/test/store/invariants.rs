use super::*;

/// Asserts the global roster invariants: no two claims share an owner, and
/// no user has both a claim and a pending application.
fn assert_invariants(store: &RosterStore) {
    let owners: Vec<&str> = store.claims().map(|(_, record)| record.user_id.as_str()).collect();
    for owner in &owners {
        assert_eq!(
            owners.iter().filter(|o| **o == *owner).count(),
            1,
            "user {owner} holds more than one claim"
        );
        assert!(
            store.pending_for(owner).is_none(),
            "user {owner} has both a claim and a pending application"
        );
    }
}

/// Tests the invariants across a mixed operation sequence.
///
/// Runs submits, approvals, rejections, releases, and failed attempts in
/// sequence, asserting after every step that no user holds two claims and no
/// claim holder has a pending application.
///
/// Expected: invariants hold after every operation
#[test]
fn hold_across_operation_sequences() {
    let (_dir, mut store) = temp_store();

    store
        .submit_application("u1", "Code-Man", "m1", false)
        .unwrap();
    assert_invariants(&store);

    store.approve("u1", 0).unwrap();
    assert_invariants(&store);

    // A claim holder cannot re-enter the pending map.
    assert!(store.submit_application("u1", "Ares", "m2", false).is_err());
    assert_invariants(&store);

    store.submit_application("u2", "Ares", "m3", false).unwrap();
    assert_invariants(&store);

    store.reject("u2").unwrap();
    assert_invariants(&store);

    store.submit_application("u2", "Ares", "m4", false).unwrap();
    store.approve("u2", HOUR_MS).unwrap();
    assert_invariants(&store);

    // Approving a third user for an already-claimed name overwrites the
    // claim but never duplicates an owner.
    store
        .submit_application("u3", "Code-Man", "m5", false)
        .unwrap();
    store.approve("u3", 2 * HOUR_MS).unwrap();
    assert_invariants(&store);
    assert_eq!(store.claim("Code-Man").unwrap().user_id, "u3");

    // Failed release attempts leave state untouched.
    assert!(store.release("u2", HOUR_MS + 1).is_err());
    assert_invariants(&store);

    store.release("u2", HOUR_MS + CLAIM_COOLDOWN_MS).unwrap();
    assert_invariants(&store);

    store.submit_application("u2", "Brianna", "m6", false).unwrap();
    assert_invariants(&store);

    store.reset_all().unwrap();
    assert_invariants(&store);
    assert_eq!(store.claim_count(), 0);
    assert_eq!(store.pending_count(), 0);
}
