use super::*;

/// Tests promoting a pending application to a claim.
///
/// Submits an application for "Code-Man", approves it, and verifies the
/// claim exists with the approval timestamp while the pending entry is gone.
/// The persisted snapshot must reflect both changes.
///
/// Expected: Ok with one claim, zero pending, snapshot in sync
#[test]
fn promotes_pending_to_claim() {
    let (_dir, mut store) = temp_store();

    store
        .submit_application("user-1", "Code-Man", "msg-7", false)
        .unwrap();
    let application = store.approve("user-1", 1_000).unwrap();

    assert_eq!(application.efsane_adi, "Code-Man");
    assert_eq!(store.claim_count(), 1);
    assert_eq!(store.pending_count(), 0);

    let record = store.claim("Code-Man").unwrap();
    assert_eq!(record.user_id, "user-1");
    assert_eq!(record.claim_date, 1_000);

    let reloaded = RosterStore::load(store.path()).unwrap();
    assert_eq!(reloaded.claim_count(), 1);
    assert_eq!(reloaded.pending_count(), 0);
    assert_eq!(reloaded.claim("Code-Man").unwrap().user_id, "user-1");
}

/// Tests approving a user with no pending application.
///
/// Expected: Err(RosterError::NoSuchPending)
#[test]
fn fails_without_pending_application() {
    let (_dir, mut store) = temp_store();

    let result = store.approve("nobody", 0);

    assert!(matches!(
        result,
        Err(AppError::RosterErr(RosterError::NoSuchPending))
    ));
}

/// Tests that approval overwrites an existing claim on the same name.
///
/// Two users approved for the same character name leave a single claim
/// owned by the later one; no conflict check is performed.
///
/// Expected: one claim for the name, owned by the second user
#[test]
fn overwrites_existing_claim_for_same_name() {
    let (_dir, mut store) = temp_store();

    claim(&mut store, "user-1", "Code-Man", 0);
    store
        .submit_application("user-2", "Code-Man", "msg-2", false)
        .unwrap();
    store.approve("user-2", 5_000).unwrap();

    assert_eq!(store.claim_count(), 1);
    let record = store.claim("Code-Man").unwrap();
    assert_eq!(record.user_id, "user-2");
    assert_eq!(record.claim_date, 5_000);
}
