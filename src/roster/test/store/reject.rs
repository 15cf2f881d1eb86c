use super::*;

/// Tests discarding a pending application on rejection.
///
/// Expected: Ok with the discarded application, zero pending, zero claims
#[test]
fn removes_pending_entry_only() {
    let (_dir, mut store) = temp_store();

    store
        .submit_application("user-1", "Enigma", "msg-3", false)
        .unwrap();
    let application = store.reject("user-1").unwrap();

    assert_eq!(application.efsane_adi, "Enigma");
    assert_eq!(store.pending_count(), 0);
    assert_eq!(store.claim_count(), 0);
}

/// Tests rejecting a user with no pending application.
///
/// Expected: Err(RosterError::NoSuchPending)
#[test]
fn fails_without_pending_application() {
    let (_dir, mut store) = temp_store();

    let result = store.reject("nobody");

    assert!(matches!(
        result,
        Err(AppError::RosterErr(RosterError::NoSuchPending))
    ));
}

/// Tests that a rejected user may apply again.
///
/// Expected: Ok on the follow-up submission
#[test]
fn allows_reapplication_after_rejection() {
    let (_dir, mut store) = temp_store();

    store
        .submit_application("user-1", "Enigma", "msg-3", false)
        .unwrap();
    store.reject("user-1").unwrap();

    store
        .submit_application("user-1", "Fallen", "msg-4", false)
        .unwrap();
    assert_eq!(store.pending_for("user-1").unwrap().efsane_adi, "Fallen");
}
