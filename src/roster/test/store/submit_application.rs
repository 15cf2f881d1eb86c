use super::*;

/// Tests recording a new application as pending.
///
/// Verifies that a submission from a user with no claim and no pending
/// application creates exactly one pending entry and no claim.
///
/// Expected: Ok with one pending entry carrying the submitted fields
#[test]
fn creates_pending_entry() {
    let (_dir, mut store) = temp_store();

    store
        .submit_application("user-1", "Code-Man", "msg-42", false)
        .unwrap();

    assert_eq!(store.pending_count(), 1);
    assert_eq!(store.claim_count(), 0);

    let pending = store.pending_for("user-1").unwrap();
    assert_eq!(pending.efsane_adi, "Code-Man");
    assert_eq!(pending.message_id, "msg-42");
    assert!(!pending.is_efsanevi_dunya);
}

/// Tests refusing a second application while one is pending.
///
/// Verifies that a user with an undecided application cannot open another
/// one and that the store is left unchanged.
///
/// Expected: Err(RosterError::AlreadyPending), store unchanged
#[test]
fn refuses_second_application_while_pending() {
    let (_dir, mut store) = temp_store();

    store
        .submit_application("user-2", "Ares", "msg-1", false)
        .unwrap();
    let result = store.submit_application("user-2", "Brianna", "msg-2", false);

    assert!(matches!(
        result,
        Err(AppError::RosterErr(RosterError::AlreadyPending))
    ));
    assert_eq!(store.pending_count(), 1);
    assert_eq!(store.pending_for("user-2").unwrap().efsane_adi, "Ares");
}

/// Tests refusing an application from a user who already holds a claim.
///
/// Expected: Err(RosterError::AlreadyClaimed), no pending entry created
#[test]
fn refuses_application_from_claim_holder() {
    let (_dir, mut store) = temp_store();
    claim(&mut store, "user-3", "Code-Man", 0);

    let result = store.submit_application("user-3", "Ares", "msg-9", false);

    assert!(matches!(
        result,
        Err(AppError::RosterErr(RosterError::AlreadyClaimed))
    ));
    assert_eq!(store.pending_count(), 0);
}

/// Tests that character names are accepted without taxonomy validation.
///
/// Any string is a valid character name, including names absent from every
/// group.
///
/// Expected: Ok with the name stored verbatim
#[test]
fn accepts_names_outside_the_taxonomy() {
    let (_dir, mut store) = temp_store();

    store
        .submit_application("user-4", "Not A Real Efsane", "msg-5", true)
        .unwrap();

    let pending = store.pending_for("user-4").unwrap();
    assert_eq!(pending.efsane_adi, "Not A Real Efsane");
    assert!(pending.is_efsanevi_dunya);
}
