use super::*;

/// Tests the cooldown refusal one hour into a claim.
///
/// A claim started one hour ago has 47 hours of cooldown left; the refusal
/// must carry that exact remaining-hours count.
///
/// Expected: Err(CooldownNotElapsed) with remaining_hours = 47
#[test]
fn fails_before_cooldown_with_remaining_hours() {
    let (_dir, mut store) = temp_store();
    let claimed_at = 0;
    claim(&mut store, "user-1", "Code-Man", claimed_at);

    let result = store.release("user-1", claimed_at + HOUR_MS);

    match result {
        Err(AppError::RosterErr(RosterError::CooldownNotElapsed {
            character_key,
            remaining_hours,
        })) => {
            assert_eq!(character_key, "Code-Man");
            assert_eq!(remaining_hours, 47);
        }
        other => panic!("Expected CooldownNotElapsed, got: {:?}", other.map(|_| ())),
    }
    assert_eq!(store.claim_count(), 1);
}

/// Tests release exactly at the cooldown boundary.
///
/// Expected: Ok with the released name, claim removed
#[test]
fn succeeds_exactly_at_cooldown() {
    let (_dir, mut store) = temp_store();
    claim(&mut store, "user-1", "Code-Man", 0);

    let released = store.release("user-1", CLAIM_COOLDOWN_MS).unwrap();

    assert_eq!(released, "Code-Man");
    assert_eq!(store.claim_count(), 0);
}

/// Tests release well after the cooldown.
///
/// Expected: Ok with the released name
#[test]
fn succeeds_after_cooldown() {
    let (_dir, mut store) = temp_store();
    claim(&mut store, "user-1", "Ares", 0);

    let released = store.release("user-1", CLAIM_COOLDOWN_MS + 12 * HOUR_MS).unwrap();

    assert_eq!(released, "Ares");
    assert!(store.claim("Ares").is_none());
}

/// Tests releasing without holding a claim.
///
/// Expected: Err(RosterError::NoClaim)
#[test]
fn fails_without_claim() {
    let (_dir, mut store) = temp_store();

    let result = store.release("nobody", 0);

    assert!(matches!(
        result,
        Err(AppError::RosterErr(RosterError::NoClaim))
    ));
}

/// Tests the remaining-hours count in the final stretch of the cooldown.
///
/// With one minute left, the refusal reports a single remaining hour, never
/// zero.
///
/// Expected: remaining_hours = 1
#[test]
fn reports_one_hour_just_before_cooldown_elapses() {
    let (_dir, mut store) = temp_store();
    claim(&mut store, "user-1", "Code-Man", 0);

    let result = store.release("user-1", CLAIM_COOLDOWN_MS - 60 * 1000);

    match result {
        Err(AppError::RosterErr(RosterError::CooldownNotElapsed {
            remaining_hours, ..
        })) => assert_eq!(remaining_hours, 1),
        other => panic!("Expected CooldownNotElapsed, got: {:?}", other.map(|_| ())),
    }
    assert_eq!(store.claim_count(), 1);
}

/// Tests that the remaining-hours count rounds up.
///
/// With 30 minutes elapsed, 47.5 hours remain and the refusal reports 48.
///
/// Expected: remaining_hours = 48
#[test]
fn rounds_remaining_hours_up() {
    let (_dir, mut store) = temp_store();
    claim(&mut store, "user-1", "Code-Man", 0);

    let result = store.release("user-1", HOUR_MS / 2);

    match result {
        Err(AppError::RosterErr(RosterError::CooldownNotElapsed {
            remaining_hours, ..
        })) => assert_eq!(remaining_hours, 48),
        other => panic!("Expected CooldownNotElapsed, got: {:?}", other.map(|_| ())),
    }
}
