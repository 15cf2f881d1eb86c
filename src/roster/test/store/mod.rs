use tempfile::TempDir;

use crate::error::{roster::RosterError, AppError};
use crate::roster::store::{RosterStore, CLAIM_COOLDOWN_MS};

mod approve;
mod invariants;
mod persistence;
mod reject;
mod release;
mod reset_all;
mod submit_application;

const HOUR_MS: i64 = 60 * 60 * 1000;

/// Creates an empty store backed by a fresh temporary data file.
///
/// The TempDir must stay alive for the duration of the test so the snapshot
/// file is not removed underneath the store.
fn temp_store() -> (TempDir, RosterStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = RosterStore::load(dir.path().join("efsane_data.json")).unwrap();
    (dir, store)
}

/// Submits and approves an application, producing a claim started at
/// `claimed_at_ms`.
fn claim(store: &mut RosterStore, user_id: &str, efsane_adi: &str, claimed_at_ms: i64) {
    store
        .submit_application(user_id, efsane_adi, "msg-1", false)
        .unwrap();
    store.approve(user_id, claimed_at_ms).unwrap();
}
