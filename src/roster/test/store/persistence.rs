use super::*;

/// Tests first-start initialization.
///
/// Loading a store from a path with no file writes an empty snapshot so the
/// next startup finds a valid file.
///
/// Expected: empty store, snapshot file created
#[test]
fn initializes_missing_snapshot_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("efsane_data.json");
    assert!(!path.exists());

    let store = RosterStore::load(&path).unwrap();

    assert!(path.exists());
    assert_eq!(store.claim_count(), 0);
    assert_eq!(store.pending_count(), 0);
}

/// Tests that a reload reproduces the mutated state exactly.
///
/// Expected: claims and pending entries identical after reload
#[test]
fn round_trips_snapshot() {
    let (_dir, mut store) = temp_store();

    claim(&mut store, "user-1", "Code-Man", 123_456);
    store
        .submit_application("user-2", "BoraLo", "msg-9", true)
        .unwrap();

    let reloaded = RosterStore::load(store.path()).unwrap();

    assert_eq!(reloaded.claim("Code-Man"), store.claim("Code-Man"));
    assert_eq!(reloaded.pending_for("user-2"), store.pending_for("user-2"));
}

/// Tests the on-disk schema against the legacy field names.
///
/// The snapshot must stay readable by (and from) the previous deployment:
/// top-level `claimedEfsaneNames` / `pendingApplications` maps with
/// `userId`/`claimDate` and `efsaneAdi`/`messageId`/`isEfsaneviDunya`
/// fields.
///
/// Expected: raw JSON uses the legacy names
#[test]
fn uses_legacy_field_names() {
    let (_dir, mut store) = temp_store();

    claim(&mut store, "user-1", "Code-Man", 777);
    store
        .submit_application("user-2", "BoraLo", "msg-9", true)
        .unwrap();

    let raw = std::fs::read_to_string(store.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let record = &value["claimedEfsaneNames"]["Code-Man"];
    assert_eq!(record["userId"], "user-1");
    assert_eq!(record["claimDate"], 777);

    let pending = &value["pendingApplications"]["user-2"];
    assert_eq!(pending["efsaneAdi"], "BoraLo");
    assert_eq!(pending["messageId"], "msg-9");
    assert_eq!(pending["isEfsaneviDunya"], true);
}

/// Tests loading a snapshot written by the previous deployment.
///
/// Expected: legacy JSON parses into the same in-memory state
#[test]
fn reads_legacy_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("efsane_data.json");
    std::fs::write(
        &path,
        r#"{
            "claimedEfsaneNames": {
                "Code-Man": { "userId": "111", "claimDate": 1700000000000 }
            },
            "pendingApplications": {
                "222": { "efsaneAdi": "BoraLo", "messageId": "333", "isEfsaneviDunya": true }
            }
        }"#,
    )
    .unwrap();

    let store = RosterStore::load(&path).unwrap();

    assert_eq!(store.claim("Code-Man").unwrap().user_id, "111");
    assert_eq!(store.claim("Code-Man").unwrap().claim_date, 1_700_000_000_000);
    let pending = store.pending_for("222").unwrap();
    assert_eq!(pending.efsane_adi, "BoraLo");
    assert!(pending.is_efsanevi_dunya);
}

/// Tests that a snapshot with missing top-level maps loads as empty.
///
/// Expected: empty store
#[test]
fn tolerates_missing_top_level_maps() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("efsane_data.json");
    std::fs::write(&path, "{}").unwrap();

    let store = RosterStore::load(&path).unwrap();

    assert_eq!(store.claim_count(), 0);
    assert_eq!(store.pending_count(), 0);
}
