//! Roster state store: claims, pending applications, and their lifecycle.
//!
//! This is the single mutator for roster state. Callers never touch the maps
//! directly; every state transition goes through one of the operations below,
//! each of which checks the roster invariants and writes the JSON snapshot to
//! disk before returning.
//!
//! Invariants enforced on every transition:
//! - a user holds at most one claim
//! - a user has at most one pending application
//! - a user with an active claim may not open a new application
//! - a claim may be released by its owner only after the 48-hour cooldown
//!
//! Character names are NOT validated against the taxonomy; any string is a
//! valid name. Approving an application for an already-claimed name silently
//! overwrites the earlier claim.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{roster::RosterError, AppError};

/// Minimum dwell time before a claim may be released by its owner.
pub const CLAIM_COOLDOWN_MS: i64 = 48 * 60 * 60 * 1000;

const MS_PER_HOUR: i64 = 60 * 60 * 1000;

/// Ownership of one claimed character, keyed in the store by character name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimRecord {
    #[serde(rename = "userId")]
    pub user_id: String,
    /// Claim start in epoch milliseconds; the cooldown runs from here.
    #[serde(rename = "claimDate")]
    pub claim_date: i64,
}

/// One in-flight application, keyed in the store by applicant ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingApplication {
    #[serde(rename = "efsaneAdi")]
    pub efsane_adi: String,
    /// ID of the approval-channel message carrying the approve/reject buttons.
    #[serde(rename = "messageId")]
    pub message_id: String,
    #[serde(rename = "isEfsaneviDunya")]
    pub is_efsanevi_dunya: bool,
}

/// On-disk snapshot layout. Field names match the legacy data file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Snapshot {
    #[serde(rename = "claimedEfsaneNames", default)]
    claimed_efsane_names: HashMap<String, ClaimRecord>,
    #[serde(rename = "pendingApplications", default)]
    pending_applications: HashMap<String, PendingApplication>,
}

/// The roster state machine and its durable snapshot.
pub struct RosterStore {
    path: PathBuf,
    claims: HashMap<String, ClaimRecord>,
    pending: HashMap<String, PendingApplication>,
}

impl RosterStore {
    /// Loads the store from the snapshot file, initializing an empty snapshot
    /// if the file does not exist yet.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();

        if path.exists() {
            let raw = std::fs::read_to_string(&path).map_err(|e| AppError::PersistenceFailed {
                path: path.display().to_string(),
                source: e,
            })?;
            let snapshot: Snapshot = serde_json::from_str(&raw)?;

            let store = Self {
                path,
                claims: snapshot.claimed_efsane_names,
                pending: snapshot.pending_applications,
            };
            tracing::info!(
                "Loaded {} Efsane claims and {} pending applications",
                store.claims.len(),
                store.pending.len()
            );
            Ok(store)
        } else {
            let store = Self {
                path,
                claims: HashMap::new(),
                pending: HashMap::new(),
            };
            store.save()?;
            tracing::info!("No existing Efsane data file, initialized an empty one");
            Ok(store)
        }
    }

    /// Writes the full snapshot to disk. Called after every mutation.
    fn save(&self) -> Result<(), AppError> {
        let snapshot = Snapshot {
            claimed_efsane_names: self.claims.clone(),
            pending_applications: self.pending.clone(),
        };
        let raw = serde_json::to_string_pretty(&snapshot)?;
        std::fs::write(&self.path, raw).map_err(|e| AppError::PersistenceFailed {
            path: self.path.display().to_string(),
            source: e,
        })
    }

    /// The claim record for a character name, if claimed.
    pub fn claim(&self, efsane_adi: &str) -> Option<&ClaimRecord> {
        self.claims.get(efsane_adi)
    }

    /// The character a user currently owns, if any.
    pub fn claim_for_user(&self, user_id: &str) -> Option<(&str, &ClaimRecord)> {
        self.claims
            .iter()
            .find(|(_, record)| record.user_id == user_id)
            .map(|(key, record)| (key.as_str(), record))
    }

    /// The user's pending application, if any.
    pub fn pending_for(&self, applicant_id: &str) -> Option<&PendingApplication> {
        self.pending.get(applicant_id)
    }

    /// All claims, keyed by character name.
    pub fn claims(&self) -> impl Iterator<Item = (&String, &ClaimRecord)> {
        self.claims.iter()
    }

    /// All pending applications, keyed by applicant ID.
    pub fn pending(&self) -> impl Iterator<Item = (&String, &PendingApplication)> {
        self.pending.iter()
    }

    pub fn claim_count(&self) -> usize {
        self.claims.len()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Checks the per-user application invariants without mutating anything.
    ///
    /// Used before showing the application form, so the member gets the
    /// refusal immediately instead of after filling five fields.
    pub fn ensure_can_apply(&self, user_id: &str) -> Result<(), RosterError> {
        if self.claim_for_user(user_id).is_some() {
            return Err(RosterError::AlreadyClaimed);
        }
        if self.pending.contains_key(user_id) {
            return Err(RosterError::AlreadyPending);
        }
        Ok(())
    }

    /// Records a submitted application as pending.
    ///
    /// Fails with `AlreadyClaimed` or `AlreadyPending` if the user may not
    /// apply. The character name is taken as-is; it is not checked against
    /// the taxonomy or against existing claims.
    pub fn submit_application(
        &mut self,
        applicant_id: &str,
        efsane_adi: &str,
        message_id: &str,
        is_efsanevi_dunya: bool,
    ) -> Result<(), AppError> {
        self.ensure_can_apply(applicant_id)?;

        self.pending.insert(
            applicant_id.to_string(),
            PendingApplication {
                efsane_adi: efsane_adi.to_string(),
                message_id: message_id.to_string(),
                is_efsanevi_dunya,
            },
        );
        self.save()?;
        tracing::info!(
            "Recorded pending application for {} by user {}",
            efsane_adi,
            applicant_id
        );
        Ok(())
    }

    /// Approves the user's pending application, promoting it to a claim.
    ///
    /// The claim starts its cooldown at `now_ms`. If the character name is
    /// already claimed by someone else, that claim is overwritten without a
    /// conflict check.
    ///
    /// Returns the promoted application for the confirmation message.
    pub fn approve(
        &mut self,
        applicant_id: &str,
        now_ms: i64,
    ) -> Result<PendingApplication, AppError> {
        let application = self
            .pending
            .remove(applicant_id)
            .ok_or(RosterError::NoSuchPending)?;

        self.claims.insert(
            application.efsane_adi.clone(),
            ClaimRecord {
                user_id: applicant_id.to_string(),
                claim_date: now_ms,
            },
        );
        self.save()?;
        tracing::info!(
            "Efsane {} assigned to user {}",
            application.efsane_adi,
            applicant_id
        );
        Ok(application)
    }

    /// Rejects and discards the user's pending application.
    ///
    /// Returns the discarded application for the confirmation message.
    pub fn reject(&mut self, applicant_id: &str) -> Result<PendingApplication, AppError> {
        let application = self
            .pending
            .remove(applicant_id)
            .ok_or(RosterError::NoSuchPending)?;
        self.save()?;
        tracing::info!(
            "Rejected application for {} by user {}",
            application.efsane_adi,
            applicant_id
        );
        Ok(application)
    }

    /// Releases the user's claim, subject to the 48-hour cooldown.
    ///
    /// Returns the released character name on success. Before the cooldown
    /// elapses this fails with the remaining time rounded up to whole hours.
    pub fn release(&mut self, user_id: &str, now_ms: i64) -> Result<String, AppError> {
        let (efsane_adi, record) = self
            .claim_for_user(user_id)
            .map(|(key, record)| (key.to_string(), record.clone()))
            .ok_or(RosterError::NoClaim)?;

        let elapsed = now_ms - record.claim_date;
        if elapsed < CLAIM_COOLDOWN_MS {
            // remaining > 0 here, rounded up to whole hours.
            let remaining = record.claim_date + CLAIM_COOLDOWN_MS - now_ms;
            return Err(RosterError::CooldownNotElapsed {
                character_key: efsane_adi,
                remaining_hours: (remaining + MS_PER_HOUR - 1) / MS_PER_HOUR,
            }
            .into());
        }

        self.claims.remove(&efsane_adi);
        self.save()?;
        tracing::info!("Released Efsane {} held by user {}", efsane_adi, user_id);
        Ok(efsane_adi)
    }

    /// Clears all claims and pending applications unconditionally.
    ///
    /// The admin command's scope option only affects the confirmation text,
    /// never which records are cleared.
    pub fn reset_all(&mut self) -> Result<(), AppError> {
        self.claims.clear();
        self.pending.clear();
        self.save()?;
        tracing::info!("All Efsane claims and pending applications were reset");
        Ok(())
    }

    /// Path of the snapshot file backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
