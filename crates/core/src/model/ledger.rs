use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::phase::JourneyPhase;
use crate::model::tile::{CompletedTile, TileError, TileKey};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LedgerError {
    #[error(transparent)]
    Tile(#[from] TileError),

    #[error("journey stage {found:?} does not match the most recent completion {expected:?}")]
    StageMismatch {
        expected: Option<JourneyPhase>,
        found: Option<JourneyPhase>,
    },
}

//
// ─── PROGRESS LEDGER ───────────────────────────────────────────────────────────
//

/// Append-only history of tile completions plus the current-phase pointer.
///
/// One ledger per user session, created empty at session start and discarded
/// when the session ends. `journey_stage` is `None` until the first
/// completion is recorded; callers resolve that zero-state through the phase
/// resolver before first render (the services layer does this once, in
/// `current_phase`).
///
/// Invariant: after any successful `mark_tile_complete`, `journey_stage`
/// equals the phase of the most recent record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressLedger {
    completed: Vec<CompletedTile>,
    journey_stage: Option<JourneyPhase>,
}

impl ProgressLedger {
    /// Creates an empty ledger with the journey stage unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate a ledger from persisted state.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::StageMismatch` if `journey_stage` disagrees with
    /// the phase of the most recent record.
    pub fn from_persisted(
        completed: Vec<CompletedTile>,
        journey_stage: Option<JourneyPhase>,
    ) -> Result<Self, LedgerError> {
        let expected = completed.last().map(CompletedTile::phase);
        if expected != journey_stage {
            return Err(LedgerError::StageMismatch {
                expected,
                found: journey_stage,
            });
        }
        Ok(Self {
            completed,
            journey_stage,
        })
    }

    /// Record a tile completion.
    ///
    /// Appends a record and unconditionally overwrites the journey stage with
    /// `phase` (last write wins). The phase is trusted as given; it is not
    /// re-derived from milestone facts, so a caller can record a completion
    /// under a stage that disagrees with the user's flags.
    ///
    /// Duplicate keys are allowed; each call appends its own record.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Tile` if `key` is empty or whitespace-only. The
    /// ledger is left unchanged on error.
    pub fn mark_tile_complete(
        &mut self,
        key: &str,
        phase: JourneyPhase,
        completed_at: DateTime<Utc>,
    ) -> Result<(), LedgerError> {
        let key = TileKey::new(key)?;
        self.completed.push(CompletedTile::new(key, phase, completed_at));
        self.journey_stage = Some(phase);
        Ok(())
    }

    /// Full completion history, oldest first.
    #[must_use]
    pub fn completed_tiles(&self) -> &[CompletedTile] {
        &self.completed
    }

    /// Stage written by the most recent completion, `None` while unset.
    #[must_use]
    pub fn current_stage(&self) -> Option<JourneyPhase> {
        self.journey_stage
    }

    /// True if any record carries the given key.
    #[must_use]
    pub fn has_completed(&self, key: &str) -> bool {
        self.completed.iter().any(|tile| tile.key().as_str() == key)
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
