use chrono::{DateTime, Utc};
use std::cmp::Ordering;

use navigator_core::model::{CompletedTile, JourneyPhase};

//
// ─── COMPLETED LIST ────────────────────────────────────────────────────────────
//

/// Presentation-agnostic list item for the completed-journeys section.
///
/// This is intentionally **not** a UI view-model:
/// - no pre-formatted strings
/// - no localization assumptions
///
/// The host may format timestamps (e.g., relative time, locale) as needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedTileListItem {
    pub key: String,
    pub phase: JourneyPhase,
    pub completed_at: DateTime<Utc>,
}

impl CompletedTileListItem {
    #[must_use]
    pub fn from_record(record: &CompletedTile) -> Self {
        Self {
            key: record.key().as_str().to_owned(),
            phase: record.phase(),
            completed_at: record.completed_at(),
        }
    }
}

/// Convert a completion history into list items, oldest first.
#[must_use]
pub fn completed_list(records: &[CompletedTile]) -> Vec<CompletedTileListItem> {
    records.iter().map(CompletedTileListItem::from_record).collect()
}

//
// ─── TILE GATING ───────────────────────────────────────────────────────────────
//

/// Render state of a tile relative to the user's current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileStatus {
    /// Belongs to a later phase; hosts typically hide these.
    Upcoming,
    /// Belongs to the current phase and has not been completed.
    Active,
    /// Belongs to an earlier phase and was never completed.
    Retired,
    /// Completed; shown read-only in the collapsible completed section.
    Completed,
}

/// Classify a tile for rendering. Completion wins over phase comparison.
#[must_use]
pub fn tile_status(
    tile_phase: JourneyPhase,
    current_phase: JourneyPhase,
    is_completed: bool,
) -> TileStatus {
    if is_completed {
        return TileStatus::Completed;
    }
    match tile_phase.cmp(&current_phase) {
        Ordering::Less => TileStatus::Retired,
        Ordering::Equal => TileStatus::Active,
        Ordering::Greater => TileStatus::Upcoming,
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
