use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::phase::JourneyPhase;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TileError {
    #[error("tile key cannot be empty")]
    EmptyKey,
}

//
// ─── TILE KEY ──────────────────────────────────────────────────────────────────
//

/// Identifier of a tile (a unit of content a user can mark complete).
///
/// Keys are host-chosen strings such as `discovery_overview`; surrounding
/// whitespace is trimmed and empty keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileKey(String);

impl TileKey {
    /// Creates a tile key.
    ///
    /// # Errors
    ///
    /// Returns `TileError::EmptyKey` if the key is empty or whitespace-only.
    pub fn new(key: impl Into<String>) -> Result<Self, TileError> {
        let key = key.into();
        let trimmed = key.trim();
        if trimmed.is_empty() {
            return Err(TileError::EmptyKey);
        }
        Ok(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TileKey {
    type Err = TileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

//
// ─── COMPLETED TILE ────────────────────────────────────────────────────────────
//

/// Record of a single tile completion.
///
/// Immutable once created. The ledger keeps these in completion order, which
/// is the authoritative order for display; the timestamp exists for hosts
/// that render a "completed on" caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedTile {
    key: TileKey,
    phase: JourneyPhase,
    completed_at: DateTime<Utc>,
}

impl CompletedTile {
    #[must_use]
    pub fn new(key: TileKey, phase: JourneyPhase, completed_at: DateTime<Utc>) -> Self {
        Self {
            key,
            phase,
            completed_at,
        }
    }

    #[must_use]
    pub fn key(&self) -> &TileKey {
        &self.key
    }

    #[must_use]
    pub fn phase(&self) -> JourneyPhase {
        self.phase
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn tile_key_rejects_empty() {
        assert_eq!(TileKey::new("").unwrap_err(), TileError::EmptyKey);
        assert_eq!(TileKey::new("   ").unwrap_err(), TileError::EmptyKey);
    }

    #[test]
    fn tile_key_trims_whitespace() {
        let key = TileKey::new("  discovery_overview  ").unwrap();
        assert_eq!(key.as_str(), "discovery_overview");
    }

    #[test]
    fn tile_key_parses_from_str() {
        let key: TileKey = "care_options".parse().unwrap();
        assert_eq!(key.to_string(), "care_options");
    }

    #[test]
    fn completed_tile_accessors() {
        let key = TileKey::new("discovery_overview").unwrap();
        let record = CompletedTile::new(key.clone(), JourneyPhase::Discovery, fixed_now());
        assert_eq!(record.key(), &key);
        assert_eq!(record.phase(), JourneyPhase::Discovery);
        assert_eq!(record.completed_at(), fixed_now());
    }
}
