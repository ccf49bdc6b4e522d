use serde::{Deserialize, Serialize};

use navigator_core::model::{CompletedTile, JourneyPhase, MilestoneFacts, ProgressLedger};
use navigator_core::time::Clock;

use super::service::JourneyService;
use crate::error::SnapshotError;

/// Persisted shape of a journey session.
///
/// Mirrors the session's two owned pieces of state (facts and ledger) so a
/// host can serialize without reaching into the domain layer. The restore
/// path goes through `ProgressLedger::from_persisted`, so a hand-edited
/// snapshot cannot smuggle in a stage that disagrees with its history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    facts: MilestoneFacts,
    completed: Vec<CompletedTile>,
    journey_stage: Option<JourneyPhase>,
}

impl SessionSnapshot {
    #[must_use]
    pub fn from_session(session: &JourneyService) -> Self {
        Self {
            facts: *session.facts(),
            completed: session.completed_tiles().to_vec(),
            journey_stage: session.recorded_stage(),
        }
    }

    /// Rebuild a session from this snapshot.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError::Ledger` if the snapshot's stage disagrees with
    /// its most recent completion.
    pub fn into_session(self, clock: Clock) -> Result<JourneyService, SnapshotError> {
        let ledger = ProgressLedger::from_persisted(self.completed, self.journey_stage)?;
        Ok(JourneyService::from_parts(self.facts, ledger, clock))
    }
}

/// Serialize a session to the JSON snapshot format.
///
/// # Errors
///
/// Returns `SnapshotError::Serialization` if encoding fails.
pub fn snapshot(session: &JourneyService) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string(&SessionSnapshot::from_session(
        session,
    ))?)
}

/// Restore a session from a JSON snapshot.
///
/// # Errors
///
/// Returns `SnapshotError::Serialization` for malformed JSON and
/// `SnapshotError::Ledger` for a snapshot violating the stage invariant.
pub fn restore(json: &str, clock: Clock) -> Result<JourneyService, SnapshotError> {
    let snapshot: SessionSnapshot = serde_json::from_str(json)?;
    snapshot.into_session(clock)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use navigator_core::time::fixed_now;

    #[test]
    fn snapshot_roundtrip_preserves_state() {
        let mut session = JourneyService::new(
            MilestoneFacts::new().with_guided_care_completed(true),
        )
        .with_clock(Clock::fixed(fixed_now()));
        session
            .mark_tile_complete("care_plan_basics", JourneyPhase::Planning)
            .unwrap();

        let json = snapshot(&session).unwrap();
        let restored = restore(&json, Clock::fixed(fixed_now())).unwrap();

        assert_eq!(restored.facts(), session.facts());
        assert_eq!(restored.completed_tiles(), session.completed_tiles());
        assert_eq!(restored.recorded_stage(), Some(JourneyPhase::Planning));
    }

    #[test]
    fn restore_rejects_tampered_stage() {
        let mut session =
            JourneyService::new(MilestoneFacts::default()).with_clock(Clock::fixed(fixed_now()));
        session
            .mark_tile_complete("discovery_overview", JourneyPhase::Discovery)
            .unwrap();

        let json = snapshot(&session)
            .unwrap()
            .replace("\"journey_stage\":\"discovery\"", "\"journey_stage\":\"planning\"");
        let err = restore(&json, Clock::fixed(fixed_now())).unwrap_err();
        assert!(matches!(err, SnapshotError::Ledger(_)));
    }

    #[test]
    fn restore_rejects_malformed_json() {
        let err = restore("{not json", Clock::default()).unwrap_err();
        assert!(matches!(err, SnapshotError::Serialization(_)));
    }
}
