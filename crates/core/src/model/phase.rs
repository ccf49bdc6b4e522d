use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Error returned when a wire name does not match any journey phase.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown journey phase: {0:?}")]
pub struct ParsePhaseError(String);

//
// ─── JOURNEY PHASE ─────────────────────────────────────────────────────────────
//

/// Where a user sits in the overall product lifecycle.
///
/// The three stages are totally ordered: discovery precedes planning, and
/// planning precedes post-planning. Classification out of milestone facts is
/// first-match-wins, so inserting a new phase must keep this ordering intact.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum JourneyPhase {
    /// Getting oriented; guided care has not been completed yet.
    Discovery,
    /// Guided care done, no advisor booked yet.
    Planning,
    /// Advisor booked; everything after the planning milestone.
    PostPlanning,
}

impl JourneyPhase {
    /// All phases in lifecycle order.
    pub const ALL: [JourneyPhase; 3] = [
        JourneyPhase::Discovery,
        JourneyPhase::Planning,
        JourneyPhase::PostPlanning,
    ];

    /// Stable wire name, as hosts store it in session state.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            JourneyPhase::Discovery => "discovery",
            JourneyPhase::Planning => "planning",
            JourneyPhase::PostPlanning => "post_planning",
        }
    }
}

impl fmt::Display for JourneyPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JourneyPhase {
    type Err = ParsePhaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "discovery" => Ok(JourneyPhase::Discovery),
            "planning" => Ok(JourneyPhase::Planning),
            "post_planning" => Ok(JourneyPhase::PostPlanning),
            other => Err(ParsePhaseError(other.to_owned())),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_are_ordered_by_lifecycle() {
        assert!(JourneyPhase::Discovery < JourneyPhase::Planning);
        assert!(JourneyPhase::Planning < JourneyPhase::PostPlanning);
    }

    #[test]
    fn all_lists_phases_in_display_order() {
        let names: Vec<_> = JourneyPhase::ALL.iter().map(|p| p.as_str()).collect();
        assert_eq!(names, vec!["discovery", "planning", "post_planning"]);
    }

    #[test]
    fn wire_name_roundtrip() {
        for phase in JourneyPhase::ALL {
            let parsed: JourneyPhase = phase.as_str().parse().unwrap();
            assert_eq!(parsed, phase);
        }
    }

    #[test]
    fn rejects_unknown_wire_name() {
        let err = "not_a_phase".parse::<JourneyPhase>().unwrap_err();
        assert_eq!(err, ParsePhaseError("not_a_phase".to_owned()));
    }

    #[test]
    fn rejects_wrong_case() {
        assert!("Discovery".parse::<JourneyPhase>().is_err());
        assert!("POST_PLANNING".parse::<JourneyPhase>().is_err());
    }
}
