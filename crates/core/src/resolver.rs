//! Journey phase classification from milestone facts.

use crate::model::{JourneyPhase, MilestoneFacts};

/// Classify a user's current journey phase from their milestone facts.
///
/// First match wins, in lifecycle order: completing guided care is the gate
/// out of discovery, and booking an advisor is the gate out of planning. A
/// phase inserted later must keep this ladder totally ordered.
///
/// Pure and total: every input maps to exactly one phase, with no side
/// effects, so repeated calls with identical facts classify identically.
#[must_use]
pub fn resolve_phase(facts: &MilestoneFacts) -> JourneyPhase {
    if !facts.guided_care_completed() {
        return JourneyPhase::Discovery;
    }
    if !facts.advisor_booked() {
        return JourneyPhase::Planning;
    }
    JourneyPhase::PostPlanning
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
