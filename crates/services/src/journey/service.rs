use navigator_core::model::{CompletedTile, JourneyPhase, MilestoneFacts, ProgressLedger};
use navigator_core::resolver::resolve_phase;
use navigator_core::time::Clock;

use super::progress::JourneyProgress;
use crate::error::JourneyError;

//
// ─── JOURNEY SERVICE ───────────────────────────────────────────────────────────
//

/// Per-session journey context: milestone facts, completion ledger, clock.
///
/// One instance per user session, created at session start and discarded at
/// session end. The service assumes a single request thread per session;
/// hosts that share a session across concurrent requests (two browser tabs)
/// go through `JourneyRegistry`, which serializes access per session key.
#[derive(Debug, Clone)]
pub struct JourneyService {
    facts: MilestoneFacts,
    ledger: ProgressLedger,
    clock: Clock,
}

impl JourneyService {
    /// Create a fresh session context with an empty ledger.
    #[must_use]
    pub fn new(facts: MilestoneFacts) -> Self {
        Self {
            facts,
            ledger: ProgressLedger::new(),
            clock: Clock::default(),
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub(crate) fn from_parts(facts: MilestoneFacts, ledger: ProgressLedger, clock: Clock) -> Self {
        Self {
            facts,
            ledger,
            clock,
        }
    }

    #[must_use]
    pub fn facts(&self) -> &MilestoneFacts {
        &self.facts
    }

    #[must_use]
    pub fn ledger(&self) -> &ProgressLedger {
        &self.ledger
    }

    /// Replace the milestone facts wholesale, e.g. after a host session sync.
    pub fn update_facts(&mut self, facts: MilestoneFacts) {
        self.facts = facts;
    }

    /// Record that the user finished guided care.
    pub fn record_guided_care_completed(&mut self) {
        self.facts = self.facts.with_guided_care_completed(true);
    }

    /// Record that the user booked an advisor.
    pub fn record_advisor_booked(&mut self) {
        self.facts = self.facts.with_advisor_booked(true);
    }

    /// Phase derived from the current milestone facts.
    #[must_use]
    pub fn derived_phase(&self) -> JourneyPhase {
        resolve_phase(&self.facts)
    }

    /// Stage written by the most recent tile completion, `None` while unset.
    #[must_use]
    pub fn recorded_stage(&self) -> Option<JourneyPhase> {
        self.ledger.current_stage()
    }

    /// Effective phase for rendering.
    ///
    /// The recorded stage wins once a completion exists; until then the phase
    /// is derived from milestone facts, so hosts never observe the unset
    /// state through this accessor.
    #[must_use]
    pub fn current_phase(&self) -> JourneyPhase {
        self.ledger
            .current_stage()
            .unwrap_or_else(|| self.derived_phase())
    }

    /// True when the recorded stage agrees with the facts-derived phase.
    ///
    /// The two can transiently disagree because completions trust the phase
    /// their caller supplies. A session with no recorded stage is consistent
    /// by definition.
    #[must_use]
    pub fn stage_matches_facts(&self) -> bool {
        self.ledger
            .current_stage()
            .is_none_or(|stage| stage == self.derived_phase())
    }

    /// Record a tile completion at the current clock time.
    ///
    /// Last write wins for the journey stage; the full history is kept in
    /// completion order.
    ///
    /// # Errors
    ///
    /// Returns `JourneyError::Ledger` if the key is empty or whitespace-only;
    /// the session is left unchanged.
    pub fn mark_tile_complete(
        &mut self,
        key: &str,
        phase: JourneyPhase,
    ) -> Result<(), JourneyError> {
        let completed_at = self.clock.now();
        self.ledger.mark_tile_complete(key, phase, completed_at)?;
        Ok(())
    }

    /// Full completion history, oldest first.
    #[must_use]
    pub fn completed_tiles(&self) -> &[CompletedTile] {
        self.ledger.completed_tiles()
    }

    #[must_use]
    pub fn has_completed(&self, key: &str) -> bool {
        self.ledger.has_completed(key)
    }

    /// Returns an aggregate of the current journey progress.
    #[must_use]
    pub fn progress(&self) -> JourneyProgress {
        JourneyProgress {
            completed: self.ledger.completed_count(),
            phase: self.current_phase(),
            stage_recorded: self.ledger.current_stage().is_some(),
            is_consistent: self.stage_matches_facts(),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
