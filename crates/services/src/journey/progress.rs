use navigator_core::model::JourneyPhase;

/// Aggregated view of journey progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JourneyProgress {
    /// Number of recorded tile completions.
    pub completed: usize,
    /// Effective phase (recorded stage, or derived while unset).
    pub phase: JourneyPhase,
    /// Whether any completion has written a stage yet.
    pub stage_recorded: bool,
    /// Whether the recorded stage agrees with the milestone facts.
    pub is_consistent: bool,
}
