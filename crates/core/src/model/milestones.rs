use serde::{Deserialize, Serialize};

/// Host-session key for the guided-care milestone flag.
pub const GUIDED_CARE_COMPLETED: &str = "guided_care_completed";

/// Host-session key for the advisor-booking milestone flag.
pub const ADVISOR_BOOKED: &str = "advisor_booked";

/// Milestone flags recorded about a user by the hosting session.
///
/// Read-only input to phase resolution. A flag the host never recorded is
/// simply false, so `Default` describes a brand-new user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneFacts {
    guided_care_completed: bool,
    advisor_booked: bool,
}

impl MilestoneFacts {
    /// Facts for a user with no milestones reached.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build facts from `(key, value)` pairs as a host session stores them.
    ///
    /// Unknown keys are ignored; keys that never appear stay false.
    #[must_use]
    pub fn from_flags<'a, I>(flags: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        let mut facts = Self::default();
        for (key, value) in flags {
            match key {
                GUIDED_CARE_COMPLETED => facts.guided_care_completed = value,
                ADVISOR_BOOKED => facts.advisor_booked = value,
                _ => {}
            }
        }
        facts
    }

    #[must_use]
    pub fn with_guided_care_completed(mut self, value: bool) -> Self {
        self.guided_care_completed = value;
        self
    }

    #[must_use]
    pub fn with_advisor_booked(mut self, value: bool) -> Self {
        self.advisor_booked = value;
        self
    }

    #[must_use]
    pub fn guided_care_completed(&self) -> bool {
        self.guided_care_completed
    }

    #[must_use]
    pub fn advisor_booked(&self) -> bool {
        self.advisor_booked
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_false() {
        let facts = MilestoneFacts::new();
        assert!(!facts.guided_care_completed());
        assert!(!facts.advisor_booked());
    }

    #[test]
    fn from_flags_reads_known_keys() {
        let facts = MilestoneFacts::from_flags([
            (GUIDED_CARE_COMPLETED, true),
            (ADVISOR_BOOKED, false),
        ]);
        assert!(facts.guided_care_completed());
        assert!(!facts.advisor_booked());
    }

    #[test]
    fn from_flags_ignores_unknown_keys() {
        let facts = MilestoneFacts::from_flags([("favorite_color_set", true)]);
        assert_eq!(facts, MilestoneFacts::default());
    }

    #[test]
    fn from_flags_missing_keys_stay_false() {
        let facts = MilestoneFacts::from_flags([(ADVISOR_BOOKED, true)]);
        assert!(!facts.guided_care_completed());
        assert!(facts.advisor_booked());
    }

    #[test]
    fn with_builders_set_flags() {
        let facts = MilestoneFacts::new()
            .with_guided_care_completed(true)
            .with_advisor_booked(true);
        assert!(facts.guided_care_completed());
        assert!(facts.advisor_booked());
    }
}
