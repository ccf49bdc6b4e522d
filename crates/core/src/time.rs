use chrono::{DateTime, Utc};

/// Time source for services and tests.
///
/// Production code uses the system clock; tests pin a fixed instant so
/// recorded completion timestamps stay deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    /// Returns a clock pinned at the given instant.
    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    /// Current time according to this clock.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(at) => *at,
        }
    }
}

/// Deterministic timestamp for tests and doc examples (2024-05-01T00:00:00Z).
///
/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(1_714_521_600, 0)
        .expect("fixed timestamp should be valid")
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
