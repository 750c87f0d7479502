use chrono::{DateTime, Duration, Utc};

/// Source of "now" for answer timestamps and notification expiry.
///
/// The portal reads wall-clock time; tests pin it with `Clock::Fixed` so
/// recorded answers and toast deadlines are reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    /// Wall-clock UTC.
    #[default]
    System,
    /// Always reports the stored instant until advanced.
    Fixed(DateTime<Utc>),
}

impl Clock {
    /// Wall-clock time, as used by the desktop binary.
    #[must_use]
    pub fn system() -> Self {
        Self::System
    }

    /// Pinned at `at`.
    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    /// Stamp for a new answer or notification.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(t) => *t,
        }
    }

    /// Move a fixed clock forward. No effect on `Clock::System`.
    pub fn advance(&mut self, delta: Duration) {
        if let Clock::Fixed(t) = self {
            *t += delta;
        }
    }
}

/// Deterministic timestamp for tests (2023-11-14T22:13:20Z).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_700_000_000;

/// `FIXED_TEST_TIMESTAMP` as a UTC instant.
///
/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0)
        .expect("fixed timestamp should be valid")
}

/// Clock pinned at `fixed_now()`; shared by service and view tests.
#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}
