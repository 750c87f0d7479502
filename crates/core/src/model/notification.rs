use chrono::{DateTime, Duration, Utc};

/// A short-lived, user-visible message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    title: String,
    description: String,
    issued_at: DateTime<Utc>,
    ttl: Duration,
}

impl Notification {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            issued_at,
            ttl,
        }
    }

    /// Notice shown after a confirmed reset.
    #[must_use]
    pub fn progress_cleared(issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self::new(
            "Progress cleared",
            "All progress has been reset. Returning to welcome page...",
            issued_at,
            ttl,
        )
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.issued_at + self.ttl
    }

    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at()
    }

    /// Time left before expiry, zero once expired.
    #[must_use]
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        (self.expires_at() - now).max(Duration::zero())
    }
}
