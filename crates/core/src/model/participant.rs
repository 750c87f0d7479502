use thiserror::Error;

const MAX_PARTICIPANT_ID_CHARS: usize = 64;

/// Validated participant identifier (trimmed, non-empty, bounded length).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParticipantId(String);

impl ParticipantId {
    /// # Errors
    ///
    /// Returns `ParticipantIdError` if the value is blank or too long.
    pub fn new(value: impl Into<String>) -> Result<Self, ParticipantIdError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ParticipantIdError::Empty);
        }
        if trimmed.chars().count() > MAX_PARTICIPANT_ID_CHARS {
            return Err(ParticipantIdError::TooLong {
                max: MAX_PARTICIPANT_ID_CHARS,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParticipantIdError {
    #[error("participant id cannot be empty")]
    Empty,
    #[error("participant id cannot exceed {max} characters")]
    TooLong { max: usize },
}
