use std::fmt;

use crate::model::StepId;

const ANSWER_PREFIX: &str = "answers.step.";

/// Keys the onboarding flow owns in session storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionKey {
    ParticipantId,
    CurrentStep,
    StepAnswer(StepId),
}

impl SessionKey {
    /// Parse a raw storage key back into a flow key.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "participantId" => Some(Self::ParticipantId),
            "currentStep" => Some(Self::CurrentStep),
            other => other
                .strip_prefix(ANSWER_PREFIX)
                .and_then(|id| id.parse::<u32>().ok())
                .map(|id| Self::StepAnswer(StepId::new(id))),
        }
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParticipantId => f.write_str("participantId"),
            Self::CurrentStep => f.write_str("currentStep"),
            Self::StepAnswer(id) => write!(f, "{ANSWER_PREFIX}{id}"),
        }
    }
}
