use portal_core::model::{ParticipantIdError, ProgressError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    InvalidParticipant,
    OutOfOrder,
    AlreadyComplete,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::InvalidParticipant => "Enter the participant id from your invitation.",
            Self::OutOfOrder => "This step is not the one you are on. Return to your current step.",
            Self::AlreadyComplete => "Onboarding is already complete.",
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<&ProgressError> for ViewError {
    fn from(err: &ProgressError) -> Self {
        match err {
            ProgressError::OutOfOrder { .. } | ProgressError::NotReached(_) => Self::OutOfOrder,
            ProgressError::AlreadyComplete => Self::AlreadyComplete,
            _ => Self::Unknown,
        }
    }
}

impl From<&ParticipantIdError> for ViewError {
    fn from(_: &ParticipantIdError) -> Self {
        Self::InvalidParticipant
    }
}
