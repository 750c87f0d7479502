use serde::{Deserialize, Serialize};

use crate::model::StepId;

/// Where a step sits relative to the participant's current step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepStatus {
    Completed,
    Current,
    Upcoming,
}

impl StepStatus {
    /// Classify a step against the current step.
    ///
    /// A `current_step` past the last step classifies every step as completed.
    #[must_use]
    pub fn classify(step_id: StepId, current_step: u32) -> Self {
        match step_id.value().cmp(&current_step) {
            std::cmp::Ordering::Less => Self::Completed,
            std::cmp::Ordering::Equal => Self::Current,
            std::cmp::Ordering::Greater => Self::Upcoming,
        }
    }

    #[must_use]
    pub fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }

    #[must_use]
    pub fn is_current(self) -> bool {
        matches!(self, Self::Current)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Current => "current",
            Self::Upcoming => "upcoming",
        }
    }
}

/// Fill of the connector drawn below a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeparatorFill {
    Filled,
    Empty,
}

impl SeparatorFill {
    /// The connector after a step is filled once that step is completed.
    #[must_use]
    pub fn after(status: StepStatus) -> Self {
        if status.is_completed() {
            Self::Filled
        } else {
            Self::Empty
        }
    }
}
