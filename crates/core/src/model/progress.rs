use thiserror::Error;

use crate::model::{FlowRoute, StepId, StepStatus};

/// Step a fresh session starts on.
pub const FIRST_STEP: u32 = 1;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("step {0} is not part of the onboarding flow")]
    UnknownStep(StepId),
    #[error("onboarding is already complete")]
    AlreadyComplete,
    #[error("step {requested} cannot be completed while step {current} is current")]
    OutOfOrder { requested: StepId, current: u32 },
    #[error("step {0} has not been reached yet")]
    NotReached(StepId),
}

/// Position of a participant in the flow.
///
/// `current_step` stays within `1..=total_steps + 1`; the upper bound marks
/// the whole flow as complete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressState {
    current_step: u32,
    total_steps: u32,
}

impl ProgressState {
    #[must_use]
    pub fn initial(total_steps: u32) -> Self {
        Self {
            current_step: FIRST_STEP,
            total_steps,
        }
    }

    /// Rebuild from a stored value, clamping it into the valid range.
    #[must_use]
    pub fn from_persisted(current_step: u32, total_steps: u32) -> Self {
        let marker = total_steps.saturating_add(1);
        Self {
            current_step: current_step.clamp(FIRST_STEP, marker),
            total_steps,
        }
    }

    #[must_use]
    pub fn current_step(&self) -> u32 {
        self.current_step
    }

    #[must_use]
    pub fn total_steps(&self) -> u32 {
        self.total_steps
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current_step > self.total_steps
    }

    #[must_use]
    pub fn completed_count(&self) -> u32 {
        self.current_step - FIRST_STEP
    }

    /// The step in progress, or `None` once everything is complete.
    #[must_use]
    pub fn current_step_id(&self) -> Option<StepId> {
        (!self.is_complete()).then(|| StepId::new(self.current_step))
    }

    #[must_use]
    pub fn status_of(&self, step: StepId) -> StepStatus {
        StepStatus::classify(step, self.current_step)
    }

    /// Move forward by one step.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::AlreadyComplete` when the flow is finished.
    pub fn advance(self) -> Result<Self, ProgressError> {
        if self.is_complete() {
            return Err(ProgressError::AlreadyComplete);
        }
        Ok(Self {
            current_step: self.current_step + 1,
            ..self
        })
    }

    /// Move forward by one step, saturating at the completion marker.
    #[must_use]
    pub fn advance_clamped(self) -> Self {
        self.advance().unwrap_or(self)
    }

    /// Complete `step`, which must be the current step.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` when the step is unknown, the flow is already
    /// complete, or `step` is not the current step.
    pub fn complete(self, step: StepId) -> Result<Self, ProgressError> {
        if step.value() < FIRST_STEP || step.value() > self.total_steps {
            return Err(ProgressError::UnknownStep(step));
        }
        if self.is_complete() {
            return Err(ProgressError::AlreadyComplete);
        }
        if step.value() != self.current_step {
            return Err(ProgressError::OutOfOrder {
                requested: step,
                current: self.current_step,
            });
        }
        self.advance()
    }

    /// Where a participant with this progress should land.
    #[must_use]
    pub fn resume_route(&self) -> FlowRoute {
        match self.current_step_id() {
            Some(step) => FlowRoute::Step(step),
            None => FlowRoute::Dashboard,
        }
    }
}
