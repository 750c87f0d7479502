use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{ProgressState, StepId};

/// One stage of the onboarding sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    id: StepId,
    title: String,
    #[serde(default)]
    description: String,
}

impl Step {
    #[must_use]
    pub fn new(id: StepId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> StepId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StepCatalogError {
    #[error("onboarding flow must contain at least one step")]
    Empty,
    #[error("step at position {position} has id {found}, expected {expected}")]
    NonContiguous {
        position: usize,
        expected: u32,
        found: StepId,
    },
    #[error("step {id} has a blank title")]
    BlankTitle { id: StepId },
    #[error("onboarding flow has too many steps")]
    TooManySteps,
}

/// Validated, ordered step list: non-empty, ids `1..=N` in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepCatalog {
    steps: Vec<Step>,
    total: u32,
}

impl StepCatalog {
    /// # Errors
    ///
    /// Returns `StepCatalogError` when the list is empty, ids are not
    /// contiguous from 1, or a title is blank.
    pub fn new(steps: Vec<Step>) -> Result<Self, StepCatalogError> {
        if steps.is_empty() {
            return Err(StepCatalogError::Empty);
        }
        let total = u32::try_from(steps.len()).map_err(|_| StepCatalogError::TooManySteps)?;

        for (position, (step, expected)) in steps.iter().zip(1_u32..).enumerate() {
            if step.id.value() != expected {
                return Err(StepCatalogError::NonContiguous {
                    position,
                    expected,
                    found: step.id,
                });
            }
            if step.title.trim().is_empty() {
                return Err(StepCatalogError::BlankTitle { id: step.id });
            }
        }

        Ok(Self { steps, total })
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    #[must_use]
    pub fn total_steps(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn get(&self, id: StepId) -> Option<&Step> {
        let idx = usize::try_from(id.value()).ok()?.checked_sub(1)?;
        self.steps.get(idx)
    }

    #[must_use]
    pub fn contains(&self, id: StepId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn initial_progress(&self) -> ProgressState {
        ProgressState::initial(self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(id: u32, title: &str) -> Step {
        Step::new(StepId::new(id), title, format!("About {title}"))
    }

    #[test]
    fn accepts_contiguous_steps() {
        let catalog =
            StepCatalog::new(vec![step(1, "Register"), step(2, "Survey"), step(3, "Setup")])
                .unwrap();
        assert_eq!(catalog.total_steps(), 3);
        assert_eq!(catalog.get(StepId::new(2)).unwrap().title(), "Survey");
        assert!(catalog.get(StepId::new(0)).is_none());
        assert!(!catalog.contains(StepId::new(4)));
    }

    #[test]
    fn rejects_empty_catalog() {
        assert_eq!(StepCatalog::new(Vec::new()), Err(StepCatalogError::Empty));
    }

    #[test]
    fn rejects_gaps_and_reordering() {
        let err = StepCatalog::new(vec![step(1, "A"), step(3, "C")]).unwrap_err();
        assert_eq!(
            err,
            StepCatalogError::NonContiguous {
                position: 1,
                expected: 2,
                found: StepId::new(3),
            }
        );

        let err = StepCatalog::new(vec![step(2, "B"), step(1, "A")]).unwrap_err();
        assert!(matches!(err, StepCatalogError::NonContiguous { position: 0, .. }));
    }

    #[test]
    fn rejects_blank_titles() {
        let err = StepCatalog::new(vec![step(1, "A"), step(2, "   ")]).unwrap_err();
        assert_eq!(err, StepCatalogError::BlankTitle { id: StepId::new(2) });
    }
}
