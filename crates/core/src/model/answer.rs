use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::StepId;

/// Free-form response a participant left on a step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepAnswer {
    pub step_id: StepId,
    pub response: String,
    pub recorded_at: DateTime<Utc>,
}

impl StepAnswer {
    #[must_use]
    pub fn new(step_id: StepId, response: impl Into<String>, recorded_at: DateTime<Utc>) -> Self {
        Self {
            step_id,
            response: response.into(),
            recorded_at,
        }
    }
}
