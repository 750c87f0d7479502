use portal_core::model::{ProgressState, StepAnswer, StepCatalog, StepId, StepStatus};

/// How a step page behaves given the participant's progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepPageMode {
    /// The current step: editable, can be completed.
    Active,
    /// Already completed: read-only.
    Review,
    /// Not reached yet.
    Locked,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepPageVm {
    pub id: StepId,
    pub title: String,
    pub description: String,
    pub position_label: String,
    pub mode: StepPageMode,
    pub continue_label: &'static str,
    pub saved_response: Option<String>,
}

/// `None` when `step_id` is not in the catalog.
#[must_use]
pub fn map_step_page(
    catalog: &StepCatalog,
    progress: ProgressState,
    step_id: StepId,
    saved: Option<&StepAnswer>,
) -> Option<StepPageVm> {
    let step = catalog.get(step_id)?;
    let mode = match progress.status_of(step_id) {
        StepStatus::Current => StepPageMode::Active,
        StepStatus::Completed => StepPageMode::Review,
        StepStatus::Upcoming => StepPageMode::Locked,
    };
    let is_last = step_id.value() == catalog.total_steps();

    Some(StepPageVm {
        id: step_id,
        title: step.title().to_owned(),
        description: step.description().to_owned(),
        position_label: format!("Step {} of {}", step_id, catalog.total_steps()),
        mode,
        continue_label: if is_last { "Finish" } else { "Continue" },
        saved_response: saved.map(|answer| answer.response.clone()),
    })
}
