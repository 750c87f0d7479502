use portal_core::model::{ParticipantId, ProgressState};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WelcomeVm {
    pub intro: String,
    pub cta_label: &'static str,
    pub progress_label: Option<String>,
}

#[must_use]
pub fn map_welcome(participant: Option<&ParticipantId>, progress: ProgressState) -> WelcomeVm {
    let started = participant.is_some() || progress.completed_count() > 0;
    let progress_label = started.then(|| {
        if progress.is_complete() {
            "All steps complete.".to_owned()
        } else {
            format!(
                "{} of {} steps complete.",
                progress.completed_count(),
                progress.total_steps()
            )
        }
    });

    WelcomeVm {
        intro: format!(
            "Enter the participant id from your invitation to start the {} onboarding steps.",
            progress.total_steps()
        ),
        cta_label: if started { "Resume onboarding" } else { "Begin onboarding" },
        progress_label,
    }
}
