use portal_core::model::{DashboardContent, ParticipantId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardVm {
    pub heading: String,
    pub greeting: String,
    pub next_steps_title: String,
    pub next_steps: Vec<String>,
}

/// A missing participant id renders as an empty value.
#[must_use]
pub fn map_dashboard(participant: Option<&ParticipantId>, content: &DashboardContent) -> DashboardVm {
    let participant = participant.map(ParticipantId::as_str).unwrap_or_default();
    DashboardVm {
        heading: content.heading.clone(),
        greeting: format!(
            "Great job, Participant {participant}! You've successfully completed all onboarding steps and you're ready to start the workshop."
        ),
        next_steps_title: content.next_steps_title.clone(),
        next_steps: content.next_steps.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greets_participant_by_id() {
        let id = ParticipantId::new("P-042").unwrap();
        let vm = map_dashboard(Some(&id), &DashboardContent::default());
        assert!(vm.greeting.starts_with("Great job, Participant P-042!"));
        assert_eq!(vm.heading, "Onboarding Complete!");
        assert_eq!(vm.next_steps.len(), 4);
    }

    #[test]
    fn missing_participant_renders_empty() {
        let vm = map_dashboard(None, &DashboardContent::default());
        assert!(vm.greeting.starts_with("Great job, Participant !"));
    }
}
