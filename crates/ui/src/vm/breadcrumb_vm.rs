use portal_core::model::{SeparatorFill, Step, StepStatus};

const ANIMATION_STAGGER_MS: u32 = 100;

/// Badge drawn in the step circle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepIndicator {
    Check,
    Numeral(u32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TitleEmphasis {
    Emphasized,
    Muted,
}

/// UI-ready representation of one breadcrumb entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreadcrumbItemVm {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub status: StepStatus,
    pub indicator: StepIndicator,
    /// Connector below this step; `None` for the last step.
    pub separator: Option<SeparatorFill>,
    pub emphasis: TitleEmphasis,
    pub animation_delay_ms: u32,
}

impl BreadcrumbItemVm {
    #[must_use]
    pub fn item_class(&self) -> &'static str {
        match self.status {
            StepStatus::Completed => "breadcrumb-item step-completed",
            StepStatus::Current => "breadcrumb-item step-current",
            StepStatus::Upcoming => "breadcrumb-item step-upcoming",
        }
    }

    #[must_use]
    pub fn indicator_class(&self) -> &'static str {
        match self.status {
            StepStatus::Completed => "step-indicator step-indicator--completed",
            StepStatus::Current => "step-indicator step-indicator--current",
            StepStatus::Upcoming => "step-indicator step-indicator--upcoming",
        }
    }

    #[must_use]
    pub fn title_class(&self) -> &'static str {
        match self.emphasis {
            TitleEmphasis::Emphasized => "step-title step-title--emphasized",
            TitleEmphasis::Muted => "step-title step-title--muted",
        }
    }

    #[must_use]
    pub fn separator_class(&self) -> Option<&'static str> {
        self.separator.map(|fill| match fill {
            SeparatorFill::Filled => "breadcrumb-separator breadcrumb-separator--filled",
            SeparatorFill::Empty => "breadcrumb-separator breadcrumb-separator--empty",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreadcrumbVm {
    pub items: Vec<BreadcrumbItemVm>,
}

impl BreadcrumbVm {
    #[must_use]
    pub fn statuses(&self) -> Vec<StepStatus> {
        self.items.iter().map(|item| item.status).collect()
    }
}

/// Map steps and the current step to breadcrumb entries.
///
/// Steps are rendered in the order given; ids are not re-validated here.
#[must_use]
pub fn map_breadcrumb(steps: &[Step], current_step: u32) -> BreadcrumbVm {
    let last = steps.len().saturating_sub(1);
    let items = steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let status = StepStatus::classify(step.id(), current_step);
            let indicator = if status.is_completed() {
                StepIndicator::Check
            } else {
                StepIndicator::Numeral(step.id().value())
            };
            let emphasis = if status.is_current() {
                TitleEmphasis::Emphasized
            } else {
                TitleEmphasis::Muted
            };
            BreadcrumbItemVm {
                id: step.id().value(),
                title: step.title().to_owned(),
                description: step.description().to_owned(),
                status,
                indicator,
                separator: (index < last).then(|| SeparatorFill::after(status)),
                emphasis,
                animation_delay_ms: u32::try_from(index)
                    .unwrap_or(u32::MAX)
                    .saturating_mul(ANIMATION_STAGGER_MS),
            }
        })
        .collect();

    BreadcrumbVm { items }
}
