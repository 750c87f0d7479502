mod answer;
mod branding;
mod ids;
mod notification;
mod participant;
mod progress;
mod route;
mod session_key;
mod status;
mod step;

pub use answer::StepAnswer;
pub use branding::{Branding, DashboardContent};
pub use ids::StepId;
pub use notification::Notification;
pub use participant::{ParticipantId, ParticipantIdError};
pub use progress::{FIRST_STEP, ProgressError, ProgressState};
pub use route::FlowRoute;
pub use session_key::SessionKey;
pub use status::{SeparatorFill, StepStatus};
pub use step::{Step, StepCatalog, StepCatalogError};
