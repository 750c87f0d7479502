mod breadcrumb_vm;
mod dashboard_vm;
mod step_vm;
mod toast_vm;
mod welcome_vm;

pub use breadcrumb_vm::{
    BreadcrumbItemVm, BreadcrumbVm, StepIndicator, TitleEmphasis, map_breadcrumb,
};
pub use dashboard_vm::{DashboardVm, map_dashboard};
pub use step_vm::{StepPageMode, StepPageVm, map_step_page};
pub use toast_vm::ToastVm;
pub use welcome_vm::{WelcomeVm, map_welcome};
