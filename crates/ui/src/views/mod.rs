mod breadcrumb;
mod dashboard;
mod header;
mod state;
mod step;
mod toaster;
mod welcome;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use breadcrumb::Breadcrumb;
pub use dashboard::DashboardView;
pub use header::Header;
pub use state::ViewError;
pub use step::StepView;
pub use toaster::{ToastQueue, Toaster, use_toast_queue_provider};
pub use welcome::WelcomeView;
