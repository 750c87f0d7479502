use std::sync::Arc;

use portal_core::model::{Branding, DashboardContent};
use services::{AppServices, Clock, ProgressStore, ResetFlow};

/// What the UI needs from the application composition root.
pub trait UiApp: Send + Sync {
    fn clock(&self) -> Clock;
    fn branding(&self) -> Arc<Branding>;
    fn dashboard(&self) -> Arc<DashboardContent>;
    fn progress_store(&self) -> Arc<ProgressStore>;
    fn reset_flow(&self) -> Arc<ResetFlow>;
}

impl UiApp for AppServices {
    fn clock(&self) -> Clock {
        AppServices::clock(self)
    }

    fn branding(&self) -> Arc<Branding> {
        AppServices::branding(self)
    }

    fn dashboard(&self) -> Arc<DashboardContent> {
        AppServices::dashboard(self)
    }

    fn progress_store(&self) -> Arc<ProgressStore> {
        self.progress()
    }

    fn reset_flow(&self) -> Arc<ResetFlow> {
        AppServices::reset_flow(self)
    }
}

/// Session services handed to every view through Dioxus context.
///
/// Views reach session storage only through `ProgressStore`.
#[derive(Clone)]
pub struct AppContext {
    clock: Clock,
    branding: Arc<Branding>,
    dashboard: Arc<DashboardContent>,
    progress_store: Arc<ProgressStore>,
    reset_flow: Arc<ResetFlow>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            clock: app.clock(),
            branding: app.branding(),
            dashboard: app.dashboard(),
            progress_store: app.progress_store(),
            reset_flow: app.reset_flow(),
        }
    }

    /// Clock shared with the services, so toast expiry matches notice timestamps.
    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn branding(&self) -> Arc<Branding> {
        Arc::clone(&self.branding)
    }

    #[must_use]
    pub fn dashboard(&self) -> Arc<DashboardContent> {
        Arc::clone(&self.dashboard)
    }

    #[must_use]
    pub fn progress_store(&self) -> Arc<ProgressStore> {
        Arc::clone(&self.progress_store)
    }

    #[must_use]
    pub fn reset_flow(&self) -> Arc<ResetFlow> {
        Arc::clone(&self.reset_flow)
    }
}

/// Context the desktop binary installs at launch; view tests build one too.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
