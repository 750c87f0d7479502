use std::sync::Arc;

use portal_core::model::{Branding, DashboardContent};
use storage::SessionStorage;
use tracing::info;

use crate::Clock;
use crate::config::PortalConfig;
use crate::progress_store::ProgressStore;
use crate::reset_flow::ResetFlow;

/// Assembles the app-facing services from a validated configuration.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    branding: Arc<Branding>,
    dashboard: Arc<DashboardContent>,
    progress: Arc<ProgressStore>,
    reset_flow: Arc<ResetFlow>,
}

impl AppServices {
    #[must_use]
    pub fn new(config: &PortalConfig, clock: Clock, storage: Arc<dyn SessionStorage>) -> Self {
        let catalog = Arc::new(config.catalog().clone());
        let progress = Arc::new(ProgressStore::new(clock, catalog, storage));
        let reset_flow = Arc::new(ResetFlow::new(
            Arc::clone(&progress),
            clock,
            config.reset_notice_ttl(),
        ));
        info!(
            steps = config.catalog().total_steps(),
            "onboarding services ready"
        );

        Self {
            clock,
            branding: Arc::new(config.branding().clone()),
            dashboard: Arc::new(config.dashboard().clone()),
            progress,
            reset_flow,
        }
    }

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
    pub fn progress(&self) -> Arc<ProgressStore> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn reset_flow(&self) -> Arc<ResetFlow> {
        Arc::clone(&self.reset_flow)
    }
}
