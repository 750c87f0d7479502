#![forbid(unsafe_code)]

pub mod app_services;
pub mod config;
pub mod error;
pub mod progress_store;
pub mod reset_flow;

pub use portal_core::Clock;

pub use app_services::AppServices;
pub use config::{NotificationSettings, PortalConfig};
pub use error::{ConfigError, ResetError};
pub use progress_store::ProgressStore;
pub use reset_flow::{ConfirmationToken, FlowEffects, ResetFlow, ResetOutcome};
