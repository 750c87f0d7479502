//! Shared error types for the services crate.

use std::path::PathBuf;

use portal_core::model::StepCatalogError;
use thiserror::Error;

/// Errors raised while loading the portal configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Catalog(#[from] StepCatalogError),
    #[error("reset notification ttl must be greater than zero")]
    ZeroTtl,
}

/// Errors emitted by `ResetFlow`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ResetError {
    #[error("no reset is awaiting confirmation")]
    NoPendingRequest,
    #[error("confirmation token does not match the pending reset")]
    StaleToken,
}
