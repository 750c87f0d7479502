//! Portal configuration: branding, dashboard copy, notification timing and
//! the ordered onboarding steps.

use std::path::Path;

use chrono::Duration;
use portal_core::model::{Branding, DashboardContent, Step, StepCatalog};
use serde::Deserialize;

use crate::error::ConfigError;

const BUILTIN_CONFIG: &str = include_str!("../config/onboarding.toml");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    pub reset_ttl_secs: u32,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self { reset_ttl_secs: 5 }
    }
}

/// Shape of the TOML file before step validation.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PortalConfigDraft {
    #[serde(default)]
    branding: Branding,
    #[serde(default)]
    notifications: NotificationSettings,
    #[serde(default)]
    dashboard: DashboardContent,
    steps: Vec<Step>,
}

impl PortalConfigDraft {
    fn validate(self) -> Result<PortalConfig, ConfigError> {
        if self.notifications.reset_ttl_secs == 0 {
            return Err(ConfigError::ZeroTtl);
        }
        let catalog = StepCatalog::new(self.steps)?;
        Ok(PortalConfig {
            branding: self.branding,
            notifications: self.notifications,
            dashboard: self.dashboard,
            catalog,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    branding: Branding,
    notifications: NotificationSettings,
    dashboard: DashboardContent,
    catalog: StepCatalog,
}

impl PortalConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` on malformed TOML or an invalid step list.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let draft: PortalConfigDraft = toml::from_str(raw)?;
        draft.validate()
    }

    /// Read, parse and validate a configuration file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or is invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// The configuration shipped with the portal.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the embedded file is invalid.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_toml_str(BUILTIN_CONFIG)
    }

    #[must_use]
    pub fn branding(&self) -> &Branding {
        &self.branding
    }

    #[must_use]
    pub fn dashboard(&self) -> &DashboardContent {
        &self.dashboard
    }

    #[must_use]
    pub fn catalog(&self) -> &StepCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn notifications(&self) -> NotificationSettings {
        self.notifications
    }

    #[must_use]
    pub fn reset_notice_ttl(&self) -> Duration {
        Duration::seconds(i64::from(self.notifications.reset_ttl_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::model::{StepCatalogError, StepId};

    #[test]
    fn builtin_config_is_valid() {
        let config = PortalConfig::builtin().unwrap();
        assert_eq!(config.branding().title, "Workshop Portal");
        assert_eq!(config.catalog().total_steps(), 4);
        assert_eq!(config.dashboard().next_steps.len(), 4);
        assert_eq!(config.reset_notice_ttl(), Duration::seconds(5));
    }

    #[test]
    fn missing_sections_take_defaults() {
        let config = PortalConfig::from_toml_str(
            r#"
            [[steps]]
            id = 1
            title = "Only step"
            "#,
        )
        .unwrap();
        assert_eq!(config.branding(), &Branding::default());
        assert_eq!(config.dashboard(), &DashboardContent::default());
        assert_eq!(config.notifications(), NotificationSettings::default());
        assert_eq!(config.catalog().get(StepId::new(1)).unwrap().description(), "");
    }

    #[test]
    fn rejects_non_contiguous_steps() {
        let err = PortalConfig::from_toml_str(
            r#"
            [[steps]]
            id = 1
            title = "First"

            [[steps]]
            id = 3
            title = "Third"
            "#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Catalog(StepCatalogError::NonContiguous { expected: 2, .. })
        ));
    }

    #[test]
    fn rejects_missing_steps_and_unknown_sections() {
        assert!(matches!(
            PortalConfig::from_toml_str("[branding]\ntitle = \"X\"\n"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            PortalConfig::from_toml_str("steps = []\n"),
            Err(ConfigError::Catalog(StepCatalogError::Empty))
        ));
        assert!(matches!(
            PortalConfig::from_toml_str("theme = \"dark\"\nsteps = []\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn rejects_zero_ttl() {
        let err = PortalConfig::from_toml_str(
            "[notifications]\nreset_ttl_secs = 0\n\n[[steps]]\nid = 1\ntitle = \"A\"\n",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::ZeroTtl));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = PortalConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }
}
