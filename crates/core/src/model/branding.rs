use serde::{Deserialize, Serialize};

/// Header copy shown on every page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Branding {
    pub title: String,
    pub subtitle: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            title: "Workshop Portal".to_owned(),
            subtitle: "Participant Onboarding".to_owned(),
        }
    }
}

/// Copy for the completion page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardContent {
    pub heading: String,
    pub next_steps_title: String,
    pub next_steps: Vec<String>,
}

impl Default for DashboardContent {
    fn default() -> Self {
        Self {
            heading: "Onboarding Complete!".to_owned(),
            next_steps_title: "What's Next?".to_owned(),
            next_steps: vec![
                "Join the live workshop session at the scheduled time".to_owned(),
                "Access your workshop materials and resources".to_owned(),
                "Connect with fellow participants in the community".to_owned(),
                "Start working on your first project".to_owned(),
            ],
        }
    }
}
