//! # Panel configuration — `tunihire.toml`
//!
//! Shared configuration for the three panels: where the REST backend lives,
//! the fixed client-side request timeout, and the hosts of the sibling panels
//! used by role-based redirects and the session handoff.
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5000"
//! timeout_secs = 10
//!
//! [panels]
//! front_url = "http://localhost:3000"
//! company_url = "http://localhost:3001"
//! admin_url = "http://localhost:3002"
//! ```
//!
//! All sections and fields default, so a missing or empty file is equivalent
//! to the local development setup above.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `tunihire.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub panels: PanelUrls,
}

/// Backend endpoint configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Fixed request timeout applied uniformly by the HTTP client factory.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Hosts of the independently deployed panels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PanelUrls {
    /// Public site (sign-in lives at `/page-signin`).
    #[serde(default = "default_front_url")]
    pub front_url: String,
    /// Company/HR panel.
    #[serde(default = "default_company_url")]
    pub company_url: String,
    /// Admin panel.
    #[serde(default = "default_admin_url")]
    pub admin_url: String,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_front_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_company_url() -> String {
    "http://localhost:3001".to_string()
}

fn default_admin_url() -> String {
    "http://localhost:3002".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for PanelUrls {
    fn default() -> Self {
        Self {
            front_url: default_front_url(),
            company_url: default_company_url(),
            admin_url: default_admin_url(),
        }
    }
}

impl PanelConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "tunihire.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_equals_defaults() {
        let config = PanelConfig::from_toml("").unwrap();
        assert_eq!(config, PanelConfig::default());
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.panels.admin_url, "http://localhost:3002");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = PanelConfig::from_toml(
            r#"
            [api]
            base_url = "https://api.tunihire.example"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://api.tunihire.example");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.panels.front_url, "http://localhost:3000");
    }

    #[test]
    fn round_trips_through_toml() {
        let mut config = PanelConfig::default();
        config.panels.company_url = "https://company.tunihire.example".to_string();
        let parsed = PanelConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
