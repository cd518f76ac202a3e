//! Site configuration embedded from `site.toml` at build time.

use auth_contract::DASHBOARD_PATH;
use leptos::{logging, provide_context, use_context};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ui_kit::NavLink;

include!(concat!(env!("OUT_DIR"), "/site_config_generated.rs"));

/// Config schema this build understands.
pub const SCHEMA_VERSION: u32 = 1;

/// Shortest password the local auth provider accepts when config is absent.
pub const DEFAULT_MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Error)]
/// Configuration load and validation failures.
pub enum ConfigError {
    /// The embedded document is not valid JSON for [`SiteConfig`].
    #[error("site config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    /// The document was written for another schema.
    #[error("site config schema mismatch: expected {expected} found {found}")]
    SchemaVersion {
        /// Supported schema.
        expected: u32,
        /// Schema in the document.
        found: u32,
    },
    /// The site title is blank.
    #[error("site config title must not be empty")]
    EmptyTitle,
    /// The redirect path is not an absolute in-site path.
    #[error("site config redirect_path `{0}` must start with `/`")]
    RedirectPath(String),
    /// A navigation entry has no target.
    #[error("site config nav_links[{index}] has an empty href")]
    EmptyLinkHref {
        /// Position of the offending entry.
        index: usize,
    },
    /// The password policy cannot be satisfied.
    #[error("site config min_password_len must be at least 1")]
    PasswordPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One navigation entry from config.
pub struct NavLinkConfig {
    /// Link target.
    pub href: String,
    /// Visible text.
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Home page call to action.
pub struct CallToAction {
    /// Visible text.
    pub label: String,
    /// Link target.
    pub href: String,
    /// Button variant key (`primary`, `secondary`, `destructive`).
    #[serde(default)]
    pub variant: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Validated site configuration.
pub struct SiteConfig {
    /// Config schema version.
    pub schema_version: u32,
    /// Brand title shown in the navbar and document title.
    pub title: String,
    /// Document description.
    #[serde(default)]
    pub description: String,
    /// Where the auth pages send signed-in visitors.
    pub redirect_path: String,
    /// Minimum accepted password length.
    pub min_password_len: usize,
    /// Optional home page call to action.
    #[serde(default)]
    pub cta: Option<CallToAction>,
    /// Navbar entries, in display order.
    #[serde(default)]
    pub nav_links: Vec<NavLinkConfig>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            title: "Portal".to_string(),
            description: String::new(),
            redirect_path: DASHBOARD_PATH.to_string(),
            min_password_len: DEFAULT_MIN_PASSWORD_LEN,
            cta: None,
            nav_links: vec![NavLinkConfig {
                href: "/".to_string(),
                label: "Home".to_string(),
            }],
        }
    }
}

impl SiteConfig {
    /// Loads the configuration embedded at build time.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the embedded document fails to parse or validate.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_json(SITE_CONFIG_JSON)
    }

    /// Loads the embedded configuration, falling back to defaults with a warning.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(err) => {
                logging::warn!("site config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Parses and validates a JSON document.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when `raw` fails to parse or validate.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks invariants the rest of the site relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(ConfigError::SchemaVersion {
                expected: SCHEMA_VERSION,
                found: self.schema_version,
            });
        }
        if self.title.trim().is_empty() {
            return Err(ConfigError::EmptyTitle);
        }
        if !self.redirect_path.starts_with('/') {
            return Err(ConfigError::RedirectPath(self.redirect_path.clone()));
        }
        if self.min_password_len == 0 {
            return Err(ConfigError::PasswordPolicy);
        }
        if let Some(index) = self
            .nav_links
            .iter()
            .position(|link| link.href.trim().is_empty())
        {
            return Err(ConfigError::EmptyLinkHref { index });
        }
        Ok(())
    }

    /// Navbar descriptors in configured order.
    pub fn nav_links(&self) -> Vec<NavLink> {
        self.nav_links
            .iter()
            .map(|link| NavLink::new(link.href.clone(), link.label.clone()))
            .collect()
    }
}

/// Installs `config` for descendant views.
pub fn provide_site_config(config: SiteConfig) {
    provide_context(config);
}

/// Returns the installed configuration, or defaults outside the app root.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn valid_json() -> serde_json::Value {
        serde_json::json!({
            "schema_version": 1,
            "title": "Acme",
            "redirect_path": "/dashboard",
            "min_password_len": 8,
            "nav_links": [
                { "href": "/a", "label": "A" },
                { "href": "/a", "label": "A" }
            ]
        })
    }

    #[test]
    fn embedded_config_loads() {
        let config = SiteConfig::load().expect("embedded config");
        assert_eq!(config.schema_version, SCHEMA_VERSION);
        assert!(config.redirect_path.starts_with('/'));
    }

    #[test]
    fn valid_document_keeps_duplicate_links_in_order() {
        let config = SiteConfig::from_json(&valid_json().to_string()).expect("valid config");
        let links = config.nav_links();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0], links[1]);
        assert_eq!(config.cta, None);
    }

    #[test]
    fn rejects_other_schema_versions() {
        let mut doc = valid_json();
        doc["schema_version"] = serde_json::json!(2);
        let err = SiteConfig::from_json(&doc.to_string()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::SchemaVersion {
                expected: 1,
                found: 2
            }
        ));
    }

    #[test]
    fn rejects_relative_redirect_path() {
        let mut doc = valid_json();
        doc["redirect_path"] = serde_json::json!("dashboard");
        let err = SiteConfig::from_json(&doc.to_string()).unwrap_err();
        assert!(matches!(err, ConfigError::RedirectPath(path) if path == "dashboard"));
    }

    #[test]
    fn rejects_blank_link_href() {
        let mut doc = valid_json();
        doc["nav_links"][1]["href"] = serde_json::json!(" ");
        let err = SiteConfig::from_json(&doc.to_string()).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyLinkHref { index: 1 }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SiteConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn defaults_are_valid() {
        SiteConfig::default().validate().expect("defaults validate");
    }
}
