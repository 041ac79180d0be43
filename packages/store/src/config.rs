//! # Site configuration — `portfolio.toml`
//!
//! The portfolio is configured by a small TOML document compiled into the
//! bundle (see `packages/store/portfolio.toml`). It names the REST API the
//! pages talk to and carries the owner-specific text shown on the public
//! pages.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8080"   # scheme + host of the REST API
//!
//! [site]
//! owner = "Jane Doe"
//! tagline = "..."
//! github_url = "https://github.com/..."
//! linkedin_url = "https://linkedin.com/in/..."
//! ```
//!
//! ## Overrides
//!
//! [`PortfolioConfig::load`] parses the bundled file and then applies the
//! `PORTFOLIO_API_BASE_URL` variable captured at compile time, which is how a
//! deployment points the same sources at a different API.
//!
//! All structs derive `Default`, so a missing section or key falls back to
//! the defaults below.

use serde::{Deserialize, Serialize};

const BUNDLED: &str = include_str!("../portfolio.toml");

/// Top-level configuration stored in `portfolio.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

/// Location of the REST API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Owner-specific text for the public pages.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
}

impl PortfolioConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "portfolio.toml"
    }

    /// Bundled configuration with the compile-time API override applied.
    pub fn load() -> Self {
        let mut config = match Self::from_toml(BUNDLED) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("Bundled {} is invalid: {e}", Self::filename());
                Self::default()
            }
        };
        if let Some(url) = option_env!("PORTFOLIO_API_BASE_URL") {
            config = config.with_base_url(url);
        }
        config
    }

    /// Builder method to point at another API.
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.api.base_url = url.trim().trim_end_matches('/').to_string();
        self
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
