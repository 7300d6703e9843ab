//! Configuration management for Lander.
//!
//! Parses `lander.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings (flags or their environment-variable fallbacks) are applied
//! during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! An unset variable in a credential field leaves that credential absent
//! instead of failing the load.
//!
//! Expanded fields:
//! - `server.host`
//! - `contentful.space_id`
//! - `contentful.environment`
//! - `contentful.access_token`
//! - `contentful.management_token`
//!
//! ## Credentials
//!
//! Credentials are optional at parse time because the read path and the
//! provisioning commands need different ones. Commands ask for what they need
//! through [`Config::require_delivery`] and [`Config::require_management`],
//! which fail before any network call is made.

mod expand;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override Contentful space ID.
    pub space_id: Option<String>,
    /// Override Contentful environment.
    pub environment: Option<String>,
    /// Override Content Delivery API token.
    pub access_token: Option<String>,
    /// Override Content Management API token.
    pub management_token: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "lander.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Content backend configuration.
    pub contentful: ContentfulConfig,
    /// Site routing configuration.
    pub site: SiteConfig,
    /// Page rendering configuration.
    pub render: RenderConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
        }
    }
}

/// Contentful configuration as parsed from TOML.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ContentfulConfig {
    /// Space identifier.
    pub space_id: Option<String>,
    /// Environment name.
    pub environment: String,
    /// Content Delivery API access token (read path).
    pub access_token: Option<String>,
    /// Content Management API token (provisioning commands).
    pub management_token: Option<String>,
    /// Content Delivery API host.
    pub delivery_host: String,
    /// Content Management API host.
    pub management_host: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ContentfulConfig {
    fn default() -> Self {
        Self {
            space_id: None,
            environment: "master".to_owned(),
            access_token: None,
            management_token: None,
            delivery_host: "cdn.contentful.com".to_owned(),
            management_host: "api.contentful.com".to_owned(),
            timeout_secs: 30,
        }
    }
}

/// Validated credentials for one of the Contentful APIs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// API host without scheme (e.g. `cdn.contentful.com`).
    pub host: String,
    /// Space identifier.
    pub space_id: String,
    /// Environment name.
    pub environment: String,
    /// Bearer token.
    pub access_token: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ApiConfig {
    /// Base URL of the environment (`https://{host}/spaces/{space}/environments/{env}`).
    #[must_use]
    pub fn environment_url(&self) -> String {
        format!(
            "https://{}/spaces/{}/environments/{}",
            self.host.trim_end_matches('/'),
            self.space_id,
            self.environment
        )
    }
}

/// Site routing configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Slug of the landing page rendered at each locale root.
    pub home_slug: String,
    /// Route prefix that `/` redirects to.
    pub default_locale: String,
    /// Route prefix to backend locale code (e.g. `en` -> `en-US`).
    pub locales: BTreeMap<String, String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            home_slug: "home".to_owned(),
            default_locale: "en".to_owned(),
            locales: BTreeMap::from([
                ("en".to_owned(), "en-US".to_owned()),
                ("es".to_owned(), "es".to_owned()),
            ]),
        }
    }
}

impl SiteConfig {
    /// Backend locale code for a route prefix.
    #[must_use]
    pub fn locale_code(&self, route: &str) -> Option<&str> {
        self.locales.get(route).map(String::as_str)
    }
}

/// Page rendering configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// What to do when a section's content cannot be fetched.
    pub section_errors: SectionErrorPolicy,
}

/// Policy for sections whose content entry fails to resolve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionErrorPolicy {
    /// Log the failure and render an empty placeholder in its slot.
    #[default]
    Placeholder,
    /// Fail the whole page render.
    Fail,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// A required value is absent.
    #[error("Missing required configuration: {field} (set it in lander.toml or via {env})")]
    Missing {
        /// Config field path (e.g., "`contentful.space_id`").
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`contentful.access_token`").
        field: String,
        /// Error message (e.g., "${`CONTENTFUL_ACCESS_TOKEN`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require an optional field to be present and non-empty.
fn require_present<'a>(
    value: Option<&'a String>,
    field: &'static str,
    env: &'static str,
) -> Result<&'a str, ConfigError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::Missing { field, env }),
    }
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `lander.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string and expand environment variables.
    ///
    /// # Errors
    ///
    /// Returns error if parsing, expansion or validation fails.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.expand_env_vars()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(space_id) = &settings.space_id {
            self.contentful.space_id = Some(space_id.clone());
        }
        if let Some(environment) = &settings.environment {
            self.contentful.environment.clone_from(environment);
        }
        if let Some(token) = &settings.access_token {
            self.contentful.access_token = Some(token.clone());
        }
        if let Some(token) = &settings.management_token {
            self.contentful.management_token = Some(token.clone());
        }
    }

    /// Get validated Content Delivery API settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] if the space ID or access token is absent.
    pub fn require_delivery(&self) -> Result<ApiConfig, ConfigError> {
        let c = &self.contentful;
        let space_id = require_present(c.space_id.as_ref(), "contentful.space_id", "CONTENTFUL_SPACE_ID")?;
        let token = require_present(
            c.access_token.as_ref(),
            "contentful.access_token",
            "CONTENTFUL_ACCESS_TOKEN",
        )?;
        Ok(ApiConfig {
            host: c.delivery_host.clone(),
            space_id: space_id.to_owned(),
            environment: c.environment.clone(),
            access_token: token.to_owned(),
            timeout: Duration::from_secs(c.timeout_secs),
        })
    }

    /// Get validated Content Management API settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] if the space ID or management token is absent.
    pub fn require_management(&self) -> Result<ApiConfig, ConfigError> {
        let c = &self.contentful;
        let space_id = require_present(c.space_id.as_ref(), "contentful.space_id", "CONTENTFUL_SPACE_ID")?;
        let token = require_present(
            c.management_token.as_ref(),
            "contentful.management_token",
            "CONTENTFUL_MANAGEMENT_TOKEN",
        )?;
        Ok(ApiConfig {
            host: c.management_host.clone(),
            space_id: space_id.to_owned(),
            environment: c.environment.clone(),
            access_token: token.to_owned(),
            timeout: Duration::from_secs(c.timeout_secs),
        })
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Credentials are not checked here; see [`Config::require_delivery`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_contentful()?;
        self.validate_site()?;
        Ok(())
    }

    fn validate_server(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;

        // Port 0 is technically valid (OS assigns a random port), but it's
        // unlikely to be intentional in a config file
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }
        Ok(())
    }

    fn validate_contentful(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.contentful.environment, "contentful.environment")?;
        require_non_empty(&self.contentful.delivery_host, "contentful.delivery_host")?;
        require_non_empty(&self.contentful.management_host, "contentful.management_host")?;
        if self.contentful.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "contentful.timeout_secs must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }

    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.home_slug, "site.home_slug")?;
        if self.site.locales.is_empty() {
            return Err(ConfigError::Validation(
                "site.locales must define at least one locale".to_owned(),
            ));
        }
        for (route, code) in &self.site.locales {
            if route.is_empty() || route.contains('/') {
                return Err(ConfigError::Validation(format!(
                    "site.locales key '{route}' must be a single path segment"
                )));
            }
            require_non_empty(code, &format!("site.locales.{route}"))?;
        }
        if !self.site.locales.contains_key(&self.site.default_locale) {
            return Err(ConfigError::Validation(format!(
                "site.default_locale '{}' is not listed in site.locales",
                self.site.default_locale
            )));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;

        let c = &mut self.contentful;
        expand::expand_opt(&mut c.space_id, "contentful.space_id");
        c.environment = expand::expand_env(&c.environment, "contentful.environment")?;
        expand::expand_opt(&mut c.access_token, "contentful.access_token");
        expand::expand_opt(&mut c.management_token, "contentful.management_token");
        Ok(())
    }
}
