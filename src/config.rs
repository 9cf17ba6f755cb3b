//! Module configuration.
//!
//! The WebUI hands every module a flat mapping of its configured parameters.
//! For this module those are:
//!
//! ```toml
//! module_name = "pnp-ui"
//! uri = "http://YOURSERVERNAME/pnp4nagios/"
//! username = "nagiosadmin"
//! password = "secret"
//! ```
//!
//! Every parameter can also be given through the environment with the
//! `PNP_WEBUI_` prefix (e.g. `PNP_WEBUI_URI`).

use std::path::Path;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::ConfigurationError;

/// Token in the configured URI replaced by the local host name.
pub const HOSTNAME_PLACEHOLDER: &str = "YOURSERVERNAME";

/// Raw module parameters, as found in the WebUI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModuleConfig {
    /// Name of this module instance in the WebUI configuration.
    #[serde(default = "default_module_name")]
    pub module_name: String,

    #[serde(default)]
    pub uri: Option<String>,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub password: Option<String>,
}

fn default_module_name() -> String {
    "pnp-webui".to_string()
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            module_name: default_module_name(),
            uri: None,
            username: None,
            password: None,
        }
    }
}

impl ModuleConfig {
    /// Load the module parameters from an optional file and the environment.
    ///
    /// Environment variables take precedence over the file.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigurationError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        let config = builder
            .add_source(Environment::with_prefix("PNP_WEBUI"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

/// Validated PNP4Nagios connection settings.
///
/// Immutable once built; the URI always ends with a `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PnpConfig {
    uri: String,
    username: Option<String>,
    password: String,
}

impl PnpConfig {
    /// Create a new builder for the settings.
    pub fn builder() -> PnpConfigBuilder {
        PnpConfigBuilder::default()
    }

    /// Build the settings from the raw module parameters.
    pub fn from_module_config(module: &ModuleConfig) -> Result<Self, ConfigurationError> {
        let mut builder = Self::builder();
        if let Some(uri) = &module.uri {
            builder = builder.uri(uri);
        }
        if let Some(username) = &module.username {
            builder = builder.username(username);
        }
        if let Some(password) = &module.password {
            builder = builder.password(password);
        }
        builder.build()
    }

    /// Base URI of the PNP4Nagios instance, ending with `/`.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Builder for PnpConfig.
#[derive(Debug, Default)]
pub struct PnpConfigBuilder {
    uri: Option<String>,
    username: Option<String>,
    password: Option<String>,
}

impl PnpConfigBuilder {
    /// Set the PNP4Nagios base URI (e.g., "http://YOURSERVERNAME/pnp4nagios/").
    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the password (default: empty).
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Build the settings, resolving the host name placeholder with the
    /// name of the local machine.
    pub fn build(self) -> Result<PnpConfig, ConfigurationError> {
        self.build_with_hostname(local_hostname)
    }

    /// Build the settings, resolving the host name placeholder with `hostname`.
    ///
    /// `hostname` is only called when the URI contains the placeholder.
    pub fn build_with_hostname<F>(self, hostname: F) -> Result<PnpConfig, ConfigurationError>
    where
        F: FnOnce() -> String,
    {
        let uri = self
            .uri
            .as_deref()
            .map(str::trim)
            .filter(|uri| !uri.is_empty())
            .ok_or(ConfigurationError::MissingUri)?;

        let mut uri = uri.to_string();
        if !uri.ends_with('/') {
            uri.push('/');
        }

        if uri.contains(HOSTNAME_PLACEHOLDER) {
            uri = uri.replace(HOSTNAME_PLACEHOLDER, &hostname());
        }

        Ok(PnpConfig {
            uri,
            username: self.username,
            password: self.password.unwrap_or_default(),
        })
    }
}

/// Network name of the local machine.
pub fn local_hostname() -> String {
    gethostname::gethostname().to_string_lossy().into_owned()
}
