//! Error types for the PNP WebUI module.

use thiserror::Error;

/// Errors raised while setting up the module. Fatal to the module instance.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// No (or a blank) `uri` parameter was configured.
    #[error("The WebUI PNP module is missing uri parameter")]
    MissingUri,

    /// The configuration sources could not be read or deserialized.
    #[error("Failed to load module configuration: {0}")]
    Load(String),

    /// The HTTP client used for graph probes could not be created.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

impl From<config::ConfigError> for ConfigurationError {
    fn from(err: config::ConfigError) -> Self {
        ConfigurationError::Load(err.to_string())
    }
}

/// Errors that can occur when probing PNP4Nagios for a graph image.
///
/// These never reach the WebUI: a failed probe means "no more graphs".
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The graph image request failed after reaching PNP4Nagios.
    #[error("PNP graph image request failed: {0}")]
    Http(String),

    /// PNP4Nagios could not be reached.
    #[error("Could not connect to PNP4Nagios: {0}")]
    Connection(String),

    /// No graph image within the probe timeout.
    #[error("PNP graph image request timed out")]
    Timeout,
}

impl From<reqwest::Error> for ProbeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProbeError::Timeout
        } else if err.is_connect() {
            ProbeError::Connection(err.to_string())
        } else {
            ProbeError::Http(err.to_string())
        }
    }
}
