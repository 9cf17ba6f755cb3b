//! # pnp-webui
//!
//! Links a monitoring WebUI with PNP4Nagios graphs.
//!
//! For a host or service the module works out how many performance data
//! metrics it has and which of them PNP4Nagios actually draws, and returns
//! the graph page link and image URL for each.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌──────────┐    ┌──────────────┐
//! │   module    │───▶│ provider │───▶│    probe     │──▶ PNP4Nagios
//! │ (lifecycle) │    │ (links)  │    │ (HTTP GET)   │
//! └──────┬──────┘    └──────────┘    └──────────────┘
//!        │
//!        ▼
//!   ┌─────────┐
//!   │ config  │◀── file | PNP_WEBUI_* environment
//!   └─────────┘
//! ```
//!
//! - **[`config`]**: module parameters and the validated [`PnpConfig`]
//! - **[`provider`]**: [`PnpWebui`], the graph link provider
//! - **[`probe`]**: the [`GraphProbe`] seam and its HTTP implementation
//! - **[`module`]**: lifecycle hooks the WebUI drives
//!
//! ## Usage
//!
//! ```no_run
//! use pnp_webui::{get_instance, GraphSource, ModuleConfig, MonitoredElement, Service};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let module = get_instance(&ModuleConfig {
//!     uri: Some("http://YOURSERVERNAME/pnp4nagios/".to_string()),
//!     ..ModuleConfig::default()
//! })?;
//!
//! let disk: MonitoredElement =
//!     Service::new("web-01", "Disk", "/=42%;80;90 /var=12%;80;90").into();
//! let graphs = module
//!     .provider()
//!     .get_graph_uris(Some(&disk), 1700000000, 1700014400, GraphSource::Dashboard);
//! println!("{} graphs", graphs.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod module;
pub mod probe;
pub mod provider;

pub use crate::config::{local_hostname, ModuleConfig, PnpConfig, PnpConfigBuilder};
pub use error::{ConfigurationError, ProbeError};
pub use module::{get_instance, PnpModule, WebApp, WebUiModule, MODULE_PROPERTIES};
pub use probe::{GraphProbe, HttpProbe, ProbeResponse};
pub use provider::PnpWebui;

// Re-export types for convenience
pub use pnp_webui_types::{
    ExternalUiLink, GraphReference, GraphSet, GraphSource, Host, MonitoredElement, Service,
};
