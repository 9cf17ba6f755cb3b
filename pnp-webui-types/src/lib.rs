//! # pnp-webui-types
//!
//! Core types for linking a monitoring WebUI with PNP4Nagios graphs.
//!
//! The crate defines the element model the WebUI hands to graph providers
//! (hosts and services with their performance data) and the values a provider
//! hands back (graph references and the external UI link).
//!
//! ## Features
//!
//! - `serde`: JSON/etc. serialization of the produced values via serde
//!
//! ## Example
//!
//! ```rust
//! use pnp_webui_types::{Host, MonitoredElement, Service};
//!
//! let host = MonitoredElement::from(Host::new("web-01", "load1=0.5 load5=0.3"));
//! assert_eq!(host.kind(), "host");
//! assert_eq!(host.metric_count(), 2);
//!
//! let service = MonitoredElement::from(Service::new("web-01", "Disk /", "/=42%"));
//! assert_eq!(service.kind(), "service");
//! ```

mod element;
mod graph;
mod source;

pub use element::*;
pub use graph::*;
pub use source::*;

/// Label shown by the WebUI next to the link to the PNP4Nagios interface.
pub const EXTERNAL_UI_LABEL: &str = "PNP4";
