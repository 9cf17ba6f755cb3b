//! Graph probes against the PNP4Nagios image endpoint.
//!
//! PNP4Nagios answers image requests for a metric index that has no graph with
//! `200 OK` and a tiny placeholder image, so the only reliable signal that a
//! graph exists is the size of the returned image.

use std::fmt::Debug;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::{ConfigurationError, ProbeError};

/// How long a single probe may take.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(1);

/// Images smaller than this are PNP4Nagios' "no graph" placeholder.
pub const MIN_GRAPH_BYTES: usize = 1000;

/// What the graphing service answered to a probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeResponse {
    /// HTTP status code.
    pub status: u16,
    /// Size of the response body in bytes.
    pub body_len: usize,
}

impl ProbeResponse {
    pub fn new(status: u16, body_len: usize) -> Self {
        Self { status, body_len }
    }

    /// Whether the response carries an actual graph image.
    pub fn is_graph(&self) -> bool {
        self.status == StatusCode::OK.as_u16() && self.body_len >= MIN_GRAPH_BYTES
    }
}

/// Checks whether a graph image URL serves a real graph.
///
/// Implementations are called from the WebUI request threads and must be
/// safe to share between them.
pub trait GraphProbe: Send + Sync + Debug {
    /// Fetch `url` once and report what came back.
    fn probe(&self, url: &str) -> Result<ProbeResponse, ProbeError>;
}

/// Probe issuing blocking HTTP GET requests.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    /// Create a probe with the fixed [`PROBE_TIMEOUT`].
    pub fn new() -> Result<Self, ConfigurationError> {
        Self::with_timeout(PROBE_TIMEOUT)
    }

    pub(crate) fn with_timeout(timeout: Duration) -> Result<Self, ConfigurationError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConfigurationError::HttpClient(e.to_string()))?;

        Ok(Self { client })
    }
}

impl GraphProbe for HttpProbe {
    fn probe(&self, url: &str) -> Result<ProbeResponse, ProbeError> {
        let response = self.client.get(url).send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?;

        Ok(ProbeResponse::new(status, body.len()))
    }
}
