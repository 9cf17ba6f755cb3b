//! Where in the WebUI a graph is going to be shown.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The WebUI page asking for graphs.
///
/// Providers may tailor the URLs they build to the page (e.g. smaller images
/// on the dashboard). The PNP4Nagios provider currently builds the same URLs
/// for every page. Pages this crate does not know by name are kept as
/// `Other` rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum GraphSource {
    /// The element detail page.
    #[default]
    Detail,
    /// A dashboard widget.
    Dashboard,
    /// Any other page, by name.
    Other(String),
}

impl GraphSource {
    pub fn as_str(&self) -> &str {
        match self {
            GraphSource::Detail => "detail",
            GraphSource::Dashboard => "dashboard",
            GraphSource::Other(name) => name,
        }
    }
}

impl fmt::Display for GraphSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for GraphSource {
    fn from(s: &str) -> Self {
        match s {
            "detail" => GraphSource::Detail,
            "dashboard" => GraphSource::Dashboard,
            other => GraphSource::Other(other.to_string()),
        }
    }
}

impl From<String> for GraphSource {
    fn from(s: String) -> Self {
        GraphSource::from(s.as_str())
    }
}

impl From<GraphSource> for String {
    fn from(source: GraphSource) -> Self {
        match source {
            GraphSource::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for GraphSource {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(GraphSource::from(s))
    }
}
