//! Graph references produced for the WebUI.

use crate::EXTERNAL_UI_LABEL;

/// One PNP4Nagios graph: the page to open and the image to embed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphReference {
    /// Link to the PNP4Nagios graph page of the host/service.
    pub link: String,

    /// Source URL of the graph image for one metric index.
    pub img_src: String,
}

impl GraphReference {
    pub fn new(link: impl Into<String>, img_src: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            img_src: img_src.into(),
        }
    }
}

/// Graphs of one element, ordered by metric index.
///
/// Position `i` holds the graph whose image URL carries `source=i`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GraphSet {
    graphs: Vec<GraphReference>,
}

impl GraphSet {
    /// Create an empty graph set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the graph for the next metric index.
    pub fn push(&mut self, graph: GraphReference) {
        self.graphs.push(graph);
    }

    /// Check if the set holds no graphs.
    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }

    /// Number of graphs in the set.
    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    /// Get the graph for a metric index.
    pub fn get(&self, index: usize) -> Option<&GraphReference> {
        self.graphs.get(index)
    }

    /// Iterate over the graphs in metric index order.
    pub fn iter(&self) -> impl Iterator<Item = &GraphReference> {
        self.graphs.iter()
    }

    pub fn into_vec(self) -> Vec<GraphReference> {
        self.graphs
    }
}

impl IntoIterator for GraphSet {
    type Item = GraphReference;
    type IntoIter = std::vec::IntoIter<GraphReference>;

    fn into_iter(self) -> Self::IntoIter {
        self.graphs.into_iter()
    }
}

/// A labelled link to the external graphing UI.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExternalUiLink {
    pub label: String,
    pub uri: String,
}

impl ExternalUiLink {
    /// Link to a PNP4Nagios instance rooted at `uri`.
    pub fn pnp4(uri: impl Into<String>) -> Self {
        Self {
            label: EXTERNAL_UI_LABEL.to_string(),
            uri: uri.into(),
        }
    }
}
