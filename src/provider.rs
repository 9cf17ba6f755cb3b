//! Graph links for hosts and services, served by PNP4Nagios.
//!
//! PNP4Nagios draws one graph per performance data metric and addresses them
//! by index through the `source` query parameter. The provider counts the
//! metrics of an element, always offers the first graph, and then asks
//! PNP4Nagios for the following indexes one by one until one comes back
//! without a graph.
//!
//! ## Example
//!
//! ```rust,no_run
//! use pnp_webui::{GraphSource, Host, MonitoredElement, PnpConfig, PnpWebui};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PnpConfig::builder()
//!     .uri("http://YOURSERVERNAME/pnp4nagios")
//!     .build()?;
//! let pnp = PnpWebui::new(config)?;
//!
//! let host = MonitoredElement::from(Host::new("web-01", "rta=0.2ms pl=0%"));
//! let graphs = pnp.get_graph_uris(Some(&host), 1700000000, 1700014400, GraphSource::Detail);
//!
//! for graph in graphs.iter() {
//!     println!("{} -> {}", graph.link, graph.img_src);
//! }
//! # Ok(())
//! # }
//! ```

use tracing::debug;

use pnp_webui_types::{ExternalUiLink, GraphReference, GraphSet, GraphSource, MonitoredElement};

use crate::{ConfigurationError, GraphProbe, HttpProbe, PnpConfig};

/// Service name PNP4Nagios uses for the graphs of the host check itself.
pub const HOST_SERVICE_KEY: &str = "_HOST_";

/// Graph link provider for a PNP4Nagios instance.
#[derive(Debug, Clone)]
pub struct PnpWebui<P = HttpProbe> {
    config: PnpConfig,
    probe: P,
}

impl PnpWebui<HttpProbe> {
    /// Create a provider probing PNP4Nagios over HTTP.
    pub fn new(config: PnpConfig) -> Result<Self, ConfigurationError> {
        Ok(Self::with_probe(config, HttpProbe::new()?))
    }
}

impl<P: GraphProbe> PnpWebui<P> {
    /// Create a provider with a custom graph probe.
    pub fn with_probe(config: PnpConfig, probe: P) -> Self {
        Self { config, probe }
    }

    pub fn config(&self) -> &PnpConfig {
        &self.config
    }

    /// Number of metrics in the element's performance data.
    pub fn get_number_of_metrics(&self, element: &MonitoredElement) -> usize {
        element.metric_count()
    }

    /// Link to the PNP4Nagios interface itself.
    pub fn get_external_ui_link(&self) -> ExternalUiLink {
        ExternalUiLink::pnp4(self.config.uri())
    }

    /// Graph page links and image URLs for an element, in metric index order.
    ///
    /// The first graph is always returned when the element has metrics. Each
    /// further index costs one blocking request to PNP4Nagios; the list stops
    /// at the first index that does not answer with a graph, including when
    /// the request fails. `source` tells which WebUI page asks and does not
    /// change the URLs yet.
    pub fn get_graph_uris(
        &self,
        element: Option<&MonitoredElement>,
        graph_start: i64,
        graph_end: i64,
        source: GraphSource,
    ) -> GraphSet {
        let mut graphs = GraphSet::new();

        let Some(element) = element else {
            return graphs;
        };

        let nb_metrics = self.get_number_of_metrics(element);
        if nb_metrics == 0 {
            return graphs;
        }

        let Some((host, srv)) = graph_target(element) else {
            debug!(kind = element.kind(), "No PNP graphs for element kind");
            return graphs;
        };

        debug!(host, srv, nb_metrics, %source, "Building PNP graph links");

        let link = self.graph_link(host, srv);
        graphs.push(GraphReference::new(
            link.clone(),
            self.image_src(host, srv, 0, graph_start, graph_end),
        ));

        for index in 1..nb_metrics {
            let img_src = self.image_src(host, srv, index, graph_start, graph_end);

            match self.probe.probe(&img_src) {
                Ok(response) if response.is_graph() => {
                    graphs.push(GraphReference::new(link.clone(), img_src));
                }
                Ok(response) => {
                    debug!(
                        host,
                        srv,
                        index,
                        status = response.status,
                        bytes = response.body_len,
                        "No PNP graph for metric index"
                    );
                    break;
                }
                Err(e) => {
                    debug!(host, srv, index, error = %e, "PNP graph probe failed");
                    break;
                }
            }
        }

        graphs
    }

    fn graph_link(&self, host: &str, srv: &str) -> String {
        format!(
            "{}index.php/graph?host={}&srv={}",
            self.config.uri(),
            host,
            srv
        )
    }

    fn image_src(&self, host: &str, srv: &str, index: usize, start: i64, end: i64) -> String {
        format!(
            "{}index.php/image?host={}&srv={}&view=0&source={}&start={}&end={}",
            self.config.uri(),
            host,
            srv,
            index,
            start,
            end
        )
    }
}

// Host name and PNP service name the element's graphs are filed under
fn graph_target(element: &MonitoredElement) -> Option<(&str, &str)> {
    match element {
        MonitoredElement::Host(host) => Some((host.name.as_str(), HOST_SERVICE_KEY)),
        MonitoredElement::Service(service) => {
            Some((service.host_name.as_str(), service.description.as_str()))
        }
        MonitoredElement::Unrecognized { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::Duration;

    use httpmock::prelude::*;

    use pnp_webui_types::{Host, Service};

    use crate::{ProbeError, ProbeResponse};

    const URI: &str = "http://monitor/pnp4nagios/";
    const IMAGE: &str = "http://monitor/pnp4nagios/index.php/image";

    /// Answers probes from a script and records the URLs it was asked for.
    #[derive(Debug, Default)]
    struct ScriptedProbe {
        answers: Mutex<VecDeque<Result<ProbeResponse, ProbeError>>>,
        requested: Mutex<Vec<String>>,
    }

    impl ScriptedProbe {
        fn new(answers: Vec<Result<ProbeResponse, ProbeError>>) -> Self {
            Self {
                answers: Mutex::new(answers.into()),
                requested: Mutex::new(Vec::new()),
            }
        }

        fn requested(&self) -> Vec<String> {
            self.requested.lock().unwrap().clone()
        }
    }

    impl GraphProbe for ScriptedProbe {
        fn probe(&self, url: &str) -> Result<ProbeResponse, ProbeError> {
            self.requested.lock().unwrap().push(url.to_string());
            self.answers
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected probe")
        }
    }

    fn provider(answers: Vec<Result<ProbeResponse, ProbeError>>) -> PnpWebui<ScriptedProbe> {
        let config = PnpConfig::builder().uri(URI).build().unwrap();
        PnpWebui::with_probe(config, ScriptedProbe::new(answers))
    }

    fn graph() -> Result<ProbeResponse, ProbeError> {
        Ok(ProbeResponse::new(200, 2000))
    }

    fn host(perf_data: &str) -> MonitoredElement {
        Host::new("web-01", perf_data).into()
    }

    fn service(perf_data: &str) -> MonitoredElement {
        Service::new("web-01", "Disk", perf_data).into()
    }

    #[test]
    fn test_number_of_metrics() {
        let pnp = provider(vec![]);
        assert_eq!(pnp.get_number_of_metrics(&host("a=1 b=2  c=3")), 3);
        assert_eq!(pnp.get_number_of_metrics(&host("")), 0);
        assert_eq!(pnp.get_number_of_metrics(&host("   ")), 0);
    }

    #[test]
    fn test_external_ui_link() {
        let pnp = provider(vec![]);
        let link = pnp.get_external_ui_link();
        assert_eq!(link.label, "PNP4");
        assert_eq!(link.uri, URI);

        let _ = pnp.get_graph_uris(Some(&host("a=1")), 0, 100, GraphSource::Detail);
        assert_eq!(pnp.get_external_ui_link(), link);
    }

    #[test]
    fn test_no_element() {
        let pnp = provider(vec![]);
        assert!(pnp.get_graph_uris(None, 0, 100, GraphSource::Detail).is_empty());
        assert!(pnp.probe.requested().is_empty());
    }

    #[test]
    fn test_no_metrics() {
        let pnp = provider(vec![]);
        let graphs = pnp.get_graph_uris(Some(&service("  ")), 0, 100, GraphSource::Detail);
        assert!(graphs.is_empty());
        assert!(pnp.probe.requested().is_empty());
    }

    #[test]
    fn test_unrecognized_kind() {
        let pnp = provider(vec![]);
        let contact = MonitoredElement::Unrecognized {
            kind: "contact".to_string(),
            perf_data: "a=1 b=2".to_string(),
        };

        let graphs = pnp.get_graph_uris(Some(&contact), 0, 100, GraphSource::Detail);
        assert!(graphs.is_empty());
        assert!(pnp.probe.requested().is_empty());
    }

    #[test]
    fn test_single_metric_host_is_not_probed() {
        let pnp = provider(vec![]);
        let element = host("rta=0.1ms");
        let graphs = pnp.get_graph_uris(Some(&element), 10, 20, GraphSource::Detail);

        assert_eq!(graphs.len(), 1);
        let first = graphs.get(0).unwrap();
        assert_eq!(
            first.link,
            "http://monitor/pnp4nagios/index.php/graph?host=web-01&srv=_HOST_"
        );
        assert_eq!(
            first.img_src,
            format!("{}?host=web-01&srv=_HOST_&view=0&source=0&start=10&end=20", IMAGE)
        );
        assert!(pnp.probe.requested().is_empty());
    }

    #[test]
    fn test_service_stops_at_placeholder_image() {
        let pnp = provider(vec![graph(), Ok(ProbeResponse::new(200, 50))]);
        let element = service("a=1 b=2 c=3");
        let graphs = pnp.get_graph_uris(Some(&element), 0, 100, GraphSource::Detail);

        assert_eq!(graphs.len(), 2);
        for (index, graph) in graphs.iter().enumerate() {
            assert_eq!(
                graph.link,
                "http://monitor/pnp4nagios/index.php/graph?host=web-01&srv=Disk"
            );
            assert!(graph.img_src.contains(&format!("&source={}&", index)));
        }

        assert_eq!(
            pnp.probe.requested(),
            vec![
                format!("{}?host=web-01&srv=Disk&view=0&source=1&start=0&end=100", IMAGE),
                format!("{}?host=web-01&srv=Disk&view=0&source=2&start=0&end=100", IMAGE),
            ]
        );
    }

    #[test]
    fn test_stops_at_error_status() {
        let pnp = provider(vec![Ok(ProbeResponse::new(404, 5000))]);
        let element = host("a=1 b=2 c=3 d=4");
        let graphs = pnp.get_graph_uris(Some(&element), 0, 100, GraphSource::Detail);

        assert_eq!(graphs.len(), 1);
        assert_eq!(pnp.probe.requested().len(), 1);
    }

    #[test]
    fn test_transport_error_truncates() {
        let pnp = provider(vec![Err(ProbeError::Timeout)]);
        let graphs = pnp.get_graph_uris(
            Some(&host("a=1 b=2 c=3 d=4 e=5")),
            0,
            100,
            GraphSource::Dashboard,
        );

        assert_eq!(graphs.len(), 1);
        assert!(graphs.get(0).unwrap().img_src.contains("&source=0&"));
        assert_eq!(pnp.probe.requested().len(), 1);
    }

    #[test]
    fn test_all_metrics_have_graphs() {
        let pnp = provider(vec![graph(), graph(), graph()]);
        let element = host("a=1 b=2 c=3 d=4");
        let graphs = pnp.get_graph_uris(Some(&element), 0, 100, GraphSource::Detail);

        assert_eq!(graphs.len(), 4);
        assert_eq!(pnp.probe.requested().len(), 3);
    }

    fn image_mock<'a>(
        server: &'a MockServer,
        index: &'static str,
        bytes: usize,
    ) -> httpmock::Mock<'a> {
        server.mock(|when, then| {
            when.method(GET)
                .path("/pnp4nagios/index.php/image")
                .query_param("host", "web-01")
                .query_param("srv", "Disk")
                .query_param("source", index);
            then.status(200)
                .header("content-type", "image/png")
                .body(vec![0u8; bytes]);
        })
    }

    #[test]
    fn test_probes_pnp_over_http() {
        let server = MockServer::start();
        let first = image_mock(&server, "1", 2000);
        let placeholder = image_mock(&server, "2", 50);
        let beyond = image_mock(&server, "3", 2000);

        let config = PnpConfig::builder()
            .uri(server.url("/pnp4nagios"))
            .build()
            .unwrap();
        let pnp = PnpWebui::new(config).unwrap();
        let element = service("a=1 b=2 c=3 d=4");
        let graphs = pnp.get_graph_uris(Some(&element), 0, 100, GraphSource::Detail);

        assert_eq!(graphs.len(), 2);
        first.assert();
        placeholder.assert();
        beyond.assert_hits(0);
    }

    #[test]
    fn test_slow_pnp_truncates_over_http() {
        let server = MockServer::start();
        let _slow = server.mock(|when, then| {
            when.method(GET).path("/index.php/image");
            then.status(200)
                .body(vec![0u8; 2000])
                .delay(Duration::from_millis(1500));
        });

        let config = PnpConfig::builder().uri(server.base_url()).build().unwrap();
        let pnp = PnpWebui::new(config).unwrap();
        let graphs = pnp.get_graph_uris(
            Some(&host("a=1 b=2 c=3 d=4 e=5")),
            0,
            100,
            GraphSource::Detail,
        );

        assert_eq!(graphs.len(), 1);
    }

    #[test]
    fn test_source_does_not_change_urls() {
        let detail = provider(vec![graph()]);
        let dashboard = provider(vec![graph()]);
        let element = service("a=1 b=2");

        assert_eq!(
            detail.get_graph_uris(Some(&element), 0, 100, GraphSource::Detail),
            dashboard.get_graph_uris(Some(&element), 0, 100, GraphSource::Dashboard)
        );
    }

    #[test]
    fn test_unknown_page_gets_detail_urls() {
        let detail = provider(vec![graph()]);
        let widget = provider(vec![graph()]);
        let element = host("a=1 b=2");
        let source: GraphSource = "widget".parse().unwrap();

        let graphs = widget.get_graph_uris(Some(&element), 0, 100, source);
        assert_eq!(graphs.len(), 2);
        assert_eq!(
            graphs,
            detail.get_graph_uris(Some(&element), 0, 100, GraphSource::Detail)
        );
    }
}
