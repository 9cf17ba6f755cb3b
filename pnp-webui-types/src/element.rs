//! Monitored elements - the hosts and services the WebUI asks graphs for.

/// A monitored host.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Host {
    /// The host name as known to the monitoring core.
    pub name: String,

    /// Raw performance data of the last check result.
    pub perf_data: String,
}

impl Host {
    /// Create a host with its current performance data.
    pub fn new(name: impl Into<String>, perf_data: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            perf_data: perf_data.into(),
        }
    }
}

/// A monitored service, attached to a parent host.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Service {
    /// Name of the host this service runs on.
    pub host_name: String,

    /// The service description (the service's name on its host).
    pub description: String,

    /// Raw performance data of the last check result.
    pub perf_data: String,
}

impl Service {
    /// Create a service with its parent host name and current performance data.
    pub fn new(
        host_name: impl Into<String>,
        description: impl Into<String>,
        perf_data: impl Into<String>,
    ) -> Self {
        Self {
            host_name: host_name.into(),
            description: description.into(),
            perf_data: perf_data.into(),
        }
    }
}

/// An element of the monitoring configuration the WebUI can display graphs for.
///
/// Only hosts and services have graphs in PNP4Nagios. Anything else the WebUI
/// may pass along (contacts, timeperiods, ...) is kept as `Unrecognized` so
/// providers can answer it with an empty graph list instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonitoredElement {
    Host(Host),
    Service(Service),
    Unrecognized { kind: String, perf_data: String },
}

impl MonitoredElement {
    /// The element type name, as the monitoring core spells it.
    pub fn kind(&self) -> &str {
        match self {
            MonitoredElement::Host(_) => "host",
            MonitoredElement::Service(_) => "service",
            MonitoredElement::Unrecognized { kind, .. } => kind,
        }
    }

    /// Raw performance data of the element.
    pub fn perf_data(&self) -> &str {
        match self {
            MonitoredElement::Host(host) => &host.perf_data,
            MonitoredElement::Service(service) => &service.perf_data,
            MonitoredElement::Unrecognized { perf_data, .. } => perf_data,
        }
    }

    /// Number of metrics in the element's performance data.
    pub fn metric_count(&self) -> usize {
        metric_count(self.perf_data())
    }
}

impl From<Host> for MonitoredElement {
    fn from(host: Host) -> Self {
        MonitoredElement::Host(host)
    }
}

impl From<Service> for MonitoredElement {
    fn from(service: Service) -> Self {
        MonitoredElement::Service(service)
    }
}

/// Count the metric tokens in a performance data string.
///
/// Tokens are separated by single spaces; runs of spaces produce empty tokens
/// which are not counted. Surrounding whitespace is ignored.
pub fn metric_count(perf_data: &str) -> usize {
    perf_data
        .trim()
        .split(' ')
        .filter(|token| !token.is_empty())
        .count()
}
