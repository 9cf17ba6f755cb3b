use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pnp_webui::{
    get_instance, GraphSource, Host, ModuleConfig, MonitoredElement, Service, WebUiModule,
};

/// Default graph window: the last four hours.
const DEFAULT_WINDOW_SECS: i64 = 4 * 60 * 60;

#[derive(Parser, Debug)]
#[command(name = "pnp-webui")]
#[command(about = "Show the PNP4Nagios graph links the WebUI would display for an element")]
struct Args {
    /// Path to the module configuration file (TOML, YAML or JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// PNP4Nagios base URI, overrides the configuration
    #[arg(short, long)]
    uri: Option<String>,

    /// Start of the graph window (Unix timestamp, default: four hours ago)
    #[arg(long)]
    start: Option<i64>,

    /// End of the graph window (Unix timestamp, default: now)
    #[arg(long)]
    end: Option<i64>,

    /// WebUI page asking for the graphs (detail or dashboard)
    #[arg(long, default_value = "detail")]
    source: GraphSource,

    #[command(subcommand)]
    element: ElementArgs,
}

#[derive(Subcommand, Debug)]
enum ElementArgs {
    /// Graphs of a host check
    Host {
        name: String,

        /// Performance data of the last check result
        #[arg(short, long, default_value = "")]
        perf_data: String,
    },
    /// Graphs of a service check
    Service {
        host: String,

        description: String,

        /// Performance data of the last check result
        #[arg(short, long, default_value = "")]
        perf_data: String,
    },
}

impl From<ElementArgs> for MonitoredElement {
    fn from(args: ElementArgs) -> Self {
        match args {
            ElementArgs::Host { name, perf_data } => Host::new(name, perf_data).into(),
            ElementArgs::Service {
                host,
                description,
                perf_data,
            } => Service::new(host, description, perf_data).into(),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut module_config =
        ModuleConfig::load(args.config.as_deref()).context("Failed to load configuration")?;
    if let Some(uri) = args.uri {
        module_config.uri = Some(uri);
    }

    let mut module = get_instance(&module_config)?;
    module.init()?;
    let provider = module.provider();

    let (start, end) = graph_window(args.start, args.end, now());

    let element = MonitoredElement::from(args.element);
    let graphs = provider.get_graph_uris(Some(&element), start, end, args.source);

    let output = serde_json::json!({
        "external_ui": provider.get_external_ui_link(),
        "metrics": provider.get_number_of_metrics(&element),
        "graphs": graphs,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

/// Resolve the graph window, defaulting to the last four hours before `now`.
fn graph_window(start: Option<i64>, end: Option<i64>, now: i64) -> (i64, i64) {
    let end = end.unwrap_or(now);
    let start = start.unwrap_or(end.saturating_sub(DEFAULT_WINDOW_SECS));
    (start, end)
}

fn now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}
