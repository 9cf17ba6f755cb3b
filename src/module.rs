//! WebUI module lifecycle.
//!
//! The WebUI discovers modules by their properties, creates an instance per
//! configured module with [`get_instance`], calls [`WebUiModule::init`] and
//! finally hands the running application over with [`WebUiModule::load`].

use std::fmt::Debug;
use std::sync::Arc;

use tracing::info;

use crate::{ConfigurationError, HttpProbe, ModuleConfig, PnpConfig, PnpWebui};

/// What the WebUI needs to know to pick up a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleProperties {
    /// Daemons able to load the module.
    pub daemons: &'static [&'static str],
    /// Module type, matched against the `module_type` of the configuration.
    pub module_type: &'static str,
}

pub const MODULE_PROPERTIES: ModuleProperties = ModuleProperties {
    daemons: &["webui"],
    module_type: "pnp_webui",
};

/// Handle on the running WebUI application.
pub trait WebApp: Send + Sync + Debug {
    fn name(&self) -> &str;
}

/// Lifecycle hooks every WebUI module implements.
pub trait WebUiModule {
    /// Name of the module instance.
    fn name(&self) -> &str;

    /// Called once after construction, before the module is loaded.
    fn init(&mut self) -> Result<(), ConfigurationError>;

    /// Attach the module to the running application.
    fn load(&mut self, app: Arc<dyn WebApp>);
}

/// The PNP graph module as loaded by the WebUI.
#[derive(Debug)]
pub struct PnpModule {
    name: String,
    provider: PnpWebui<HttpProbe>,
    app: Option<Arc<dyn WebApp>>,
}

impl PnpModule {
    /// Graph link provider of this module.
    pub fn provider(&self) -> &PnpWebui<HttpProbe> {
        &self.provider
    }

    /// The application this module was loaded into, if any.
    pub fn app(&self) -> Option<&Arc<dyn WebApp>> {
        self.app.as_ref()
    }
}

impl WebUiModule for PnpModule {
    fn name(&self) -> &str {
        &self.name
    }

    // Nothing to connect to up front; PNP4Nagios is only queried per request.
    fn init(&mut self) -> Result<(), ConfigurationError> {
        Ok(())
    }

    fn load(&mut self, app: Arc<dyn WebApp>) {
        self.app = Some(app);
    }
}

/// Create the module instance for a WebUI module configuration.
pub fn get_instance(module: &ModuleConfig) -> Result<PnpModule, ConfigurationError> {
    info!("Get an PNP UI module for plugin {}", module.module_name);

    let config = PnpConfig::from_module_config(module)?;
    let provider = PnpWebui::new(config)?;

    Ok(PnpModule {
        name: module.module_name.clone(),
        provider,
        app: None,
    })
}
