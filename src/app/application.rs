//! Application - Demo Host Startup
//!
//! Installs configuration, declares what the host provides and renders the
//! demo page after a number of simulated clicks.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::app::demo::{DemoApp, counter_button};
use crate::config::WidgetConfig;
use crate::peer::{self, DEFAULT_PEER_NAME};

/// Version of the HTML host this demo provides to the components
pub const HTML_HOST_VERSION: &str = "1.0.0";

/// Options for [`run_app`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoOptions {
    /// Explicit config file; the platform default is used when unset
    pub config: Option<PathBuf>,
    /// Activations delivered to the counting button before the final render
    pub clicks: u32,
}

/// Run the demo host and return the final page as HTML
pub fn run_app(options: &DemoOptions) -> Result<String> {
    let config = match &options.config {
        Some(path) => WidgetConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => WidgetConfig::load_default().context("Failed to load default config")?,
    };
    config.install().context("Invalid peer requirements")?;

    peer::declare_host_peer(DEFAULT_PEER_NAME, HTML_HOST_VERSION);

    let app = DemoApp::new();
    for _ in 0..options.clicks {
        let page = app.render();
        let button = counter_button(&page).context("Demo page has no counter button")?;
        button.activate();
    }
    tracing::info!(count = app.count(), "Demo rendered");

    Ok(app.render().render_to_string())
}
