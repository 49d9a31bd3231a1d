//! Widget Kit Demo - Main Entry Point
//!
//! Usage: `widget-demo [--config PATH] [--clicks N] [--out PATH]`

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use widget_kit::app::application::{DemoOptions, run_app};
use widget_kit::helpers::is_development;

/// Render the widget demo page as HTML
#[derive(Debug, Parser)]
#[command(name = "widget-demo", version, about)]
struct Args {
    /// Config file (defaults to widget-kit.toml in the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Clicks delivered to the counting button before the final render
    #[arg(long, default_value_t = 0)]
    clicks: u32,

    /// Write the page here instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

impl Args {
    fn demo_options(&self) -> DemoOptions {
        DemoOptions {
            config: self.config.clone(),
            clicks: self.clicks,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing for logging
    let default_level = if is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting Widget Kit demo...");

    let html = run_app(&args.demo_options())?;
    match args.out {
        Some(path) => {
            fs::write(&path, html).with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "Demo page written");
        }
        None => println!("{html}"),
    }
    Ok(())
}
