//! Binary entrypoint for the slidekit demo.
//!
//! Builds an in-memory fixture document, attaches a slideshow widget, and
//! feeds it a scripted interaction timeline so the engine's behavior can
//! be observed through the logs.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use serde::Deserialize;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use slidekit::config::SlideshowOptions;
use slidekit::dom::{Dom, MemoryDom};
use slidekit::events::WidgetCommand;
use slidekit::widget::Slideshow;

/// Simple CLI
#[derive(Debug, Parser)]
#[command(name = "slidekit", about = "Scripted slideshow engine demo")]
struct Cli {
    /// Path to YAML demo config
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the auto-advance interval (ms)
    #[arg(long, value_name = "MILLIS")]
    wait_ms: Option<u64>,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
struct DemoConfig {
    /// Number of slides in the generated fixture document.
    slides: usize,
    /// How long the scripted session keeps running after the script.
    #[serde(with = "humantime_serde")]
    run_for: Duration,
    /// Widget options, resolved leniently like any host-provided bag.
    slideshow: SlideshowOptions,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            slides: 4,
            run_for: Duration::from_secs(10),
            slideshow: SlideshowOptions::default(),
        }
    }
}

fn init_tracing(verbosity: u8) -> Result<()> {
    // map -v to log level
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("slidekit={}", level).parse().unwrap());
    fmt().with_env_filter(filter).with_target(true).init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let mut cfg = match &cli.config {
        Some(path) => {
            let s = std::fs::read_to_string(path)
                .with_context(|| format!("loading demo config from {}", path.display()))?;
            serde_yaml::from_str::<DemoConfig>(&s).context("parsing demo config")?
        }
        None => DemoConfig::default(),
    };
    if let Some(ms) = cli.wait_ms {
        cfg.slideshow.wait_time = Duration::from_millis(ms);
    }

    let dom = Arc::new(MemoryDom::new());
    let naturals: Vec<(f64, f64)> = (0..cfg.slides.max(1))
        .map(|i| {
            if i % 2 == 0 {
                (400.0, 300.0)
            } else {
                (300.0, 400.0)
            }
        })
        .collect();
    dom.build_slideshow_fixture("gallery", &naturals);
    info!(slides = naturals.len(), "fixture document built");

    let show = Slideshow::attach(dom.clone() as Arc<dyn Dom>, "#gallery", cfg.slideshow.clone())?;

    // Scripted interaction: a hover pause, a manual step with a second
    // click landing mid-transition, then a resize burst.
    tokio::time::sleep(Duration::from_millis(500)).await;
    show.command(WidgetCommand::HoverEnter).await?;
    tokio::time::sleep(Duration::from_millis(500)).await;
    show.command(WidgetCommand::HoverExit).await?;
    show.command(WidgetCommand::Next).await?;
    show.command(WidgetCommand::Prev).await?;
    for _ in 0..5 {
        show.command(WidgetCommand::Resize).await?;
    }
    tokio::time::sleep(cfg.run_for).await;

    show.detach().await?;
    info!("session complete");
    Ok(())
}
