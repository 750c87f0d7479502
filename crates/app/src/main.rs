mod logging;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use portal_core::Clock;
use services::{AppServices, PortalConfig};
use storage::InMemorySessionStorage;
use tracing::info;
use ui::{App, UiApp, build_app_context};

/// Workshop Portal participant onboarding.
#[derive(Debug, Parser)]
#[command(name = "workshop-portal", version, about)]
struct Args {
    /// Onboarding configuration (TOML). Defaults to the built-in steps.
    #[arg(long, env = "PORTAL_CONFIG")]
    config: Option<PathBuf>,

    /// Log filter, e.g. `info` or `services=debug`. `RUST_LOG` takes precedence.
    #[arg(long, env = "PORTAL_LOG", default_value = "info")]
    log_level: String,

    /// Validate the configuration and exit without opening a window.
    #[arg(long)]
    check: bool,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<PortalConfig> {
    match path {
        Some(path) => PortalConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display())),
        None => PortalConfig::builtin().context("loading built-in configuration"),
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    logging::init_logging(&args.log_level)?;

    // Malformed step configuration fails here, before any window opens.
    let config = load_config(args.config.as_ref())?;
    info!(
        steps = config.catalog().total_steps(),
        source = args
            .config
            .as_ref()
            .map_or_else(|| "built-in".to_owned(), |path| path.display().to_string()),
        "configuration loaded"
    );

    if args.check {
        println!(
            "configuration ok: {} steps",
            config.catalog().total_steps()
        );
        return Ok(());
    }

    // Session-scoped: created empty at launch and dropped on exit.
    let storage = Arc::new(InMemorySessionStorage::new());
    let services = AppServices::new(&config, Clock::system(), storage);
    let app: Arc<dyn UiApp> = Arc::new(services);
    let context = build_app_context(&app);

    // Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(config.branding().title.clone())
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run(Args::parse()) {
        eprintln!("{err:#}");
        std::process::exit(2);
    }
}
