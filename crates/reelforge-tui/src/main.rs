//! Terminal dashboard for the ReelForge short-video marketing toolkit.

use anyhow::Context;
use clap::Parser;
use log::{debug, info};
use reelforge_config::ReelForgeConfig;
use std::path::PathBuf;

/// Command-line options for the dashboard.
#[derive(Parser)]
#[command(name = "reelforge", version)]
struct Cli {
    /// Optional path to a reelforge.json5 config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for deterministic content generation
    #[arg(long)]
    seed: Option<u64>,
    /// Simulated generation delay in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,
}

/// Entry point for the ReelForge dashboard.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = env_logger::builder()
        .format_timestamp_millis()
        .parse_default_env()
        .try_init();

    let cli = Cli::parse();
    info!(
        "starting TUI (config_set={}, seed_set={})",
        cli.config.is_some(),
        cli.seed.is_some()
    );
    let mut config = if let Some(path) = cli.config.as_ref() {
        info!("loading config from path: {}", path.display());
        ReelForgeConfig::load_from_path(path).context("failed to load config")?
    } else {
        let cwd = std::env::current_dir().context("failed to resolve current working directory")?;
        info!("loading layered config from cwd: {}", cwd.display());
        let layered =
            ReelForgeConfig::load_layered(&cwd).context("failed to load layered config")?;
        debug!("layered config loaded (layers={})", layered.layers.len());
        layered.config
    };

    if let Some(seed) = cli.seed {
        config.generator.seed = Some(seed);
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.generator.delay_ms = delay_ms;
    }
    config.validate().context("invalid effective config")?;

    reelforge_tui::run(config).await
}
