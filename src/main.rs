//! Tablar demo binary.
//!
//! Wires the core together the way the dashboard view would: loads config
//! and persisted state, resolves the background image once, and prints the
//! composed settings view as JSON.

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

use tablar::{
    FileStorage, HttpBackgroundSource, LoadOutcome, Settings, SettingsStore, StoredDarkMode,
    TablarConfig, refresh_background,
};

/// Tablar - settings store and tic-tac-toe engine for a new-tab dashboard
#[derive(Parser, Debug)]
#[command(name = "tablar")]
#[command(about = "New-tab dashboard core", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "tablar.toml")]
    config: PathBuf,

    /// Override the storage directory from the config file
    #[arg(long)]
    storage_dir: Option<PathBuf>,

    /// Skip the background-image resolution fetch
    #[arg(long)]
    skip_fetch: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli.config)?;
    let storage_dir = cli
        .storage_dir
        .unwrap_or_else(|| config.storage_dir().clone());

    let storage = FileStorage::new(storage_dir);
    let defaults = Settings::with_collection_url(config.collection_background_url().clone());
    let (mut store, outcome) = SettingsStore::load_with_defaults(Box::new(storage.clone()), defaults)?;
    match outcome {
        LoadOutcome::Loaded => info!("Restored persisted settings"),
        LoadOutcome::Defaulted => info!("No usable persisted settings, starting from defaults"),
    }

    let dark_mode = StoredDarkMode::load(Box::new(storage))?;

    if !cli.skip_fetch {
        let source = HttpBackgroundSource::new();
        let cached = refresh_background(&mut store, &source).await?;
        info!(cached, "Background refresh complete");
    }

    let view = store.view(&dark_mode);
    println!("{}", serde_json::to_string_pretty(&view)?);

    Ok(())
}

/// Loads the config file, or defaults when it does not exist.
#[instrument]
fn load_config(path: &Path) -> Result<TablarConfig> {
    if path.exists() {
        Ok(TablarConfig::from_file(path)?)
    } else {
        info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        Ok(TablarConfig::default())
    }
}
