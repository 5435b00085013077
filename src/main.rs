use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use huepack::store::{KeyValueStore, RegFileStore};
use huepack::{ThemeConfig, backup, reg, schema};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "huepack")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a theme file and print it as JSON
    Show {
        /// Path to a .json or .reg theme file
        path: PathBuf,
    },
    /// Convert a theme file between .json and .reg
    Convert {
        /// Input theme file
        input: PathBuf,
        /// Output theme file; format follows the extension
        output: PathBuf,
    },
    /// Apply a theme file to the store, backing up first
    Apply {
        /// Theme file to apply
        path: PathBuf,
        /// Backing .reg file for the store
        #[arg(short, long)]
        store: PathBuf,
    },
    /// Save the store's current theme to a file
    Pull {
        /// Output theme file
        output: PathBuf,
        /// Backing .reg file for the store
        #[arg(short, long)]
        store: PathBuf,
    },
    /// Back up the store's current theme
    Backup {
        /// Backup destination
        #[arg(default_value = backup::BACKUP_FILE)]
        dest: PathBuf,
        /// Backing .reg file for the store
        #[arg(short, long)]
        store: PathBuf,
    },
    /// List the schema keys with display names and default colors
    Keys,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "huepack=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show { path } => {
            let config = load_reporting(&path)?;
            println!("{}", serde_json::to_string_pretty(&config.to_json())?);
        }
        Commands::Convert { input, output } => {
            let config = load_reporting(&input)?;
            config.save_path(&output)?;
            info!("wrote {:?}", output);
        }
        Commands::Apply { path, store } => {
            let config = load_reporting(&path)?;
            let mut file_store = RegFileStore::new(store);

            // First apply over an existing theme keeps a copy of it.
            let backup_path = backup_path_for(file_store.file());
            if file_store.exists(reg::HIVE_PATH) && !backup_path.exists() {
                backup::backup(&file_store, reg::HIVE_PATH, &backup_path)?;
            }

            file_store.write_all(reg::HIVE_PATH, config.colors())?;
            info!("applied {} colors to the store", config.colors().len());
        }
        Commands::Pull { output, store } => {
            let file_store = RegFileStore::new(store);
            let raw = file_store.read_all(reg::HIVE_PATH)?;
            let outcome = ThemeConfig::load(raw)?;
            report_backfilled(&outcome.backfilled);
            outcome.config.save_path(&output)?;
            info!("wrote {:?}", output);
        }
        Commands::Backup { dest, store } => {
            let file_store = RegFileStore::new(store);
            backup::backup(&file_store, reg::HIVE_PATH, &dest)?;
        }
        Commands::Keys => {
            for entry in schema::entries() {
                println!("{:<32} {:<28} {}", entry.key, entry.display_name, entry.default);
            }
        }
    }

    Ok(())
}

/// Load a theme file and log any backfilled keys.
fn load_reporting(path: &Path) -> Result<ThemeConfig> {
    let outcome = ThemeConfig::load_path(path)?;
    report_backfilled(&outcome.backfilled);
    Ok(outcome.config)
}

fn report_backfilled(backfilled: &[String]) {
    if !backfilled.is_empty() {
        warn!("missing keys backfilled with defaults: {}", backfilled.join(", "));
    }
}

/// Conventional backup location: next to the store's backing file.
fn backup_path_for(store_file: &Path) -> PathBuf {
    let dir = store_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    dir.join(backup::BACKUP_FILE)
}
