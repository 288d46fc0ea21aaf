//! gbweb CLI - Headless host for the gbweb front-end
//!
//! Drives the same session and persistence core as the web page, against a
//! directory-backed durable store instead of IndexedDB.
//!
//! # Commands
//!
//! - `gbweb status` - Show the restored session and persisted entries
//! - `gbweb rom <FILE>` - Bind a ROM, as if picked in the ROM picker
//! - `gbweb save <FILE>` - Bind a save file, as if picked in the save picker
//! - `gbweb load` - Start the bound cartridge and persist its save RAM
//! - `gbweb download` - Export save RAM as `<session>.sav`
//! - `gbweb press <BUTTON>...` - Tap on-screen buttons and print the key events
//! - `gbweb precache <DIR>` - Build the offline precache manifest for a site
//!
//! # Usage
//!
//! ```bash
//! gbweb rom ~/roms/zelda.gb
//! gbweb save ~/backups/zelda.sav
//! gbweb download --out ~/backups
//! ```

mod download;
mod host;
mod precache;
mod press;
mod status;
mod upload;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gbweb - Game Boy emulator front-end, headless
#[derive(Parser)]
#[command(name = "gbweb")]
#[command(about = "Headless host for the gbweb emulator front-end")]
#[command(version)]
struct Cli {
    /// Directory holding the durable copy of the VFS (overrides config)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the restored session and persisted entries
    Status,

    /// Bind a ROM file and persist it
    Rom(upload::UploadArgs),

    /// Bind a save file and persist it
    Save(upload::UploadArgs),

    /// Start the bound cartridge and persist its save RAM
    Load,

    /// Export save RAM as <session>.sav
    Download(download::DownloadArgs),

    /// Tap on-screen buttons and print the key events they inject
    Press(press::PressArgs),

    /// Build the offline precache manifest for a site directory
    Precache(precache::PrecacheArgs),
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let options = host::HostOptions {
        data_dir: cli.data_dir,
        config: cli.config,
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        match cli.command {
            Commands::Status => status::execute(&options).await,
            Commands::Rom(args) => upload::execute(&options, args, gbweb_core::Slot::Rom).await,
            Commands::Save(args) => upload::execute(&options, args, gbweb_core::Slot::Save).await,
            Commands::Load => upload::load(&options).await,
            Commands::Download(args) => download::execute(&options, args).await,
            Commands::Press(args) => press::execute(&options, args).await,
            // Pure build step; no session involved.
            Commands::Precache(args) => precache::execute(args),
        }
    })
}
