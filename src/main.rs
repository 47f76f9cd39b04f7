//! Albergo content tool - entry point.
//!
//! A small maintenance CLI over the same engine the site embeds: inspect
//! the content snapshot, export and import it, or reset to schema defaults.

use albergo::model::{default_sections, SiteConfig};
use albergo::persist::{resolve_content_path, FileBackend, PersistenceAdapter};
use albergo::store::ContentStore;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

/// Inspect and maintain the albergo content snapshot.
#[derive(Parser, Debug)]
#[command(name = "albergo")]
#[command(version)]
#[command(about = "Content store tool for the albergo site engine")]
pub struct Args {
    /// Path to the content snapshot (default: ALBERGO_CONTENT or the
    /// platform data directory)
    #[arg(long)]
    pub content: Option<PathBuf>,

    /// Path to the log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Operation to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Maintenance operations.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a summary of the site configuration and section tree
    Show,
    /// Write the current snapshot as JSON to stdout
    Export,
    /// Import a snapshot JSON file (merged over schema defaults)
    Import {
        /// Snapshot file to import
        file: PathBuf,
    },
    /// Restore schema defaults, discarding all edits
    Reset {
        /// Confirm the destructive reset
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_path = args
        .log_file
        .clone()
        .unwrap_or_else(albergo::logging::default_log_path);
    albergo::logging::init(&log_path)?;

    let content_path = resolve_content_path(args.content.clone());
    info!(path = %content_path.display(), "using content snapshot");

    let adapter = PersistenceAdapter::new(FileBackend::new(&content_path));
    let mut store = ContentStore::open(adapter);

    match args.command {
        Command::Show => {
            let config = store.config();
            println!("site:      {}", config.home_title.lines().next().unwrap_or(""));
            println!("contact:   {} / {}", config.contact_email, config.contact_phone);
            println!(
                "booking:   {}",
                if config.booking_url.is_empty() {
                    "(none)"
                } else {
                    &config.booking_url
                }
            );
            println!("sections:  {}", store.sections().len());
            for section in store.sections() {
                println!("  {:<14} {}", section.id, section.title);
                for sub in &section.sub_sections {
                    println!("    {:<12} [{}] {}", sub.id, sub.body.kind(), sub.title);
                }
            }
        }
        Command::Export => {
            let json = albergo::persist::encode(store.config(), store.sections())?;
            println!("{json}");
        }
        Command::Import { file } => {
            let raw = std::fs::read_to_string(&file)?;
            // Run the import through the same default-merge as startup, so
            // partial or older snapshots acquire schema defaults.
            let staged =
                PersistenceAdapter::new(albergo::persist::MemoryBackend::with_contents(raw));
            let (config, sections) = staged.load();
            store.replace_all(config, sections);
            report_durability(&mut store)?;
            println!(
                "imported {} sections into {}",
                store.sections().len(),
                content_path.display()
            );
        }
        Command::Reset { yes } => {
            if !yes {
                return Err("refusing to reset without --yes".into());
            }
            store.replace_all(SiteConfig::default(), default_sections());
            report_durability(&mut store)?;
            println!("content reset to schema defaults");
        }
    }

    Ok(())
}

/// The store keeps write failures as non-fatal warnings; for a one-shot
/// CLI mutation a failed write means the command did nothing durable, so
/// surface it as an error.
fn report_durability(
    store: &mut ContentStore<FileBackend>,
) -> Result<(), Box<dyn std::error::Error>> {
    match store.take_persist_warning() {
        Some(warning) => Err(Box::new(warning)),
        None => Ok(()),
    }
}
