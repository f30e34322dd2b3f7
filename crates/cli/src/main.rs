//! qbank CLI - interactive study-question tracker.

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

use qbank_session::Session;
use qbank_storage::{load_catalog, DataFiles, JsonProgressStore, ProgressStore};

#[derive(Parser)]
#[command(name = "qbank")]
#[command(version, about = "Interactive study-question tracker (get, done, mark, stats, help, quit)", long_about = None)]
struct Cli {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for the prompt loop.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let _cli = Cli::parse();

    let files = DataFiles::default();
    let catalog = load_catalog(&files)
        .await
        .context("could not load the question catalog")?;
    let store = JsonProgressStore::new(files);
    let progress = store
        .load()
        .await
        .context("could not load saved progress")?;

    info!(
        "Loaded {} questions ({} done, {} marked)",
        catalog.len(),
        progress.done.len(),
        progress.marked.len()
    );

    let mut session = Session::new(catalog, progress, store);
    session
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await?;

    Ok(())
}
