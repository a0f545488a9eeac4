//! Binary entry point that serves the store to the UI process. The pipeline
//! is deliberately short: configure logging on stderr (stdout carries the
//! protocol), open the store at its per-user location, answer requests until
//! the UI closes the pipe, then release the store.
use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use tutorbase::{open_default, serve};

/// Bring up logging and the store, then serve requests until stdin closes.
///
/// Returning a `Result` bubbles fatal initialization problems (an unwritable
/// home directory, a corrupt database file) up to stderr instead of crashing
/// silently.
fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let conn = open_default()?;
    info!(path = ?conn.path(), "store ready, serving requests");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    serve(&conn, stdin.lock(), &mut stdout)?;

    info!("input closed, shutting down");
    if let Err((_conn, err)) = conn.close() {
        return Err(anyhow::Error::new(err).context("failed to close the store"));
    }
    Ok(())
}
