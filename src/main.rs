//! keydoc: terminal preview of the keybinding help overlay
//!
//! Reads a JSON bindings file, registers every entry with its description
//! and group, and shows the resulting help pages one after another.
//! Press enter to move to the next page; a page that times out ends the
//! preview.

mod lifecycle;

use std::path::PathBuf;

use anyhow::{Context, Result};
use keydoc::host::Presenter;
use keydoc::term::{load_bindings, register_all, TermHost};
use keydoc::{Config, DisplayOptions, HelpOverlay, OverlayEvent};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::lifecycle::ShutdownSignal;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr, pages to stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "keydoc starting"
    );

    let config = Config::load().context("failed to load configuration")?;

    let bindings_path = std::env::args_os()
        .nth(1)
        .or_else(|| std::env::var_os("KEYDOC_BINDINGS"))
        .map(PathBuf::from)
        .or_else(|| config.bindings_path.clone())
        .context(
            "no bindings file: pass a path, set KEYDOC_BINDINGS, or set bindings_path in the config",
        )?;
    let entries = load_bindings(&bindings_path)?;
    info!(path = ?bindings_path, entries = entries.len(), "bindings loaded");

    let (event_tx, mut event_rx) = broadcast::channel::<OverlayEvent>(16);
    let mut overlay = HelpOverlay::with_events(config, event_tx);
    let mut host = TermHost::stdout();

    register_all(&mut overlay, &mut host, entries);
    overlay.display(&mut host, DisplayOptions::default());

    let mut shutdown = ShutdownSignal::new().context("failed to register signal handlers")?;
    let mut stdin = BufReader::new(tokio::io::stdin()).lines();

    loop {
        while let Ok(event) = event_rx.try_recv() {
            info!(%event, "overlay event");
        }

        let Some((handle, timeout)) = host.showing() else {
            break;
        };
        tokio::select! {
            line = stdin.next_line() => {
                match line.context("failed to read stdin")? {
                    Some(_) => {
                        host.dismiss(handle);
                        overlay.on_dismissed(&mut host, handle);
                    }
                    None => break,
                }
            }

            _ = tokio::time::sleep(timeout) => {
                host.dismiss(handle);
                overlay.on_expired(handle);
            }

            _ = shutdown.wait() => {
                info!("shutdown signal received");
                break;
            }
        }
    }

    while let Ok(event) = event_rx.try_recv() {
        info!(%event, "overlay event");
    }
    info!("keydoc stopped");

    Ok(())
}
