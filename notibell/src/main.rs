// notibell: command-line shell around the notification bell.

mod cli;
mod render;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use std::io::{self, Write};
use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::{debug, error, info, warn};

use notibell_core::{init_logging, init_minimal_logging, ConfigLoader, CoreConfig};
use notibell_domain::{
    demo_notifications, load_seed_file, DefaultNotificationStore, NotificationBell, NotificationEvent,
    NotificationRecord, NotificationStore,
};

use crate::cli::{BellOp, Cli};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        // No-op when the configured subscriber is already installed.
        init_minimal_logging();
        error!("notibell failed: {:#}", e);
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<CoreConfig> {
    match &cli.config {
        Some(path) => ConfigLoader::load_from_path(path)
            .with_context(|| format!("Failed to load configuration from {:?}", path)),
        None => ConfigLoader::load().context("Failed to load configuration"),
    }
}

/// `--seed` wins over `store.seed_path`; with neither, the demo records are used.
fn seed_records(cli: &Cli, config: &CoreConfig) -> Result<Vec<NotificationRecord>> {
    match cli.seed.as_ref().or(config.store.seed_path.as_ref()) {
        Some(path) => load_seed_file(path).with_context(|| format!("Failed to load seed file {:?}", path)),
        None => {
            debug!("No seed file configured, using demo notifications");
            Ok(demo_notifications())
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    init_logging(&config.logging).context("Failed to initialize logging")?;
    info!("Starting notibell");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(cli, &config, Utc::now(), &mut out)
}

/// Builds the bell, applies the operations and writes the rendered view to `out`.
fn execute(cli: &Cli, config: &CoreConfig, now: DateTime<Utc>, out: &mut impl Write) -> Result<()> {
    let store = DefaultNotificationStore::with_config(seed_records(cli, config)?, &config.store)
        .context("Failed to build notification store")?;
    let mut events = store.subscribe();
    let mut bell = NotificationBell::new(store, &config.bell);
    if cli.open {
        bell.toggle_panel();
    }

    for op in &cli.ops {
        apply(&mut bell, op);
        let drained = drain_events(&mut events);
        debug!("{:?}: {} events, {} missed", op, drained.received, drained.missed);
    }

    out.write_all(render::render(&bell.view(now)).as_bytes())
        .context("Failed to write output")?;
    out.flush().context("Failed to write output")?;
    info!("notibell finished at revision {}", bell.store().revision());
    Ok(())
}

fn apply(bell: &mut NotificationBell, op: &BellOp) {
    match op {
        BellOp::Read(id) => {
            if !bell.mark_as_read(id) {
                warn!("read:{} changed nothing", id);
            }
        }
        BellOp::ReadAll => {
            let marked = bell.mark_all_as_read();
            debug!("read-all marked {} notifications", marked);
        }
        BellOp::Remove(id) => {
            if !bell.dismiss(id) {
                warn!("remove:{} changed nothing", id);
            }
        }
        BellOp::Activate(id) => match bell.activate(id) {
            Some(target) => info!("Activated {} -> {}", id, target),
            None => debug!("activate:{} has no action target", id),
        },
        BellOp::Toggle => {
            bell.toggle_panel();
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Drained {
    received: usize,
    missed: u64,
}

fn drain_events(events: &mut broadcast::Receiver<NotificationEvent>) -> Drained {
    let mut drained = Drained::default();
    loop {
        match events.try_recv() {
            Ok(event) => {
                drained.received += 1;
                info!(revision = event.revision(), unread = event.unread_count(), "{:?}", event);
            }
            Err(TryRecvError::Lagged(skipped)) => {
                drained.missed += skipped;
                warn!("Missed {} notification events", skipped);
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
        }
    }
    drained
}
