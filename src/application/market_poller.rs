//! Fixed-interval polling coordinator for the market data client.
//!
//! Runs on the background tokio runtime and bridges to the UI thread: the UI
//! pushes the current watchlist through a `watch` channel and receives results
//! over a crossbeam channel it drains once per frame.
//!
//! Invariants enforced here:
//! - polling is suspended entirely while the selection is empty;
//! - at most one quote request is in flight at any time;
//! - a selection change supersedes (cancels) an in-flight poll instead of
//!   queueing behind it, and rapid successive changes coalesce to the newest
//!   selection.

use crate::domain::ports::MarketDataService;
use crate::domain::quote::AssetQuote;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::time::{Instant, sleep_until};
use tracing::{debug, info, warn};

/// Refetch cadence while at least one asset is selected.
pub const POLL_INTERVAL: Duration = Duration::from_secs(30);

/// On-demand requests the UI can issue outside the polling cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketCommand {
    /// Populate the add-asset picker with the first page of available assets.
    LoadAvailableAssets,
}

/// Messages flowing back to the rendering layer.
#[derive(Debug, Clone)]
pub enum MarketUpdate {
    /// Result of a completed poll for the current selection.
    Quotes(Vec<AssetQuote>),
    /// Result of a [`MarketCommand::LoadAvailableAssets`] request.
    AvailableAssets(Vec<AssetQuote>),
    /// A poll or picker request failed. Previously rendered data stays in
    /// place; the next tick retries nothing on its own.
    Failed(String),
}

pub struct MarketPoller {
    service: Arc<dyn MarketDataService>,
    selection_rx: watch::Receiver<Vec<String>>,
    command_rx: mpsc::UnboundedReceiver<MarketCommand>,
    update_tx: crossbeam_channel::Sender<MarketUpdate>,
    poll_interval: Duration,
}

impl MarketPoller {
    pub fn new(
        service: Arc<dyn MarketDataService>,
        selection_rx: watch::Receiver<Vec<String>>,
        command_rx: mpsc::UnboundedReceiver<MarketCommand>,
        update_tx: crossbeam_channel::Sender<MarketUpdate>,
    ) -> Self {
        Self {
            service,
            selection_rx,
            command_rx,
            update_tx,
            poll_interval: POLL_INTERVAL,
        }
    }

    /// Overrides the 30s cadence. Used by tests to keep runs short.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Drives the poll loop until every selection sender and command sender
    /// is gone (i.e. the UI shut down).
    pub async fn run(mut self) {
        info!("market poller started");
        loop {
            let ids = self.selection_rx.borrow_and_update().clone();

            if ids.is_empty() {
                debug!("selection empty, polling suspended");
                tokio::select! {
                    changed = self.selection_rx.changed() => {
                        if changed.is_err() {
                            break;
                        }
                    }
                    cmd = self.command_rx.recv() => match cmd {
                        Some(cmd) => self.handle_command(cmd).await,
                        None => break,
                    },
                }
                continue;
            }

            // Exactly one request in flight; a newer selection drops it.
            let superseded = tokio::select! {
                result = self.service.fetch_quotes(&ids) => {
                    match result {
                        Ok(quotes) => {
                            debug!(count = quotes.len(), "poll completed");
                            let _ = self.update_tx.send(MarketUpdate::Quotes(quotes));
                        }
                        Err(e) => {
                            warn!("poll failed: {e}");
                            let _ = self.update_tx.send(MarketUpdate::Failed(e.to_string()));
                        }
                    }
                    false
                }
                changed = self.selection_rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    debug!("selection changed mid-poll, superseding in-flight request");
                    true
                }
            };
            if superseded {
                continue;
            }

            // Wait out the interval; picker requests are serviced while
            // waiting, and a selection change cuts the wait short.
            let deadline = Instant::now() + self.poll_interval;
            loop {
                tokio::select! {
                    _ = sleep_until(deadline) => break,
                    changed = self.selection_rx.changed() => {
                        if changed.is_err() {
                            return;
                        }
                        break;
                    }
                    cmd = self.command_rx.recv() => match cmd {
                        Some(cmd) => self.handle_command(cmd).await,
                        None => return,
                    },
                }
            }
        }
        info!("market poller stopped");
    }

    async fn handle_command(&mut self, command: MarketCommand) {
        match command {
            MarketCommand::LoadAvailableAssets => {
                match self.service.fetch_available_assets().await {
                    Ok(assets) => {
                        let _ = self.update_tx.send(MarketUpdate::AvailableAssets(assets));
                    }
                    Err(e) => {
                        warn!("available-assets fetch failed: {e}");
                        let _ = self.update_tx.send(MarketUpdate::Failed(e.to_string()));
                    }
                }
            }
        }
    }
}
