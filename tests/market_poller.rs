//! Concurrency invariants of the polling coordinator, exercised against a
//! recording mock at the market-data boundary: suspension on an empty
//! selection, coalescing of rapid selection changes, superseding of in-flight
//! polls, and the fixed refetch cadence.

use async_trait::async_trait;
use coinwatch::application::market_poller::{MarketCommand, MarketPoller, MarketUpdate};
use coinwatch::domain::errors::MarketDataError;
use coinwatch::domain::ports::MarketDataService;
use coinwatch::domain::quote::AssetQuote;
use rust_decimal::Decimal;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::{mpsc, watch};

/// Records every id set observed at the transport boundary and answers after
/// a configurable delay, so tests can change the selection mid-flight.
struct RecordingService {
    calls: Mutex<Vec<Vec<String>>>,
    available_calls: Mutex<usize>,
    response_delay: Duration,
}

impl RecordingService {
    fn new(response_delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            available_calls: Mutex::new(0),
            response_delay,
        })
    }

    fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    fn quote(id: &str) -> AssetQuote {
        AssetQuote {
            id: id.to_string(),
            name: id.to_string(),
            symbol: id.chars().take(3).collect(),
            image: String::new(),
            current_price: Decimal::ONE,
            price_change_percentage_24h: Some(0.0),
            total_volume: Decimal::ZERO,
        }
    }
}

#[async_trait]
impl MarketDataService for RecordingService {
    async fn fetch_quotes(&self, ids: &[String]) -> Result<Vec<AssetQuote>, MarketDataError> {
        self.calls.lock().unwrap().push(ids.to_vec());
        tokio::time::sleep(self.response_delay).await;
        Ok(ids.iter().map(|id| Self::quote(id)).collect())
    }

    async fn fetch_available_assets(&self) -> Result<Vec<AssetQuote>, MarketDataError> {
        *self.available_calls.lock().unwrap() += 1;
        Ok(vec![Self::quote("bitcoin"), Self::quote("ethereum")])
    }
}

struct Harness {
    service: Arc<RecordingService>,
    selection_tx: watch::Sender<Vec<String>>,
    command_tx: mpsc::UnboundedSender<MarketCommand>,
    update_rx: crossbeam_channel::Receiver<MarketUpdate>,
    task: tokio::task::JoinHandle<()>,
}

fn spawn_poller(response_delay: Duration, poll_interval: Duration) -> Harness {
    let service = RecordingService::new(response_delay);
    let (selection_tx, selection_rx) = watch::channel(Vec::new());
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (update_tx, update_rx) = crossbeam_channel::unbounded();

    let poller = MarketPoller::new(service.clone(), selection_rx, command_rx, update_tx)
        .with_poll_interval(poll_interval);
    let task = tokio::spawn(poller.run());

    Harness {
        service,
        selection_tx,
        command_tx,
        update_rx,
        task,
    }
}

fn ids(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn empty_selection_issues_no_requests() {
    let h = spawn_poller(Duration::from_millis(1), Duration::from_millis(20));

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(h.service.calls().is_empty());
    h.task.abort();
}

#[tokio::test]
async fn rapid_selection_changes_coalesce_to_the_newest_set() {
    let h = spawn_poller(Duration::from_millis(1), Duration::from_secs(60));

    // Two changes before the poller can react: only the final set may reach
    // the transport boundary.
    h.selection_tx.send(ids(&["bitcoin"])).unwrap();
    h.selection_tx
        .send(ids(&["bitcoin", "ethereum"]))
        .unwrap();

    tokio::time::sleep(Duration::from_millis(100)).await;

    let calls = h.service.calls();
    assert_eq!(calls, vec![ids(&["bitcoin", "ethereum"])]);
    h.task.abort();
}

#[tokio::test]
async fn selection_change_supersedes_an_in_flight_poll() {
    // Slow responses so the change lands mid-flight.
    let h = spawn_poller(Duration::from_millis(200), Duration::from_secs(60));

    h.selection_tx.send(ids(&["bitcoin"])).unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(h.service.calls().len(), 1);

    // Mid-flight change: the old poll is dropped, the new set is fetched
    // exactly once.
    h.selection_tx.send(ids(&["cardano"])).unwrap();
    tokio::time::sleep(Duration::from_millis(400)).await;

    let calls = h.service.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1], ids(&["cardano"]));

    // Only the superseding fetch completed and published.
    let updates: Vec<_> = h.update_rx.try_iter().collect();
    assert_eq!(updates.len(), 1);
    match &updates[0] {
        MarketUpdate::Quotes(quotes) => {
            assert_eq!(quotes.len(), 1);
            assert_eq!(quotes[0].id, "cardano");
        }
        other => panic!("expected quotes, got {other:?}"),
    }
    h.task.abort();
}

#[tokio::test]
async fn unchanged_selection_repolls_on_the_interval_only() {
    let h = spawn_poller(Duration::from_millis(1), Duration::from_millis(50));

    h.selection_tx.send(ids(&["bitcoin"])).unwrap();
    tokio::time::sleep(Duration::from_millis(180)).await;

    // ~3-4 polls in 180ms at a 50ms cadence; anything much higher would mean
    // overlapping duplicate requests for an unchanged set.
    let calls = h.service.calls();
    assert!(
        (2..=5).contains(&calls.len()),
        "expected interval-paced polls, got {}",
        calls.len()
    );
    assert!(calls.iter().all(|c| *c == ids(&["bitcoin"])));
    h.task.abort();
}

#[tokio::test]
async fn clearing_the_selection_suspends_polling() {
    let h = spawn_poller(Duration::from_millis(1), Duration::from_millis(30));

    h.selection_tx.send(ids(&["bitcoin"])).unwrap();
    tokio::time::sleep(Duration::from_millis(80)).await;
    h.selection_tx.send(Vec::new()).unwrap();
    tokio::time::sleep(Duration::from_millis(30)).await;

    let count_after_clear = h.service.calls().len();
    tokio::time::sleep(Duration::from_millis(120)).await;
    assert_eq!(h.service.calls().len(), count_after_clear);
    h.task.abort();
}

#[tokio::test]
async fn available_assets_are_served_while_suspended() {
    let h = spawn_poller(Duration::from_millis(1), Duration::from_millis(30));

    h.command_tx
        .send(MarketCommand::LoadAvailableAssets)
        .unwrap();
    tokio::time::sleep(Duration::from_millis(80)).await;

    assert_eq!(*h.service.available_calls.lock().unwrap(), 1);
    let updates: Vec<_> = h.update_rx.try_iter().collect();
    assert!(matches!(
        updates.as_slice(),
        [MarketUpdate::AvailableAssets(assets)] if assets.len() == 2
    ));
    // No quote polls happened: the selection stayed empty.
    assert!(h.service.calls().is_empty());
    h.task.abort();
}
