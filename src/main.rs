use coinwatch::application::auth::AuthService;
use coinwatch::application::market_poller::{MarketCommand, MarketPoller, MarketUpdate};
use coinwatch::config::Config;
use coinwatch::domain::ports::MarketDataService;
use coinwatch::infrastructure::coingecko::CoinGeckoMarketDataService;
use coinwatch::infrastructure::i18n::I18nService;
use coinwatch::infrastructure::persistence::JsonPreferenceStore;
use coinwatch::interfaces::DashboardApp;

use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    info!("starting coinwatch");

    let config = Config::from_env()?;

    // Durable state: the registry, session pointer and language all live in
    // one JSON data directory shared by the auth and i18n services.
    let store = Arc::new(JsonPreferenceStore::new(config.data_dir.clone())?);

    let mut auth = AuthService::new(store.clone());
    auth.hydrate();

    // Apply the configured default before attaching the store so it is not
    // persisted as if the user had chosen it; a persisted choice then wins.
    let mut i18n = I18nService::new();
    i18n.set_language(&config.default_language);
    let mut i18n = i18n.with_store(store);
    i18n.hydrate();

    // UI <-> poller bridge. The selection flows in via a watch channel (new
    // values supersede unread ones), results flow back via crossbeam so the
    // egui thread can drain them without blocking.
    let (selection_tx, selection_rx) = watch::channel(Vec::<String>::new());
    let (command_tx, command_rx) = mpsc::unbounded_channel::<MarketCommand>();
    let (update_tx, update_rx) = crossbeam_channel::unbounded::<MarketUpdate>();

    let poll_interval = config.poll_interval;
    let market_service: Arc<dyn MarketDataService> = Arc::new(
        CoinGeckoMarketDataService::builder()
            .base_url(config.api_base_url.clone())
            .vs_currency(config.vs_currency.clone())
            .page_size(config.page_size)
            .build(),
    );

    // All network I/O happens on a background runtime; the main thread is
    // reserved for the UI event loop.
    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("failed to build tokio runtime");

        rt.block_on(async move {
            info!("background runtime started");
            MarketPoller::new(market_service, selection_rx, command_rx, update_tx)
                .with_poll_interval(poll_interval)
                .run()
                .await;
        });
    });

    let app = DashboardApp::new(auth, i18n, selection_tx, command_tx, update_rx);

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1180.0, 780.0])
            .with_min_inner_size([860.0, 560.0])
            .with_title("Coinwatch"),
        ..Default::default()
    };

    eframe::run_native("Coinwatch", options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow::anyhow!("UI failed to start: {e}"))
}
