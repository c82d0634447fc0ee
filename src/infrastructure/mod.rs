pub mod coingecko;
pub mod http_client;
pub mod i18n;
pub mod persistence;

pub use coingecko::CoinGeckoMarketDataService;
pub use persistence::{InMemoryPreferenceStore, JsonPreferenceStore};
