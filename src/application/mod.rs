pub mod auth;
pub mod market_poller;

pub use auth::AuthService;
pub use market_poller::{MarketCommand, MarketPoller, MarketUpdate, POLL_INTERVAL};
