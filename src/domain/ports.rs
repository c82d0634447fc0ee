use crate::domain::errors::MarketDataError;
use crate::domain::quote::AssetQuote;
use async_trait::async_trait;

/// Outbound boundary to the public market data provider.
///
/// Implemented by the CoinGecko client in production and by recording mocks
/// in tests, so the polling coordinator can be exercised without a network.
#[async_trait]
pub trait MarketDataService: Send + Sync {
    /// Fetch quotes for exactly the given asset ids, order-preserving.
    ///
    /// An empty id set resolves to an empty list without issuing a request.
    async fn fetch_quotes(&self, ids: &[String]) -> Result<Vec<AssetQuote>, MarketDataError>;

    /// First page of generally available assets, unfiltered by the current
    /// selection. Used only to populate the add-asset picker.
    async fn fetch_available_assets(&self) -> Result<Vec<AssetQuote>, MarketDataError>;
}
