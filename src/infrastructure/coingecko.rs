//! CoinGecko market data client.
//!
//! Thin wrapper over the public, unauthenticated `/coins/markets` endpoint.
//! One request per poll, quotes in USD, first page only. No caching and no
//! retries live here; the polling coordinator owns the cadence.

use crate::domain::errors::MarketDataError;
use crate::domain::ports::MarketDataService;
use crate::domain::quote::AssetQuote;
use crate::infrastructure::http_client::{HttpClientFactory, build_url_with_query};
use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";
pub const DEFAULT_VS_CURRENCY: &str = "usd";
pub const DEFAULT_PAGE_SIZE: u32 = 20;

pub struct CoinGeckoMarketDataService {
    client: Client,
    base_url: String,
    vs_currency: String,
    page_size: u32,
}

impl CoinGeckoMarketDataService {
    pub fn builder() -> CoinGeckoMarketDataServiceBuilder {
        CoinGeckoMarketDataServiceBuilder::default()
    }

    async fn fetch_markets(
        &self,
        ids: Option<&str>,
    ) -> Result<Vec<AssetQuote>, MarketDataError> {
        let page_size = self.page_size.to_string();
        let mut params: Vec<(&str, &str)> = vec![("vs_currency", self.vs_currency.as_str())];
        if let Some(ids) = ids {
            params.push(("ids", ids));
        }
        params.extend([
            ("order", "market_cap_desc"),
            ("per_page", page_size.as_str()),
            ("page", "1"),
            ("sparkline", "false"),
        ]);

        let url = build_url_with_query(&format!("{}/coins/markets", self.base_url), &params)
            .map_err(|e| MarketDataError::Transport {
                reason: e.to_string(),
            })?;

        debug!(%url, "requesting market data");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| MarketDataError::Transport {
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(MarketDataError::Transport {
                reason: format!("status {}", response.status()),
            });
        }

        let coins: Vec<MarketCoin> =
            response
                .json()
                .await
                .map_err(|e| MarketDataError::InvalidResponse {
                    reason: e.to_string(),
                })?;

        Ok(coins.into_iter().map(MarketCoin::into_quote).collect())
    }
}

#[derive(Default)]
pub struct CoinGeckoMarketDataServiceBuilder {
    base_url: Option<String>,
    vs_currency: Option<String>,
    page_size: Option<u32>,
}

impl CoinGeckoMarketDataServiceBuilder {
    pub fn base_url(mut self, base_url: String) -> Self {
        self.base_url = Some(base_url);
        self
    }

    pub fn vs_currency(mut self, vs_currency: String) -> Self {
        self.vs_currency = Some(vs_currency);
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn build(self) -> CoinGeckoMarketDataService {
        CoinGeckoMarketDataService {
            client: HttpClientFactory::create_client(),
            base_url: self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            vs_currency: self
                .vs_currency
                .unwrap_or_else(|| DEFAULT_VS_CURRENCY.to_string()),
            page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }
}

#[async_trait]
impl MarketDataService for CoinGeckoMarketDataService {
    async fn fetch_quotes(&self, ids: &[String]) -> Result<Vec<AssetQuote>, MarketDataError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids_param = ids.join(",");
        self.fetch_markets(Some(&ids_param)).await
    }

    async fn fetch_available_assets(&self) -> Result<Vec<AssetQuote>, MarketDataError> {
        self.fetch_markets(None).await
    }
}

/// Wire format of one entry in the `/coins/markets` response.
#[derive(Debug, Deserialize)]
struct MarketCoin {
    id: String,
    name: String,
    symbol: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    current_price: Option<Decimal>,
    #[serde(default)]
    price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    total_volume: Option<Decimal>,
}

impl MarketCoin {
    fn into_quote(self) -> AssetQuote {
        AssetQuote {
            id: self.id,
            name: self.name,
            symbol: self.symbol,
            image: self.image,
            current_price: self.current_price.unwrap_or(Decimal::ZERO),
            price_change_percentage_24h: self.price_change_percentage_24h,
            total_volume: self.total_volume.unwrap_or(Decimal::ZERO),
        }
    }
}
