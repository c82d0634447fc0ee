use reqwest::Client;
use std::time::Duration;
use url::Url;

pub struct HttpClientFactory;

impl HttpClientFactory {
    /// Creates the HTTP client used against the market data provider.
    ///
    /// No retry layer: a failed poll is surfaced as-is and the previously
    /// rendered data stays in place until the next scheduled tick.
    pub fn create_client() -> Client {
        Client::builder()
            .pool_max_idle_per_host(2)
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new())
    }
}

/// Builds a URL with percent-encoded query parameters appended.
pub fn build_url_with_query<K, V>(base_url: &str, params: &[(K, V)]) -> anyhow::Result<String>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let url = Url::parse_with_params(
        base_url,
        params.iter().map(|(k, v)| (k.as_ref(), v.as_ref())),
    )?;
    Ok(url.into())
}
