use rust_decimal::Decimal;

/// One point-in-time market snapshot for a single asset.
///
/// Quotes are transient: they are fetched fresh on every poll and never
/// persisted anywhere.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetQuote {
    pub id: String,
    pub name: String,
    pub symbol: String,
    /// Icon URL as reported by the provider.
    pub image: String,
    pub current_price: Decimal,
    /// 24h percent change. The provider reports `null` for freshly listed
    /// assets, so this stays optional.
    pub price_change_percentage_24h: Option<f64>,
    pub total_volume: Decimal,
}
