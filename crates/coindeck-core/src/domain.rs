use serde::{Deserialize, Serialize};

/// One normalized cryptocurrency market snapshot.
///
/// Fetched fresh per request and never cached; the serde field names are
/// the wire shape served by `/api/crypto-prices`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub id: String,
    pub name: String,
    /// Ticker symbol, upper-cased on ingestion regardless of source casing.
    pub symbol: String,
    /// Current price in USD.
    pub current_price: f64,
    /// Market capitalization in whole USD.
    pub market_cap: i64,
    /// Market-cap rank, 1-based.
    pub market_cap_rank: u32,
    /// 24-hour percent change; absent for newly listed coins.
    pub price_change_percentage_24h: Option<f64>,
    /// Icon URL.
    pub image: String,
}
