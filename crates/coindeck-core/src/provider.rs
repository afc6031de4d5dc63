//! Market-data provider adapter.
//!
//! One bounded GET against a CoinGecko-shaped `/coins/markets` endpoint,
//! normalized into [`PriceRecord`]s. No retries: a failed call surfaces
//! immediately as a [`FetchError`].

use std::sync::Arc;

use serde::Deserialize;

use crate::domain::PriceRecord;
use crate::error::FetchError;
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};

/// Public CoinGecko API base URL.
pub const COINGECKO_API_BASE: &str = "https://api.coingecko.com/api/v3";

/// Fixed fetch configuration: top 10 by market cap, USD, no sparkline.
const VS_CURRENCY: &str = "usd";
const ORDER: &str = "market_cap_desc";
const PER_PAGE: u32 = 10;
const PAGE: u32 = 1;

/// Outbound timeout for the markets call.
const FETCH_TIMEOUT_MS: u64 = 10_000;

/// Adapter for the provider's "markets" endpoint.
#[derive(Clone)]
pub struct CoinGeckoMarkets {
    base_url: String,
    http_client: Arc<dyn HttpClient>,
}

impl Default for CoinGeckoMarkets {
    fn default() -> Self {
        Self {
            base_url: String::from(COINGECKO_API_BASE),
            http_client: Arc::new(ReqwestHttpClient::new()),
        }
    }
}

impl CoinGeckoMarkets {
    /// Adapter against an alternate base URL, e.g. a mock server in tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_http_client(mut self, http_client: Arc<dyn HttpClient>) -> Self {
        self.http_client = http_client;
        self
    }

    fn markets_url(&self) -> String {
        format!(
            "{}/coins/markets?vs_currency={}&order={}&per_page={}&page={}&sparkline=false",
            self.base_url, VS_CURRENCY, ORDER, PER_PAGE, PAGE
        )
    }

    /// Fetch the top coins by market cap, rank 1 first.
    ///
    /// Symbols are upper-cased on ingestion; provider order is preserved.
    pub async fn fetch_top(&self) -> Result<Vec<PriceRecord>, FetchError> {
        let request = HttpRequest::get(self.markets_url()).with_timeout_ms(FETCH_TIMEOUT_MS);

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|e| FetchError::Transport(e.message().to_string()))?;

        if !response.is_success() {
            return Err(FetchError::Status {
                status: response.status,
            });
        }

        let coins: Vec<RawMarketCoin> = serde_json::from_str(&response.body).map_err(|e| {
            FetchError::MalformedPayload(format!("failed to parse markets response: {}", e))
        })?;

        coins.into_iter().map(normalize_coin).collect()
    }
}

/// Wire shape of one element of the provider's markets array.
///
/// Every field is optional here so that a missing field produces a
/// [`FetchError::MalformedPayload`] naming the field instead of an opaque
/// serde error.
#[derive(Debug, Clone, Deserialize)]
struct RawMarketCoin {
    id: Option<String>,
    name: Option<String>,
    symbol: Option<String>,
    current_price: Option<f64>,
    market_cap: Option<i64>,
    market_cap_rank: Option<u32>,
    price_change_percentage_24h: Option<f64>,
    image: Option<String>,
}

fn normalize_coin(raw: RawMarketCoin) -> Result<PriceRecord, FetchError> {
    Ok(PriceRecord {
        id: required(raw.id, "id")?,
        name: required(raw.name, "name")?,
        symbol: required(raw.symbol, "symbol")?.to_uppercase(),
        current_price: required(raw.current_price, "current_price")?,
        market_cap: required(raw.market_cap, "market_cap")?,
        market_cap_rank: required(raw.market_cap_rank, "market_cap_rank")?,
        price_change_percentage_24h: raw.price_change_percentage_24h,
        image: required(raw.image, "image")?,
    })
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T, FetchError> {
    value.ok_or_else(|| FetchError::MalformedPayload(format!("missing field '{}'", field)))
}
