//! # Coindeck Core
//!
//! Domain types and the fetch/normalize/export pipeline for coindeck.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`domain`] | Domain models ([`PriceRecord`]) |
//! | [`error`] | Fetch error taxonomy |
//! | [`export`] | CSV export with currency-aware formatting |
//! | [`http_client`] | HTTP client abstraction |
//! | [`provider`] | Market-data provider adapter |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coindeck_core::{CoinGeckoMarkets, CsvExport};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let markets = CoinGeckoMarkets::default();
//!     let records = markets.fetch_top().await?;
//!
//!     let export = CsvExport::build(&records, chrono::Local::now());
//!     std::fs::write(&export.filename, &export.bytes)?;
//!
//!     Ok(())
//! }
//! ```

pub mod domain;
pub mod error;
pub mod export;
pub mod http_client;
pub mod provider;

pub use domain::PriceRecord;
pub use error::FetchError;
pub use export::CsvExport;
pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};
pub use provider::CoinGeckoMarkets;
