//! # Coindeck Web
//!
//! The HTTP surface: static pages, the crypto-price JSON proxy, the CSV
//! download endpoint, the download-history API, and the marks-percentage
//! form. All state is carried in an explicitly constructed [`AppState`];
//! there are no process-wide handles.

pub mod config;
pub mod error;
pub mod log;
pub mod routes;

pub use config::AppConfig;
pub use error::ApiError;
pub use routes::{build_router, AppState};
