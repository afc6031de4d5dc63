use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use chrono::Local;
use coindeck_core::{CoinGeckoMarkets, CsvExport, PriceRecord};
use coindeck_ledger::{DownloadRecord, Ledger, DEFAULT_HISTORY_LIMIT};
use tower_http::cors::CorsLayer;

use crate::error::ApiError;

/// Form fields accepted by `/submit`, summed and divided by five.
const SUBJECTS: [&str; 5] = ["Physics", "Maths", "Chemistry", "Hindi", "English"];

/// Everything a request handler needs, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub markets: Arc<CoinGeckoMarkets>,
    pub ledger: Ledger,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/dashboard", get(dashboard))
        .route("/api/crypto-prices", get(crypto_prices))
        .route("/download-csv", get(download_csv))
        .route("/api/download-history", get(download_history))
        .route("/submit", post(submit))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn home() -> Html<&'static str> {
    Html(include_str!("../static/home.html"))
}

async fn dashboard() -> Html<&'static str> {
    Html(include_str!("../static/dashboard.html"))
}

/// Top coins by market cap, proxied straight from the provider.
async fn crypto_prices(
    State(state): State<AppState>,
) -> Result<Json<Vec<PriceRecord>>, ApiError> {
    let records = state.markets.fetch_top().await?;
    Ok(Json(records))
}

/// Fetch, serialize to CSV, best-effort ledger write, then serve the file
/// with cache-prevention headers. A ledger failure must not cost the user
/// their download.
async fn download_csv(State(state): State<AppState>) -> Result<Response, ApiError> {
    let records = state.markets.fetch_top().await?;
    let export = CsvExport::build(&records, Local::now());

    if let Err(error) = state
        .ledger
        .record(
            &export.filename,
            export.bytes.len() as i64,
            export.record_count as i64,
        )
        .await
    {
        tracing::warn!(
            error = %error,
            filename = %export.filename,
            "failed to record download, serving CSV anyway"
        );
    }

    let headers = [
        (
            header::CONTENT_TYPE,
            String::from("text/csv; charset=utf-8"),
        ),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", export.filename),
        ),
        (
            header::CACHE_CONTROL,
            String::from("no-cache, no-store, must-revalidate"),
        ),
        (header::PRAGMA, String::from("no-cache")),
        (header::EXPIRES, String::from("0")),
    ];

    Ok((headers, export.bytes).into_response())
}

async fn download_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<DownloadRecord>>, ApiError> {
    let history = state.ledger.list(DEFAULT_HISTORY_LIMIT).await?;
    Ok(Json(history))
}

/// Marks-percentage utility, unrelated to the crypto pipeline. Fields are
/// validated explicitly so a missing or non-numeric subject is a 400, not
/// an unhandled fault.
async fn submit(Form(fields): Form<HashMap<String, String>>) -> Result<Html<String>, ApiError> {
    let mut total: i64 = 0;
    for subject in SUBJECTS {
        let raw = fields
            .get(subject)
            .ok_or_else(|| ApiError::Validation(format!("missing field '{}'", subject)))?;
        let marks: i64 = raw.trim().parse().map_err(|_| {
            ApiError::Validation(format!("field '{}' must be an integer", subject))
        })?;
        total += marks;
    }

    let percentage = total as f64 / SUBJECTS.len() as f64;
    Ok(Html(render_percentage_page(percentage)))
}

fn render_percentage_page(percentage: f64) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Coindeck - Result</title></head>
<body>
  <h1>Result</h1>
  <p>Percentage: <strong>{percentage}%</strong></p>
  <p><a href="/">Back</a></p>
</body>
</html>
"#
    )
}
