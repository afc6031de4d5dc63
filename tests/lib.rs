//! Shared fixtures for the coindeck integration tests.

use std::sync::Arc;

use coindeck_core::CoinGeckoMarkets;
use coindeck_ledger::{Ledger, LedgerConfig};
use coindeck_web::{build_router, AppState};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Provider payload with `count` coins, rank 1 first, lowercase symbols.
pub fn markets_payload(count: usize) -> String {
    let coins: Vec<serde_json::Value> = (1..=count)
        .map(|rank| {
            serde_json::json!({
                "id": format!("coin-{rank}"),
                "name": format!("Coin {rank}"),
                "symbol": format!("c{rank}"),
                "current_price": 1000.0 / rank as f64,
                "market_cap": 1_000_000_000_i64 / rank as i64,
                "market_cap_rank": rank,
                "price_change_percentage_24h": if rank % 2 == 0 { serde_json::Value::Null } else { serde_json::json!(2.345) },
                "image": format!("https://assets.test/coin-{rank}.png"),
            })
        })
        .collect();
    serde_json::to_string(&coins).expect("serialize payload")
}

/// Mock provider answering the markets endpoint with `count` coins.
pub async fn provider_with_coins(count: usize) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/coins/markets"))
        .respond_with(ResponseTemplate::new(200).set_body_string(markets_payload(count)))
        .mount(&server)
        .await;
    server
}

/// Mock provider answering the markets endpoint with the given status.
pub async fn provider_with_status(status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/coins/markets"))
        .respond_with(ResponseTemplate::new(status))
        .mount(&server)
        .await;
    server
}

pub async fn open_test_ledger(dir: &TempDir) -> Ledger {
    let db_path = dir.path().join("ledger.db");
    Ledger::connect(LedgerConfig {
        url: format!("sqlite://{}?mode=rwc", db_path.display()),
    })
    .await
    .expect("ledger connect")
}

/// Serve a full app against `provider_url` on an ephemeral port.
///
/// Returns the base URL, the ledger handle for direct inspection, and the
/// tempdir guard keeping the database alive.
pub async fn spawn_app(provider_url: &str) -> (String, Ledger, TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let ledger = open_test_ledger(&dir).await;

    let state = AppState {
        markets: Arc::new(CoinGeckoMarkets::with_base_url(provider_url)),
        ledger: ledger.clone(),
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, build_router(state))
            .await
            .expect("serve");
    });

    (format!("http://{}", addr), ledger, dir)
}
