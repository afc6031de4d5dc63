use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use coindeck_core::CoinGeckoMarkets;
use coindeck_ledger::{Ledger, LedgerConfig};
use coindeck_web::log::init_logging;
use coindeck_web::{build_router, AppConfig, AppState};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Listen address, overrides COINDECK_BIND
    #[arg(long)]
    bind: Option<String>,

    /// SQLite URL for the download ledger, overrides COINDECK_DATABASE_URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let mut config = AppConfig::from_env();
    if let Some(bind) = cli.bind {
        config.bind_addr = bind;
    }
    if let Some(database_url) = cli.database_url {
        config.database_url = database_url;
    }

    let ledger = Ledger::connect(LedgerConfig {
        url: config.database_url.clone(),
    })
    .await?;

    let markets = CoinGeckoMarkets::with_base_url(config.provider_base_url.clone());
    let state = AppState {
        markets: Arc::new(markets),
        ledger,
    };

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "coindeck listening");

    axum::serve(listener, build_router(state)).await?;

    Ok(())
}
