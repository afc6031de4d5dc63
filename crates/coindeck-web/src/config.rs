use coindeck_core::provider::COINGECKO_API_BASE;

/// Runtime configuration, resolved from the environment with defaults.
/// CLI flags may override individual fields after the fact.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listen address, `COINDECK_BIND`.
    pub bind_addr: String,
    /// SQLite URL for the download ledger, `COINDECK_DATABASE_URL`.
    pub database_url: String,
    /// Market-data provider base URL, `COINDECK_PROVIDER_URL`.
    pub provider_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env_or("COINDECK_BIND", "127.0.0.1:8000"),
            database_url: env_or("COINDECK_DATABASE_URL", "sqlite://coindeck.db?mode=rwc"),
            provider_base_url: env_or("COINDECK_PROVIDER_URL", COINGECKO_API_BASE),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| String::from(default))
}
