//! # Coindeck Ledger
//!
//! Append-only record of CSV exports: one row per download, served back
//! newest-first. Rows are never updated or deleted; unbounded growth is an
//! accepted limitation of this system.

pub mod error;
pub mod models;

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

pub use error::LedgerError;
pub use models::DownloadRecord;

/// Default page size served by the download-history endpoint.
pub const DEFAULT_HISTORY_LIMIT: i64 = 50;

#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// SQLite connection URL, e.g. `sqlite://coindeck.db?mode=rwc`.
    pub url: String,
}

/// Download ledger over a SQLite pool.
///
/// The ledger exclusively owns writes; concurrent reads see whatever rows
/// are committed at query time. Single-row inserts are atomic in SQLite,
/// which is all the isolation this table needs.
#[derive(Clone)]
pub struct Ledger {
    pool: SqlitePool,
}

impl Ledger {
    pub async fn connect(config: LedgerConfig) -> Result<Self, LedgerError> {
        let pool = SqlitePool::connect(&config.url)
            .await
            .map_err(|e| LedgerError::Connection(e.to_string()))?;

        Self::initialize_schema(&pool).await?;

        Ok(Self { pool })
    }

    async fn initialize_schema(pool: &SqlitePool) -> Result<(), LedgerError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS download_records (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                download_id TEXT NOT NULL UNIQUE,
                filename TEXT NOT NULL,
                download_time TEXT NOT NULL,
                file_size INTEGER NOT NULL,
                crypto_count INTEGER NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await
        .map_err(|e| LedgerError::Query(e.to_string()))?;

        Ok(())
    }

    /// Insert one row for a completed export and return it.
    pub async fn record(
        &self,
        filename: &str,
        file_size: i64,
        crypto_count: i64,
    ) -> Result<DownloadRecord, LedgerError> {
        let download_id = Uuid::new_v4().to_string();
        let download_time = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO download_records (download_id, filename, download_time, file_size, crypto_count)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&download_id)
        .bind(filename)
        .bind(download_time)
        .bind(file_size)
        .bind(crypto_count)
        .execute(&self.pool)
        .await
        .map_err(|e| LedgerError::Query(e.to_string()))?;

        Ok(DownloadRecord {
            id: result.last_insert_rowid(),
            download_id,
            filename: filename.to_string(),
            download_time,
            file_size,
            crypto_count,
        })
    }

    /// Most recent downloads first, capped at `limit`.
    pub async fn list(&self, limit: i64) -> Result<Vec<DownloadRecord>, LedgerError> {
        sqlx::query_as::<_, DownloadRecord>(
            r#"
            SELECT id, download_id, filename, download_time, file_size, crypto_count
            FROM download_records
            ORDER BY download_time DESC, id DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| LedgerError::Query(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    async fn open_ledger(dir: &tempfile::TempDir) -> Ledger {
        let db_path = dir.path().join("ledger.db");
        let config = LedgerConfig {
            url: format!("sqlite://{}?mode=rwc", db_path.display()),
        };
        Ledger::connect(config).await.expect("ledger connect")
    }

    #[tokio::test]
    async fn recorded_downloads_are_listed_newest_first() {
        let dir = tempdir().expect("tempdir");
        let ledger = open_ledger(&dir).await;

        ledger
            .record("crypto_prices_20260314_090000.csv", 812, 10)
            .await
            .expect("first record");
        ledger
            .record("crypto_prices_20260314_090500.csv", 640, 8)
            .await
            .expect("second record");

        let history = ledger.list(DEFAULT_HISTORY_LIMIT).await.expect("list");

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].filename, "crypto_prices_20260314_090500.csv");
        assert_eq!(history[0].crypto_count, 8);
        assert_eq!(history[1].filename, "crypto_prices_20260314_090000.csv");
        assert_eq!(history[1].file_size, 812);
    }

    #[tokio::test]
    async fn record_returns_the_inserted_row() {
        let dir = tempdir().expect("tempdir");
        let ledger = open_ledger(&dir).await;

        let record = ledger
            .record("crypto_prices_20260314_090000.csv", 812, 10)
            .await
            .expect("record");

        assert_eq!(record.file_size, 812);
        assert_eq!(record.crypto_count, 10);
        assert!(!record.download_id.is_empty());

        let history = ledger.list(DEFAULT_HISTORY_LIMIT).await.expect("list");
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].id, record.id);
        assert_eq!(history[0].download_id, record.download_id);
        assert_eq!(history[0].filename, record.filename);
    }

    #[tokio::test]
    async fn each_row_gets_a_distinct_download_id() {
        let dir = tempdir().expect("tempdir");
        let ledger = open_ledger(&dir).await;

        let first = ledger.record("a.csv", 1, 1).await.expect("record");
        let second = ledger.record("b.csv", 2, 2).await.expect("record");

        assert_ne!(first.download_id, second.download_id);
    }

    #[tokio::test]
    async fn list_respects_the_limit() {
        let dir = tempdir().expect("tempdir");
        let ledger = open_ledger(&dir).await;

        for i in 0..5 {
            ledger
                .record(&format!("export_{i}.csv"), 100 + i, i)
                .await
                .expect("record");
        }

        let history = ledger.list(3).await.expect("list");
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].filename, "export_4.csv");
    }

    #[tokio::test]
    async fn empty_ledger_lists_nothing() {
        let dir = tempdir().expect("tempdir");
        let ledger = open_ledger(&dir).await;

        let history = ledger.list(DEFAULT_HISTORY_LIMIT).await.expect("list");
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn repeated_reads_without_writes_are_identical() {
        let dir = tempdir().expect("tempdir");
        let ledger = open_ledger(&dir).await;

        ledger.record("a.csv", 10, 1).await.expect("record");

        let first = ledger.list(DEFAULT_HISTORY_LIMIT).await.expect("list");
        let second = ledger.list(DEFAULT_HISTORY_LIMIT).await.expect("list");
        assert_eq!(first, second);
    }
}
