use thiserror::Error;

/// Persistence failures from the download ledger.
///
/// On the export path these are logged and swallowed by the caller; on the
/// history read path they surface as a 500.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("database connection error: {0}")]
    Connection(String),

    #[error("query error: {0}")]
    Query(String),
}
