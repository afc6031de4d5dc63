use thiserror::Error;

/// Failures raised by the market-data fetch path.
///
/// None of these are retried; each surfaces to the HTTP caller as a
/// 500-level JSON error and is never fatal to the process.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection failure or timeout before a response arrived.
    #[error("failed to fetch crypto data: {0}")]
    Transport(String),

    /// The provider answered with a non-2xx status.
    #[error("provider returned HTTP {status}")]
    Status { status: u16 },

    /// The provider answered 2xx but the body is not the expected shape.
    #[error("malformed provider payload: {0}")]
    MalformedPayload(String),
}
