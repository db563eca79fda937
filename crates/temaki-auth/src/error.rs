//! Error types for credential operations

/// Errors from credential operations.
///
/// `Extraction` means the upstream bundle format changed and is unrecoverable
/// without a pattern update; it is never worth retrying. `Grant` covers the
/// token endpoint returning an error status or an unexpected response shape.
/// Neither is retried here — retry policy belongs to the caller, where it
/// cannot mask credential problems.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("public token extraction failed: {0}")]
    Extraction(String),

    #[error("token grant failed: {0}")]
    Grant(String),

    #[error("HTTP transport error: {0}")]
    Transport(#[from] transport::Error),
}

/// Result alias for credential operations.
pub type Result<T> = std::result::Result<T, Error>;
