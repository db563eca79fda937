//! Client error types

/// Errors from catalog client operations.
///
/// `Status` is raised for any non-200 response before the body is parsed;
/// the caller decides whether a retry makes sense (a 401 might warrant one
/// refresh attempt, but doing that here would loop forever on bad
/// credentials). `Contract` means the self-healing side effects already ran
/// and the call must be retried after the regenerated models are rebuilt.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("authentication failed: {0}")]
    Auth(#[from] temaki_auth::Error),

    #[error("unexpected response status code: {0}")]
    Status(u16),

    #[error("HTTP transport error: {0}")]
    Transport(#[from] transport::Error),

    #[error("decoding response failed: {0}")]
    Decode(String),

    #[error(transparent)]
    Contract(#[from] temaki_contract::ContractError),
}

/// Result alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;
