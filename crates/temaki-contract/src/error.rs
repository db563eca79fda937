//! Error types for contract validation

use std::path::PathBuf;

/// Errors from validating a response against its endpoint contract.
///
/// `SchemaDrift` and `RoundTrip` both mean the self-healing side effect
/// already ran: the offending payload is on disk and regeneration was
/// attempted. `regeneration` carries the failure message when regeneration
/// itself failed — the fixture stays in place either way.
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    #[error(
        "response for `{endpoint}` does not match the current schema \
         (fixture saved to {}): {detail}", fixture.display()
    )]
    SchemaDrift {
        endpoint: String,
        fixture: PathBuf,
        detail: String,
        regeneration: Option<String>,
    },

    #[error(
        "re-serialized `{endpoint}` response differs from the original \
         (original {}, re-serialized {})", original.display(), reserialized.display()
    )]
    RoundTrip {
        endpoint: String,
        original: PathBuf,
        reserialized: PathBuf,
        regeneration: Option<String>,
    },

    #[error("fixture store error: {0}")]
    Fixture(String),

    #[error("re-serializing validated model failed: {0}")]
    Reserialize(String),
}

/// Errors from the external model generator.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("failed to launch model generator: {0}")]
    Spawn(String),

    #[error("model generator failed: {0}")]
    Failed(String),
}

/// Result alias for contract operations.
pub type Result<T> = std::result::Result<T, ContractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drift_display_names_endpoint_and_fixture() {
        let err = ContractError::SchemaDrift {
            endpoint: "browse".into(),
            fixture: PathBuf::from("/tmp/browse/response/x.json"),
            detail: "unknown field `surprise`".into(),
            regeneration: None,
        };
        let text = err.to_string();
        assert!(text.contains("browse"));
        assert!(text.contains("x.json"));
        assert!(text.contains("unknown field `surprise`"));
    }

    #[test]
    fn round_trip_display_names_both_files() {
        let err = ContractError::RoundTrip {
            endpoint: "series".into(),
            original: PathBuf::from("/tmp/series/response/a.json"),
            reserialized: PathBuf::from("/tmp/series/diagnostic/a.json"),
            regeneration: Some("generator exited with status 1".into()),
        };
        let text = err.to_string();
        assert!(text.contains("response/a.json"));
        assert!(text.contains("diagnostic/a.json"));
    }
}
