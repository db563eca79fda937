//! Strict validation with self-healing drift handling
//!
//! Two failure classes, handled identically except for what lands on disk:
//!
//! - **Schema drift**: the payload does not strictly decode (unknown field,
//!   missing field, type mismatch). The payload becomes a fixture.
//! - **Round-trip mismatch**: the payload decodes, but re-serializing the
//!   model produces something structurally different — a field was silently
//!   dropped or reshaped. The payload becomes a fixture and the re-serialized
//!   form is kept alongside for diagnosis.
//!
//! Both record before regenerating, under the endpoint's lock, and then fail
//! the call. The caller retries after the regenerated models are rebuilt.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::error::{ContractError, Result};
use crate::fixtures::FixtureStore;
use crate::generator::ModelGenerator;

/// Validates raw payloads against the generated strict models.
pub struct Validator {
    fixtures: FixtureStore,
    generator: Arc<dyn ModelGenerator>,
}

impl Validator {
    pub fn new(fixtures: FixtureStore, generator: Arc<dyn ModelGenerator>) -> Self {
        Self {
            fixtures,
            generator,
        }
    }

    pub fn fixtures(&self) -> &FixtureStore {
        &self.fixtures
    }

    /// Strictly decode `raw` into `T` and verify the decode lost nothing.
    ///
    /// `T` is expected to carry `deny_unknown_fields`; the round-trip check
    /// catches the failures `deny_unknown_fields` cannot, such as a field
    /// the model types more loosely than the payload warrants.
    pub async fn validate<T>(&self, endpoint: &str, raw: Value) -> Result<T>
    where
        T: DeserializeOwned + Serialize,
    {
        match serde_json::from_value::<T>(raw.clone()) {
            Ok(model) => {
                let echoed = serde_json::to_value(&model)
                    .map_err(|e| ContractError::Reserialize(e.to_string()))?;
                if echoed == raw {
                    return Ok(model);
                }

                warn!(endpoint, "decode dropped or reshaped data, recording drift");
                let lock = self.fixtures.endpoint_lock(endpoint).await;
                let _guard = lock.lock().await;

                let original = self.fixtures.record(endpoint, &raw).await?;
                let stem = original
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let reserialized = self
                    .fixtures
                    .record_diagnostic(endpoint, &stem, &echoed)
                    .await?;
                let regeneration = self.run_generator(endpoint).await;

                Err(ContractError::RoundTrip {
                    endpoint: endpoint.to_string(),
                    original,
                    reserialized,
                    regeneration,
                })
            }
            Err(decode_err) => {
                warn!(endpoint, error = %decode_err, "strict decode failed, recording drift");
                let lock = self.fixtures.endpoint_lock(endpoint).await;
                let _guard = lock.lock().await;

                let fixture = self.fixtures.record(endpoint, &raw).await?;
                let regeneration = self.run_generator(endpoint).await;

                Err(ContractError::SchemaDrift {
                    endpoint: endpoint.to_string(),
                    fixture,
                    detail: decode_err.to_string(),
                    regeneration,
                })
            }
        }
    }

    /// Regenerate and report the failure message, if any. The fixture is
    /// already on disk, so a failed regeneration is recoverable: the next
    /// drift (or a manual run) picks the fixture up.
    async fn run_generator(&self, endpoint: &str) -> Option<String> {
        match self.generator.regenerate(endpoint).await {
            Ok(()) => None,
            Err(e) => {
                warn!(endpoint, error = %e, "model regeneration failed, fixture kept");
                Some(e.to_string())
            }
        }
    }
}
