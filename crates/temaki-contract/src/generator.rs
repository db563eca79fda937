//! Model regeneration collaborator
//!
//! Turning a fixture set into typed model source is the job of an external
//! code generator; this crate only knows how to invoke it. The trait keeps
//! the validator testable and lets embedders plug in their own tooling.

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::process::Stdio;

use tracing::info;

use crate::error::GeneratorError;

/// External schema/model generator, invoked after a fixture is recorded.
///
/// `regenerate` runs against the endpoint's full fixture set. It may block
/// the calling request path — drift is an error state already, and the
/// caller is told to retry after regeneration completes.
///
/// Uses `Pin<Box<dyn Future>>` return types for dyn-compatibility
/// (`Arc<dyn ModelGenerator>`).
pub trait ModelGenerator: Send + Sync {
    fn regenerate<'a>(
        &'a self,
        endpoint: &'a str,
    ) -> Pin<Box<dyn Future<Output = std::result::Result<(), GeneratorError>> + Send + 'a>>;
}

/// Shells out to a generator command as `<program> <fixture_root> <endpoint>`.
///
/// The default program is `temaki-modelgen`, the companion tool that feeds
/// an endpoint's `response/` directory through a JSON-to-struct generator
/// and rewrites the model source files.
pub struct CommandGenerator {
    program: PathBuf,
    fixture_root: PathBuf,
}

impl CommandGenerator {
    pub fn new(program: impl Into<PathBuf>, fixture_root: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            fixture_root: fixture_root.into(),
        }
    }
}

impl ModelGenerator for CommandGenerator {
    fn regenerate<'a>(
        &'a self,
        endpoint: &'a str,
    ) -> Pin<Box<dyn Future<Output = std::result::Result<(), GeneratorError>> + Send + 'a>> {
        Box::pin(async move {
            info!(
                program = %self.program.display(),
                endpoint,
                "regenerating models from fixture set"
            );

            let output = tokio::process::Command::new(&self.program)
                .arg(&self.fixture_root)
                .arg(endpoint)
                .stdin(Stdio::null())
                .output()
                .await
                .map_err(|e| {
                    GeneratorError::Spawn(format!("{}: {e}", self.program.display()))
                })?;

            if !output.status.success() {
                let stderr = String::from_utf8_lossy(&output.stderr);
                return Err(GeneratorError::Failed(format!(
                    "{} exited with {}: {}",
                    self.program.display(),
                    output.status,
                    stderr.trim()
                )));
            }

            Ok(())
        })
    }
}
