//! Append-only fixture storage
//!
//! One directory per endpoint, one JSON document per observed payload:
//!
//! ```text
//! <root>/<endpoint>/response/<uuid>.json     observed payloads (the fixture set)
//! <root>/<endpoint>/diagnostic/<uuid>.json   re-serialized forms for drift diagnosis
//! ```
//!
//! Fixtures are never overwritten or rewritten; the generator consumes the
//! whole `response/` directory, so every file that lands there is ground
//! truth from then on. Writes go through a temp file + rename so a crash
//! can't leave a half-written fixture for the generator to choke on.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::{ContractError, Result};

/// Append-only store of observed payloads, grouped by endpoint name.
pub struct FixtureStore {
    root: PathBuf,
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl FixtureStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Per-endpoint mutex serializing fixture-set mutation and regeneration.
    /// Holding the guard across record + regenerate keeps the generator from
    /// running concurrently with itself for one endpoint.
    pub async fn endpoint_lock(&self, endpoint: &str) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        locks
            .entry(endpoint.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Record a payload as a new fixture. Returns the path of the new file,
    /// which is guaranteed distinct from every existing fixture.
    pub async fn record(&self, endpoint: &str, payload: &Value) -> Result<PathBuf> {
        let dir = self.root.join(endpoint).join("response");
        let path = fresh_path(&dir).await;
        write_json(&path, payload).await?;
        debug!(endpoint, path = %path.display(), "recorded fixture");
        Ok(path)
    }

    /// Record a re-serialized form for diagnosis, keyed to the stem of the
    /// fixture it diverged from. Not part of the fixture set.
    pub async fn record_diagnostic(
        &self,
        endpoint: &str,
        stem: &str,
        payload: &Value,
    ) -> Result<PathBuf> {
        let path = self
            .root
            .join(endpoint)
            .join("diagnostic")
            .join(format!("{stem}.json"));
        write_json(&path, payload).await?;
        debug!(endpoint, path = %path.display(), "recorded diagnostic");
        Ok(path)
    }

    /// Sorted paths of the endpoint's fixture set. Empty when the endpoint
    /// has never drifted and never been seeded.
    pub async fn fixture_paths(&self, endpoint: &str) -> Result<Vec<PathBuf>> {
        let dir = self.root.join(endpoint).join("response");
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut entries = tokio::fs::read_dir(&dir)
            .await
            .map_err(|e| ContractError::Fixture(format!("listing {}: {e}", dir.display())))?;
        let mut paths = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| ContractError::Fixture(format!("listing {}: {e}", dir.display())))?
        {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }
}

/// Pick an unused uuid-named path inside `dir`.
async fn fresh_path(dir: &Path) -> PathBuf {
    loop {
        let candidate = dir.join(format!("{}.json", uuid::Uuid::new_v4()));
        if !candidate.exists() {
            return candidate;
        }
    }
}

/// Pretty-printed JSON, written atomically (temp file + rename).
async fn write_json(path: &Path, payload: &Value) -> Result<()> {
    let json = serde_json::to_string_pretty(payload)
        .map_err(|e| ContractError::Fixture(format!("serializing fixture: {e}")))?;

    let dir = path
        .parent()
        .ok_or_else(|| ContractError::Fixture("fixture path has no parent directory".into()))?;
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| ContractError::Fixture(format!("creating {}: {e}", dir.display())))?;

    let file_name = path
        .file_name()
        .ok_or_else(|| ContractError::Fixture("fixture path has no file name".into()))?
        .to_string_lossy();
    let tmp_path = dir.join(format!(".{file_name}.tmp.{}", std::process::id()));
    tokio::fs::write(&tmp_path, json.as_bytes())
        .await
        .map_err(|e| ContractError::Fixture(format!("writing temp fixture: {e}")))?;
    tokio::fs::rename(&tmp_path, path)
        .await
        .map_err(|e| ContractError::Fixture(format!("renaming temp fixture: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn record_creates_distinct_files_and_preserves_existing() {
        let dir = tempfile::tempdir().unwrap();
        let store = FixtureStore::new(dir.path().to_path_buf());

        let first = store
            .record("browse", &json!({"total": 1}))
            .await
            .unwrap();
        let second = store
            .record("browse", &json!({"total": 2}))
            .await
            .unwrap();

        assert_ne!(first, second);
        let paths = store.fixture_paths("browse").await.unwrap();
        assert_eq!(paths.len(), 2);

        // Earlier fixtures are untouched by later records
        let content: Value =
            serde_json::from_str(&tokio::fs::read_to_string(&first).await.unwrap()).unwrap();
        assert_eq!(content, json!({"total": 1}));
    }

    #[tokio::test]
    async fn fixtures_are_grouped_by_endpoint() {
        let dir = tempfile::tempdir().unwrap();
        let store = FixtureStore::new(dir.path().to_path_buf());

        store.record("browse", &json!({})).await.unwrap();
        store.record("series", &json!({})).await.unwrap();

        assert_eq!(store.fixture_paths("browse").await.unwrap().len(), 1);
        assert_eq!(store.fixture_paths("series").await.unwrap().len(), 1);
        assert_eq!(store.fixture_paths("episodes").await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn diagnostics_do_not_join_the_fixture_set() {
        let dir = tempfile::tempdir().unwrap();
        let store = FixtureStore::new(dir.path().to_path_buf());

        let fixture = store.record("series", &json!({"a": 1})).await.unwrap();
        let stem = fixture.file_stem().unwrap().to_string_lossy().to_string();
        let diagnostic = store
            .record_diagnostic("series", &stem, &json!({"a": 1}))
            .await
            .unwrap();

        assert!(diagnostic.to_string_lossy().contains("diagnostic"));
        assert_eq!(store.fixture_paths("series").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn written_fixture_is_valid_pretty_json() {
        let dir = tempfile::tempdir().unwrap();
        let store = FixtureStore::new(dir.path().to_path_buf());

        let payload = json!({"total": 3, "data": [{"id": "x"}]});
        let path = store.record("episodes", &payload).await.unwrap();

        let text = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(text.contains('\n'), "fixtures are pretty-printed");
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, payload);
    }

    #[tokio::test]
    async fn endpoint_locks_are_shared_per_endpoint() {
        let dir = tempfile::tempdir().unwrap();
        let store = FixtureStore::new(dir.path().to_path_buf());

        let a = store.endpoint_lock("browse").await;
        let b = store.endpoint_lock("browse").await;
        let c = store.endpoint_lock("series").await;

        assert!(Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &c));
    }
}
