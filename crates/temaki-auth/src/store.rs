//! Credential state
//!
//! Pure state holder with accessor logic and no I/O. The store is owned by
//! `AccessTokenManager` behind a mutex; nothing here synchronizes. State is
//! process-local and dies with the client — tokens are never persisted.

use std::sync::Arc;

/// Current credential state for one client instance.
///
/// The access token is held as `Arc<str>` so the validity hot path can hand
/// out the token without copying the string. `expires_at_ms` is an absolute
/// unix timestamp in milliseconds, computed from the grant's `expires_in`
/// delta at refresh time.
#[derive(Debug, Default)]
pub struct TokenStore {
    public_token: Option<String>,
    access_token: Option<Arc<str>>,
    expires_at_ms: u64,
    refresh_token: Option<String>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached public token, if one has been resolved this process.
    pub fn public_token(&self) -> Option<&str> {
        self.public_token.as_deref()
    }

    /// Cache the public token. It never expires; set once per process.
    pub fn set_public_token(&mut self, token: String) {
        self.public_token = Some(token);
    }

    pub fn access_token(&self) -> Option<Arc<str>> {
        self.access_token.clone()
    }

    pub fn set_access_token(&mut self, token: Arc<str>, expires_at_ms: u64) {
        self.access_token = Some(token);
        self.expires_at_ms = expires_at_ms;
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    /// Replace the refresh token. Grants only return one for non-anonymous
    /// sessions; when present it supersedes any stored value.
    pub fn set_refresh_token(&mut self, token: String) {
        self.refresh_token = Some(token);
    }

    /// True iff an access token is set and `now_ms` is strictly before its
    /// expiry. No skew margin: upstream lifetimes are minutes, and a token
    /// that expires between this check and its use surfaces as a hard 401
    /// from the executor rather than a silent retry.
    pub fn is_access_token_valid(&self, now_ms: u64) -> bool {
        self.access_token.is_some() && now_ms < self.expires_at_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_has_nothing_valid() {
        let store = TokenStore::new();
        assert!(store.public_token().is_none());
        assert!(store.access_token().is_none());
        assert!(store.refresh_token().is_none());
        assert!(!store.is_access_token_valid(0));
    }

    #[test]
    fn validity_is_strictly_before_expiry() {
        let mut store = TokenStore::new();
        store.set_access_token(Arc::from("at_1"), 10_000);

        assert!(store.is_access_token_valid(0));
        assert!(store.is_access_token_valid(9_999));
        assert!(!store.is_access_token_valid(10_000));
        assert!(!store.is_access_token_valid(10_001));
    }

    #[test]
    fn refresh_token_is_replaced_not_merged() {
        let mut store = TokenStore::new();
        store.set_refresh_token("rt_1".into());
        store.set_refresh_token("rt_2".into());
        assert_eq!(store.refresh_token(), Some("rt_2"));
    }

    #[test]
    fn access_token_handout_shares_the_allocation() {
        let mut store = TokenStore::new();
        store.set_access_token(Arc::from("at_1"), 10_000);
        let a = store.access_token().unwrap();
        let b = store.access_token().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
