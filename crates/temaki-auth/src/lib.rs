//! Credential lifecycle for the Crunchyroll catalog API
//!
//! Two credentials are involved, with very different lifetimes:
//!
//! 1. The **public token** is a static Basic-auth credential embedded in a
//!    public script bundle. `resolver` scrapes it once per process and the
//!    store caches it forever — it never expires.
//! 2. The **access token** is a short-lived Bearer credential obtained from
//!    the token endpoint with one of three grants (client_id, password,
//!    refresh_token). `AccessTokenManager` refreshes it lazily on the next
//!    call after expiry.
//!
//! Credential flow:
//! 1. Caller asks `AccessTokenManager::ensure_valid()` for a token
//! 2. Valid token in the store → returned without any I/O (the hot path)
//! 3. Otherwise the public token is resolved (once) via `resolver::resolve()`
//! 4. A grant is selected from the stored state and POSTed to the token
//!    endpoint; the store is updated under the same lock
//!
//! The manager holds its `TokenStore` behind one async mutex across the whole
//! check-refresh-write sequence, so concurrent callers can never issue
//! duplicate grant requests or observe a half-updated store.

pub mod constants;
pub mod error;
pub mod manager;
pub mod resolver;
pub mod secret;
pub mod store;

pub use constants::*;
pub use error::{Error, Result};
pub use manager::{AccessTokenManager, DeviceIdentity, Login, unix_now_ms};
pub use secret::Secret;
pub use store::TokenStore;
