//! HTTP transport capability for the temaki client
//!
//! Defines the `Transport` trait that decouples the auth and catalog crates
//! from the concrete HTTP stack. The production implementation wraps reqwest;
//! tests substitute scripted implementations to drive the credential and
//! validation pipelines without a network.
//!
//! Uses `Pin<Box<dyn Future>>` return types for dyn-compatibility
//! (`Arc<dyn Transport>` is shared between the token manager and the
//! request executor).

pub mod reqwest_impl;

pub use reqwest_impl::ReqwestTransport;

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// Errors from transport operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Request(String),

    #[error("reading response body failed: {0}")]
    Body(String),
}

/// Result alias for transport operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A completed HTTP exchange: status code plus the full response body.
///
/// The body is carried as text. Callers that expect JSON parse it themselves
/// so that status handling stays independent of body decoding.
#[derive(Debug)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

/// Blocking-style HTTP capability with a caller-supplied timeout per call.
///
/// `query`, `form`, and `headers` are ordered pair slices: the order in which
/// pairs are supplied is the order they appear on the wire. Implementations
/// must not mutate or retain caller-owned data.
pub trait Transport: Send + Sync {
    /// Issue a GET with query parameters and extra headers.
    fn get<'a>(
        &'a self,
        url: &'a str,
        query: &'a [(String, String)],
        headers: &'a [(String, String)],
        timeout: Duration,
    ) -> Pin<Box<dyn Future<Output = Result<Response>> + Send + 'a>>;

    /// Issue a POST with a form-encoded body and extra headers.
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        form: &'a [(String, String)],
        headers: &'a [(String, String)],
        timeout: Duration,
    ) -> Pin<Box<dyn Future<Output = Result<Response>> + Send + 'a>>;
}
