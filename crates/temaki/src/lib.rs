//! temaki — a strict-contract client for the Crunchyroll catalog API
//!
//! The client downloads catalog data over a small set of GET endpoints,
//! handling the full credential lifecycle (public token scraped from a
//! script bundle, short-lived access token via one of three grants,
//! transparent refresh on expiry) and validating every response against
//! generated strict models. A response the models cannot represent exactly
//! becomes a fixture on disk and triggers model regeneration — the contract
//! heals itself instead of silently dropping data.
//!
//! ```no_run
//! use temaki::{Client, endpoints::browse::BrowseParams};
//!
//! # async fn run() -> Result<(), temaki::Error> {
//! let client = Client::new();
//! let page = client.get_browse(&BrowseParams::default()).await?;
//! for entry in &page.data {
//!     println!("{} ({})", entry.title, entry.id);
//! }
//! # Ok(())
//! # }
//! ```

#![recursion_limit = "256"]

pub mod client;
pub mod endpoints;
pub mod error;
pub mod executor;
pub mod models;

pub use client::{Client, ClientBuilder};
pub use error::{Error, Result};
pub use executor::ApiRequest;

pub use temaki_auth::Secret;
pub use temaki_contract::{CommandGenerator, ContractError, ModelGenerator};
