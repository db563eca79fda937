//! Endpoint methods
//!
//! One module per upstream resource. Each follows the same three-step shape:
//! `download_*` issues the authenticated GET and returns the raw stamped
//! JSON, `parse_*` validates it against the endpoint's strict model, and
//! `get_*` chains the two. The split exists so callers can persist or
//! inspect raw payloads (fixture seeding, debugging) without re-downloading.

pub mod browse;
pub mod episodes;
pub mod seasons;
pub mod series;

/// Base of the public site, used for referer headers.
pub(crate) const WWW_BASE: &str = "https://www.crunchyroll.com";
