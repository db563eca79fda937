//! Generated-style strict response models
//!
//! One module per endpoint schema. Each module's types are regenerated
//! independently from that endpoint's fixture set, so structurally similar
//! types are deliberately not shared across modules — regeneration of one
//! endpoint must never ripple into another.
//!
//! All structs reject unknown fields; a payload the types cannot represent
//! exactly is drift, handled by `temaki_contract::Validator`.
//!
//! Timestamps stay as raw `String`s: the round-trip check requires
//! re-serialization to reproduce the exact upstream bytes, which a
//! parse/reformat cycle cannot guarantee. Helpers that need real datetimes
//! (pagination cutoffs) parse on demand.

pub mod browse;
pub mod episodes;
pub mod seasons;
pub mod series;

use serde::{Deserialize, Serialize};

/// Request provenance attached by the executor to every response.
///
/// `P` is the endpoint's parameter set as it appeared on the wire (string
/// values). The authorization header is never recorded here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Stamp<P> {
    pub params: P,
    pub headers: StampHeaders,
    pub url: String,
}

/// Caller-supplied headers recorded in the stamp. Every endpoint sends a
/// referer and nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StampHeaders {
    pub referer: String,
}
