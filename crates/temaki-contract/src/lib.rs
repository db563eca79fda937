//! Strict response contracts with self-healing drift handling
//!
//! The upstream API is undocumented and uncontracted; response schemas are
//! inferred from observed traffic. This crate enforces that inference as a
//! closed contract and keeps it self-healing:
//!
//! 1. `Validator::validate` strictly decodes a raw payload into a typed model
//!    (unknown fields anywhere are rejected) and re-serializes the model to
//!    check that nothing was silently dropped or reshaped.
//! 2. Any failure records the payload as a new fixture in the append-only
//!    `FixtureStore` and invokes the external `ModelGenerator` over the
//!    endpoint's full fixture set, then surfaces a `ContractError` telling
//!    the caller the contract was updated and the call must be retried.
//!
//! The regenerated models require a fresh build, so there is deliberately no
//! in-process retry. Fixture writes land before regeneration runs; a failed
//! regeneration leaves the fixture for the next attempt.

pub mod error;
pub mod fixtures;
pub mod generator;
pub mod validator;

pub use error::{ContractError, GeneratorError, Result};
pub use fixtures::FixtureStore;
pub use generator::{CommandGenerator, ModelGenerator};
pub use validator::Validator;
