//! origate core: transport-agnostic origin access policy primitives.
//!
//! This crate defines the origin normalizer, the allow-list and its
//! evaluator, the cross-origin policy record, and the error surface shared
//! by the gateway and library consumers. It intentionally carries no
//! transport or runtime dependencies so the decision logic can be reused
//! (and tested) without an HTTP stack.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! The normalizer and evaluator are total functions; everything fallible
//! (pattern compilation, policy validation) surfaces as
//! `OrigateError`/`Result` so processes never crash on bad configuration.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod policy;

/// Shared result type.
pub use error::{OrigateError, Result};
pub use policy::{
    normalize_origin, AllowList, CorsPolicy, OriginDecision, OriginEntry,
};
