//! Origin access policy (normalizer, allow-list, cross-origin policy).
//!
//! Everything here is built once at process startup and then shared
//! immutably; evaluation is pure and re-entrant.

pub mod allowlist;
pub mod cors;
pub mod defaults;
pub mod normalize;

pub use allowlist::{AllowList, OriginDecision, OriginEntry};
pub use cors::CorsPolicy;
pub use normalize::normalize_origin;
