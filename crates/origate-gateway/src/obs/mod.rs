//! Lightweight in-process metrics (dependency-free).
//!
//! Exposes minimal Prometheus-compatible decision counters without adding
//! external metrics crates. Counters are stored as atomics and rendered by
//! the `/metrics` handler.

pub mod metrics;
