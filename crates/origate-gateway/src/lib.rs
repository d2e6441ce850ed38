//! origate gateway library entry.
//!
//! This crate wires configuration, the compiled allow-list, the
//! cross-origin middleware, and observability into a runnable boundary
//! around the core evaluator. It is intended to be consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod cors;
pub mod obs;
pub mod router;
