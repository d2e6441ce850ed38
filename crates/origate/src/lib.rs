//! Top-level facade crate for origate.
//!
//! Re-exports the core policy types and the gateway library so users can
//! depend on a single crate.

pub mod core {
    pub use origate_core::*;
}

pub mod gateway {
    pub use origate_gateway::*;
}
