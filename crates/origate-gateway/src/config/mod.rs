//! Gateway config loader (strict parsing) and environment origin sources.

pub mod env;
pub mod schema;

use std::fs;

use origate_core::error::{OrigateError, Result};

pub use env::OriginSources;
pub use schema::{GatewayConfig, GatewaySection};

pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| OrigateError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| OrigateError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
