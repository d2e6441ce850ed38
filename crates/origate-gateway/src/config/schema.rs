use serde::Deserialize;

use origate_core::error::{OrigateError, Result};
use origate_core::CorsPolicy;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub cors: CorsPolicy,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            gateway: GatewaySection::default(),
            cors: CorsPolicy::default(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(OrigateError::UnsupportedVersion);
        }
        self.gateway.validate()?;
        self.cors.validate()?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        if self.listen.is_empty() {
            return Err(OrigateError::BadConfig(
                "gateway.listen must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:5000".into()
}
