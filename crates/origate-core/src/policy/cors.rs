//! Cross-origin policy record (the non-origin half of the policy).
//!
//! Constructed once at startup, immutable thereafter. The request-handling
//! boundary reads it to emit the standard cross-origin response headers.

use serde::Deserialize;

use crate::error::{OrigateError, Result};

/// Permitted methods, header sets, credential flag, and preflight behavior.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorsPolicy {
    /// Methods advertised in `Access-Control-Allow-Methods`.
    #[serde(default = "default_methods")]
    pub methods: Vec<String>,

    /// Headers advertised in `Access-Control-Allow-Headers`.
    #[serde(default = "default_allowed_headers")]
    pub allowed_headers: Vec<String>,

    /// Headers advertised in `Access-Control-Expose-Headers`.
    #[serde(default = "default_exposed_headers")]
    pub exposed_headers: Vec<String>,

    /// Whether cookies/auth headers may be shared cross-origin. When set,
    /// the boundary must echo the matched origin, never a wildcard.
    #[serde(default = "default_credentials")]
    pub credentials: bool,

    /// Preflight result cache lifetime, seconds (`Access-Control-Max-Age`).
    #[serde(default = "default_max_age_secs")]
    pub max_age_secs: u32,

    /// Status used when terminating a preflight request.
    #[serde(default = "default_preflight_status")]
    pub preflight_status: u16,

    /// Terminate preflight `OPTIONS` requests at the boundary instead of
    /// passing them to the underlying handler.
    #[serde(default = "default_terminate_preflight")]
    pub terminate_preflight: bool,
}

impl Default for CorsPolicy {
    fn default() -> Self {
        Self {
            methods: default_methods(),
            allowed_headers: default_allowed_headers(),
            exposed_headers: default_exposed_headers(),
            credentials: default_credentials(),
            max_age_secs: default_max_age_secs(),
            preflight_status: default_preflight_status(),
            terminate_preflight: default_terminate_preflight(),
        }
    }
}

impl CorsPolicy {
    pub fn validate(&self) -> Result<()> {
        if self.methods.is_empty() {
            return Err(OrigateError::BadConfig(
                "cors.methods must not be empty".into(),
            ));
        }
        for m in &self.methods {
            if m.is_empty() || !m.chars().all(|c| c.is_ascii_uppercase()) {
                return Err(OrigateError::BadConfig(format!(
                    "cors.methods entry is not an uppercase method token: {m:?}"
                )));
            }
        }
        if !(200..=299).contains(&self.preflight_status) {
            return Err(OrigateError::BadConfig(
                "cors.preflight_status must be a 2xx status".into(),
            ));
        }
        Ok(())
    }

    /// `Access-Control-Allow-Methods` value.
    pub fn methods_header(&self) -> String {
        self.methods.join(", ")
    }

    /// `Access-Control-Allow-Headers` value.
    pub fn allowed_headers_header(&self) -> String {
        self.allowed_headers.join(", ")
    }

    /// `Access-Control-Expose-Headers` value, when any are configured.
    pub fn exposed_headers_header(&self) -> Option<String> {
        if self.exposed_headers.is_empty() {
            None
        } else {
            Some(self.exposed_headers.join(", "))
        }
    }
}

fn default_methods() -> Vec<String> {
    ["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS", "HEAD"]
        .iter()
        .map(|m| (*m).to_string())
        .collect()
}
fn default_allowed_headers() -> Vec<String> {
    vec!["*".to_string()]
}
fn default_exposed_headers() -> Vec<String> {
    vec!["*".to_string()]
}
fn default_credentials() -> bool {
    true
}
fn default_max_age_secs() -> u32 {
    86400
}
fn default_preflight_status() -> u16 {
    204
}
fn default_terminate_preflight() -> bool {
    true
}
