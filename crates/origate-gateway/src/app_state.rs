//! Shared application state for the origate gateway.
//!
//! The allow-list and cross-origin policy are compiled here exactly once;
//! afterwards the state is shared by reference across all request-handling
//! tasks. No locking: nothing mutates after construction.

use std::sync::Arc;

use origate_core::error::Result;
use origate_core::{AllowList, CorsPolicy};

use crate::config::{GatewayConfig, OriginSources};
use crate::obs::metrics::Metrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    allow_list: AllowList,
    metrics: Metrics,
}

impl AppState {
    /// Build application state.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: GatewayConfig, origins: OriginSources) -> Result<Self> {
        cfg.validate()?;
        let allow_list = origins.into_allow_list()?;
        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                allow_list,
                metrics: Metrics::new(),
            }),
        })
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn cors(&self) -> &CorsPolicy {
        &self.inner.cfg.cors
    }

    pub fn allow_list(&self) -> &AllowList {
        &self.inner.allow_list
    }

    pub fn metrics(&self) -> &Metrics {
        &self.inner.metrics
    }
}
