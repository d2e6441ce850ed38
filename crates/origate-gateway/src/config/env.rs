//! Environment-derived origin sources.
//!
//! Read once at startup and consumed to build the allow-list; nothing here
//! is consulted again after construction.
//!
//! - `CORS_ORIGIN`: comma-separated override list. When set, it replaces
//!   the built-in defaults (the platform patterns are still appended).
//! - `REPL_SLUG`/`REPL_OWNER`, `REPL_DEV_URL`, `REPLIT_APP_URL`: platform
//!   assigned URLs, appended to the default literal set when no override
//!   is supplied.

use origate_core::error::Result;
use origate_core::policy::defaults::{default_entries, platform_patterns};
use origate_core::AllowList;

/// Override CSV plus platform-derived literal origins.
#[derive(Debug, Clone, Default)]
pub struct OriginSources {
    pub override_csv: Option<String>,
    pub platform_urls: Vec<String>,
}

impl OriginSources {
    /// Gather sources from the process environment.
    pub fn from_env() -> Self {
        let get = |k: &str| std::env::var(k).ok().filter(|v| !v.is_empty());
        Self {
            override_csv: get("CORS_ORIGIN"),
            platform_urls: platform_urls(
                get("REPL_SLUG"),
                get("REPL_OWNER"),
                get("REPL_DEV_URL"),
                get("REPLIT_APP_URL"),
            ),
        }
    }

    /// Compile the allow-list from these sources.
    pub fn into_allow_list(self) -> Result<AllowList> {
        let list = match self.override_csv {
            Some(csv) => AllowList::build(Some(&csv), vec![], platform_patterns()?),
            None => AllowList::build(None, default_entries(&self.platform_urls)?, vec![]),
        };
        tracing::info!(
            entries = list.len(),
            patterns = list.has_patterns(),
            "allow-list compiled"
        );
        Ok(list)
    }
}

/// Assemble platform-assigned URLs from their environment variables.
pub fn platform_urls(
    slug: Option<String>,
    owner: Option<String>,
    dev_url: Option<String>,
    app_url: Option<String>,
) -> Vec<String> {
    let mut urls = Vec::new();
    if let Some(slug) = slug {
        let owner = owner.unwrap_or_else(|| "replit".to_string());
        urls.push(format!("https://{slug}.{owner}.repl.co"));
    }
    urls.extend(dev_url);
    urls.extend(app_url);
    urls
}
