//! Built-in default origins and platform patterns (data, not logic).

use regex::Regex;

use crate::error::{OrigateError, Result};
use crate::policy::allowlist::OriginEntry;

/// Fixed default literal origins: local development ports plus the known
/// production web origins.
pub const DEFAULT_LITERAL_ORIGINS: &[&str] = &[
    "http://localhost:5173", // Vite dev
    "http://localhost:4173", // Vite preview
    "http://localhost:5000", // backend local
    "http://127.0.0.1:5173",
    "http://127.0.0.1:4173",
    "https://souk-boudouaou.vercel.app",
    "https://soukboudouaou.com",
    "https://www.soukboudouaou.com",
    "https://server.soukboudouaou.com",
];

/// Platform-assigned hostname patterns, always included whether or not an
/// override list is supplied. If the deployment platform changes, this
/// list must be revisited.
pub const PLATFORM_ORIGIN_PATTERNS: &[&str] = &[
    r"^https://.*\.replit\.dev$",
    r"^https://.*\.replit\.app$",
    r"^https://.*\.repl\.co$",
];

/// Compile the always-on platform patterns.
pub fn platform_patterns() -> Result<Vec<Regex>> {
    PLATFORM_ORIGIN_PATTERNS
        .iter()
        .map(|p| {
            Regex::new(p)
                .map_err(|e| OrigateError::InvalidPattern(format!("{p}: {e}")))
        })
        .collect()
}

/// Build the full default entry set: the fixed literals, any
/// environment-derived extra literals (e.g. a platform's dynamically
/// assigned URL), and the platform patterns.
pub fn default_entries(extra_literals: &[String]) -> Result<Vec<OriginEntry>> {
    let mut entries: Vec<OriginEntry> = DEFAULT_LITERAL_ORIGINS
        .iter()
        .map(|o| OriginEntry::Literal((*o).to_string()))
        .collect();
    entries.extend(
        extra_literals
            .iter()
            .map(|o| OriginEntry::Literal(o.clone())),
    );
    entries.extend(platform_patterns()?.into_iter().map(OriginEntry::Pattern));
    Ok(entries)
}
