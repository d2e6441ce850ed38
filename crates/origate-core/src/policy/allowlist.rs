//! Allow-list compilation and origin evaluation.
//!
//! An allow-list is an ordered set of entries, each either an exact
//! canonical origin or a compiled pattern matching a family of origins
//! (e.g. dynamically assigned platform hostnames). Matching is an any-match
//! test over the set, so entry order never changes a decision.

use regex::Regex;

use crate::policy::normalize::normalize_origin;

/// A single permitted-origin rule.
#[derive(Debug, Clone)]
pub enum OriginEntry {
    /// Exact canonical origin (already normalized).
    Literal(String),
    /// Compiled pattern matching one or more origins.
    Pattern(Regex),
}

impl OriginEntry {
    fn matches(&self, normalized: &str) -> bool {
        match self {
            OriginEntry::Literal(lit) => lit == normalized,
            OriginEntry::Pattern(re) => re.is_match(normalized),
        }
    }
}

/// Outcome of evaluating a request origin against the allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginDecision {
    /// No `Origin` header (non-browser clients, same-origin, or
    /// server-to-server calls). Allowed; there is no origin to echo, so the
    /// boundary attaches no cross-origin headers.
    Anonymous,
    /// Origin matched. Carries the normalized origin the boundary must echo
    /// in `Access-Control-Allow-Origin` (never a wildcard: wildcard origins
    /// are invalid in combination with credentials).
    Allowed(String),
    /// Origin not permitted.
    Rejected,
}

/// Immutable set of permitted origins. Construct once at startup, then
/// share by reference.
#[derive(Debug, Clone)]
pub struct AllowList {
    entries: Vec<OriginEntry>,
}

impl AllowList {
    /// Build an allow-list from an optional comma-separated override, a
    /// default entry set, and the always-appended dynamic patterns.
    ///
    /// - override present: split on comma into literals, append
    ///   `dynamic_patterns` unconditionally, ignore `defaults` entirely
    /// - override absent: use `defaults` as-is (`defaults` already embeds
    ///   the dynamic patterns, see [`crate::policy::defaults`])
    ///
    /// Literal entries are normalized at construction; entries that
    /// normalize to an empty string are dropped.
    pub fn build(
        override_csv: Option<&str>,
        defaults: Vec<OriginEntry>,
        dynamic_patterns: Vec<Regex>,
    ) -> Self {
        match override_csv {
            Some(csv) => {
                let entries = csv
                    .split(',')
                    .map(|raw| normalize_origin(Some(raw)))
                    .filter(|o| !o.is_empty())
                    .map(OriginEntry::Literal)
                    .chain(dynamic_patterns.into_iter().map(OriginEntry::Pattern))
                    .collect();
                Self { entries }
            }
            None => Self::from_entries(defaults),
        }
    }

    /// Build directly from an entry set (normalizing literals, dropping
    /// entries that normalize to nothing).
    pub fn from_entries(entries: Vec<OriginEntry>) -> Self {
        let entries = entries
            .into_iter()
            .filter_map(|e| match e {
                OriginEntry::Literal(raw) => {
                    let o = normalize_origin(Some(&raw));
                    (!o.is_empty()).then_some(OriginEntry::Literal(o))
                }
                OriginEntry::Pattern(re) => Some(OriginEntry::Pattern(re)),
            })
            .collect();
        Self { entries }
    }

    /// Evaluate a raw `Origin` header value.
    ///
    /// Decision procedure:
    /// 1. absent or empty header: [`OriginDecision::Anonymous`]. Absence of
    ///    an origin header cannot be spoofed to cross a browser's
    ///    same-origin boundary, so it is treated as trusted.
    /// 2. a non-empty header that normalizes to nothing is anomalous:
    ///    [`OriginDecision::Rejected`]
    /// 3. exact match against any literal entry, else pattern match against
    ///    any pattern entry: [`OriginDecision::Allowed`]
    /// 4. otherwise [`OriginDecision::Rejected`]
    ///
    /// Pure and deterministic over the constructed set.
    pub fn evaluate(&self, raw: Option<&str>) -> OriginDecision {
        let Some(raw) = raw else {
            return OriginDecision::Anonymous;
        };
        if raw.is_empty() {
            return OriginDecision::Anonymous;
        }

        let normalized = normalize_origin(Some(raw));
        if normalized.is_empty() {
            tracing::debug!(origin = %raw, "origin normalized to empty value, rejecting");
            return OriginDecision::Rejected;
        }

        if self.entries.iter().any(|e| e.matches(&normalized)) {
            OriginDecision::Allowed(normalized)
        } else {
            tracing::debug!(origin = %normalized, "origin not in allow-list");
            OriginDecision::Rejected
        }
    }

    /// Boolean form of [`AllowList::evaluate`].
    pub fn is_allowed(&self, raw: Option<&str>) -> bool {
        !matches!(self.evaluate(raw), OriginDecision::Rejected)
    }

    /// Number of entries in the list.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries are configured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when any pattern entry is present (the dynamic-pattern
    /// invariant check used at startup).
    pub fn has_patterns(&self) -> bool {
        self.entries
            .iter()
            .any(|e| matches!(e, OriginEntry::Pattern(_)))
    }
}
