//! Minimal metrics registry for the gateway.
//!
//! Counters with dynamic labels backed by `DashMap`. Labels are flattened
//! into sorted key vectors to keep deterministic ordering in the rendered
//! output.

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

#[derive(Default)]
pub struct CounterVec {
    map: DashMap<Vec<(String, String)>, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) {
        let mut key: Vec<(String, String)> = labels
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        key.sort();

        let counter = self.map.entry(key).or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Current value for a label set (0 when never incremented).
    pub fn get(&self, labels: &[(&str, &str)]) -> u64 {
        let mut key: Vec<(String, String)> = labels
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        key.sort();
        self.map
            .get(&key)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    fn render_into(&self, name: &str, help: &str, out: &mut String) {
        let _ = writeln!(out, "# HELP {name} {help}");
        let _ = writeln!(out, "# TYPE {name} counter");

        let mut rows: Vec<(String, u64)> = self
            .map
            .iter()
            .map(|entry| {
                let labels = entry
                    .key()
                    .iter()
                    .map(|(k, v)| format!("{k}=\"{}\"", escape_label(v)))
                    .collect::<Vec<_>>()
                    .join(",");
                (labels, entry.value().load(Ordering::Relaxed))
            })
            .collect();
        rows.sort();

        for (labels, value) in rows {
            let _ = writeln!(out, "{name}{{{labels}}} {value}");
        }
    }
}

/// Gateway metrics, constructed once alongside the app state.
#[derive(Default)]
pub struct Metrics {
    decisions: CounterVec,
    preflight: CounterVec,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an origin policy decision (`allow`, `anonymous`, `deny`).
    pub fn record_decision(&self, decision: &str) {
        self.decisions.inc(&[("decision", decision)]);
    }

    /// Record a preflight outcome.
    pub fn record_preflight(&self, decision: &str) {
        self.preflight.inc(&[("decision", decision)]);
    }

    pub fn decision_count(&self, decision: &str) -> u64 {
        self.decisions.get(&[("decision", decision)])
    }

    /// Render all counters in Prometheus text format.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.decisions.render_into(
            "origate_decisions_total",
            "Origin policy decisions by outcome.",
            &mut out,
        );
        self.preflight.render_into(
            "origate_preflight_total",
            "Preflight requests by outcome.",
            &mut out,
        );
        out
    }
}
