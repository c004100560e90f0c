//! Model resolution
//!
//! Model definitions arrive embedded as JSON strings inside the catalog's
//! `models` dictionary. The resolver parses each referenced definition at
//! most once per run and tolerates missing or invalid entries: a bad
//! model is simply absent from the output while the entity keeps its
//! textual reference.

use serde_json::Value;

use crate::catalog::RawCatalog;
use crate::summary::RunSummary;

/// Looks up and parses named model definitions, deduplicated per run.
pub struct ModelResolver {
    summary: RunSummary,
}

impl ModelResolver {
    /// Create a resolver recording into the given tallies.
    pub fn new(summary: RunSummary) -> Self {
        Self { summary }
    }

    /// Resolve `name` into `out`, if possible.
    ///
    /// No-op when `name` is already resolved, when the catalog has no
    /// entry for it, or when the entry lacks a `model` string field —
    /// downstream consumers must tolerate such dangling references. An
    /// entry whose embedded JSON fails to parse is logged, counted, and
    /// omitted; it never aborts traversal.
    pub fn resolve(&self, name: &str, catalog: &RawCatalog, out: &mut serde_json::Map<String, Value>) {
        if out.contains_key(name) {
            return;
        }
        let Some(entry) = catalog.models.get(name) else {
            log::debug!("no model definition for {name}, reference left dangling");
            return;
        };
        let Some(raw) = entry.get("model").and_then(Value::as_str) else {
            log::debug!("model entry for {name} has no embedded definition");
            return;
        };

        match serde_json::from_str::<Value>(raw) {
            Ok(document) => {
                out.insert(name.to_string(), document);
                self.summary.record_model();
            }
            Err(err) => {
                log::warn!("invalid embedded JSON for model {name}: {err}");
                self.summary.record_error();
            }
        }
    }
}
