//! Built-in component catalog.
//!
//! A small curated parts list embedded into the binary so the checker works
//! out of the box, without a catalog file. Users point the CLI at their own
//! JSON catalog to override it.

use serde_json::Value;

use crate::catalog::schema::Component;

// Embedded at compile time; decoded through the same loose path as user
// catalogs so the two never drift.
const EMBEDDED_CATALOG: &str = include_str!("../../catalog/components.json");

/// Decode the embedded catalog. Records that fail to decode are logged and
/// skipped rather than failing the whole load.
pub fn builtin_components() -> Vec<Component> {
    let records: Vec<Value> = match serde_json::from_str(EMBEDDED_CATALOG) {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!("Failed to parse embedded catalog: {}", e);
            return Vec::new();
        }
    };

    let mut components = Vec::new();
    for record in &records {
        match Component::from_value(record) {
            Ok(c) => components.push(c),
            Err(e) => {
                tracing::warn!("Failed to decode embedded catalog record: {}", e);
            }
        }
    }
    components
}
