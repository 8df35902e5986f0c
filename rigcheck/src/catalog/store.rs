//! In-memory catalog store: opaque component id -> record.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;

use crate::catalog::builtin::builtin_components;
use crate::catalog::schema::{CatalogError, Category, Component};

/// A lookup table of catalog components keyed by id.
///
/// Deterministic iteration order (ids sort lexicographically), so listings
/// and reports are stable across runs.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    components: BTreeMap<String, Component>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The embedded curated catalog.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for component in builtin_components() {
            catalog.insert(component);
        }
        tracing::debug!(components = catalog.len(), "loaded builtin catalog");
        catalog
    }

    /// Load a catalog from a JSON file holding an array of component records.
    ///
    /// Unlike the embedded fallback, user data fails loudly: any record that
    /// cannot be decoded aborts the load.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&content)?;
        let catalog = Self::from_value(&value)?;
        tracing::info!(
            components = catalog.len(),
            path = %path.display(),
            "loaded catalog file"
        );
        Ok(catalog)
    }

    /// Decode a catalog from a JSON array of records.
    pub fn from_value(value: &Value) -> Result<Self, CatalogError> {
        let records = value.as_array().ok_or(CatalogError::NotAnArray)?;
        let mut catalog = Self::new();
        for record in records {
            catalog.insert(Component::from_value(record)?);
        }
        Ok(catalog)
    }

    /// Insert a component, returning any previous record with the same id.
    pub fn insert(&mut self, component: Component) -> Option<Component> {
        self.components.insert(component.id.clone(), component)
    }

    pub fn get(&self, id: &str) -> Option<&Component> {
        self.components.get(id)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Component> {
        self.components.values()
    }

    /// All components in one category, in id order.
    pub fn by_category(&self, category: Category) -> Vec<&Component> {
        self.components
            .values()
            .filter(|c| c.category == category)
            .collect()
    }
}
