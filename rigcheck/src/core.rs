//! Core build-evaluation logic shared by library consumers and the CLI.
//!
//! This is the resolve-then-evaluate flow: a [`BuildRequest`] maps slot names
//! to opaque catalog ids; the core resolves each id against a [`Catalog`],
//! sums prices, and hands the assembled [`BuildSelection`] to the evaluator.
//! Lookup failures are errors here; compatibility problems are not — those
//! come back as issues inside the report.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analyzer::rules::{evaluate, EvaluationResult};
use crate::catalog::schema::{BuildSelection, CatalogError, Category};
use crate::catalog::store::Catalog;

#[derive(Debug, thiserror::Error)]
pub enum RigCheckError {
    #[error("Unknown component id '{id}' for {category}")]
    UnknownComponent { category: Category, id: String },

    #[error("Unknown component category: {0}")]
    UnknownCategory(String),

    #[error("Component '{id}' is a {actual}, selected for the {slot} slot")]
    CategoryMismatch {
        slot: Category,
        id: String,
        actual: Category,
    },

    #[error("More than one selection for {0}")]
    DuplicateCategory(Category),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A build to evaluate: slot name -> opaque catalog id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub selections: BTreeMap<String, String>,
}

/// Full evaluation report for one build.
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub total_price: f64,
    pub estimated_power_w: u32,
    pub is_valid: bool,
    pub issues: Vec<String>,
    pub evaluated_at: DateTime<Utc>,
}

/// Load a [`BuildRequest`] from a JSON file.
pub fn load_build_request(path: &Path) -> Result<BuildRequest, RigCheckError> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| RigCheckError::Parse(format!("{}: {}", path.display(), e)))
}

/// Core evaluation API used by library consumers and the CLI.
pub struct RigCheckCore;

impl RigCheckCore {
    /// Evaluate an already-assembled selection. Thin wrapper over the pure
    /// evaluator, for callers that build selections in code.
    pub fn evaluate_selection(selection: &BuildSelection) -> EvaluationResult {
        evaluate(selection)
    }

    /// Resolve a request's component ids against a catalog and evaluate the
    /// resulting build.
    pub fn evaluate_request(
        catalog: &Catalog,
        request: &BuildRequest,
    ) -> Result<BuildReport, RigCheckError> {
        tracing::debug!(slots = request.selections.len(), "evaluating build request");

        let mut selection = BuildSelection::new();
        let mut total_price = 0.0;

        for (slot, id) in &request.selections {
            let category = Category::from_str(slot)
                .map_err(|_| RigCheckError::UnknownCategory(slot.clone()))?;
            let component = catalog
                .get(id)
                .ok_or_else(|| RigCheckError::UnknownComponent {
                    category,
                    id: id.clone(),
                })?;
            if component.category != category {
                return Err(RigCheckError::CategoryMismatch {
                    slot: category,
                    id: id.clone(),
                    actual: component.category,
                });
            }
            total_price += component.price;
            if selection.insert(component.clone()).is_some() {
                // Two slot names ("CPU" and "cpu") mapping to one category.
                return Err(RigCheckError::DuplicateCategory(category));
            }
        }

        let result = evaluate(&selection);
        Ok(BuildReport {
            name: request.name.clone(),
            total_price: round_cents(total_price),
            estimated_power_w: result.estimated_power_w,
            is_valid: result.is_valid,
            issues: result.issues,
            evaluated_at: Utc::now(),
        })
    }

    /// Load a build file and evaluate it against a catalog.
    pub fn evaluate_build_file(
        catalog: &Catalog,
        path: &Path,
    ) -> Result<BuildReport, RigCheckError> {
        let request = load_build_request(path)?;
        Self::evaluate_request(catalog, &request)
    }

    /// Evaluate every `*.build.json` file under a directory.
    pub fn evaluate_build_dir(
        catalog: &Catalog,
        dir: &Path,
    ) -> Result<Vec<(PathBuf, BuildReport)>, RigCheckError> {
        let files = discover_build_files(dir)?;
        let mut reports = Vec::new();
        for path in files {
            let report = Self::evaluate_build_file(catalog, &path)?;
            reports.push((path, report));
        }
        Ok(reports)
    }
}

fn round_cents(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}

/// Recursively discover build JSON files in a directory (files named
/// `*.build.json`).
pub fn discover_build_files(dir: &Path) -> Result<Vec<PathBuf>, RigCheckError> {
    let mut files = Vec::new();
    walk_dir(dir, &mut files, 0)?;
    files.sort();
    Ok(files)
}

fn walk_dir(dir: &Path, files: &mut Vec<PathBuf>, depth: usize) -> Result<(), RigCheckError> {
    if depth > 20 {
        return Ok(());
    }
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
            if name.starts_with('.') || name == "node_modules" || name == "target" {
                continue;
            }
            walk_dir(&path, files, depth + 1)?;
        } else if path.is_file() {
            let name = entry.file_name();
            let name = name.to_str().unwrap_or("");
            if name.ends_with(".build.json") {
                files.push(path);
            }
        }
    }
    Ok(())
}
