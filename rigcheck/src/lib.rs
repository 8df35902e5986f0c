//! RigCheck - PC build compatibility checking library
//!
//! This library validates a PC build (CPU, GPU, motherboard, RAM, storage,
//! PSU, case, cooler) for physical and electrical compatibility, estimating
//! total power draw and total price along the way.
//!
//! # Quick Start
//!
//! ```
//! use rigcheck::{Catalog, RigCheckCore, BuildRequest};
//!
//! let catalog = Catalog::builtin();
//! let mut request = BuildRequest::default();
//! request.selections.insert("CPU".into(), "cpu-ryzen-5-5600".into());
//! request.selections.insert("Motherboard".into(), "mb-msi-b550-a-pro".into());
//!
//! let report = RigCheckCore::evaluate_request(&catalog, &request).unwrap();
//! assert!(report.is_valid);
//! println!("{}W estimated, ${}", report.estimated_power_w, report.total_price);
//! ```
//!
//! # Features
//!
//! - **Compatibility rules**: socket match, RAM type/speed, PSU headroom,
//!   GPU/cooler clearance, cooler thermal capacity
//! - **Power estimation**: CPU + GPU TDP plus a 75W system baseline
//! - **Catalog**: embedded curated parts list, or bring your own JSON

pub mod analyzer;
pub mod catalog;
pub mod core;

// Re-export main types
pub use crate::core::{
    discover_build_files, load_build_request, BuildReport, BuildRequest, RigCheckCore,
    RigCheckError,
};
pub use analyzer::rules::{evaluate, estimate_power, EvaluationResult, RuleInfo, RULES};
pub use catalog::schema::{BuildSelection, CatalogError, Category, Component};
pub use catalog::store::Catalog;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        BuildReport, BuildRequest, BuildSelection, Catalog, Category, Component,
        EvaluationResult, RigCheckCore, RigCheckError,
    };
}
