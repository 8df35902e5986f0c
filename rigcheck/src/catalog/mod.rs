//! Component Catalog
//!
//! The catalog side of the checker: typed component records, loose JSON
//! decoding for schemaless catalog data, and an in-memory id -> record store
//! with an embedded curated parts list as the default.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ catalog JSON │───▶│   Component  │───▶│   Catalog    │
//! │ (file/embed) │    │  from_value  │    │  id → record │
//! └──────────────┘    └──────────────┘    └──────┬───────┘
//!                                                │ resolve ids
//!                                                ▼
//!                                        ┌──────────────┐
//!                                        │BuildSelection│──▶ evaluator
//!                                        └──────────────┘
//! ```
//!
//! Decoding is where data-quality errors surface: a present field that cannot
//! be coerced to its expected type is a [`CatalogError::MalformedField`] and
//! aborts the load, so the evaluator itself never sees a malformed record.

pub mod builtin;
pub mod schema;
pub mod store;

// Re-exports for convenience
pub use builtin::builtin_components;
pub use schema::{BuildSelection, CatalogError, Category, Component};
pub use store::Catalog;
