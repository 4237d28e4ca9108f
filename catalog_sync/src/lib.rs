//! Catalog normalization and bulk price adjustment over a single SQLite
//! connection.
//!
//! The engine seeds a synthetic flat catalog, extracts its color attribute
//! into a reference entity table, clones the catalog into a normalized table
//! keyed on that entity, supports an atomic cutover to the production name,
//! and applies rounded percentage price adjustments per color group. See
//! [`scenario::run`] for the per-scenario orchestration.

#![deny(missing_docs)]

pub mod db;
pub mod error;
pub mod migrate;
pub mod models;
pub mod price;
pub mod profile;
pub mod scenario;
pub mod schema;
