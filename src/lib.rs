//! Turn SQLite table and column names into exported struct identifiers with scalar field types.
#![warn(missing_docs)]

/// Column type classification into a closed set of scalar kinds.
pub mod classifier;
/// Generator configuration loaded from JSON.
pub mod config;
/// Crate error type for the fallible (non-core) surfaces.
pub mod error;
/// Per-table struct plans assembled from parsed schemas.
pub mod generator;
/// Identifier normalization and the initialism table.
pub mod naming;
/// SQL name helpers and the `CREATE TABLE` reader.
pub mod parser;

pub use classifier::scalar_kind::ScalarKind;
pub use classifier::type_classifier::classify;
pub use config::GeneratorConfig;
pub use error::Error;
pub use naming::identifier::Identifier;
pub use naming::initialisms::InitialismSet;
pub use naming::normalizer::{normalize, Normalizer};
