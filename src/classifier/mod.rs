/// The closed set of scalar value types a column can map to.
pub mod scalar_kind;
/// SQL column type name to [`scalar_kind::ScalarKind`] lookup.
pub mod type_classifier;
