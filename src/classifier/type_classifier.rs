use super::scalar_kind::ScalarKind;

/// Map a raw SQL column type to its scalar kind.
///
/// Any parenthesized length/precision suffix is dropped and the remaining
/// family name is matched case-insensitively. Unknown families fall back to
/// [`ScalarKind::String`].
///
/// Examples:
/// - `"DECIMAL(10,5)"` -> `Float64`
/// - `"varchar(255)"` -> `String`
/// - `"unsigned big int"` -> `Int64`
pub fn classify(raw_type: &str) -> ScalarKind {
    match type_family(raw_type).as_str() {
        "VARCHAR" | "TEXT" => ScalarKind::String,
        "BOOL" | "BOOLEAN" => ScalarKind::Bool,
        "TINYINT" | "SMALLINT" => ScalarKind::Int32,
        "INTEGER" | "INT" | "INT2" | "MEDIUMINT" | "BIGINT" | "UNSIGNED BIG INT" | "INT8" => {
            ScalarKind::Int64
        }
        "REAL" | "DOUBLE" | "DOUBLE PRECISION" | "FLOAT" => ScalarKind::Float32,
        "NUMERIC" | "DECIMAL" => ScalarKind::Float64,
        _ => ScalarKind::String,
    }
}

/// Alias of [`classify`] under the name the generator pipeline uses.
pub fn map_type(raw_type: &str) -> ScalarKind {
    classify(raw_type)
}

/// Upper-cased type name preceding any `(`, with surrounding whitespace removed.
pub fn type_family(raw_type: &str) -> String {
    raw_type
        .split('(')
        .next()
        .unwrap_or_default()
        .trim()
        .to_uppercase()
}
