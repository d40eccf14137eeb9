use serde::{Deserialize, Serialize};
use std::fmt;

/// Scalar value type of a generated field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarKind {
    /// Text, and the fallback for anything unrecognized.
    #[default]
    String,
    /// Boolean flag.
    Bool,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// Single-precision float.
    Float32,
    /// Double-precision float.
    Float64,
}

impl ScalarKind {
    /// Every kind, in declaration order.
    pub const ALL: [ScalarKind; 6] = [
        ScalarKind::String,
        ScalarKind::Bool,
        ScalarKind::Int32,
        ScalarKind::Int64,
        ScalarKind::Float32,
        ScalarKind::Float64,
    ];

    /// Spelling of the kind as a Go builtin type.
    pub fn go_type(self) -> &'static str {
        match self {
            ScalarKind::String => "string",
            ScalarKind::Bool => "bool",
            ScalarKind::Int32 => "int32",
            ScalarKind::Int64 => "int64",
            ScalarKind::Float32 => "float32",
            ScalarKind::Float64 => "float64",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.go_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_go_spelling_and_serde_name() {
        for kind in ScalarKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
        }
    }

    #[test]
    fn string_is_the_default() {
        assert_eq!(ScalarKind::default(), ScalarKind::String);
    }
}
