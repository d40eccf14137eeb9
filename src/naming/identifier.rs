use std::fmt;

use serde::Serialize;

/// Output of the normalizer: letter-first, alphanumeric-or-underscore, never empty.
///
/// The only value that does not start with a letter is the `"_"` placeholder
/// returned when nothing usable survives normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Placeholder used when a name has no letters or digits at all.
    pub const PLACEHOLDER: &'static str = "_";

    pub(crate) fn new_unchecked(value: String) -> Self {
        debug_assert!(is_identifier(&value) || value == Self::PLACEHOLDER);
        Self(value)
    }

    pub(crate) fn placeholder() -> Self {
        Self(Self::PLACEHOLDER.to_string())
    }

    /// Borrow the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take ownership of the identifier text.
    pub fn into_string(self) -> String {
        self.0
    }

    /// True for the `"_"` fallback.
    pub fn is_placeholder(&self) -> bool {
        self.0 == Self::PLACEHOLDER
    }
}

/// True when `name` is letter-first, holds only letters, numeric characters
/// and underscores, and does not end with an underscore.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_alphabetic()
        && chars.all(|c| c.is_alphabetic() || c.is_numeric() || c == '_')
        && !name.ends_with('_')
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Identifier> for String {
    fn from(value: Identifier) -> Self {
        value.0
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<String> for Identifier {
    fn eq(&self, other: &String) -> bool {
        &self.0 == other
    }
}
