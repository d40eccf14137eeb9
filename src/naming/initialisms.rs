use std::collections::BTreeSet;

use crate::error::Error;

/// Initialisms recognized out of the box.
pub const COMMON_INITIALISMS: [&str; 33] = [
    "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS", "ID", "IP",
    "JSON", "LHS", "QPS", "RAM", "RHS", "RPC", "SLA", "SMTP", "SSH", "TLS", "TTL", "UI", "UID",
    "UUID", "URI", "URL", "UTF8", "VM", "XML", "NTP", "DB",
];

/// Set of known abbreviations that keep their all-caps spelling inside identifiers.
///
/// Entries are stored upper-case and matched case-insensitively. Only ASCII
/// letters and digits are accepted, so a canonical spelling never changes the
/// character classes of the word it replaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitialismSet {
    entries: BTreeSet<String>,
    longest: usize,
}

impl InitialismSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            entries: BTreeSet::new(),
            longest: 0,
        }
    }

    /// Create the default set extended with `extra` entries.
    pub fn with_extra<I, S>(extra: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        for entry in extra {
            set.insert(entry.as_ref())?;
        }
        Ok(set)
    }

    /// Add an entry. Returns `false` when it was already present.
    pub fn insert(&mut self, value: &str) -> Result<bool, Error> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidInitialism {
                value: value.to_string(),
                reason: "must not be empty",
            });
        }
        if !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::InvalidInitialism {
                value: value.to_string(),
                reason: "only ASCII letters and digits are allowed",
            });
        }
        self.longest = self.longest.max(trimmed.len());
        Ok(self.entries.insert(trimmed.to_ascii_uppercase()))
    }

    /// Canonical upper-case spelling of `word`, if it is a known initialism.
    pub fn canonical(&self, word: &str) -> Option<&str> {
        if word.is_empty() || !word.is_ascii() {
            return None;
        }
        self.entries
            .get(word.to_ascii_uppercase().as_str())
            .map(String::as_str)
    }

    /// True when `word` matches an entry, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        self.canonical(word).is_some()
    }

    /// True when `word` is one or more entries written back to back (`"APIURL"`).
    pub fn is_concatenation(&self, word: &str) -> bool {
        if word.is_empty() || !word.is_ascii() {
            return false;
        }
        let len = word.len();
        let mut reachable = vec![false; len + 1];
        reachable[0] = true;
        for end in 1..=len {
            let lowest = end.saturating_sub(self.longest);
            reachable[end] =
                (lowest..end).any(|start| reachable[start] && self.contains(&word[start..end]));
        }
        reachable[len]
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the set has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

impl Default for InitialismSet {
    fn default() -> Self {
        Self {
            entries: COMMON_INITIALISMS.iter().map(|s| (*s).to_string()).collect(),
            longest: COMMON_INITIALISMS.iter().map(|s| s.len()).max().unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_holds_every_common_initialism() {
        let set = InitialismSet::default();
        assert_eq!(set.len(), COMMON_INITIALISMS.len());
        for entry in COMMON_INITIALISMS {
            assert!(set.contains(entry), "{entry} should be present");
        }
    }

    #[test]
    fn lookup_ignores_case_and_returns_canonical_form() {
        let set = InitialismSet::default();
        assert_eq!(set.canonical("http"), Some("HTTP"));
        assert_eq!(set.canonical("Id"), Some("ID"));
        assert_eq!(set.canonical("utf8"), Some("UTF8"));
        assert_eq!(set.canonical("ruby"), None);
        assert_eq!(set.canonical(""), None);
    }

    #[test]
    fn lookup_rejects_non_ascii_lookalikes() {
        let set = InitialismSet::default();
        // dotless i upper-cases to I under full Unicode mapping
        assert_eq!(set.canonical("\u{131}d"), None);
    }

    #[test]
    fn extension_adds_entries_without_touching_defaults() {
        let set = InitialismSet::with_extra(["sku", "Gps"]).expect("valid entries");
        assert_eq!(set.canonical("SKU"), Some("SKU"));
        assert_eq!(set.canonical("gps"), Some("GPS"));
        assert!(set.contains("url"));
        assert_eq!(set.len(), COMMON_INITIALISMS.len() + 2);
    }

    #[test]
    fn insert_reports_duplicates() {
        let mut set = InitialismSet::default();
        assert!(!set.insert("id").unwrap());
        assert!(set.insert("ean13").unwrap());
    }

    #[test]
    fn invalid_entries_are_rejected() {
        let mut set = InitialismSet::new();
        for bad in ["", "   ", "A_B", "név", "B-2"] {
            let err = set.insert(bad).expect_err("entry should be rejected");
            assert!(matches!(err, Error::InvalidInitialism { .. }), "{bad}: {err}");
        }
        assert!(set.is_empty());
    }

    #[test]
    fn concatenated_initialisms_are_recognized() {
        let set = InitialismSet::default();
        assert!(set.is_concatenation("APIURL"));
        assert!(set.is_concatenation("idurl"));
        assert!(set.is_concatenation("HTTP"));
        assert!(!set.is_concatenation("NAME"));
        assert!(!set.is_concatenation("API_URL"));
        assert!(!set.is_concatenation(""));
    }

    #[test]
    fn iteration_is_sorted() {
        let set = InitialismSet::with_extra(["zz", "aa"]).unwrap();
        let entries: Vec<&str> = set.iter().collect();
        let mut sorted = entries.clone();
        sorted.sort_unstable();
        assert_eq!(entries, sorted);
    }
}
