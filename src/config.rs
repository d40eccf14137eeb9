use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::naming::initialisms::InitialismSet;
use crate::naming::normalizer::Normalizer;
use crate::parser::names::comparison_key;

/// Columns excluded from generated structs unless configured otherwise.
pub const DEFAULT_SKIP_COLUMNS: [&str; 4] = ["rowid", "_rowid_", "_rid", "rid"];

/// Which tags each generated field carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TagOptions {
    /// `json:"<column>"`
    pub json: bool,
    /// `db:"<column>"`
    pub db: bool,
    /// `gorm:"column:<column>"`
    pub gorm: bool,
}

impl Default for TagOptions {
    fn default() -> Self {
        Self {
            json: true,
            db: true,
            gorm: true,
        }
    }
}

/// Settings for turning table schemas into struct plans.
///
/// Every field has a default, so `{}` is a valid document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Initialisms recognized in addition to the built-in table.
    pub extra_initialisms: Vec<String>,
    /// Column names marked as skipped, compared case-insensitively.
    pub skip_columns: Vec<String>,
    /// Field tag selection.
    pub tags: TagOptions,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            extra_initialisms: Vec::new(),
            skip_columns: DEFAULT_SKIP_COLUMNS.iter().map(ToString::to_string).collect(),
            tags: TagOptions::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let config: Self = serde_json::from_str(json)?;
        // Reject bad initialisms at load time rather than at first use.
        config.initialisms()?;
        tracing::debug!(
            extra_initialisms = config.extra_initialisms.len(),
            skip_columns = config.skip_columns.len(),
            "loaded generator config"
        );
        Ok(config)
    }

    /// The default initialism table extended with `extra_initialisms`.
    pub fn initialisms(&self) -> Result<InitialismSet, Error> {
        InitialismSet::with_extra(&self.extra_initialisms)
    }

    /// A normalizer using [`GeneratorConfig::initialisms`].
    pub fn normalizer(&self) -> Result<Normalizer, Error> {
        Ok(Normalizer::new(self.initialisms()?))
    }

    /// True when `column` is listed in `skip_columns`.
    pub fn is_skipped(&self, column: &str) -> bool {
        let key = comparison_key(column);
        self.skip_columns
            .iter()
            .any(|skipped| comparison_key(skipped) == key)
    }
}
