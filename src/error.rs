/// Errors raised while loading configuration or reading schema DDL.
///
/// Name normalization and type classification are total and never produce one.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The configuration document is not valid JSON for [`crate::GeneratorConfig`].
    #[error("Invalid generator config JSON: {0}")]
    Config(#[from] serde_json::Error),
    /// An initialism extension entry was rejected.
    #[error("Invalid initialism '{value}': {reason}")]
    InvalidInitialism {
        /// The entry as supplied.
        value: String,
        /// Why it was rejected.
        reason: &'static str,
    },
    /// The schema DDL could not be parsed.
    #[error("SQL parse error: {0}")]
    SqlParse(#[from] sqlparser::parser::ParserError),
}
