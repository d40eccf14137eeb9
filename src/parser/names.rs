/// Return the identifier without its surrounding quotes.
///
/// SQLite accepts `"name"`, `` `name` `` and `[name]`.
pub fn unquote_identifier(ident: &str) -> &str {
    let pairs = [('"', '"'), ('`', '`'), ('[', ']')];
    pairs
        .iter()
        .find_map(|&(open, close)| {
            ident
                .strip_prefix(open)
                .and_then(|s| s.strip_suffix(close))
        })
        .unwrap_or(ident)
}

/// Key used to compare column names case-insensitively.
///
/// Trims whitespace, removes surrounding quotes, and lowercases the result.
pub fn comparison_key(ident: &str) -> String {
    unquote_identifier(ident.trim()).to_lowercase()
}

/// Split a potentially schema-qualified name into `(schema, relation)`.
///
/// Handles dots inside quoted identifiers, e.g. `"my.schema"."table.name"`.
pub fn split_schema_and_relation(name: &str) -> Option<(String, String)> {
    let mut quote: Option<char> = None;
    let mut start = 0usize;
    let mut parts: Vec<&str> = Vec::new();

    for (idx, ch) in name.char_indices() {
        match (quote, ch) {
            (None, '"' | '`') => quote = Some(ch),
            (None, '[') => quote = Some(']'),
            (Some(close), _) if ch == close => quote = None,
            (None, '.') => {
                parts.push(name[start..idx].trim());
                start = idx + 1;
            }
            _ => {}
        }
    }
    parts.push(name[start..].trim());

    if parts.len() < 2 {
        return None;
    }

    let schema = unquote_identifier(parts[parts.len() - 2]).to_string();
    let relation = unquote_identifier(parts[parts.len() - 1]).to_string();
    Some((schema, relation))
}

/// Reduce an object name to its unquoted terminal relation.
///
/// Examples:
/// - `"main.users"` -> `"users"`
/// - `"\"main\".\"User Accounts\""` -> `"User Accounts"`
/// - `"[orders]"` -> `"orders"`
pub fn relation_name(name: &str) -> String {
    if let Some((_, relation)) = split_schema_and_relation(name.trim()) {
        return relation;
    }
    unquote_identifier(name.trim()).to_string()
}
