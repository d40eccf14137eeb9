use serde::Serialize;
use sqlparser::ast::{ColumnDef, ObjectName, Statement};
use sqlparser::dialect::SQLiteDialect;
use sqlparser::parser::Parser;

use crate::error::Error;
use crate::parser::names::relation_name;

/// A column as declared in `CREATE TABLE`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSchema {
    /// Column name, unquoted.
    pub name: String,
    /// Declared type rendered back to SQL (`DECIMAL(10,5)`), empty when omitted.
    pub raw_type: String,
}

impl ColumnSchema {
    /// Build a column from its name and declared type.
    pub fn new(name: impl Into<String>, raw_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_type: raw_type.into(),
        }
    }
}

impl From<&ColumnDef> for ColumnSchema {
    fn from(column: &ColumnDef) -> Self {
        Self {
            name: column.name.value.clone(),
            raw_type: column.data_type.to_string(),
        }
    }
}

/// A table and its columns in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSchema {
    /// Table name without schema qualifier or quotes.
    pub name: String,
    /// Columns in declaration order.
    pub columns: Vec<ColumnSchema>,
}

impl TableSchema {
    /// Build a table from a name and `(column, type)` pairs.
    pub fn new<I, N, T>(name: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = (N, T)>,
        N: Into<String>,
        T: Into<String>,
    {
        Self {
            name: name.into(),
            columns: columns
                .into_iter()
                .map(|(column, raw_type)| ColumnSchema::new(column, raw_type))
                .collect(),
        }
    }
}

/// The relation part of a possibly schema-qualified name, with quoting
/// already resolved by the parser.
fn table_name(name: &ObjectName) -> String {
    match name.0.last().and_then(|part| part.as_ident()) {
        Some(ident) => ident.value.clone(),
        None => relation_name(&name.to_string()),
    }
}

/// Parse SQLite DDL and return every `CREATE TABLE` in statement order.
///
/// Statements other than `CREATE TABLE` are skipped.
pub fn parse_tables(sql: &str) -> Result<Vec<TableSchema>, Error> {
    let statements = Parser::parse_sql(&SQLiteDialect {}, sql)?;

    let mut tables = Vec::new();
    for statement in &statements {
        let Statement::CreateTable(create) = statement else {
            tracing::trace!(statement = %statement, "skipping non CREATE TABLE statement");
            continue;
        };

        let table = TableSchema {
            name: table_name(&create.name),
            columns: create.columns.iter().map(ColumnSchema::from).collect(),
        };
        if table.columns.is_empty() {
            tracing::warn!(table = %table.name, "table declares no columns");
        }
        tracing::debug!(
            table = %table.name,
            columns = table.columns.len(),
            "parsed table"
        );
        tables.push(table);
    }
    Ok(tables)
}
