use serde::Serialize;

use crate::classifier::scalar_kind::ScalarKind;
use crate::classifier::type_classifier::classify;
use crate::config::{GeneratorConfig, TagOptions};
use crate::naming::identifier::Identifier;
use crate::naming::normalizer::Normalizer;
use crate::parser::ddl::{ColumnSchema, TableSchema};

/// One `key:"value"` entry of a field tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldTag {
    /// Tag key (`db`, `gorm`, `json`).
    pub key: &'static str,
    /// Tag value.
    pub value: String,
}

/// A struct field derived from one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldPlan {
    /// Exported field name.
    pub name: Identifier,
    /// Field value type.
    pub kind: ScalarKind,
    /// Raw column name.
    pub column: String,
    /// Tags in key order.
    pub tags: Vec<FieldTag>,
    /// Listed in the skip set; emitters should comment the field out.
    pub skipped: bool,
}

impl FieldPlan {
    /// Tags rendered as a Go struct tag body, e.g. `db:"id" json:"id"`.
    pub fn tag_literal(&self) -> String {
        self.tags
            .iter()
            .map(|tag| format!("{}:{}", tag.key, go_quote(&tag.value)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Everything needed to emit the struct for one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructPlan {
    /// Exported type name.
    pub type_name: Identifier,
    /// Raw table name, returned by the generated table-name accessor.
    pub table_name: String,
    /// Fields in column order.
    pub fields: Vec<FieldPlan>,
}

impl StructPlan {
    /// File stem the struct is written under.
    pub fn file_stem(&self) -> &str {
        self.type_name.as_str()
    }

    /// Fields that are not skipped.
    pub fn active_fields(&self) -> impl Iterator<Item = &FieldPlan> {
        self.fields.iter().filter(|field| !field.skipped)
    }
}

/// Build the plan for a single table.
pub fn build_plan(
    table: &TableSchema,
    normalizer: &Normalizer,
    config: &GeneratorConfig,
) -> StructPlan {
    let type_name = normalizer.normalize(&table.name);
    tracing::debug!(table = %table.name, type_name = %type_name, "planning struct");

    let fields = table
        .columns
        .iter()
        .map(|column| build_field(column, normalizer, config))
        .collect();

    StructPlan {
        type_name,
        table_name: table.name.clone(),
        fields,
    }
}

/// Build plans for every table, keeping their order.
pub fn build_plans(
    tables: &[TableSchema],
    normalizer: &Normalizer,
    config: &GeneratorConfig,
) -> Vec<StructPlan> {
    tables
        .iter()
        .map(|table| build_plan(table, normalizer, config))
        .collect()
}

fn build_field(
    column: &ColumnSchema,
    normalizer: &Normalizer,
    config: &GeneratorConfig,
) -> FieldPlan {
    let skipped = config.is_skipped(&column.name);
    let field = FieldPlan {
        name: normalizer.normalize(&column.name),
        kind: classify(&column.raw_type),
        column: column.name.clone(),
        tags: field_tags(&column.name, config.tags),
        skipped,
    };
    tracing::trace!(
        column = %column.name,
        raw_type = %column.raw_type,
        field = %field.name,
        kind = %field.kind,
        skipped,
        "planned field"
    );
    field
}

fn field_tags(column: &str, options: TagOptions) -> Vec<FieldTag> {
    let mut tags = Vec::with_capacity(3);
    if options.db {
        tags.push(FieldTag {
            key: "db",
            value: column.to_string(),
        });
    }
    if options.gorm {
        tags.push(FieldTag {
            key: "gorm",
            value: format!("column:{column}"),
        });
    }
    if options.json {
        tags.push(FieldTag {
            key: "json",
            value: column.to_string(),
        });
    }
    tags
}

/// Double-quote `value` with Go `strconv.Quote` escapes.
fn go_quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{7}' => out.push_str("\\a"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{b}' => out.push_str("\\v"),
            ' ' => out.push(' '),
            c if !c.is_control() && !c.is_whitespace() => out.push(c),
            c if c < ' ' || c == '\u{7f}' => out.push_str(&format!("\\x{:02x}", c as u32)),
            c if (c as u32) < 0x10000 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push_str(&format!("\\U{:08x}", c as u32)),
        }
    }
    out.push('"');
    out
}
