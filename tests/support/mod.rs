#![allow(dead_code)]

use std::path::PathBuf;

use sqlite2struct::generator::struct_plan::{self, StructPlan};
use sqlite2struct::parser::ddl::{self, TableSchema};
use sqlite2struct::GeneratorConfig;

pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub(crate) fn fixture_dir(fixture: &str) -> PathBuf {
    PathBuf::from("tests/fixtures").join(fixture)
}

pub(crate) fn read_fixture_sql(fixture: &str) -> String {
    let path = fixture_dir(fixture).join("input.sql");
    std::fs::read_to_string(path).expect("fixture SQL should be readable")
}

pub(crate) fn parse_fixture_tables(fixture: &str) -> Vec<TableSchema> {
    ddl::parse_tables(&read_fixture_sql(fixture)).expect("fixture SQL should parse")
}

pub(crate) fn load_fixture_config(fixture: &str) -> GeneratorConfig {
    let path = fixture_dir(fixture).join("config.json");
    let json = std::fs::read_to_string(path).expect("fixture config should be readable");
    GeneratorConfig::from_json(&json).expect("fixture config should parse")
}

pub(crate) fn load_fixture_plans(fixture: &str) -> Vec<StructPlan> {
    init_tracing();
    let tables = parse_fixture_tables(fixture);
    let config = load_fixture_config(fixture);
    let normalizer = config.normalizer().expect("fixture initialisms should be valid");
    struct_plan::build_plans(&tables, &normalizer, &config)
}

/// One line per struct, one indented line per field; skipped fields are commented out.
pub(crate) fn render_plans(plans: &[StructPlan]) -> String {
    let mut lines = Vec::new();
    for plan in plans {
        lines.push(format!("{} ({})", plan.type_name, plan.table_name));
        for field in &plan.fields {
            let marker = if field.skipped { "// " } else { "" };
            lines.push(format!(
                "  {marker}{} {} `{}`",
                field.name,
                field.kind,
                field.tag_literal()
            ));
        }
    }
    lines.join("\n")
}
