mod support;

use sqlite2struct::generator::struct_plan;
use sqlite2struct::parser::ddl::TableSchema;
use sqlite2struct::{GeneratorConfig, Normalizer, ScalarKind};

#[test]
fn generate_shop_plans() {
    let plans = support::load_fixture_plans("shop");
    insta::assert_snapshot!(support::render_plans(&plans), @r###"
    Customers (customers)
      ID int64 `json:"id"`
      FirstName string `json:"first_name"`
      EmailAddress string `json:"EMAIL_ADDRESS"`
      HomepageURL string `json:"homepage_url"`
      IsVIP bool `json:"is_vip"`
    Order_items (order items)
      // Rowid int64 `json:"rowid"`
      OrderID int64 `json:"order_id"`
      Qty int32 `json:"qty"`
      UnitPrice float64 `json:"unit_price"`
      Weight float32 `json:"weight"`
      TwoNd_line string `json:"2nd line"`
    "###);
}

#[test]
fn generate_single_table_json_plan() {
    let table = TableSchema::new("http_log", [("id", "INTEGER")]);
    let plan = struct_plan::build_plan(
        &table,
        &Normalizer::default(),
        &GeneratorConfig::default(),
    );
    insta::assert_json_snapshot!(plan, @r###"
    {
      "type_name": "HTTPLog",
      "table_name": "http_log",
      "fields": [
        {
          "name": "ID",
          "kind": "int64",
          "column": "id",
          "tags": [
            {
              "key": "db",
              "value": "id"
            },
            {
              "key": "gorm",
              "value": "column:id"
            },
            {
              "key": "json",
              "value": "id"
            }
          ],
          "skipped": false
        }
      ]
    }
    "###);
}

#[test]
fn degenerate_names_still_produce_fields() {
    let table = TableSchema::new("___", [("???", "WHATEVER"), ("", "")]);
    let plan = struct_plan::build_plan(
        &table,
        &Normalizer::default(),
        &GeneratorConfig::default(),
    );
    assert!(plan.type_name.is_placeholder());
    assert_eq!(plan.fields.len(), 2);
    for field in &plan.fields {
        assert_eq!(field.name, "_");
        assert_eq!(field.kind, ScalarKind::String);
    }
}

#[test]
fn colliding_field_names_are_left_to_the_caller() {
    let table = TableSchema::new("t", [("user_id", "INT"), ("USER_ID", "INT")]);
    let plan = struct_plan::build_plan(
        &table,
        &Normalizer::default(),
        &GeneratorConfig::default(),
    );
    assert_eq!(plan.fields[0].name, plan.fields[1].name);
    assert_ne!(plan.fields[0].column, plan.fields[1].column);
}
