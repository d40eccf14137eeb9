/// Struct, field and tag plans derived from table schemas.
pub mod struct_plan;
