/// `CREATE TABLE` reader producing ordered table/column listings.
pub mod ddl;
/// Quoted and schema-qualified SQL name helpers.
pub mod names;
