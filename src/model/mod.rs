//! In-memory table model: columns, metadata values and column references

mod column_ref;
mod schema;
mod table;
mod value;

pub use column_ref::ColumnRef;
pub use schema::Column;
pub use table::Table;
pub use value::MetaValue;
