//! Data model for tabular export results

mod schema;
mod table;

pub use schema::Schema;
pub use table::{Row, Table};
