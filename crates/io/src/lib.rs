//! JSON export and import of field-position tables

mod error;
mod table;

pub use error::IoError;
pub use table::{
    PositionRecord, PositionTable, collect_table, from_json, read_table, to_json, write_table,
};
