//! Models module
//!
//! Normalized table and column records shared by every schema source and the
//! JSON Schema exporter.

pub mod column;
pub mod enums;
pub mod table;

pub use column::Column;
pub use enums::ColumnType;
pub use table::Table;
