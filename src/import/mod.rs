//! Import functionality
//!
//! Turns vendor column metadata into the normalized model:
//! - Type descriptors (`varchar(255)`, `enum('a','b')`, ...) via [`classify`]

pub mod column_type;

pub use column_type::{ClassifiedType, UnsupportedTypeError, classify, parse_enum_values};
