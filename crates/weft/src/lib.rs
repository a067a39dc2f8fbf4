//! Maps rows from hand-written SQL onto Rust values.
//!
//! Single rows are scanned onto a record by matching column names against
//! field names. Joined rows that interleave parent and child data are woven
//! back into a nested tree in one pass.

extern crate self as weft;

pub mod db;
pub use db::Db;

mod destination;
pub use destination::{Destination, Target};

mod engine;
pub use engine::{copy_level, flatten, scan_row, scan_targets, Layout, Level, Materializer};

pub use weft_core::{
    bail, driver, err,
    schema::{self, clear_cache, describe},
    BufferedRows, Connection, Error, Nullable, Record, Result, Rows, Scan, Type, TypeDescriptor,
    Value,
};

pub use weft_macros::Record;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{Destination, Target};
    pub use std::{option::Option, vec::Vec};
    pub use weft_core::{
        schema::{FieldKind, FieldShape, Nested, Shape},
        FieldMut, FieldRef, FieldType, Record,
    };
}
