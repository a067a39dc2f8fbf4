//! Core types shared by the weft mapper, its derive macro, and its drivers.

pub mod driver;
pub use driver::{BufferedRows, Connection, Rows};

mod error;
pub use error::{Error, IntoError};

mod nullable;
pub use nullable::Nullable;

mod primitive;
pub use primitive::{Primitive, Scan};

pub mod record;
pub use record::{BoxedRecord, FieldMut, FieldRef, FieldType, List, Record};

pub mod schema;
pub use schema::{Shape, TypeDescriptor};

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;

/// A Result type alias that uses Weft's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
