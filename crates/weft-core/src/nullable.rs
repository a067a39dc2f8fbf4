use crate::{Primitive, Result, Scan, Type, Value};

/// A typed, nullable scan target used by the join path.
///
/// Outer joins pad missing children with `NULL`; scanning into a `Nullable`
/// first lets the materializer see that padding before anything is written
/// into the destination tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Nullable {
    Bool(Option<bool>),
    Int(Option<i64>),
    Uint(Option<u64>),
    Float(Option<f64>),
    String(Option<String>),
    Timestamp(Option<jiff::Timestamp>),
}

impl Nullable {
    /// Returns an empty wrapper suited to a field of type `ty`.
    pub fn for_type(ty: Type) -> Nullable {
        match ty {
            Type::Bool => Nullable::Bool(None),
            Type::I8 | Type::I16 | Type::I32 | Type::I64 => Nullable::Int(None),
            Type::U8 | Type::U16 | Type::U32 | Type::U64 => Nullable::Uint(None),
            Type::F32 | Type::F64 => Nullable::Float(None),
            Type::String => Nullable::String(None),
            Type::Timestamp => Nullable::Timestamp(None),
        }
    }

    pub fn is_null(&self) -> bool {
        match self {
            Nullable::Bool(v) => v.is_none(),
            Nullable::Int(v) => v.is_none(),
            Nullable::Uint(v) => v.is_none(),
            Nullable::Float(v) => v.is_none(),
            Nullable::String(v) => v.is_none(),
            Nullable::Timestamp(v) => v.is_none(),
        }
    }

    /// Returns the payload, or `None` when the column was `NULL`.
    pub fn get(&self) -> Option<Value> {
        match self {
            Nullable::Bool(v) => v.map(Value::Bool),
            Nullable::Int(v) => v.map(Value::I64),
            Nullable::Uint(v) => v.map(Value::U64),
            Nullable::Float(v) => v.map(Value::F64),
            Nullable::String(v) => v.clone().map(Value::String),
            Nullable::Timestamp(v) => v.map(Value::Timestamp),
        }
    }

    /// Resets the wrapper to `NULL` ahead of the next row.
    pub fn clear(&mut self) {
        *self = Nullable::for_type(self.ty());
    }
}

impl Scan for Nullable {
    fn ty(&self) -> Type {
        match self {
            Nullable::Bool(_) => Type::Bool,
            Nullable::Int(_) => Type::I64,
            Nullable::Uint(_) => Type::U64,
            Nullable::Float(_) => Type::F64,
            Nullable::String(_) => Type::String,
            Nullable::Timestamp(_) => Type::Timestamp,
        }
    }

    fn nullable(&self) -> bool {
        true
    }

    fn scan(&mut self, value: Value) -> Result<()> {
        match self {
            Nullable::Bool(v) => *v = Primitive::load(value)?,
            Nullable::Int(v) => *v = Primitive::load(value)?,
            Nullable::Uint(v) => *v = Primitive::load(value)?,
            Nullable::Float(v) => *v = Primitive::load(value)?,
            Nullable::String(v) => *v = Primitive::load(value)?,
            Nullable::Timestamp(v) => *v = Primitive::load(value)?,
        }
        Ok(())
    }

    fn value(&self) -> Value {
        self.get().unwrap_or(Value::Null)
    }
}
