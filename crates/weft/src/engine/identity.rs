use weft_core::{
    schema::{FieldTy, TypeDescriptor},
    FieldRef, Record, Value,
};

/// A hashable form of an identity value.
///
/// Signed and unsigned integers compare by numeric value, so an identity read
/// back from a `u32` field matches the same id arriving as `I64`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum IdentityKey {
    Bool(bool),
    Int(i128),
    Float(u64),
    String(String),
    Timestamp(i64, i32),
}

impl IdentityKey {
    /// Returns `None` for `NULL`.
    pub(crate) fn new(value: Value) -> Option<IdentityKey> {
        Some(match value {
            Value::Null => return None,
            Value::Bool(v) => IdentityKey::Bool(v),
            Value::I64(v) => IdentityKey::Int(v.into()),
            Value::U64(v) => IdentityKey::Int(v.into()),
            Value::F64(v) => IdentityKey::Float(v.to_bits()),
            Value::String(v) => IdentityKey::String(v),
            Value::Timestamp(v) => IdentityKey::Timestamp(v.as_second(), v.subsec_nanosecond()),
        })
    }

    /// Reads the identity of an element already in the tree.
    pub(crate) fn of(descriptor: &TypeDescriptor, record: &dyn Record) -> Option<IdentityKey> {
        IdentityKey::new(first_leaf(descriptor, record)?)
    }
}

/// Value of the first scalar leaf, depth first. `None` when that leaf sits in
/// an unset pointer.
fn first_leaf(descriptor: &TypeDescriptor, record: &dyn Record) -> Option<Value> {
    for (field, slot) in descriptor.fields.iter().zip(record.fields()) {
        match (&field.ty, slot) {
            (FieldTy::Primitive(_), FieldRef::Primitive(scan)) => return Some(scan.value()),
            (FieldTy::Embedded(nested), FieldRef::Embedded(record)) if nested.leaf_count() > 0 => {
                return first_leaf(nested, record)
            }
            (FieldTy::Boxed(nested), FieldRef::Boxed(record)) if nested.leaf_count() > 0 => {
                return first_leaf(nested, record?)
            }
            _ => {}
        }
    }

    None
}
