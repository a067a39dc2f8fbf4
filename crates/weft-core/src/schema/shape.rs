use crate::{Record, Type};

use std::any::TypeId;

/// The static description of a composite type, as written by
/// `#[derive(Record)]` or by hand.
#[derive(Debug, Clone)]
pub struct Shape {
    /// Type name, used in error messages.
    pub name: &'static str,

    /// Fields in declaration order.
    pub fields: Vec<FieldShape>,
}

#[derive(Debug, Clone)]
pub struct FieldShape {
    /// Declared field name
    pub name: &'static str,

    /// Explicit column name from `#[column("...")]`
    pub column: Option<&'static str>,

    pub kind: FieldKind,
}

#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// A scalar stored in one column
    Primitive(Type),

    /// A nested composite held by value
    Embedded(Nested),

    /// A nested composite held by `Option<Box<_>>`
    Boxed(Nested),

    /// A collection of composites
    List(Nested),
}

/// A lazy reference to another record type.
///
/// The nested shape is produced on demand, which lets a type mention itself
/// without the description recursing forever. The descriptor builder then
/// rejects the cycle.
#[derive(Clone, Copy)]
pub struct Nested {
    pub type_id: TypeId,
    pub shape: fn() -> Shape,
}

impl Nested {
    pub fn of<T: Record>() -> Nested {
        Nested {
            type_id: TypeId::of::<T>(),
            shape: T::shape,
        }
    }
}

impl core::fmt::Debug for Nested {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_tuple("Nested").field(&(self.shape)().name).finish()
    }
}
