//! Field access for composite destination types.
//!
//! Rust has no runtime reflection, so every destination type describes itself
//! through [`Record`], normally generated by `#[derive(Record)]`. The mapper
//! only ever touches a record through this trait: it reads the static
//! [`Shape`] once to build a [`crate::TypeDescriptor`], then borrows all fields
//! at once with [`Record::fields_mut`] to bind scan targets.

use crate::{
    schema::{FieldKind, Nested, Shape},
    Primitive, Result, Scan,
};

/// A composite (struct-like) value that rows can be mapped onto.
///
/// Field order in [`Record::shape`], [`Record::fields`], and
/// [`Record::fields_mut`] must agree: it is the declaration order.
pub trait Record: 'static {
    /// The static description of this type's fields.
    fn shape() -> Shape
    where
        Self: Sized;

    /// Returns a handle to this value's type, usable through `dyn Record`.
    fn nested(&self) -> Nested;

    /// Borrows every field, in declaration order.
    fn fields(&self) -> Vec<FieldRef<'_>>;

    /// Mutably borrows every field, in declaration order.
    fn fields_mut(&mut self) -> Vec<FieldMut<'_>>;
}

/// A shared borrow of one field.
pub enum FieldRef<'a> {
    Primitive(&'a dyn Scan),
    Embedded(&'a dyn Record),
    Boxed(Option<&'a dyn Record>),
    List(&'a dyn List),
}

/// An exclusive borrow of one field.
pub enum FieldMut<'a> {
    Primitive(&'a mut dyn Scan),
    Embedded(&'a mut dyn Record),
    Boxed(&'a mut dyn BoxedRecord),
    List(&'a mut dyn List),
}

/// A nested composite held behind an optional exclusive pointer
/// (`Option<Box<R>>`). It is allocated only when a row has data for it.
pub trait BoxedRecord {
    fn record(&self) -> Option<&dyn Record>;

    /// Returns the nested value, allocating a default one first if unset.
    fn record_or_insert(&mut self) -> &mut dyn Record;

    /// Builds a fresh default value, passes it to `f`, and keeps it only if
    /// `f` returns `true`.
    fn fill(&mut self, f: &mut dyn FnMut(&mut dyn Record) -> Result<bool>) -> Result<()>;
}

/// A collection of composite values (`Vec<R>` or `Option<Vec<R>>`).
///
/// When it is the last field of its type it holds that entity's children in
/// a join query.
pub trait List {
    /// The element type.
    fn element(&self) -> Nested;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `false` only for an unset `Option<Vec<R>>`.
    fn is_allocated(&self) -> bool;

    /// Makes sure the collection exists, leaving existing elements alone.
    fn allocate(&mut self);

    fn get(&self, index: usize) -> Option<&dyn Record>;

    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Record>;

    /// Appends a default element and returns it.
    fn push_default(&mut self) -> &mut dyn Record;
}

/// Maps a Rust field type onto a [`FieldKind`].
///
/// Implemented for the supported scalars (and `Option` of each), for
/// `Option<Box<R>>`, `Vec<R>`, `Option<Vec<R>>` (where `R` may itself be a
/// `Box`), and by `#[derive(Record)]`
/// for the deriving type itself so it can be embedded in other records.
pub trait FieldType {
    fn kind() -> FieldKind
    where
        Self: Sized;

    fn field_ref(&self) -> FieldRef<'_>;

    fn field_mut(&mut self) -> FieldMut<'_>;
}

macro_rules! impl_primitive_field {
    ( $($t:ty),+ ) => {
        $(
            impl FieldType for $t {
                fn kind() -> FieldKind {
                    FieldKind::Primitive(<$t as Primitive>::TYPE)
                }

                fn field_ref(&self) -> FieldRef<'_> {
                    FieldRef::Primitive(self)
                }

                fn field_mut(&mut self) -> FieldMut<'_> {
                    FieldMut::Primitive(self)
                }
            }

            impl FieldType for Option<$t> {
                fn kind() -> FieldKind {
                    FieldKind::Primitive(<$t as Primitive>::TYPE)
                }

                fn field_ref(&self) -> FieldRef<'_> {
                    FieldRef::Primitive(self)
                }

                fn field_mut(&mut self) -> FieldMut<'_> {
                    FieldMut::Primitive(self)
                }
            }
        )+
    };
}

impl_primitive_field!(
    bool,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    u64,
    f32,
    f64,
    String,
    jiff::Timestamp
);

/// A boxed record maps exactly like its pointee, so collections may hold
/// their elements by pointer (`Vec<Box<R>>`).
impl<T: Record> Record for Box<T> {
    fn shape() -> Shape {
        T::shape()
    }

    fn nested(&self) -> Nested {
        (**self).nested()
    }

    fn fields(&self) -> Vec<FieldRef<'_>> {
        (**self).fields()
    }

    fn fields_mut(&mut self) -> Vec<FieldMut<'_>> {
        (**self).fields_mut()
    }
}

impl<T: Record + Default> BoxedRecord for Option<Box<T>> {
    fn record(&self) -> Option<&dyn Record> {
        self.as_deref().map(|record| record as &dyn Record)
    }

    fn record_or_insert(&mut self) -> &mut dyn Record {
        &mut **self.get_or_insert_with(Box::default)
    }

    fn fill(&mut self, f: &mut dyn FnMut(&mut dyn Record) -> Result<bool>) -> Result<()> {
        let mut record = Box::<T>::default();
        if f(&mut *record)? {
            *self = Some(record);
        }
        Ok(())
    }
}

impl<T: Record + Default> FieldType for Option<Box<T>> {
    fn kind() -> FieldKind {
        FieldKind::Boxed(Nested::of::<T>())
    }

    fn field_ref(&self) -> FieldRef<'_> {
        FieldRef::Boxed(BoxedRecord::record(self))
    }

    fn field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Boxed(self)
    }
}

impl<T: Record + Default> List for Vec<T> {
    fn element(&self) -> Nested {
        Nested::of::<T>()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn is_allocated(&self) -> bool {
        true
    }

    fn allocate(&mut self) {}

    fn get(&self, index: usize) -> Option<&dyn Record> {
        <[T]>::get(self, index).map(|record| record as &dyn Record)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Record> {
        <[T]>::get_mut(self, index).map(|record| record as &mut dyn Record)
    }

    fn push_default(&mut self) -> &mut dyn Record {
        self.push(T::default());
        let last = Vec::len(self) - 1;
        &mut self[last]
    }
}

impl<T: Record + Default> FieldType for Vec<T> {
    fn kind() -> FieldKind {
        FieldKind::List(Nested::of::<T>())
    }

    fn field_ref(&self) -> FieldRef<'_> {
        FieldRef::List(self)
    }

    fn field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::List(self)
    }
}

impl<T: Record + Default> List for Option<Vec<T>> {
    fn element(&self) -> Nested {
        Nested::of::<T>()
    }

    fn len(&self) -> usize {
        self.as_ref().map_or(0, Vec::len)
    }

    fn is_allocated(&self) -> bool {
        self.is_some()
    }

    fn allocate(&mut self) {
        self.get_or_insert_with(Vec::new);
    }

    fn get(&self, index: usize) -> Option<&dyn Record> {
        <[T]>::get(self.as_ref()?, index).map(|record| record as &dyn Record)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Record> {
        <[T]>::get_mut(self.as_mut()?, index).map(|record| record as &mut dyn Record)
    }

    fn push_default(&mut self) -> &mut dyn Record {
        let items = self.get_or_insert_with(Vec::new);
        items.push(T::default());
        let last = items.len() - 1;
        &mut items[last]
    }
}

impl<T: Record + Default> FieldType for Option<Vec<T>> {
    fn kind() -> FieldKind {
        FieldKind::List(Nested::of::<T>())
    }

    fn field_ref(&self) -> FieldRef<'_> {
        FieldRef::List(self)
    }

    fn field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::List(self)
    }
}
