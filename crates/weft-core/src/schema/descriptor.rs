use super::{cache, snake_case, FieldKind, Nested};
use crate::{Error, Result, Type};

use std::{any::TypeId, sync::Arc};

/// A validated description of one composite type.
///
/// Built once per type and shared through the process-wide cache. A
/// descriptor never references itself, directly or transitively.
#[derive(Debug)]
pub struct TypeDescriptor {
    pub name: &'static str,

    pub type_id: TypeId,

    /// Fields in declaration order
    pub fields: Vec<FieldDescriptor>,
}

#[derive(Debug)]
pub struct FieldDescriptor {
    /// Declared field name
    pub name: &'static str,

    /// Column the field binds to: the explicit override, or `snake_name`
    pub wire_name: String,

    /// Snake-case derivation of the declared name
    pub snake_name: String,

    pub ty: FieldTy,
}

#[derive(Debug)]
pub enum FieldTy {
    Primitive(Type),
    Embedded(Arc<TypeDescriptor>),
    Boxed(Arc<TypeDescriptor>),
    List(Arc<TypeDescriptor>),
}

impl TypeDescriptor {
    /// Returns the element descriptor of the trailing collection field, if
    /// the last field is a collection.
    pub fn trailing_list(&self) -> Option<&Arc<TypeDescriptor>> {
        match self.fields.last().map(|field| &field.ty) {
            Some(FieldTy::List(element)) => Some(element),
            _ => None,
        }
    }

    /// Returns `true` if some scalar leaf reachable without crossing a
    /// collection accepts `column`.
    pub fn accepts(&self, column: &str) -> bool {
        self.fields.iter().any(|field| match &field.ty {
            FieldTy::Primitive(_) => field.matches(column),
            FieldTy::Embedded(nested) | FieldTy::Boxed(nested) => nested.accepts(column),
            FieldTy::List(_) => false,
        })
    }

    /// Number of scalar leaves reachable without crossing a collection.
    pub fn leaf_count(&self) -> usize {
        self.fields
            .iter()
            .map(|field| match &field.ty {
                FieldTy::Primitive(_) => 1,
                FieldTy::Embedded(nested) | FieldTy::Boxed(nested) => nested.leaf_count(),
                FieldTy::List(_) => 0,
            })
            .sum()
    }
}

impl FieldDescriptor {
    /// Returns `true` if `column` binds to this field, by wire name or by the
    /// snake-case derived name.
    pub fn matches(&self, column: &str) -> bool {
        self.wire_name == column || self.snake_name == column
    }

    /// The descriptor of a nested composite held by value or by pointer.
    pub fn nested(&self) -> Option<&Arc<TypeDescriptor>> {
        match &self.ty {
            FieldTy::Embedded(nested) | FieldTy::Boxed(nested) => Some(nested),
            _ => None,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self.ty, FieldTy::List(_))
    }
}

/// Builds descriptors, tracking the types currently under construction so
/// cycles are reported instead of recursing.
#[derive(Debug, Default)]
pub(super) struct Builder {
    stack: Vec<(TypeId, &'static str)>,
}

impl Builder {
    pub(super) fn build(&mut self, nested: Nested) -> Result<Arc<TypeDescriptor>> {
        if let Some(descriptor) = cache::get(nested.type_id) {
            return Ok(descriptor);
        }

        let shape = (nested.shape)();

        if let Some(position) = self
            .stack
            .iter()
            .position(|(type_id, _)| *type_id == nested.type_id)
        {
            let path = self.stack[position..]
                .iter()
                .map(|(_, name)| *name)
                .chain(Some(shape.name))
                .collect::<Vec<_>>()
                .join(" -> ");

            return Err(Error::invalid_shape(format!(
                "`{}` is a recursive type ({path})",
                shape.name
            )));
        }

        if shape.fields.is_empty() {
            return Err(Error::invalid_shape(format!(
                "`{}` has no fields; nothing to map",
                shape.name
            )));
        }

        self.stack.push((nested.type_id, shape.name));

        let fields = shape
            .fields
            .iter()
            .map(|field| {
                let ty = match field.kind {
                    FieldKind::Primitive(ty) => FieldTy::Primitive(ty),
                    FieldKind::Embedded(nested) => FieldTy::Embedded(self.build(nested)?),
                    FieldKind::Boxed(nested) => FieldTy::Boxed(self.build(nested)?),
                    FieldKind::List(nested) => FieldTy::List(self.build(nested)?),
                };

                let snake_name = snake_case(field.name);
                let wire_name = match field.column {
                    Some(column) => column.to_string(),
                    None => snake_name.clone(),
                };

                Ok(FieldDescriptor {
                    name: field.name,
                    wire_name,
                    snake_name,
                    ty,
                })
            })
            .collect::<Result<Vec<_>>>();

        self.stack.pop();

        let descriptor = TypeDescriptor {
            name: shape.name,
            type_id: nested.type_id,
            fields: fields?,
        };

        tracing::trace!(
            ty = descriptor.name,
            fields = descriptor.fields.len(),
            "built type descriptor"
        );

        Ok(cache::insert(descriptor))
    }
}
