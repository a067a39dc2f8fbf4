use weft_core::{
    schema::{FieldTy, TypeDescriptor},
    Error, Nullable, Result,
};

use std::{ops::Range, sync::Arc};

/// Scan targets for a whole joined row, plus where each nesting level lives
/// inside them.
#[derive(Debug)]
pub struct Layout {
    /// One nullable target per scalar leaf, depth first across every level
    pub targets: Vec<Nullable>,

    /// Nesting levels, outermost first
    pub levels: Vec<Level>,
}

#[derive(Debug)]
pub struct Level {
    /// Element type of the level's collection
    pub descriptor: Arc<TypeDescriptor>,

    /// Index of the level's identity target. The identity is the level's
    /// first scalar leaf, so this is also where its targets start.
    pub id_index: usize,
}

impl Layout {
    /// Targets belonging to level `depth`.
    pub fn range(&self, depth: usize) -> Range<usize> {
        let start = self.levels[depth].id_index;
        let end = self
            .levels
            .get(depth + 1)
            .map_or(self.targets.len(), |next| next.id_index);
        start..end
    }
}

/// Flattens a join destination whose root collection holds `element`.
///
/// Nested records, including pointer fields, are expanded inline. Only the
/// trailing collection of a type opens the next level; any other collection
/// is left out.
pub fn flatten(element: &Arc<TypeDescriptor>) -> Result<Layout> {
    let mut layout = Layout {
        targets: vec![],
        levels: vec![],
    };

    let mut next = Some(element);

    while let Some(descriptor) = next {
        let id_index = layout.targets.len();
        push_leaves(descriptor, &mut layout.targets);

        if layout.targets.len() == id_index {
            return Err(Error::invalid_shape(format!(
                "`{}` has no scalar field to identify rows by",
                descriptor.name
            )));
        }

        layout.levels.push(Level {
            descriptor: descriptor.clone(),
            id_index,
        });

        next = descriptor.trailing_list();
    }

    Ok(layout)
}

fn push_leaves(descriptor: &TypeDescriptor, targets: &mut Vec<Nullable>) {
    for field in &descriptor.fields {
        match &field.ty {
            FieldTy::Primitive(ty) => targets.push(Nullable::for_type(*ty)),
            FieldTy::Embedded(nested) | FieldTy::Boxed(nested) => push_leaves(nested, targets),
            FieldTy::List(_) => {}
        }
    }
}
