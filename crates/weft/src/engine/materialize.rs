use super::{copy_level, flatten, IdentityKey, Layout};

use weft_core::{
    schema::{self, TypeDescriptor},
    Error, FieldMut, List, Result, Rows, Scan,
};

use std::{collections::HashMap, sync::Arc};

/// Weaves joined rows into a tree of nested collections.
///
/// Each row carries one entity per level, outermost first. A level's entity
/// is matched against its siblings by identity: rows repeating a known
/// identity extend that element, new identities append a new element in
/// arrival order, and a `NULL` identity (outer join padding) ends the row's
/// contribution at that level.
///
/// A failed row may leave the tree partially extended; discard it.
#[derive(Debug)]
pub struct Materializer {
    layout: Layout,

    columns: Vec<String>,

    /// Identity lookup per collection, keyed by the positions of the
    /// collection's ancestors. Seeded lazily from elements already present.
    index: HashMap<Vec<usize>, HashMap<IdentityKey, usize>>,
}

impl Materializer {
    /// Prepares to materialize rows with the given columns into collections
    /// of `element`.
    pub fn new(element: &Arc<TypeDescriptor>, columns: Vec<String>) -> Result<Materializer> {
        Ok(Materializer {
            layout: flatten(element)?,
            columns,
            index: HashMap::new(),
        })
    }

    /// Materializes every remaining row of `rows` into `root`.
    pub fn materialize(rows: &mut dyn Rows, root: &mut dyn List) -> Result<usize> {
        let element = schema::describe_nested(root.element())?;
        let mut materializer = Materializer::new(&element, rows.columns().to_vec())?;
        let mut count = 0;

        root.allocate();

        while rows.next()? {
            materializer.push_row(rows, root)?;
            count += 1;
        }

        Ok(count)
    }

    /// Number of nesting levels, including the root collection's.
    pub fn depth(&self) -> usize {
        self.layout.levels.len()
    }

    /// Scans the cursor's current row and attaches it to `root`.
    pub fn push_row(&mut self, rows: &mut dyn Rows, root: &mut dyn List) -> Result<()> {
        for target in &mut self.layout.targets {
            target.clear();
        }

        let mut targets: Vec<&mut dyn Scan> = self
            .layout
            .targets
            .iter_mut()
            .map(|target| target as &mut dyn Scan)
            .collect();
        rows.scan(&mut targets)?;

        let mut path = vec![];
        self.attach(root, 0, &mut path)
    }

    fn attach(&mut self, list: &mut dyn List, depth: usize, path: &mut Vec<usize>) -> Result<()> {
        let Some(level) = self.layout.levels.get(depth) else {
            return Ok(());
        };

        let Some(identity) = self.layout.targets[level.id_index]
            .get()
            .and_then(IdentityKey::new)
        else {
            return Ok(());
        };

        list.allocate();

        let descriptor = &level.descriptor;
        let siblings = self
            .index
            .entry(path.clone())
            .or_insert_with(|| seed(descriptor, list));

        let position = match siblings.get(&identity) {
            Some(position) => *position,
            None => {
                let range = self.layout.range(depth);
                let element = list.push_default();
                copy_level(
                    descriptor,
                    element,
                    &self.columns[range.clone()],
                    &self.layout.targets[range],
                )?;

                let position = list.len() - 1;
                siblings.insert(identity, position);

                tracing::trace!(ty = descriptor.name, depth, position, "new tree node");
                position
            }
        };

        if depth + 1 == self.layout.levels.len() {
            return Ok(());
        }

        let name = descriptor.name;
        let element = list
            .get_mut(position)
            .ok_or_else(|| weft_core::err!("`{name}` element {position} went missing"))?;

        let Some(FieldMut::List(children)) = element
            .fields_mut()
            .into_iter()
            .rev()
            .find(|field| matches!(field, FieldMut::List(_)))
        else {
            return Err(Error::missing_collection(name));
        };

        path.push(position);
        let res = self.attach(children, depth + 1, path);
        path.pop();
        res
    }
}

fn seed(descriptor: &TypeDescriptor, list: &dyn List) -> HashMap<IdentityKey, usize> {
    (0..list.len())
        .filter_map(|position| {
            let key = IdentityKey::of(descriptor, list.get(position)?)?;
            Some((key, position))
        })
        .collect()
}
