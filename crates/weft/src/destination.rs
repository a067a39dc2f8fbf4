use weft_core::{List, Record};

/// Something rows can be mapped into.
///
/// Implemented by `#[derive(Record)]` for every record, and for `Vec<R>` and
/// `Option<Vec<R>>` of records.
pub trait Destination {
    fn target(&mut self) -> Target<'_>;
}

/// The two destination forms the mapper understands.
pub enum Target<'a> {
    /// A single record, populated in place.
    One(&'a mut dyn Record),

    /// A collection of records, extended with one element per row (flat
    /// path) or per distinct root identity (join path).
    Many(&'a mut dyn List),
}

impl Target<'_> {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Target::One(_) => "a single record",
            Target::Many(_) => "a collection of records",
        }
    }
}

impl<T: Record + Default> Destination for Vec<T> {
    fn target(&mut self) -> Target<'_> {
        Target::Many(self)
    }
}

impl<T: Record + Default> Destination for Option<Vec<T>> {
    fn target(&mut self) -> Target<'_> {
        Target::Many(self)
    }
}
