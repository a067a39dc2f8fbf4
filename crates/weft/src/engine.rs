//! The row mapping engine.
//!
//! The flat path binds one row onto one record ([`scan_row`]). The join path
//! flattens a nested destination into nullable scan targets once
//! ([`flatten`]) and then weaves every row into the tree
//! ([`Materializer`]), copying each level's values with [`copy_level`].

mod copy;
pub use copy::copy_level;

mod flat;
pub use flat::{scan_row, scan_targets};

mod flatten;
pub use flatten::{flatten, Layout, Level};

mod identity;
use identity::IdentityKey;

mod materialize;
pub use materialize::Materializer;

#[cfg(test)]
pub(crate) mod fixtures;
