//! Type descriptors: the cached, validated view of a destination type.

mod cache;
pub use cache::{clear_cache, describe, describe_nested};

mod descriptor;
pub use descriptor::{FieldDescriptor, FieldTy, TypeDescriptor};

mod name;
pub use name::snake_case;

mod shape;
pub use shape::{FieldKind, FieldShape, Nested, Shape};
