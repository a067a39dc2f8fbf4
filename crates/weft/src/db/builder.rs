use super::Db;
use crate::engine;

use weft_core::{
    schema::{self, Nested},
    Connection, Record, Result,
};

use std::sync::Mutex;

/// Configures a [`Db`].
#[derive(Debug, Default)]
pub struct Builder {
    /// Records to validate up front
    records: Vec<Registration>,
}

#[derive(Debug)]
struct Registration {
    nested: Nested,

    /// Also validate the record as a join destination
    tree: bool,
}

impl Builder {
    /// Registers a record used with the flat operations, so a bad shape
    /// fails [`Builder::build`] instead of the first query.
    pub fn register<R: Record>(&mut self) -> &mut Self {
        self.records.push(Registration {
            nested: Nested::of::<R>(),
            tree: false,
        });
        self
    }

    /// Registers the root element type of a join destination. Its nesting
    /// levels and identity fields are validated as well.
    pub fn register_tree<R: Record>(&mut self) -> &mut Self {
        self.records.push(Registration {
            nested: Nested::of::<R>(),
            tree: true,
        });
        self
    }

    pub fn connect(&mut self, url: &str) -> Result<Db> {
        self.build_boxed(super::connect(url)?)
    }

    pub fn build(&mut self, connection: impl Connection + 'static) -> Result<Db> {
        self.build_boxed(Box::new(connection))
    }

    pub fn build_boxed(&mut self, connection: Box<dyn Connection>) -> Result<Db> {
        for registration in &self.records {
            let descriptor = schema::describe_nested(registration.nested)?;

            if registration.tree {
                let layout = engine::flatten(&descriptor)?;
                tracing::debug!(
                    ty = descriptor.name,
                    levels = layout.levels.len(),
                    "registered join destination"
                );
            } else {
                tracing::debug!(ty = descriptor.name, "registered record");
            }
        }

        Ok(Db {
            connection: Mutex::new(connection),
        })
    }
}
