mod builder;
mod connect;

pub use builder::Builder;
pub use connect::connect;

use crate::{engine, Destination, Materializer, Target};

use weft_core::{schema, Connection, Error, Record, Result, Rows, Value};

use std::sync::{Mutex, PoisonError};

/// A database handle that maps query results onto records.
///
/// Statements are passed to the connection unmodified. Calls are serialized
/// on the one connection the handle owns.
#[derive(Debug)]
pub struct Db {
    connection: Mutex<Box<dyn Connection>>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Connects to the database at `url` without registering any records.
    pub fn connect(url: &str) -> Result<Db> {
        Db::builder().connect(url)
    }

    /// Runs a statement that returns no rows.
    pub fn execute(&self, sql: &str, params: &[Value]) -> Result<u64> {
        let count = self.connection().execute(sql, params)?;
        tracing::debug!(sql, count, "executed statement");
        Ok(count)
    }

    /// Runs a query expected to return a row and maps the first one onto a
    /// new `R`.
    pub fn get<R: Record + Default>(&self, sql: &str, params: &[Value]) -> Result<R> {
        let mut record = R::default();
        self.first_row(&mut record, sql, params)?;
        Ok(record)
    }

    /// Maps the first row onto `dest`, a single record.
    ///
    /// Fails with a record-not-found error when the query returns no rows.
    pub fn query_row(&self, dest: &mut dyn Destination, sql: &str, params: &[Value]) -> Result<()> {
        let target = dest.target();
        let found = target.kind();
        let Target::One(record) = target else {
            return Err(not_mappable("query_row", "a single record", found));
        };

        self.first_row(record, sql, params)
    }

    /// Maps rows onto `dest` by column name.
    ///
    /// A collection receives one new element per row. A single record
    /// receives the first row, and is left untouched when there is none.
    pub fn query(&self, dest: &mut dyn Destination, sql: &str, params: &[Value]) -> Result<usize> {
        match dest.target() {
            Target::One(record) => self.scan_first(record, sql, params),
            Target::Many(list) => {
                let element = schema::describe_nested(list.element())?;
                list.allocate();

                self.rows(sql, params, &mut |rows: &mut dyn Rows| {
                    let columns = rows.columns().to_vec();
                    let mut count = 0;

                    while rows.next()? {
                        let mut targets =
                            engine::scan_targets(&element, list.push_default(), &columns)?;
                        rows.scan(&mut targets)?;
                        count += 1;
                    }

                    Ok(count)
                })
            }
        }
    }

    /// Weaves the rows of a join query into `dest`, a collection whose
    /// element type nests one level per trailing collection.
    ///
    /// Returns the number of rows read. On error `dest` may hold a partial
    /// tree.
    pub fn query_tree(
        &self,
        dest: &mut dyn Destination,
        sql: &str,
        params: &[Value],
    ) -> Result<usize> {
        let target = dest.target();
        let found = target.kind();
        let Target::Many(list) = target else {
            return Err(not_mappable("query_tree", "a collection of records", found));
        };

        // Shape errors surface before the statement runs
        let element = schema::describe_nested(list.element())?;
        engine::flatten(&element)?;

        self.rows(sql, params, &mut |rows: &mut dyn Rows| {
            Materializer::materialize(rows, &mut *list)
        })
    }

    fn first_row(&self, record: &mut dyn Record, sql: &str, params: &[Value]) -> Result<()> {
        if self.scan_first(record, sql, params)? == 0 {
            return Err(Error::record_not_found(format!(
                "query returned no rows; sql={sql}"
            )));
        }

        Ok(())
    }

    /// Scans the first row, if any, onto `record`. Remaining rows are not read.
    fn scan_first(&self, record: &mut dyn Record, sql: &str, params: &[Value]) -> Result<usize> {
        schema::describe_nested(record.nested())?;

        self.rows(sql, params, &mut |rows: &mut dyn Rows| {
            if !rows.next()? {
                return Ok(0);
            }
            engine::scan_row(rows, &mut *record)?;
            Ok(1)
        })
    }

    fn rows(
        &self,
        sql: &str,
        params: &[Value],
        f: &mut dyn FnMut(&mut dyn Rows) -> Result<usize>,
    ) -> Result<usize> {
        let mut count = 0;

        self.connection().query(sql, params, &mut |rows: &mut dyn Rows| {
            count = f(rows)?;
            Ok(())
        })?;

        tracing::debug!(sql, rows = count, "mapped query");
        Ok(count)
    }

    fn connection(&self) -> std::sync::MutexGuard<'_, Box<dyn Connection>> {
        self.connection
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

fn not_mappable(operation: &str, expected: &str, found: &str) -> Error {
    Error::invalid_shape(format!(
        "not a mappable shape: `{operation}` needs {expected}, found {found}"
    ))
}
