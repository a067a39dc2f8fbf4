//! The executor contract.
//!
//! The mapper needs exactly three things from a query executor: advance to
//! the next row, name the columns, and scan the current row into a list of
//! addresses. Connection setup, statement caching, and cancellation belong to
//! the driver.

mod buffered;
pub use buffered::BufferedRows;

use crate::{Result, Scan, Value};

use std::fmt::Debug;

/// A database connection able to run hand-written SQL.
pub trait Connection: Debug + Send {
    /// Runs `sql` with positional `params` and hands the row cursor to `f`.
    ///
    /// The cursor borrows the connection and is only valid inside `f`.
    fn query(
        &mut self,
        sql: &str,
        params: &[Value],
        f: &mut dyn FnMut(&mut dyn Rows) -> Result<()>,
    ) -> Result<()>;

    /// Runs a statement that returns no rows, returning the number of rows
    /// changed.
    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<u64>;
}

/// A forward-only cursor over a query result.
pub trait Rows {
    /// Column names, in select order.
    fn columns(&self) -> &[String];

    /// Advances to the next row. Returns `false` once the result is exhausted.
    fn next(&mut self) -> Result<bool>;

    /// Scans the current row into `dest`, one target per column.
    ///
    /// Fails if `dest.len()` differs from the column count or if a value
    /// cannot be stored in its target.
    fn scan(&mut self, dest: &mut [&mut dyn Scan]) -> Result<()>;
}
