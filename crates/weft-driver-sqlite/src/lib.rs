mod value;
pub(crate) use value::Value;

use rusqlite::Connection as RusqliteConnection;
use std::path::{Path, PathBuf};
use url::Url;
use weft_core::{bail, Error, Result, Rows, Scan};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Parses a `sqlite:` connection URL. `sqlite::memory:` selects an
    /// in-memory database; anything else is a file path.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(Error::driver_operation_failed)?;

        if url.scheme() != "sqlite" {
            bail!("connection URL does not have a `sqlite` scheme; url={url_str}");
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }

    pub fn connect(&self) -> Result<Connection> {
        match self {
            Sqlite::File(path) => Connection::open(path),
            Sqlite::InMemory => Connection::in_memory(),
        }
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection =
            RusqliteConnection::open_in_memory().map_err(Error::driver_operation_failed)?;
        Ok(Self { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            RusqliteConnection::open(path).map_err(Error::driver_operation_failed)?;
        Ok(Self { connection })
    }
}

impl weft_core::Connection for Connection {
    fn query(
        &mut self,
        sql: &str,
        params: &[weft_core::Value],
        f: &mut dyn FnMut(&mut dyn Rows) -> Result<()>,
    ) -> Result<()> {
        let mut stmt = self
            .connection
            .prepare_cached(sql)
            .map_err(Error::driver_operation_failed)?;

        let columns = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();

        let params = params.iter().cloned().map(Value::from).collect::<Vec<_>>();

        let rows = stmt
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::driver_operation_failed)?;

        tracing::trace!(sql, columns = columns.len(), "opened sqlite cursor");

        let res = f(&mut Cursor {
            columns,
            rows,
            current: None,
        });
        res
    }

    fn execute(&mut self, sql: &str, params: &[weft_core::Value]) -> Result<u64> {
        let mut stmt = self
            .connection
            .prepare_cached(sql)
            .map_err(Error::driver_operation_failed)?;

        let params = params.iter().cloned().map(Value::from).collect::<Vec<_>>();

        let count = stmt
            .execute(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::driver_operation_failed)?;

        Ok(count as u64)
    }
}

/// Streams a statement's rows one at a time.
struct Cursor<'stmt> {
    columns: Vec<String>,
    rows: rusqlite::Rows<'stmt>,

    /// Storage values of the current row
    current: Option<Vec<rusqlite::types::Value>>,
}

impl Rows for Cursor<'_> {
    fn columns(&self) -> &[String] {
        &self.columns
    }

    fn next(&mut self) -> Result<bool> {
        let width = self.columns.len();

        self.current = match self.rows.next().map_err(Error::driver_operation_failed)? {
            Some(row) => Some(
                (0..width)
                    .map(|index| row.get(index))
                    .collect::<rusqlite::Result<Vec<_>>>()
                    .map_err(Error::driver_operation_failed)?,
            ),
            None => None,
        };

        Ok(self.current.is_some())
    }

    fn scan(&mut self, dest: &mut [&mut dyn Scan]) -> Result<()> {
        let Some(row) = &self.current else {
            bail!("scan called without a current row");
        };

        if dest.len() != row.len() {
            bail!(
                "expected {} destination arguments in scan, not {}",
                row.len(),
                dest.len()
            );
        }

        for ((target, stored), column) in dest.iter_mut().zip(row).zip(&self.columns) {
            Value::from_sql(stored, target.ty())
                .and_then(|value| target.scan(value.into_inner()))
                .map_err(|err| err.context(weft_core::err!("scanning column `{column}`")))?;
        }

        Ok(())
    }
}
