use super::Rows;
use crate::{bail, Result, Scan, Value};

use std::collections::VecDeque;

/// A [`Rows`] cursor over values already in memory.
///
/// Useful for results fetched through another channel and for tests.
#[derive(Debug, Default, Clone)]
pub struct BufferedRows {
    columns: Vec<String>,
    pending: VecDeque<Vec<Value>>,
    current: Option<Vec<Value>>,
}

impl BufferedRows {
    pub fn new<I, S>(columns: I) -> BufferedRows
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        BufferedRows {
            columns: columns.into_iter().map(Into::into).collect(),
            pending: VecDeque::new(),
            current: None,
        }
    }

    /// Appends a row. Panics if its width differs from the column count.
    #[track_caller]
    pub fn push(&mut self, row: impl IntoIterator<Item = Value>) -> &mut Self {
        let row: Vec<_> = row.into_iter().collect();
        assert_eq!(
            row.len(),
            self.columns.len(),
            "row width must match the column count"
        );
        self.pending.push_back(row);
        self
    }

    pub fn with_row(mut self, row: impl IntoIterator<Item = Value>) -> Self {
        self.push(row);
        self
    }
}

impl Rows for BufferedRows {
    fn columns(&self) -> &[String] {
        &self.columns
    }

    fn next(&mut self) -> Result<bool> {
        self.current = self.pending.pop_front();
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

        for ((target, value), column) in dest.iter_mut().zip(row).zip(&self.columns) {
            target
                .scan(value.clone())
                .map_err(|err| err.context(crate::err!("scanning column `{column}`")))?;
        }

        Ok(())
    }
}
