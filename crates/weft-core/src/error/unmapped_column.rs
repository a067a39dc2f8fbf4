use super::Error;

/// Error when a selected column is not accepted by any field of the
/// destination.
#[derive(Debug)]
pub(super) struct UnmappedColumn {
    column: Box<str>,
}

impl std::error::Error for UnmappedColumn {}

impl core::fmt::Display for UnmappedColumn {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "column `{}` does not map to any field", self.column)
    }
}

impl Error {
    /// Creates an unmapped column error.
    pub fn unmapped_column(column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnmappedColumn(UnmappedColumn {
            column: column.into().into(),
        }))
    }

    /// Returns `true` if this error is an unmapped column error.
    pub fn is_unmapped_column(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::UnmappedColumn(_)))
    }
}
