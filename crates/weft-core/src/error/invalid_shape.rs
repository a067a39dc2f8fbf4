use super::Error;

/// Error when a destination type cannot be mapped.
///
/// This occurs when:
/// - A single-record operation is handed a collection, or the other way around
/// - A composite type declares no fields
/// - A composite type references itself, directly or through other types
/// - A joinable type has no scalar field to act as its identity
///
/// These are detected before any row is read.
#[derive(Debug)]
pub(super) struct InvalidShape {
    message: Box<str>,
}

impl std::error::Error for InvalidShape {}

impl core::fmt::Display for InvalidShape {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid shape: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid shape error.
    pub fn invalid_shape(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidShape(InvalidShape {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid shape error.
    pub fn is_invalid_shape(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::InvalidShape(_)))
    }
}
