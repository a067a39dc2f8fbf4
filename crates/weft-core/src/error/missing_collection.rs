use super::Error;

/// Error when the tree materializer needs to descend a level but the element
/// type has no trailing collection field to descend into.
#[derive(Debug)]
pub(super) struct MissingCollection {
    type_name: &'static str,
}

impl std::error::Error for MissingCollection {}

impl core::fmt::Display for MissingCollection {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "no slice found: `{}` has no trailing collection field for the next join level",
            self.type_name
        )
    }
}

impl Error {
    /// Creates a missing collection error for the named element type.
    pub fn missing_collection(type_name: &'static str) -> Error {
        Error::from(super::ErrorKind::MissingCollection(MissingCollection {
            type_name,
        }))
    }

    /// Returns `true` if this error is a missing collection error.
    pub fn is_missing_collection(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::MissingCollection(_)))
    }
}
