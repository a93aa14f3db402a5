use super::Error;

/// Error when an entity's mapping metadata is missing or inconsistent.
///
/// This occurs when:
/// - A type declares no table name, or a field without a column name
/// - Two fields map to the same field name
/// - The identity field does not map to the `id` column
/// - An entity is asked for a field it does not declare
/// - A result set does not contain a column the entity maps
#[derive(Debug)]
pub(super) struct InvalidMetadata {
    message: Box<str>,
}

impl std::error::Error for InvalidMetadata {}

impl core::fmt::Display for InvalidMetadata {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid metadata: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid metadata error.
    pub fn invalid_metadata(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidMetadata(InvalidMetadata {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if the root cause of this error is invalid metadata.
    pub fn is_invalid_metadata(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::InvalidMetadata(_))
    }
}
