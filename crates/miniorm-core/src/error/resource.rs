use super::Error;

/// Error when a statement or cursor is used outside its valid state, such as
/// reading a column before the cursor is positioned on a row.
#[derive(Debug)]
pub(super) struct Resource {
    message: Box<str>,
}

impl std::error::Error for Resource {}

impl core::fmt::Display for Resource {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "resource misuse: {}", self.message)
    }
}

impl Error {
    /// Creates a resource error.
    pub fn resource(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Resource(Resource {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if the root cause of this error is a resource error.
    pub fn is_resource(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::Resource(_))
    }
}
