use super::Error;
use crate::stmt::Value;

/// Error when a value cannot be coerced between its native and SQL form.
///
/// Raised for kind/value mismatches at bind time, integers that do not fit
/// the target width, and timestamp or decimal text that fails to parse.
#[derive(Debug)]
pub(super) struct Coercion {
    message: Box<str>,
}

impl std::error::Error for Coercion {}

impl core::fmt::Display for Coercion {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "coercion failed: {}", self.message)
    }
}

impl Error {
    /// Creates a coercion error.
    pub fn coercion(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Coercion(Coercion {
            message: message.into().into(),
        }))
    }

    /// Creates a coercion error for a value that cannot become `to_type`.
    pub fn type_conversion(value: &Value, to_type: &'static str) -> Error {
        Error::coercion(format!(
            "cannot convert {} to {}",
            value.type_name(),
            to_type
        ))
    }

    /// Returns `true` if the root cause of this error is a coercion failure.
    pub fn is_coercion(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::Coercion(_))
    }
}
