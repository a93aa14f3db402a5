use std::fmt;

/// Coercion rule applied when a field crosses the SQL boundary.
///
/// Integers, doubles and booleans travel natively. Timestamps and decimals
/// travel as canonical text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// 32-bit integer, read without a null check.
    Int32,

    /// 32-bit integer that may be null.
    Int32Nullable,

    /// 64-bit float, read without a null check.
    Float64,

    /// 64-bit float that may be null.
    Float64Nullable,

    /// Variable-length string.
    Text,

    /// Boolean bound natively, read back as `integer > 0`.
    BoolAsInt,

    /// Civil date-time stored as `yyyy-MM-dd HH:mm:ss` text.
    Timestamp,

    /// Arbitrary-precision decimal stored as its exact string form.
    DecimalText,
}

impl ValueKind {
    /// The kind used for an optional field of this kind.
    ///
    /// Integers and floats have dedicated nullable kinds. Every other kind
    /// already distinguishes null on its own, or, for `BoolAsInt`, never does.
    pub const fn nullable(self) -> ValueKind {
        match self {
            ValueKind::Int32 => ValueKind::Int32Nullable,
            ValueKind::Float64 => ValueKind::Float64Nullable,
            kind => kind,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
