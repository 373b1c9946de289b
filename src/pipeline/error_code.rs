//! Stable, machine-readable codes for spec diagnostics.

use std::fmt;

use serde::Serialize;

/// Diagnostic code attached to every [`super::errors::SpecError`].
///
/// Codes serialize as `snake_case` and are part of the JSON contract; add
/// new variants rather than renaming existing ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A field holds a value outside its domain
    InvalidValue,
    /// The spec's `v` is not understood
    UnsupportedVersion,
    /// A field is not part of the schema
    UnknownField,
    /// Catch-all for custom rules
    ValidationFailed,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidValue => "invalid_value",
            Self::UnsupportedVersion => "unsupported_version",
            Self::UnknownField => "unknown_field",
            Self::ValidationFailed => "validation_failed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
