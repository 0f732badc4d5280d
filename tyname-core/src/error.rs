use alloc::string::String;

/// The Error type for the tyname crate.
///
/// Rendering cannot fail; only parsing type names back into descriptors can.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The input does not follow the canonical type name grammar.
    Parse(String),
    /// A type was parsed but input remained after it.
    TrailingInput(String),
    /// A type without a base name.
    EmptyBaseName,
}

/// The Result type for the tyname crate.
pub type Result<T> = core::result::Result<T, Error>;

impl core::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Parse(e) => write!(f, "Type name parse error: {e}"),
            Error::TrailingInput(rest) => write!(f, "Unexpected input after type name: `{rest}`"),
            Error::EmptyBaseName => write!(f, "Type name has no base type"),
        }
    }
}
