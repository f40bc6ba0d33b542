use std::fmt;

/// Reasons a human readable duration could not be understood.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    Syntax(String),
    UnitNotSupported(String),
    Overflow(String),
}

impl ::std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Syntax(ref input) => {
                write!(f, "'{}' is not a duration, expected e.g. '250ms' or '10s'", input)
            }
            Error::UnitNotSupported(ref unit) => write!(f, "Unit '{}' not supported", unit),
            Error::Overflow(ref input) => write!(f, "Duration '{}' is too large", input),
        }
    }
}
