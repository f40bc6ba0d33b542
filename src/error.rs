use crate::connection;
use config::ConfigError;
use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// Settings file or environment could not be read
    Config(ConfigError),
    Io(std::io::Error),
    /// A replay line is not a known step
    Parse {
        line: usize,
        source: serde_json::Error,
    },
    Serialize(serde_json::Error),
    Connection(connection::Error),
    /// A test finished while no suite was open
    NoOpenSuite(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(err) => write!(f, "Failed to load settings: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Parse { line, source } => write!(f, "Invalid event on line {}: {}", line, source),
            Error::Serialize(err) => write!(f, "Failed to serialize report: {}", err),
            Error::Connection(err) => write!(f, "{}", err),
            Error::NoOpenSuite(test) => {
                write!(f, "Test '{}' finished outside of any suite", test)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Config(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Parse { source, .. } => Some(source),
            Error::Serialize(err) => Some(err),
            Error::Connection(err) => Some(err),
            Error::NoOpenSuite(_) => None,
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error::Config(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialize(err)
    }
}

impl From<connection::Error> for Error {
    fn from(err: connection::Error) -> Self {
        Error::Connection(err)
    }
}
