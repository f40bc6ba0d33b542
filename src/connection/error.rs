use crate::connection::Response;
use std::fmt;

/// Failure of a single http exchange.
///
/// `Status` carries the response that was received despite the failure, the
/// other variants mean nothing came back.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    InvalidRequest(String),
    Connection(String),
    Status(Response),
}

impl Error {
    pub fn response(&self) -> Option<&Response> {
        match self {
            Error::Status(response) => Some(response),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            Error::Connection(msg) => write!(f, "Failed to send request: {}", msg),
            Error::Status(response) => write!(
                f,
                "Request to {} failed with status code {}",
                response.url,
                response.status.as_u16()
            ),
        }
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Error::InvalidRequest(err.to_string())
        } else {
            Error::Connection(err.to_string())
        }
    }
}
