pub mod error;
pub mod http;

pub use self::error::Error;

use bytes::Bytes;
use ::http::{HeaderMap, Request as HttpRequest, StatusCode};

pub trait SendMessage<T, R> {
    fn send(&self, data: T) -> R;
}

/// Anything able to put an http request on the wire and hand back the reply.
pub trait Transport:
    for<'a> SendMessage<&'a HttpRequest<Vec<u8>>, Result<Response, Error>>
{
}

impl<T> Transport for T where
    T: for<'a> SendMessage<&'a HttpRequest<Vec<u8>>, Result<Response, Error>>
{
}

/// A fully received response.
///
/// `url` is the final location after redirects were followed, which is not
/// necessarily the uri of the request that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub url: String,
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl Response {
    pub fn new(url: impl Into<String>, status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            url: url.into(),
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Statuses at or above 400 reject the exchange.
    #[inline]
    pub fn is_rejection(&self) -> bool {
        self.status.is_client_error() || self.status.is_server_error()
    }
}
