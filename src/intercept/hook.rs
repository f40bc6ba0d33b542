use crate::connection::{Error, Response};
use http::Request as HttpRequest;

/// A pair of transforms every exchange of an intercepted client passes through.
///
/// `resolved` receives replies with a status below 400, `rejected` receives
/// everything else, including transport failures that produced no reply.
/// Implementations must hand the value back for the next hook and the caller.
pub trait ResponseHook {
    fn resolved(&self, request: &HttpRequest<Vec<u8>>, response: Response) -> Response;

    fn rejected(&self, request: &HttpRequest<Vec<u8>>, error: Error) -> Error;
}
