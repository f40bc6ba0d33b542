use crate::connection::{Error, Response};
use crate::follow::correlation::Correlation;
use crate::intercept::exchange::ExchangeRecord;
use crate::intercept::hook::ResponseHook;
use http::Request as HttpRequest;

/// Hook that files every exchange under the test active at that moment.
#[derive(Debug, Clone)]
pub struct Recorder {
    correlation: Correlation,
}

impl Recorder {
    pub fn new(correlation: Correlation) -> Self {
        Self { correlation }
    }
}

impl ResponseHook for Recorder {
    fn resolved(&self, request: &HttpRequest<Vec<u8>>, response: Response) -> Response {
        trace!("Intercepted response with code {}", response.status.as_u16());
        self.correlation
            .record(ExchangeRecord::completed(request, &response));
        response
    }

    fn rejected(&self, request: &HttpRequest<Vec<u8>>, error: Error) -> Error {
        match error.response() {
            Some(response) => trace!(
                "Intercepted response rejection with code {}",
                response.status.as_u16()
            ),
            None => trace!("Intercepted response rejection: {}", error),
        }
        self.correlation.record(ExchangeRecord::failed(request, &error));
        error
    }
}
