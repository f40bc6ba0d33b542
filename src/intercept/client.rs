use crate::connection::{Error, Response, SendMessage, Transport};
use crate::intercept::hook::ResponseHook;
use derivative::*;
use http::{HeaderMap, Method, Request as HttpRequest};
use std::rc::Rc;

#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
pub struct InterceptedClient<T> {
    #[derivative(Debug = "ignore")]
    transport: T,
    #[derivative(Debug = "ignore")]
    hooks: Vec<Rc<dyn ResponseHook>>,
}

impl<T> InterceptedClient<T>
where
    T: Transport,
{
    pub(crate) fn new(transport: T, hooks: Vec<Rc<dyn ResponseHook>>) -> Self {
        Self { transport, hooks }
    }

    #[inline]
    pub fn hook_count(&self) -> usize {
        self.hooks.len()
    }

    /// Sends `request` and passes the outcome through every hook.
    ///
    /// Statuses of 400 and above come back as [`Error::Status`] carrying the
    /// response. Errors reach the caller exactly as the hooks returned them.
    pub fn send(&self, request: &HttpRequest<Vec<u8>>) -> Result<Response, Error> {
        match self.transport.send(request) {
            Ok(response) if !response.is_rejection() => Ok(self
                .hooks
                .iter()
                .fold(response, |response, hook| hook.resolved(request, response))),
            Ok(response) => Err(self.reject(request, Error::Status(response))),
            Err(err) => Err(self.reject(request, err)),
        }
    }

    pub fn request(
        &self,
        method: Method,
        url: &str,
        headers: &HeaderMap,
        body: Vec<u8>,
    ) -> Result<Response, Error> {
        let mut builder = HttpRequest::builder().method(method).uri(url);
        for (name, value) in headers {
            builder = builder.header(name, value);
        }
        let request = builder
            .body(body)
            .map_err(|err| Error::InvalidRequest(err.to_string()))?;
        self.send(&request)
    }

    pub fn get(&self, url: &str) -> Result<Response, Error> {
        self.request(Method::GET, url, &HeaderMap::new(), Vec::new())
    }

    fn reject(&self, request: &HttpRequest<Vec<u8>>, error: Error) -> Error {
        self.hooks
            .iter()
            .fold(error, |error, hook| hook.rejected(request, error))
    }
}

impl<'a, T> SendMessage<&'a HttpRequest<Vec<u8>>, Result<Response, Error>> for InterceptedClient<T>
where
    T: Transport,
{
    fn send(&self, data: &'a HttpRequest<Vec<u8>>) -> Result<Response, Error> {
        InterceptedClient::send(self, data)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use http::StatusCode;
    use std::cell::RefCell;

    /// Transport answering every request with the same scripted outcome.
    pub(crate) struct Scripted(pub Result<Response, Error>);

    impl<'a> SendMessage<&'a HttpRequest<Vec<u8>>, Result<Response, Error>> for Scripted {
        fn send(&self, data: &'a HttpRequest<Vec<u8>>) -> Result<Response, Error> {
            self.0.clone().map(|mut response| {
                if response.url.is_empty() {
                    response.url = data.uri().to_string();
                }
                response
            })
        }
    }

    #[derive(Default)]
    struct Journal {
        calls: RefCell<Vec<String>>,
    }

    struct Named(&'static str, Rc<Journal>);

    impl ResponseHook for Named {
        fn resolved(&self, _request: &HttpRequest<Vec<u8>>, response: Response) -> Response {
            self.1.calls.borrow_mut().push(format!("{}:resolved", self.0));
            response
        }

        fn rejected(&self, _request: &HttpRequest<Vec<u8>>, error: Error) -> Error {
            self.1.calls.borrow_mut().push(format!("{}:rejected", self.0));
            error
        }
    }

    fn client(outcome: Result<Response, Error>, journal: &Rc<Journal>) -> InterceptedClient<Scripted> {
        let hooks: Vec<Rc<dyn ResponseHook>> = vec![
            Rc::new(Named("first", journal.clone())),
            Rc::new(Named("second", journal.clone())),
        ];
        InterceptedClient::new(Scripted(outcome), hooks)
    }

    #[test]
    fn test_success_runs_resolved_hooks_in_order() {
        let journal = Rc::new(Journal::default());
        let response = Response::new("", StatusCode::OK, "pong");
        let result = client(Ok(response), &journal).get("http://api.local/ping");

        assert_eq!(result.unwrap().body, "pong");
        assert_eq!(*journal.calls.borrow(), vec!["first:resolved", "second:resolved"]);
    }

    #[test]
    fn test_error_status_is_rejected_with_response() {
        let journal = Rc::new(Journal::default());
        let response = Response::new("", StatusCode::NOT_FOUND, "missing");
        let result = client(Ok(response), &journal).get("http://api.local/nothing");

        match result {
            Err(Error::Status(response)) => assert_eq!(response.status, StatusCode::NOT_FOUND),
            other => panic!("expected status rejection, got {:?}", other),
        }
        assert_eq!(*journal.calls.borrow(), vec!["first:rejected", "second:rejected"]);
    }

    #[test]
    fn test_transport_failure_reaches_caller_unchanged() {
        let journal = Rc::new(Journal::default());
        let failure = Error::Connection("connection refused".to_owned());
        let result = client(Err(failure.clone()), &journal).get("http://api.local/");

        assert_eq!(result, Err(failure));
        assert_eq!(journal.calls.borrow().len(), 2);
    }

    #[test]
    fn test_invalid_uri_skips_hooks() {
        let journal = Rc::new(Journal::default());
        let result = client(Ok(Response::new("", StatusCode::OK, "")), &journal).get("not a uri");

        assert!(matches!(result, Err(Error::InvalidRequest(_))));
        assert!(journal.calls.borrow().is_empty());
    }

    #[test]
    fn test_redirect_status_is_not_a_rejection() {
        let journal = Rc::new(Journal::default());
        let response = Response::new("", StatusCode::FOUND, "");
        assert!(client(Ok(response), &journal).get("http://api.local/").is_ok());
    }
}
