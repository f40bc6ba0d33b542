use crate::connection::{Error, Response};
use http::{HeaderMap, Request as HttpRequest};
use reqwest::Url;
use serde_derive::Serialize;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// One captured call: what was asked and, when anything came back, what was
/// answered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExchangeRecord {
    pub request: RequestRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<ResponseRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestRecord {
    pub headers: BTreeMap<String, String>,
    pub method: String,
    pub url: String,
    pub params: BTreeMap<String, String>,
    pub data: String,
    pub current_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseRecord {
    pub url: String,
    pub status_code: u16,
    pub redirected: bool,
    pub data: String,
}

impl ExchangeRecord {
    pub fn completed(request: &HttpRequest<Vec<u8>>, response: &Response) -> Self {
        Self {
            request: RequestRecord::capture(request, &response.url),
            response: Some(ResponseRecord::capture(request, response)),
        }
    }

    pub fn failed(request: &HttpRequest<Vec<u8>>, error: &Error) -> Self {
        match error.response() {
            Some(response) => Self::completed(request, response),
            None => Self {
                request: RequestRecord::capture(request, &normalized_url(request)),
                response: None,
            },
        }
    }

    #[inline]
    pub fn status_code(&self) -> Option<u16> {
        self.response.as_ref().map(|response| response.status_code)
    }
}

impl RequestRecord {
    fn capture(request: &HttpRequest<Vec<u8>>, current_url: &str) -> Self {
        let url = request.uri().to_string();
        let params: BTreeMap<String, String> = Url::parse(&url)
            .map(|parsed| parsed.query_pairs().into_owned().collect())
            .unwrap_or_default();
        Self {
            headers: header_map(request.headers()),
            method: request.method().to_string(),
            url,
            params,
            data: String::from_utf8_lossy(request.body()).into_owned(),
            current_url: current_url.to_owned(),
        }
    }
}

impl ResponseRecord {
    fn capture(request: &HttpRequest<Vec<u8>>, response: &Response) -> Self {
        Self {
            url: response.url.clone(),
            status_code: response.status.as_u16(),
            redirected: normalized_url(request) != response.url,
            data: String::from_utf8_lossy(&response.body).into_owned(),
        }
    }
}

fn normalized_url(request: &HttpRequest<Vec<u8>>) -> String {
    let raw = request.uri().to_string();
    Url::parse(&raw).map(String::from).unwrap_or(raw)
}

fn header_map(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut result: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in headers {
        let value = value.to_str().unwrap_or("<binary>");
        result
            .entry(name.as_str().to_owned())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(value);
            })
            .or_insert_with(|| value.to_owned());
    }
    result
}

/// Exchanges collected for one test.
///
/// Clones share the same buffer: the log handed to a finished test keeps
/// receiving whatever is recorded until another test starts.
#[derive(Debug, Clone, Default)]
pub struct RequestLog(Rc<RefCell<Vec<ExchangeRecord>>>);

impl RequestLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, exchange: ExchangeRecord) {
        self.0.borrow_mut().push(exchange);
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    pub fn snapshot(&self) -> Vec<ExchangeRecord> {
        self.0.borrow().clone()
    }

    pub fn shares_buffer_with(&self, other: &RequestLog) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
