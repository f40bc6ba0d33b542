use crate::connection::Error as ConnectionError;
use crate::error::Error;
use crate::follow::RunnerEvent;
use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::Method;
use serde_derive::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// One line of a replay file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Step {
    Call { call: CallStep },
    Runner(RunnerEvent),
}

/// An http call issued on behalf of the running test.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CallStep {
    #[serde(
        default = "crate::configuration::deserialize::http_method::default",
        with = "crate::configuration::deserialize::http_method"
    )]
    pub method: Method,
    pub url: String,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
    /// Use a newly created client instead of the shared one
    #[serde(default)]
    pub fresh: bool,
}

impl CallStep {
    pub fn header_map(&self) -> Result<HeaderMap, ConnectionError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|err| ConnectionError::InvalidRequest(err.to_string()))?;
            let value = HeaderValue::from_str(value)
                .map_err(|err| ConnectionError::InvalidRequest(err.to_string()))?;
            headers.append(name, value);
        }
        Ok(headers)
    }

    pub fn body_bytes(&self) -> Vec<u8> {
        self.body.clone().map(String::into_bytes).unwrap_or_default()
    }
}

pub fn load(path: &Path) -> Result<Vec<Step>, Error> {
    let source = fs::read_to_string(path)?;
    parse(&source)
}

/// Reads JSON lines, blank lines are skipped.
pub fn parse(source: &str) -> Result<Vec<Step>, Error> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line).map_err(|source| Error::Parse {
                line: index + 1,
                source,
            })
        })
        .collect()
}
