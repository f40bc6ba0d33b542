use crate::intercept::exchange::{ExchangeRecord, RequestLog};
use crate::reporter::model::state::{TestFailure, TestOutcome, TestState};
use serde_derive::Serialize;

#[derive(Debug, Clone)]
pub struct TestNode {
    title: String,
    outcome: TestOutcome,
    requests: RequestLog,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestReport {
    pub title: String,
    pub state: TestState,
    pub requests: Vec<ExchangeRecord>,
    pub error: Option<TestFailure>,
}

impl TestNode {
    pub fn new(title: impl Into<String>, outcome: TestOutcome, requests: RequestLog) -> Self {
        Self {
            title: title.into(),
            outcome,
            requests,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn state(&self) -> TestState {
        self.outcome.state()
    }

    pub fn error(&self) -> Option<&TestFailure> {
        self.outcome.failure()
    }

    pub fn requests(&self) -> &RequestLog {
        &self.requests
    }

    pub fn serialize(&self) -> TestReport {
        TestReport {
            title: self.title.clone(),
            state: self.state(),
            requests: self.requests.snapshot(),
            error: self.error().cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialized_passed_test() {
        let node = TestNode::new("returns 200", TestOutcome::Passed, RequestLog::new());
        let value = serde_json::to_value(node.serialize()).unwrap();

        assert_eq!(
            value,
            json!({ "title": "returns 200", "state": "Passed", "requests": [], "error": null })
        );
    }

    #[test]
    fn test_serialized_failed_test_has_error() {
        let failure = TestFailure::new("Error: boom", Some("Error: boom\n    at spec.js:3".to_owned()));
        let node = TestNode::new("explodes", TestOutcome::Failed(failure), RequestLog::new());
        let value = serde_json::to_value(node.serialize()).unwrap();

        assert_eq!(value["state"], "Failed");
        assert_eq!(value["error"]["message"], "Error: boom");
        assert_eq!(value["error"]["stack"], "Error: boom\n    at spec.js:3");
    }
}
