use crate::reporter::model::TestFailure;
use serde_derive::{Deserialize, Serialize};

/// Identifies one test across its start and outcome events.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TestHandle {
    pub id: u64,
    pub title: String,
}

impl TestHandle {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

/// Lifecycle notifications emitted by the test runner, in run order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event")]
pub enum RunnerEvent {
    #[serde(rename = "start")]
    Start,
    #[serde(rename = "suite")]
    SuiteStart { title: String },
    #[serde(rename = "suite end")]
    SuiteEnd,
    #[serde(rename = "hook")]
    Hook { title: String },
    #[serde(rename = "test")]
    TestStart { test: TestHandle },
    #[serde(rename = "pass")]
    Pass { test: TestHandle },
    #[serde(rename = "fail")]
    Fail { test: TestHandle, error: TestFailure },
    #[serde(rename = "pending")]
    Pending { test: TestHandle },
    #[serde(rename = "end")]
    End,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_events() {
        let lines = vec![
            (r#"{"event":"suite","title":"users"}"#, RunnerEvent::SuiteStart { title: "users".to_owned() }),
            (r#"{"event":"suite end"}"#, RunnerEvent::SuiteEnd),
            (
                r#"{"event":"test","test":{"id":3,"title":"lists"}}"#,
                RunnerEvent::TestStart { test: TestHandle::new(3, "lists") },
            ),
            (
                r#"{"event":"fail","test":{"id":3,"title":"lists"},"error":{"message":"Error: 500"}}"#,
                RunnerEvent::Fail {
                    test: TestHandle::new(3, "lists"),
                    error: TestFailure::new("Error: 500", None),
                },
            ),
            (r#"{"event":"end"}"#, RunnerEvent::End),
        ];
        for (line, expected) in lines {
            let event: RunnerEvent = serde_json::from_str(line).unwrap();
            assert_eq!(event, expected);
        }
    }

    #[test]
    fn test_unknown_event_is_rejected() {
        assert!(serde_json::from_str::<RunnerEvent>(r#"{"event":"retry"}"#).is_err());
    }
}
