use serde_derive::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestState {
    Passed,
    Failed,
    Pending,
}

impl fmt::Display for TestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TestState::Passed => "Passed",
            TestState::Failed => "Failed",
            TestState::Pending => "Pending",
        };
        f.write_str(name)
    }
}

/// Failure as reported by the runner, kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestFailure {
    pub message: String,
    #[serde(default)]
    pub stack: Option<String>,
}

impl TestFailure {
    pub fn new(message: impl Into<String>, stack: Option<String>) -> Self {
        Self {
            message: message.into(),
            stack,
        }
    }
}

/// How a test ended. Only a failure carries details.
#[derive(Debug, Clone, PartialEq)]
pub enum TestOutcome {
    Passed,
    Failed(TestFailure),
    Pending,
}

impl TestOutcome {
    pub fn state(&self) -> TestState {
        match self {
            TestOutcome::Passed => TestState::Passed,
            TestOutcome::Failed(_) => TestState::Failed,
            TestOutcome::Pending => TestState::Pending,
        }
    }

    pub fn failure(&self) -> Option<&TestFailure> {
        match self {
            TestOutcome::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}

/// Published next to the suites so readers can map state names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateTable {
    #[serde(rename = "PASSED")]
    passed: TestState,
    #[serde(rename = "FAILED")]
    failed: TestState,
    #[serde(rename = "PENDING")]
    pending: TestState,
}

impl Default for StateTable {
    fn default() -> Self {
        Self {
            passed: TestState::Passed,
            failed: TestState::Failed,
            pending: TestState::Pending,
        }
    }
}
