use crate::error::Error;
use crate::reporter::model::{StateTable, SuiteRef, SuiteReport, TestReport, TestState};
use serde_derive::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Plain snapshot of the suite tree, ready for the report sink.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub states: StateTable,
    pub suites: Vec<SuiteReport>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
    pub pending: usize,
    pub requests: usize,
}

impl Report {
    pub fn new(roots: &[SuiteRef]) -> Self {
        Self {
            states: StateTable::default(),
            suites: roots.iter().map(|suite| suite.borrow().serialize()).collect(),
        }
    }

    pub fn summary(&self) -> Summary {
        let mut summary = Summary::default();
        let mut queue: Vec<&SuiteReport> = self.suites.iter().collect();
        while let Some(suite) = queue.pop() {
            suite.tests.iter().for_each(|test| summary.count(test));
            queue.extend(suite.suites.iter());
        }
        summary
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, Error> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    pub fn write_to(&self, path: &Path, pretty: bool) -> Result<(), Error> {
        let mut writer = BufWriter::new(File::create(path)?);
        if pretty {
            serde_json::to_writer_pretty(&mut writer, self)?;
        } else {
            serde_json::to_writer(&mut writer, self)?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl Summary {
    fn count(&mut self, test: &TestReport) {
        match test.state {
            TestState::Passed => self.passed += 1,
            TestState::Failed => self.failed += 1,
            TestState::Pending => self.pending += 1,
        }
        self.requests += test.requests.len();
    }
}
