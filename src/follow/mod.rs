//! Follows a test run: rebuilds the suite tree from runner events and files
//! intercepted http traffic under the test that was running.
//!
//! The runner is expected to deliver events one at a time and to run one
//! test at a time. Exchanges are attributed by "most recently started test",
//! so concurrent tests sharing one [`Observer`] would see each other's
//! traffic. Give every concurrently running unit its own observer instead.

pub mod correlation;
pub mod event;
pub mod tree;

pub use self::correlation::Correlation;
pub use self::event::{RunnerEvent, TestHandle};
pub use self::tree::TreeBuilder;

use crate::configuration::settings::ClientSettings;
use crate::connection;
use crate::error::Error;
use crate::intercept::{ClientFactory, Recorder, ResponseHook};
use crate::reporter::model::{SuiteRef, TestFailure, TestOutcome};
use crate::reporter::{tree as tree_view, Report, Summary};
use std::rc::Rc;

#[derive(Debug, Default)]
pub struct Observer {
    tree: TreeBuilder,
    correlation: Correlation,
}

impl Observer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_correlation(correlation: Correlation) -> Self {
        Self {
            tree: TreeBuilder::new(),
            correlation,
        }
    }

    pub fn correlation(&self) -> Correlation {
        self.correlation.clone()
    }

    pub fn recorder(&self) -> Recorder {
        Recorder::new(self.correlation())
    }

    /// Factory whose clients report into this observer.
    pub fn client_factory(&self, settings: ClientSettings) -> Result<ClientFactory, connection::Error> {
        let hooks: Vec<Rc<dyn ResponseHook>> = vec![Rc::new(self.recorder())];
        ClientFactory::new(settings, hooks)
    }

    pub fn handle(&mut self, event: RunnerEvent) -> Result<(), Error> {
        match event {
            RunnerEvent::Start => self.on_start(),
            RunnerEvent::SuiteStart { title } => self.on_suite_start(title),
            RunnerEvent::SuiteEnd => self.on_suite_end(),
            RunnerEvent::Hook { title } => self.on_hook(&title),
            RunnerEvent::TestStart { test } => self.on_test_start(test),
            RunnerEvent::Pass { test } => return self.on_pass(&test),
            RunnerEvent::Fail { test, error } => return self.on_fail(&test, error),
            RunnerEvent::Pending { test } => return self.on_pending(&test),
            RunnerEvent::End => {
                self.on_end();
            }
        }
        Ok(())
    }

    /// Forgets everything recorded so far.
    pub fn on_start(&mut self) {
        info!("Run started");
        self.tree.reset();
        self.correlation.reset();
    }

    pub fn on_suite_start(&mut self, title: impl Into<String>) {
        self.tree.on_suite_start(title);
    }

    pub fn on_suite_end(&mut self) {
        self.tree.on_suite_end();
    }

    /// Hooks run between tests without becoming the active test.
    pub fn on_hook(&self, title: &str) {
        trace!("Hook '{}' started", title);
    }

    pub fn on_test_start(&mut self, test: TestHandle) {
        self.correlation.activate(test);
    }

    pub fn on_pass(&mut self, test: &TestHandle) -> Result<(), Error> {
        self.finish(test, TestOutcome::Passed)
    }

    pub fn on_fail(&mut self, test: &TestHandle, error: TestFailure) -> Result<(), Error> {
        self.finish(test, TestOutcome::Failed(error))
    }

    pub fn on_pending(&mut self, test: &TestHandle) -> Result<(), Error> {
        self.finish(test, TestOutcome::Pending)
    }

    pub fn on_end(&self) -> Summary {
        let summary = self.serialize().summary();
        info!(
            "Run finished: {} passed, {} failed, {} pending, {} request(s) captured",
            summary.passed, summary.failed, summary.pending, summary.requests
        );
        summary
    }

    fn finish(&mut self, test: &TestHandle, outcome: TestOutcome) -> Result<(), Error> {
        let requests = self.correlation.requests_for(test);
        self.tree
            .on_test_outcome(test.title.clone(), outcome, requests)
            .map_err(|err| {
                error!("{}", err);
                err
            })
    }

    pub fn roots(&self) -> &[SuiteRef] {
        self.tree.roots()
    }

    /// Snapshot of everything seen so far; open suites are included.
    pub fn serialize(&self) -> Report {
        Report::new(self.tree.roots())
    }

    pub fn tree(&self) -> String {
        tree_view::render(self.tree.roots())
    }

    pub fn print_tree(&self) {
        print!("{}", self.tree());
    }
}
