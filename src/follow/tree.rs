use crate::error::Error;
use crate::intercept::exchange::RequestLog;
use crate::reporter::model::{SuiteNode, SuiteRef, TestNode, TestOutcome};
use std::cell::RefCell;
use std::rc::Rc;

/// Rebuilds the suite hierarchy from flat start/end notifications.
///
/// `stack` always holds the path from a root suite down to the suite being
/// executed. A suite is linked into its parent when it starts, before any of
/// its own children exist.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    roots: Vec<SuiteRef>,
    stack: Vec<SuiteRef>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_suite_start(&mut self, title: impl Into<String>) -> SuiteRef {
        let parent = self.stack.last().cloned();
        let suite = Rc::new(RefCell::new(SuiteNode::new(title, parent.is_none())));
        match parent {
            Some(parent) => parent.borrow_mut().push_suite(suite.clone()),
            None => self.roots.push(suite.clone()),
        }
        debug!(
            "Suite '{}' started at depth {}",
            suite.borrow().title(),
            self.stack.len()
        );
        self.stack.push(suite.clone());
        suite
    }

    /// Closes the innermost suite. Unbalanced ends are ignored.
    pub fn on_suite_end(&mut self) -> Option<SuiteRef> {
        let closed = self.stack.pop();
        match &closed {
            Some(suite) => debug!("Suite '{}' ended", suite.borrow().title()),
            None => warn!("Suite end received while no suite is open, ignoring"),
        }
        closed
    }

    /// Appends a finished test to the innermost open suite.
    pub fn on_test_outcome(
        &mut self,
        title: impl Into<String>,
        outcome: TestOutcome,
        requests: RequestLog,
    ) -> Result<(), Error> {
        let title = title.into();
        let suite = match self.stack.last() {
            Some(suite) => suite,
            None => return Err(Error::NoOpenSuite(title)),
        };
        debug!(
            "Test '{}' {} with {} request(s)",
            title,
            outcome.state(),
            requests.len()
        );
        suite
            .borrow_mut()
            .push_test(TestNode::new(title, outcome, requests));
        Ok(())
    }

    pub fn roots(&self) -> &[SuiteRef] {
        &self.roots
    }

    pub fn current(&self) -> Option<&SuiteRef> {
        self.stack.last()
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn reset(&mut self) {
        self.roots.clear();
        self.stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::model::{TestFailure, TestState};

    #[test]
    fn test_nesting_follows_start_and_end_events() {
        let mut builder = TreeBuilder::new();
        builder.on_suite_start("a");
        builder.on_suite_start("a.1");
        builder.on_suite_start("a.1.x");
        assert_eq!(builder.depth(), 3);
        builder.on_suite_end();
        builder.on_suite_end();
        builder.on_suite_start("a.2");
        builder.on_suite_end();
        builder.on_suite_end();
        builder.on_suite_start("b");
        builder.on_suite_end();

        assert_eq!(builder.depth(), 0);
        let roots = builder.roots();
        assert_eq!(roots.len(), 2);
        let a = roots[0].borrow();
        assert!(a.is_root());
        let children: Vec<String> = a.suites().iter().map(|s| s.borrow().title().to_owned()).collect();
        assert_eq!(children, vec!["a.1", "a.2"]);
        let first = a.suites()[0].borrow();
        assert!(!first.is_root());
        assert_eq!(first.suites()[0].borrow().title(), "a.1.x");
        assert!(!first.suites()[0].borrow().is_root());
        assert!(roots[1].borrow().is_root());
    }

    #[test]
    fn test_suite_is_linked_before_its_children() {
        let mut builder = TreeBuilder::new();
        let parent = builder.on_suite_start("parent");
        let child = builder.on_suite_start("child");

        assert_eq!(parent.borrow().suites().len(), 1);
        assert!(Rc::ptr_eq(&parent.borrow().suites()[0], &child));
        assert!(child.borrow().suites().is_empty());
    }

    #[test]
    fn test_outcomes_land_in_innermost_suite() {
        let mut builder = TreeBuilder::new();
        let outer = builder.on_suite_start("outer");
        let inner = builder.on_suite_start("inner");
        builder
            .on_test_outcome("inner test", TestOutcome::Passed, RequestLog::new())
            .unwrap();
        builder.on_suite_end();
        builder
            .on_test_outcome(
                "outer test",
                TestOutcome::Failed(TestFailure::new("Error: nope", None)),
                RequestLog::new(),
            )
            .unwrap();

        assert_eq!(inner.borrow().tests()[0].title(), "inner test");
        let outer = outer.borrow();
        assert_eq!(outer.tests().len(), 1);
        assert_eq!(outer.tests()[0].state(), TestState::Failed);
        assert!(outer.tests()[0].error().is_some());
    }

    #[test]
    fn test_unbalanced_suite_end_is_ignored() {
        let mut builder = TreeBuilder::new();
        assert!(builder.on_suite_end().is_none());
        builder.on_suite_start("still fine");
        assert_eq!(builder.depth(), 1);
        assert!(builder.roots()[0].borrow().is_root());
    }

    #[test]
    fn test_outcome_outside_suite_is_refused() {
        let mut builder = TreeBuilder::new();
        let result = builder.on_test_outcome("orphan", TestOutcome::Passed, RequestLog::new());

        assert!(matches!(result, Err(Error::NoOpenSuite(ref title)) if title == "orphan"));
        assert!(builder.roots().is_empty());
    }

    #[test]
    fn test_open_suites_are_visible_before_run_ends() {
        let mut builder = TreeBuilder::new();
        builder.on_suite_start("unfinished");
        builder
            .on_test_outcome("done", TestOutcome::Pending, RequestLog::new())
            .unwrap();

        assert_eq!(builder.roots()[0].borrow().tests().len(), 1);
        assert_eq!(builder.current().map(|s| s.borrow().title().to_owned()), Some("unfinished".to_owned()));
    }
}
