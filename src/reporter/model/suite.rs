use crate::reporter::model::test::{TestNode, TestReport};
use serde_derive::Serialize;
use std::cell::RefCell;
use std::rc::Rc;

/// Suites are shared between their parent and the builder stack while open.
pub type SuiteRef = Rc<RefCell<SuiteNode>>;

#[derive(Debug)]
pub struct SuiteNode {
    title: String,
    root: bool,
    tests: Vec<TestNode>,
    suites: Vec<SuiteRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuiteReport {
    pub root: bool,
    pub title: String,
    pub tests: Vec<TestReport>,
    pub suites: Vec<SuiteReport>,
}

impl SuiteNode {
    pub fn new(title: impl Into<String>, root: bool) -> Self {
        Self {
            title: title.into(),
            root,
            tests: Vec::new(),
            suites: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_root(&self) -> bool {
        self.root
    }

    pub fn tests(&self) -> &[TestNode] {
        &self.tests
    }

    pub fn suites(&self) -> &[SuiteRef] {
        &self.suites
    }

    pub(crate) fn push_test(&mut self, test: TestNode) {
        self.tests.push(test);
    }

    pub(crate) fn push_suite(&mut self, suite: SuiteRef) {
        self.suites.push(suite);
    }

    pub fn serialize(&self) -> SuiteReport {
        SuiteReport {
            root: self.root,
            title: self.title.clone(),
            tests: self.tests.iter().map(TestNode::serialize).collect(),
            suites: self
                .suites
                .iter()
                .map(|suite| suite.borrow().serialize())
                .collect(),
        }
    }
}
