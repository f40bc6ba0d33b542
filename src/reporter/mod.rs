pub mod model;
pub mod report;
pub mod tree;

pub use self::model::{SuiteNode, SuiteRef, TestFailure, TestNode, TestOutcome, TestState};
pub use self::report::{Report, Summary};
