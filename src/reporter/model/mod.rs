pub mod state;
pub mod suite;
pub mod test;

pub use self::state::{StateTable, TestFailure, TestOutcome, TestState};
pub use self::suite::{SuiteNode, SuiteRef, SuiteReport};
pub use self::test::{TestNode, TestReport};
