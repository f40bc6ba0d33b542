use crate::configuration::constants::tree::{INDENT, ROOT_TITLE};
use crate::reporter::model::{SuiteNode, SuiteRef};
use std::fmt::Write;

/// Renders the suites depth first, two spaces per level, tests as
/// `[state] title` above the nested suites.
pub fn render(roots: &[SuiteRef]) -> String {
    let mut out = String::new();
    for suite in roots {
        render_suite(&mut out, &suite.borrow(), 0);
    }
    out
}

fn render_suite(out: &mut String, suite: &SuiteNode, depth: usize) {
    let title = if suite.is_root() && suite.title().is_empty() {
        ROOT_TITLE
    } else {
        suite.title()
    };
    // writing into a String cannot fail
    let _ = writeln!(out, "{}{}", INDENT.repeat(depth), title);
    for test in suite.tests() {
        let _ = writeln!(
            out,
            "{}[{}] {}",
            INDENT.repeat(depth + 1),
            test.state(),
            test.title()
        );
    }
    for child in suite.suites() {
        render_suite(out, &child.borrow(), depth + 1);
    }
}
