use crate::follow::event::TestHandle;
use crate::intercept::exchange::{ExchangeRecord, RequestLog};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// The link between runner events and intercepted traffic: which test is
/// running right now.
///
/// Only a test start moves the pointer. Outcomes leave it in place, so
/// anything recorded between a test's outcome and the next start lands in
/// that finished test's log. With two tests running at once the most recently
/// started one receives every new exchange; what an earlier test already
/// collected stays with it.
#[derive(Debug, Clone, Default)]
pub struct Correlation {
    state: Rc<RefCell<State>>,
}

#[derive(Debug, Default)]
struct State {
    active: Option<TestHandle>,
    logs: HashMap<TestHandle, RequestLog>,
}

impl Correlation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `handle` the active test. A retried test keeps what it already
    /// collected.
    pub fn activate(&self, handle: TestHandle) {
        let mut state = self.state.borrow_mut();
        debug!("Test '{}' ({}) is now active", handle.title, handle.id);
        state.logs.entry(handle.clone()).or_default();
        state.active = Some(handle);
    }

    /// Files `exchange` under the active test. Returns false and drops it
    /// when no test has started yet.
    pub fn record(&self, exchange: ExchangeRecord) -> bool {
        let state = self.state.borrow();
        match state.active.as_ref().and_then(|active| state.logs.get(active)) {
            Some(log) => {
                log.push(exchange);
                true
            }
            None => {
                debug!(
                    "No active test, dropping exchange {} {}",
                    exchange.request.method, exchange.request.url
                );
                false
            }
        }
    }

    /// Log for the node of a finished test. The log stays live, so it keeps
    /// receiving exchanges while `handle` remains the active test. A test
    /// that never started gets an empty one.
    pub fn requests_for(&self, handle: &TestHandle) -> RequestLog {
        self.state
            .borrow()
            .logs
            .get(handle)
            .cloned()
            .unwrap_or_default()
    }

    pub fn active(&self) -> Option<TestHandle> {
        self.state.borrow().active.clone()
    }

    pub fn reset(&self) {
        let mut state = self.state.borrow_mut();
        state.active = None;
        state.logs.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::Error;
    use http::Request as HttpRequest;

    fn exchange(url: &str) -> ExchangeRecord {
        let request = HttpRequest::builder().uri(url).body(Vec::new()).unwrap();
        ExchangeRecord::failed(&request, &Error::Connection("refused".to_owned()))
    }

    #[test]
    fn test_exchanges_go_to_latest_started_test() {
        let correlation = Correlation::new();
        let first = TestHandle::new(1, "first");
        let second = TestHandle::new(2, "second");

        correlation.activate(first.clone());
        assert!(correlation.record(exchange("http://api.local/1")));
        correlation.activate(second.clone());
        assert!(correlation.record(exchange("http://api.local/2")));

        let first_log = correlation.requests_for(&first);
        assert_eq!(first_log.len(), 1);
        assert_eq!(first_log.snapshot()[0].request.url, "http://api.local/1");
        let log = correlation.requests_for(&second);
        assert_eq!(log.len(), 1);
        assert_eq!(log.snapshot()[0].request.url, "http://api.local/2");
    }

    #[test]
    fn test_clones_observe_the_same_active_test() {
        let correlation = Correlation::new();
        let handed_to_hook = correlation.clone();
        correlation.activate(TestHandle::new(5, "shared"));

        assert_eq!(handed_to_hook.active(), Some(TestHandle::new(5, "shared")));
    }

    #[test]
    fn test_restarting_same_test_keeps_its_log() {
        let correlation = Correlation::new();
        let handle = TestHandle::new(1, "flaky");
        correlation.activate(handle.clone());
        correlation.record(exchange("http://api.local/try-1"));
        correlation.activate(handle.clone());
        correlation.record(exchange("http://api.local/try-2"));

        assert_eq!(correlation.requests_for(&handle).len(), 2);
    }

    #[test]
    fn test_never_started_test_gets_empty_log() {
        let correlation = Correlation::new();
        correlation.activate(TestHandle::new(1, "running"));
        correlation.record(exchange("http://api.local/"));

        assert!(correlation.requests_for(&TestHandle::new(2, "skipped")).is_empty());
    }

    #[test]
    fn test_reset_forgets_active_test() {
        let correlation = Correlation::new();
        correlation.activate(TestHandle::new(1, "gone"));
        correlation.reset();

        assert!(correlation.active().is_none());
        assert!(!correlation.record(exchange("http://api.local/")));
        assert!(correlation.requests_for(&TestHandle::new(1, "gone")).is_empty());
    }
}
