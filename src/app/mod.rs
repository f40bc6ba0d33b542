pub mod replay;

use crate::app::replay::{CallStep, Step};
use crate::configuration::settings::ClientSettings;
use crate::connection::{Error as ConnectionError, Response};
use crate::error::Error;
use crate::follow::Observer;
use crate::intercept::ClientFactory;
use crate::reporter::Report;
use std::time::Instant;

/// Replays a recorded run through an [`Observer`], issuing the recorded
/// calls through intercepted clients.
pub struct App {
    observer: Observer,
    factory: ClientFactory,
}

impl App {
    pub fn new(settings: ClientSettings) -> Result<Self, Error> {
        let observer = Observer::new();
        let factory = observer.client_factory(settings)?;
        Ok(App { observer, factory })
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }

    pub fn factory(&self) -> &ClientFactory {
        &self.factory
    }

    pub fn run(&mut self, steps: Vec<Step>) -> Report {
        info!("Replaying {} step(s)", steps.len());
        for step in steps {
            match step {
                Step::Runner(event) => {
                    // already logged, the runner owns the event order
                    let _ = self.observer.handle(event);
                }
                Step::Call { call } => self.perform(&call),
            }
        }
        self.observer.serialize()
    }

    fn perform(&self, call: &CallStep) {
        let now = Instant::now();
        match self.send(call) {
            Ok(response) => info!(
                "{} {} answered {} in {} ms",
                call.method,
                call.url,
                response.status.as_u16(),
                now.elapsed().as_millis()
            ),
            Err(e) => warn!("{} {} failed: {}", call.method, call.url, e),
        }
    }

    fn send(&self, call: &CallStep) -> Result<Response, ConnectionError> {
        let headers = call.header_map()?;
        let body = call.body_bytes();
        if call.fresh {
            let client = self.factory.create()?;
            client.request(call.method.clone(), &call.url, &headers, body)
        } else {
            self.factory
                .shared()
                .request(call.method.clone(), &call.url, &headers, body)
        }
    }
}
