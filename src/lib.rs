//! Follows a test run and records, per test, the http exchanges it made.
//!
//! Runner lifecycle events go into a [`follow::Observer`], which rebuilds the
//! suite tree. Clients obtained from the observer's
//! [`intercept::ClientFactory`] report every exchange back to it, and
//! [`follow::Observer::serialize`] turns the result into a plain report.

#[macro_use]
extern crate log;

pub mod app;
pub mod configuration;
pub mod connection;
pub mod error;
pub mod follow;
pub mod intercept;
pub mod reporter;
pub mod time;

pub use self::error::{Error, Result};
pub use self::follow::{Correlation, Observer, RunnerEvent, TestHandle};
pub use self::intercept::{ClientFactory, ExchangeRecord, InterceptedClient};
pub use self::reporter::{Report, TestState};
