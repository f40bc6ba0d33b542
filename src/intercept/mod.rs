//! Transparent capture of every http exchange made through clients built by
//! [`ClientFactory`].
//!
//! Each client runs its replies through an ordered list of [`ResponseHook`]s:
//! successful exchanges through `resolved`, failed ones through `rejected`.
//! A hook sees the exchange and hands it back, it never decides the outcome.

pub mod client;
pub mod exchange;
pub mod factory;
pub mod hook;
pub mod recorder;

pub use self::client::InterceptedClient;
pub use self::exchange::{ExchangeRecord, RequestLog, RequestRecord, ResponseRecord};
pub use self::factory::ClientFactory;
pub use self::hook::ResponseHook;
pub use self::recorder::Recorder;
