use crate::configuration::settings::ClientSettings;
use crate::connection::http::build_client;
use crate::connection::{Error, Transport};
use crate::intercept::client::InterceptedClient;
use crate::intercept::hook::ResponseHook;
use derivative::*;
use reqwest::blocking::Client;
use std::rc::Rc;

/// The only way clients get built during a run.
///
/// Every client handed out, the shared one included, carries the same hooks
/// in the same order.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct ClientFactory {
    settings: ClientSettings,
    #[derivative(Debug = "ignore")]
    hooks: Vec<Rc<dyn ResponseHook>>,
    shared: InterceptedClient<Client>,
}

impl ClientFactory {
    pub fn new(settings: ClientSettings, hooks: Vec<Rc<dyn ResponseHook>>) -> Result<Self, Error> {
        let shared = InterceptedClient::new(build_client(&settings)?, hooks.clone());
        Ok(Self {
            settings,
            hooks,
            shared,
        })
    }

    /// Client used by code that does not ask for its own instance.
    pub fn shared(&self) -> &InterceptedClient<Client> {
        &self.shared
    }

    pub fn create(&self) -> Result<InterceptedClient<Client>, Error> {
        let client = build_client(&self.settings)?;
        debug!("Created http client with {} hook(s)", self.hooks.len());
        Ok(self.wrap(client))
    }

    /// Attaches the factory hooks to a transport built elsewhere.
    pub fn wrap<T>(&self, transport: T) -> InterceptedClient<T>
    where
        T: Transport,
    {
        InterceptedClient::new(transport, self.hooks.clone())
    }
}
