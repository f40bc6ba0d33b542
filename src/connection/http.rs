use crate::configuration::settings::ClientSettings;
use crate::connection::{Error, Response, SendMessage};
use http::Request as HttpRequest;
use reqwest::blocking::Client;
use reqwest::redirect::Policy;

pub fn build_client(settings: &ClientSettings) -> Result<Client, Error> {
    let mut builder = Client::builder()
        .timeout(settings.timeout)
        .redirect(Policy::limited(settings.max_redirects));
    if let Some(agent) = &settings.user_agent {
        builder = builder.user_agent(agent.as_str());
    }
    builder.build().map_err(Error::from)
}

impl<'a> SendMessage<&'a HttpRequest<Vec<u8>>, Result<Response, Error>> for Client {
    fn send(&self, data: &'a HttpRequest<Vec<u8>>) -> Result<Response, Error> {
        let response = self
            .request(data.method().clone(), &data.uri().to_string())
            .headers(data.headers().clone())
            .body(data.body().clone())
            .send()?;
        let url = response.url().to_string();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes()?;
        Ok(Response {
            url,
            status,
            headers,
            body,
        })
    }
}
