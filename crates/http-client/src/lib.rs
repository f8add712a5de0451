use std::time::Duration;

use anyhow::{Context, Result};
use bon::bon;
use reqwest::{Client as HttpClient, IntoUrl, Proxy, RequestBuilder};

#[derive(Clone)]
pub struct Client {
    client: HttpClient,
}

#[bon]
impl Client {
    #[builder]
    pub fn new(timeout: Option<Duration>, proxy: Option<String>) -> Result<Client> {
        let mut client_builder = HttpClient::builder().user_agent(app::USER_AGENT);
        if let Some(timeout) = timeout {
            client_builder = client_builder.timeout(timeout);
        }
        if let Some(url) = proxy {
            let proxy = Proxy::all(&url).with_context(|| format!("set proxy to {url}"))?;
            client_builder = client_builder.proxy(proxy);
        }
        let client = client_builder
            .build()
            .with_context(|| "build reqwest client")?;
        let client = Client { client };

        Ok(client)
    }

    pub fn get(&self, url: impl IntoUrl) -> RequestBuilder {
        self.client.get(url)
    }

    pub fn post(&self, url: impl IntoUrl) -> RequestBuilder {
        self.client.post(url)
    }

    pub fn inner(&self) -> &HttpClient {
        &self.client
    }
}
