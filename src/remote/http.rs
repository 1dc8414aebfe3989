use std::time::Duration;

use reqwest::Client;

use super::{Reply, RemoteClient};
use crate::{error::Error, protocol::Request};

/// Remote call client speaking the textual protocol over HTTP: one GET per
/// operation, parameters as query pairs in declaration order.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    endpoint: String,
}

impl HttpClient {
    /// Creates a client against the given endpoint, e.g.
    /// `http://127.0.0.1:8000`. Requests carry no deadline; the call blocks
    /// until the remote answers.
    pub fn new<T: Into<String>>(endpoint: T) -> Self {
        Self {
            client: Client::new(),
            endpoint: Self::trimmed(endpoint),
        }
    }

    /// Same as [`Self::new`] but with a per-request deadline.
    pub fn with_timeout<T: Into<String>>(endpoint: T, timeout: Duration) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| Error::Transport(err.to_string()))?;

        Ok(Self {
            client,
            endpoint: Self::trimmed(endpoint),
        })
    }

    fn trimmed<T: Into<String>>(endpoint: T) -> String {
        let mut endpoint = endpoint.into();
        while endpoint.ends_with('/') {
            let _ = endpoint.pop();
        }
        endpoint
    }

    /// Query values are appended verbatim: parameters are either decimal
    /// identifiers or already transport-encoded, so the whole value alphabet
    /// is `[a-f0-9%]` and the server's single URL-decode must see the `%xx`
    /// triplets untouched. Routing them through a form serializer would
    /// escape `%` a second time.
    fn url(&self, request: &Request) -> String {
        let mut url = format!("{}/{}", self.endpoint, request.operation);

        for (position, (key, value)) in request.params.iter().enumerate() {
            url.push(if position == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(value);
        }

        url
    }
}

#[async_trait]
impl RemoteClient for HttpClient {
    async fn call(&self, request: Request) -> Result<Reply, Error> {
        let response = self
            .client
            .get(self.url(&request))
            .send()
            .await
            .map_err(|err| Error::Transport(err.to_string()))?;

        let code = response.status();
        let payload = response
            .bytes()
            .await
            .map_err(|err| Error::Transport(err.to_string()))?;

        // An HTTP error status maps to the negative status the protocol
        // contract expects; 404 becomes -404.
        let status = if code.is_success() {
            0
        } else {
            -i32::from(code.as_u16())
        };

        Ok(Reply { status, payload })
    }
}
