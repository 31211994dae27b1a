use std::time::Duration;

use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use saleslens_domain::{HttpConfig, SalesLensError};
use tracing::debug;

use crate::errors::InfraError;

/// HTTP client with a per-request timeout.
///
/// Every request is sent exactly once. A failed attempt is reported to the
/// caller, which settles the load that issued it.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self, SalesLensError> {
        Self::builder().build()
    }

    /// Build a client from the `http` section of the configuration.
    pub fn from_config(config: &HttpConfig) -> Result<Self, SalesLensError> {
        let mut builder =
            Self::builder().timeout(Duration::from_secs(config.timeout_seconds.max(1)));
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        builder.build()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute the provided request builder once. Non-2xx responses are
    /// returned as-is; transport failures become domain errors.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, SalesLensError> {
        let request = builder.build().map_err(InfraError::from)?;

        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending HTTP request");

        match self.client.execute(request).await {
            Ok(response) => {
                debug!(%method, %url, status = %response.status(), "received HTTP response");
                Ok(response)
            }
            Err(err) => {
                debug!(%method, %url, error = %err, "HTTP request failed");
                Err(InfraError::from(err).into())
            }
        }
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    user_agent: Option<String>,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(saleslens_domain::constants::DEFAULT_HTTP_TIMEOUT_SECS),
            user_agent: None,
        }
    }
}

impl HttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn build(self) -> Result<HttpClient, SalesLensError> {
        let agent = self
            .user_agent
            .unwrap_or_else(|| format!("saleslens/{}", env!("CARGO_PKG_VERSION")));
        let client = ReqwestClient::builder()
            .timeout(self.timeout)
            .user_agent(agent)
            .no_proxy()
            .build()
            .map_err(InfraError::from)?;

        Ok(HttpClient { client })
    }
}
