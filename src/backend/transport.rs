use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use crate::backend::{normalize::RawResponse, request::HttpRequestSpec};

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Request timed out: {0}")]
    Timeout(String),
    #[error("{0}")]
    Network(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout(err.to_string())
        } else {
            TransportError::Network(err.to_string())
        }
    }
}

/// Sends a request and hands back whatever status and body came back.
///
/// Implementations never interpret the status; a 500 is a successful send.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &HttpRequestSpec) -> Result<RawResponse, TransportError>;
}

pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// `timeout` of `None` lets a request wait forever.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, TransportError> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &HttpRequestSpec) -> Result<RawResponse, TransportError> {
        let url = request.url(&self.base_url);
        log::debug!("{} {}", request.method, url);

        let mut builder = self.client.request(request.method.clone(), url.as_str());
        if let Some(song) = &request.body {
            builder = builder.json(song);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        log::debug!("{} {} -> {}", request.method, request.path, status);
        Ok(RawResponse { status, body })
    }
}
