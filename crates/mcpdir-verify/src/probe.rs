//! HTTP access for link checks.

use async_trait::async_trait;

use crate::error::Result;

/// Status and body of a completed GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    pub status: u16,
    pub body: String,
}

impl ProbeResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Performs a single GET. Errors mean the request never completed
/// (DNS, TLS, connection reset); any HTTP status is a successful probe.
#[async_trait]
pub trait LinkProbe: Send + Sync {
    async fn get(&self, url: &str) -> Result<ProbeResponse>;
}

/// [`LinkProbe`] backed by a shared `reqwest` client.
pub struct HttpProbe {
    client: reqwest::Client,
}

impl HttpProbe {
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent.to_owned())
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl LinkProbe for HttpProbe {
    async fn get(&self, url: &str) -> Result<ProbeResponse> {
        tracing::debug!(url, "GET");
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(ProbeResponse { status, body })
    }
}
