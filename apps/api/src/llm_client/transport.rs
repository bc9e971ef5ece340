use async_trait::async_trait;
use reqwest::Client;

use crate::llm_client::wire::GenerateContentRequest;

/// Status and raw body of one HTTP exchange.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

/// Sends one request to the generative API. One call is one attempt;
/// retry policy lives in `LlmClient`, not here.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &GenerateContentRequest)
        -> Result<TransportResponse, reqwest::Error>;
}

/// The production transport: a JSON POST to the configured endpoint with the
/// API key as a query parameter.
pub struct HttpTransport {
    client: Client,
    api_url: String,
    api_key: String,
}

impl HttpTransport {
    pub fn new(api_url: String, api_key: String) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()?,
            api_url,
            api_key,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<TransportResponse, reqwest::Error> {
        let response = self
            .client
            .post(&self.api_url)
            .query(&[("key", &self.api_key)])
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(TransportResponse { status, body })
    }
}
