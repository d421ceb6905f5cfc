use crate::core::{ConfigProvider, GraphQLRequest, QueryChannel};
use crate::utils::error::{FilmError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use std::time::Duration;

/// 以 HTTP POST 傳送 GraphQL 查詢的通道，在 main 中建立一次後以參考傳遞
#[derive(Debug, Clone)]
pub struct HttpQueryChannel {
    client: Client,
    endpoint: String,
}

impl HttpQueryChannel {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl QueryChannel for HttpQueryChannel {
    async fn fetch(&self, request: &GraphQLRequest) -> Result<serde_json::Value> {
        tracing::debug!(
            "Sending GraphQL request {} to: {}",
            request.operation_name().unwrap_or("<anonymous>"),
            self.endpoint
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("GraphQL response status: {}", status);

        if !status.is_success() {
            tracing::warn!("❌ GraphQL request failed with status {}", status);
            return Err(FilmError::RequestFailed {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let payload: serde_json::Value = serde_json::from_slice(&body)?;
        Ok(payload)
    }
}
