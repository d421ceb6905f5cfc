use crate::domain::query::GraphQLRequest;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> String;
    fn timeout_seconds(&self) -> u64;
}

/// 請求／回應通道：一次呼叫對應一次網路往返
#[async_trait]
pub trait QueryChannel: Send + Sync {
    async fn fetch(&self, request: &GraphQLRequest) -> Result<serde_json::Value>;
}
