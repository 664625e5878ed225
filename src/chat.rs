//! Chat and chat history endpoints.

use crate::client::ApiClient;
use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    /// Profile preset to answer with; the backend's current profile applies
    /// when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatResponse {
    pub response: String,
    pub model: String,
    pub profile: String,
}

/// A stored message as the backend returns it. Annotation fields grew over
/// backend versions, so everything beyond role/content is optional.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatHistoryItem {
    pub role: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancelled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatHistory {
    pub history: Vec<ChatHistoryItem>,
}

impl ApiClient {
    /// POST `/chat`
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        self.post("/chat", request).await
    }

    /// GET `/history`
    pub async fn chat_history(&self) -> Result<ChatHistory, ApiError> {
        self.get("/history").await
    }

    /// DELETE `/history`
    pub async fn clear_chat_history(&self) -> Result<Value, ApiError> {
        self.delete("/history").await
    }

    /// DELETE `/history/{provider}/{profile}` — drop the stored messages for
    /// one provider/profile pairing only.
    pub async fn delete_chat_history_for(
        &self,
        provider: &str,
        profile: &str,
    ) -> Result<Value, ApiError> {
        self.delete(&format!("/history/{}/{}", provider, profile))
            .await
    }
}
