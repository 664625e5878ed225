//! Health, system status and server lifecycle endpoints.

use crate::client::ApiClient;
use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

/// Per-component status strings for the three backend processes.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SystemStatus {
    pub llm_server: String,
    pub qdrant: String,
    pub mcp_server: String,
}

#[derive(Serialize)]
struct ModelNameBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    model_name: Option<&'a str>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerStatus {
    pub llama_running: bool,
    pub mcp_running: bool,
    pub current_model: Option<String>,
}

impl ApiClient {
    /// GET `/health`
    pub async fn health(&self) -> Result<HealthResponse, ApiError> {
        self.get("/health").await
    }

    /// GET `/status`
    pub async fn system_status(&self) -> Result<SystemStatus, ApiError> {
        self.get("/status").await
    }

    /// POST `/server/start`, optionally naming the model to load. The field
    /// is omitted from the body when no model is given.
    pub async fn start_servers(&self, model_name: Option<&str>) -> Result<Value, ApiError> {
        self.post("/server/start", &ModelNameBody { model_name })
            .await
    }

    /// POST `/server/stop`
    pub async fn stop_servers(&self) -> Result<Value, ApiError> {
        self.post_empty("/server/stop").await
    }

    /// POST `/server/switch-model`
    pub async fn switch_model(&self, model_name: &str) -> Result<Value, ApiError> {
        let body = ModelNameBody {
            model_name: Some(model_name),
        };
        self.post("/server/switch-model", &body).await
    }

    /// GET `/server/status`
    pub async fn server_status(&self) -> Result<ServerStatus, ApiError> {
        self.get("/server/status").await
    }
}
