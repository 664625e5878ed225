//! Profile, model and provider selection endpoints.
//!
//! Profiles are named presets that pick a provider/model pairing for chat;
//! providers describe the backing LLM vendors along with capability flags and
//! rate-limit notes.

use crate::client::ApiClient;
use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Profile {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Model {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ModelMetadata>,
}

/// Free-form descriptive strings the backend attaches to hosted models.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ModelMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_limit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_limit: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Provider {
    pub name: String,
    pub display_name: String,
    #[serde(rename = "type")]
    pub provider_type: String,
    pub enabled: bool,
    pub description: String,
    pub requires_api_key: bool,
    pub has_api_key: bool,
    pub is_current: bool,
    pub features: ProviderFeatures,
    pub rate_limits: ProviderRateLimits,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderFeatures {
    pub streaming: bool,
    pub function_calling: bool,
    pub vision: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ProviderRateLimits {
    #[serde(default)]
    pub requests_per_minute: Option<u64>,
    #[serde(default)]
    pub tokens_per_minute: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderValidateResponse {
    pub valid: bool,
    pub message: String,
    #[serde(default)]
    pub details: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CurrentProviderResponse {
    pub provider: String,
    pub profile: String,
    pub model: String,
    pub provider_display_name: String,
    pub profile_display_name: String,
    pub model_short_name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CurrentProfile {
    pub profile: String,
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProfileModelsResponse {
    pub profile: String,
    pub provider: String,
    pub models: Vec<Model>,
}

/// The `/models` route has answered both with a bare array and with an
/// object wrapping it, depending on backend version.
#[derive(Deserialize)]
#[serde(untagged)]
enum ModelsResponse {
    List(Vec<Model>),
    Wrapped {
        #[serde(default)]
        models: Vec<Model>,
    },
}

impl ApiClient {
    /// GET `/current` — the backend's full current configuration blob.
    pub async fn current_config(&self) -> Result<Value, ApiError> {
        self.get("/current").await
    }

    /// GET `/profiles`
    pub async fn profiles(&self) -> Result<Vec<Profile>, ApiError> {
        self.get("/profiles").await
    }

    /// POST `/profile/{name}` with no body.
    pub async fn set_profile(&self, profile_name: &str) -> Result<Value, ApiError> {
        self.post_empty(&format!("/profile/{}", profile_name)).await
    }

    /// GET `/profile/current`
    pub async fn current_profile(&self) -> Result<CurrentProfile, ApiError> {
        self.get("/profile/current").await
    }

    /// GET `/models`, unwrapping either response shape to the model list.
    pub async fn models(&self) -> Result<Vec<Model>, ApiError> {
        let resp: ModelsResponse = self.get("/models").await?;
        Ok(match resp {
            ModelsResponse::List(models) => models,
            ModelsResponse::Wrapped { models } => models,
        })
    }

    /// GET `/profile/{name}/models`, optionally scoped to one provider.
    pub async fn profile_models(
        &self,
        profile_name: &str,
        provider: Option<&str>,
    ) -> Result<ProfileModelsResponse, ApiError> {
        let path = format!("/profile/{}/models", profile_name);
        match provider {
            Some(provider) => self.get_query(&path, &[("provider", provider)]).await,
            None => self.get(&path).await,
        }
    }

    /// POST `/model/{id}/set` with no body.
    pub async fn set_model(&self, model_id: &str) -> Result<Value, ApiError> {
        self.post_empty(&format!("/model/{}/set", model_id)).await
    }

    /// GET `/providers`
    pub async fn providers(&self) -> Result<Vec<Provider>, ApiError> {
        self.get("/providers").await
    }

    /// POST `/provider/{name}/validate`, sending the key when one is given.
    pub async fn validate_provider(
        &self,
        provider_name: &str,
        api_key: Option<&str>,
    ) -> Result<ProviderValidateResponse, ApiError> {
        let path = format!("/provider/{}/validate", provider_name);
        let body = match api_key {
            Some(key) => json!({ "api_key": key }),
            None => json!({}),
        };
        self.post(&path, &body).await
    }

    /// POST `/provider/{name}/set` with no body.
    pub async fn set_provider(&self, provider_name: &str) -> Result<Value, ApiError> {
        self.post_empty(&format!("/provider/{}/set", provider_name))
            .await
    }

    /// GET `/provider/current`
    pub async fn current_provider(&self) -> Result<CurrentProviderResponse, ApiError> {
        self.get("/provider/current").await
    }
}
