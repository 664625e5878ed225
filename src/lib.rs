//! Async client for the assistant backend REST API.
//!
//! The backend runs a local LLM server, a Qdrant vector store and an MCP
//! helper process behind a versioned HTTP prefix. This crate wraps every
//! route with a typed method on [`ApiClient`]: health and system status,
//! server lifecycle, profile/model/provider selection, chat, chat history,
//! document storage and editable document sessions (including Google Docs
//! import/export).
//!
//! Each method is one stateless request/response round trip. Transport
//! failures and non-success statuses surface as [`ApiError`] with no retry;
//! the client holds no state besides the underlying `reqwest::Client`, so a
//! single instance can serve concurrent in-flight calls.

pub mod chat;
pub mod client;
pub mod config;
pub mod documents;
pub mod error;
pub mod system;

pub use chat::{ChatHistory, ChatHistoryItem, ChatMessage, ChatRequest, ChatResponse};
pub use client::ApiClient;
pub use config::{
    CurrentProfile, CurrentProviderResponse, Model, ModelMetadata, Profile, ProfileModelsResponse,
    Provider, ProviderFeatures, ProviderRateLimits, ProviderValidateResponse,
};
pub use documents::{
    DocumentExport, DocumentInfo, DocumentSessionHistoryResponse, DocumentSessionMessage,
    DocumentSessionResponse, DocumentVersionInfo, GoogleExportRequest, GoogleExportResponse,
};
pub use error::ApiError;
pub use system::{HealthResponse, ServerStatus, SystemStatus};
