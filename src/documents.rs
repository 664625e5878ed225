//! Document storage and document session endpoints.
//!
//! Static documents are plain uploads the backend indexes for retrieval.
//! Document sessions track an editable docx through upload, versioned apply,
//! export and deletion, and can round-trip through Google Docs.

use crate::client::ApiClient;
use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Filename used when an export response has no usable content-disposition.
const DEFAULT_EXPORT_FILENAME: &str = "export.docx";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DocumentInfo {
    pub filename: String,
    pub path: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub doc_type: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DocumentSessionResponse {
    pub session_id: String,
    pub filename: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DocumentSessionMessage {
    pub session_id: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DocumentVersionInfo {
    pub version_id: String,
    pub filename: String,
    pub size: u64,
    pub created_at: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DocumentSessionHistoryResponse {
    pub session_id: String,
    pub versions: Vec<DocumentVersionInfo>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GoogleExportRequest {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GoogleExportResponse {
    pub session_id: String,
    pub file_id: String,
    pub name: String,
    pub message: String,
}

/// An exported docx: raw bytes plus the filename the backend suggested.
#[derive(Debug, Clone)]
pub struct DocumentExport {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Pull a filename out of a `content-disposition` header value, e.g.
/// `attachment; filename="report.docx"`. Quotes are optional and the token
/// matches case-insensitively.
fn filename_from_disposition(value: &str) -> Option<String> {
    let rest = value.split(';').map(str::trim).find_map(|part| {
        let (key, val) = part.split_once('=')?;
        key.trim().eq_ignore_ascii_case("filename").then_some(val)
    })?;
    let name = rest.trim().trim_matches('"');
    if name.is_empty() {
        return None;
    }
    Some(name.to_string())
}

impl ApiClient {
    /// GET `/documents`
    pub async fn documents(&self) -> Result<Vec<DocumentInfo>, ApiError> {
        self.get("/documents").await
    }

    /// POST `/documents` as multipart, the payload under a `file` part.
    pub async fn upload_document(&self, filename: &str, bytes: Vec<u8>) -> Result<Value, ApiError> {
        self.post_file("/documents", filename, bytes).await
    }

    /// DELETE `/documents/{filename}`
    pub async fn delete_document(&self, filename: &str) -> Result<Value, ApiError> {
        self.delete(&format!("/documents/{}", filename)).await
    }

    /// POST `/documents/session` — open an editable session for a docx.
    pub async fn upload_document_session(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<DocumentSessionResponse, ApiError> {
        self.post_file("/documents/session", filename, bytes).await
    }

    /// GET `/documents/session/{id}/export` — download the current docx.
    ///
    /// The suggested filename comes from the `content-disposition` header;
    /// when the header is absent or malformed the fixed default is used.
    pub async fn export_document_session(
        &self,
        session_id: &str,
    ) -> Result<DocumentExport, ApiError> {
        let resp = self
            .get_raw(&format!("/documents/session/{}/export", session_id))
            .await?;

        let filename = resp
            .headers()
            .get(reqwest::header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(filename_from_disposition)
            .unwrap_or_else(|| DEFAULT_EXPORT_FILENAME.to_string());

        let bytes = resp.bytes().await?.to_vec();
        Ok(DocumentExport { filename, bytes })
    }

    /// POST `/documents/session/{id}/apply` — push an edited docx as a new
    /// version of the session.
    pub async fn apply_document_session(
        &self,
        session_id: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<DocumentSessionMessage, ApiError> {
        self.post_file(
            &format!("/documents/session/{}/apply", session_id),
            filename,
            bytes,
        )
        .await
    }

    /// GET `/documents/session/{id}/history`
    pub async fn document_session_history(
        &self,
        session_id: &str,
    ) -> Result<DocumentSessionHistoryResponse, ApiError> {
        self.get(&format!("/documents/session/{}/history", session_id))
            .await
    }

    /// DELETE `/documents/session/{id}`
    pub async fn delete_document_session(
        &self,
        session_id: &str,
    ) -> Result<DocumentSessionMessage, ApiError> {
        self.delete(&format!("/documents/session/{}", session_id))
            .await
    }

    /// POST `/documents/google/import` — create a session from a Google Doc.
    pub async fn import_google_doc(&self, doc_id: &str) -> Result<DocumentSessionResponse, ApiError> {
        self.post("/documents/google/import", &json!({ "doc_id": doc_id }))
            .await
    }

    /// POST `/documents/google/export/{id}` — push the session's docx to
    /// Google Drive using the caller-supplied access token.
    pub async fn export_google_doc(
        &self,
        session_id: &str,
        request: &GoogleExportRequest,
    ) -> Result<GoogleExportResponse, ApiError> {
        self.post(&format!("/documents/google/export/{}", session_id), request)
            .await
    }
}
