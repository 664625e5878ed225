use crate::error::ApiError;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// Base URL used by [`ApiClient::default`].
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";

/// Client for the assistant backend REST API.
///
/// Holds one `reqwest::Client` and the versioned base URL; both are read-only
/// after construction, so the client is cheap to clone and safe to share
/// between concurrent calls.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiClient {
    /// Create a client bound to `base_url`, e.g. `http://localhost:8000/api/v1`.
    /// A trailing slash is trimmed so route paths can always start with `/`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// The base URL this client was constructed with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn a non-success response into `ApiError::Api`, carrying the body
    /// text verbatim.
    async fn check(resp: Response) -> Result<Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let message = resp.text().await.unwrap_or_default();
        Err(ApiError::Api {
            status: status.as_u16(),
            message,
        })
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!(path, "GET");
        let resp = self
            .http
            .get(self.url(path))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    pub(crate) async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        debug!(path, "GET");
        let resp = self
            .http
            .get(self.url(path))
            .header(CONTENT_TYPE, "application/json")
            .query(query)
            .send()
            .await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(path, "POST");
        let resp = self.http.post(self.url(path)).json(body).send().await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    /// POST without a request body, for routes where the path itself is the
    /// whole request (profile/provider/model selection, server stop). The
    /// JSON content type is still sent, matching the non-upload default.
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!(path, "POST");
        let resp = self
            .http
            .post(self.url(path))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    /// POST a multipart form with the payload under a `file` part.
    pub(crate) async fn post_file<T: DeserializeOwned>(
        &self,
        path: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<T, ApiError> {
        debug!(path, filename, "POST multipart");
        let form = Form::new().part("file", Part::bytes(bytes).file_name(filename.to_string()));
        let resp = self
            .http
            .post(self.url(path))
            .multipart(form)
            .send()
            .await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!(path, "DELETE");
        let resp = self
            .http
            .delete(self.url(path))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    /// GET a binary response. Returns the raw response so the caller can read
    /// headers (document export needs `content-disposition`) before the body.
    pub(crate) async fn get_raw(&self, path: &str) -> Result<Response, ApiError> {
        debug!(path, "GET raw");
        let resp = self
            .http
            .get(self.url(path))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;
        Self::check(resp).await
    }
}
