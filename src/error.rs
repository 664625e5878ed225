/// Errors surfaced by [`crate::ApiClient`] methods.
///
/// The client performs no retries and no recovery: a transport failure or a
/// non-success status from the backend is returned to the caller as-is.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Connection, transport or body-decoding failure from reqwest.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// The backend answered with a non-success status. The message carries
    /// the response body verbatim.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}
