use thiserror::Error;

/// Error types for JukeJam API operations.
///
/// Every client operation either returns a decoded value or one of these
/// variants. The client never retries and never substitutes a fallback; what to
/// do with a failure is up to the caller.
///
/// # Error Handling Examples
///
/// ```rust,no_run
/// use jukejam_client::{ClientConfig, JukeJamClient, JukeJamClientImpl, JukeJamError};
///
/// #[tokio::main]
/// async fn main() {
///     let http_client = http_client::native::NativeClient::new();
///     let client = JukeJamClientImpl::new(Box::new(http_client), ClientConfig::from_env());
///
///     match client.get_user_profile("alice").await {
///         Ok(profile) => println!("Dominant mood: {}", profile.dominant_mood()),
///         Err(JukeJamError::Status { status: 404, .. }) => eprintln!("No such user"),
///         Err(JukeJamError::Http(msg)) => eprintln!("Backend unreachable: {}", msg),
///         Err(e) => eprintln!("Other error: {}", e),
///     }
/// }
/// ```
#[derive(Error, Debug)]
pub enum JukeJamError {
    /// HTTP/network related errors.
    ///
    /// Connection refused, DNS failures, timeouts reported by the transport and
    /// failures while reading a response body all end up here.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The backend answered with a non-success status code.
    ///
    /// The response body is not inspected; the backend's error payload format
    /// is not part of the client contract.
    #[error("{method} {url} failed with status {status}")]
    Status {
        /// HTTP method of the failed request
        method: String,
        /// Full URL of the failed request
        url: String,
        /// Status code returned by the backend
        status: u16,
    },

    /// The response body did not match the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The request could not be built.
    ///
    /// Raised before anything is sent, for example when the configured base
    /// URL is malformed or an onboarding submission exceeds its limits.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl JukeJamError {
    /// True for failures of the transport itself or a non-success status.
    pub fn is_transport(&self) -> bool {
        matches!(self, JukeJamError::Http(_) | JukeJamError::Status { .. })
    }

    /// True when the backend answered but the body could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self, JukeJamError::Decode(_))
    }
}

impl From<serde_json::Error> for JukeJamError {
    fn from(err: serde_json::Error) -> Self {
        JukeJamError::Decode(err.to_string())
    }
}
