use crate::{JukeJamError, Result};
use http_types::Url;

/// Backend address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Environment variable that overrides [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "JUKEJAM_API_URL";

/// Connection settings for [`JukeJamClientImpl`](crate::JukeJamClientImpl).
///
/// Resolve this once at startup and pass it to the client constructor.
///
/// # Examples
///
/// ```rust
/// use jukejam_client::ClientConfig;
///
/// let config = ClientConfig::new().with_base_url("http://jukejam.local:9000/");
/// assert_eq!(config.base_url(), "http://jukejam.local:9000");
/// assert_eq!(
///     config.endpoint("/genres").unwrap().as_str(),
///     "http://jukejam.local:9000/genres"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: format!("jukejam-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at [`DEFAULT_BASE_URL`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config from `JUKEJAM_API_URL`, falling back to the default.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(BASE_URL_ENV).ok())
    }

    fn from_env_value(value: Option<String>) -> Self {
        match value {
            Some(url) if !url.trim().is_empty() => {
                log::debug!("Using backend address from {BASE_URL_ENV}: {url}");
                Self::default().with_base_url(&url)
            }
            _ => Self::default(),
        }
    }

    /// Set the backend address. Trailing slashes are dropped.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim().trim_end_matches('/').to_string();
        self
    }

    /// Set the `User-Agent` header sent with every request.
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Full URL for an API path, joined with exactly one `/`.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        url.parse::<Url>()
            .map_err(|e| JukeJamError::InvalidRequest(format!("invalid URL '{url}': {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert!(config.user_agent().starts_with("jukejam-client/"));
    }

    #[test]
    fn test_env_value_overrides_default() {
        let config = ClientConfig::from_env_value(Some("https://api.jukejam.app/".to_string()));
        assert_eq!(config.base_url(), "https://api.jukejam.app");

        let config = ClientConfig::from_env_value(Some("   ".to_string()));
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);

        let config = ClientConfig::from_env_value(None);
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_endpoint_joining() {
        let config = ClientConfig::new().with_base_url("http://localhost:8000//");
        assert_eq!(
            config.endpoint("energy-levels").unwrap().as_str(),
            "http://localhost:8000/energy-levels"
        );
        assert_eq!(
            config.endpoint("/user/alice").unwrap().as_str(),
            "http://localhost:8000/user/alice"
        );
    }

    #[test]
    fn test_endpoint_with_path_prefix() {
        let config = ClientConfig::new().with_base_url("https://example.com/api/v1");
        assert_eq!(
            config.endpoint("search").unwrap().as_str(),
            "https://example.com/api/v1/search"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let config = ClientConfig::new().with_base_url("not a url");
        assert!(matches!(
            config.endpoint("genres"),
            Err(JukeJamError::InvalidRequest(_))
        ));
    }
}
