use crate::decode::decode_json;
use crate::events::{ClientEvent, ClientEventReceiver, RequestInfo, SharedEventBroadcaster};
use crate::headers::{add_common_headers, add_json_body_headers};
use crate::{
    AutoSuggestion, ClientConfig, HealthStatus, JukeJamClient, JukeJamError, OnboardingRequest,
    RecommendRequest, Result, SearchRequest, Song, UserProfile,
};
use async_trait::async_trait;
use chrono::Utc;
use http_client::{HttpClient, Request};
use http_types::{Body, Method};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

/// HTTP implementation of [`JukeJamClient`].
///
/// Holds no session and no cache: every call is one round trip to
/// `<base_url>/<path>`. Cloning is cheap and clones share the HTTP client and
/// the event broadcaster.
///
/// # Examples
///
/// ```rust,no_run
/// use jukejam_client::{ClientConfig, JukeJamClient, JukeJamClientImpl, Result, SearchRequest};
///
/// #[tokio::main]
/// async fn main() -> Result<()> {
///     let http_client = http_client::native::NativeClient::new();
///     let client = JukeJamClientImpl::new(Box::new(http_client), ClientConfig::from_env());
///
///     let request = SearchRequest::builder().artist("Drake").top_k(5).build();
///     for song in client.search_songs(&request).await? {
///         println!("{} ({})", song, song.formatted_duration());
///     }
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct JukeJamClientImpl {
    client: Arc<dyn HttpClient + Send + Sync>,
    config: ClientConfig,
    broadcaster: Arc<SharedEventBroadcaster>,
}

impl JukeJamClientImpl {
    /// Create a new [`JukeJamClientImpl`] with its own event broadcaster.
    ///
    /// # Arguments
    ///
    /// * `client` - Any HTTP client implementation that implements [`HttpClient`]
    /// * `config` - Backend address and request settings
    pub fn new(client: Box<dyn HttpClient + Send + Sync>, config: ClientConfig) -> Self {
        Self {
            client: Arc::from(client),
            config,
            broadcaster: Arc::new(SharedEventBroadcaster::new()),
        }
    }

    /// Create a client that talks through `client` but reports to this
    /// client's subscribers.
    pub fn with_shared_broadcaster(&self, client: Box<dyn HttpClient + Send + Sync>) -> Self {
        Self {
            client: Arc::from(client),
            config: self.config.clone(),
            broadcaster: self.broadcaster.clone(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn subscribe(&self) -> ClientEventReceiver {
        self.broadcaster.subscribe()
    }

    pub fn latest_event(&self) -> Option<ClientEvent> {
        self.broadcaster.latest_event()
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.config.endpoint(path)?;
        let mut request = Request::new(Method::Get, url);
        add_common_headers(&mut request, self.config.user_agent());
        self.execute(request, decode_json).await
    }

    async fn post_json<B: Serialize, T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        payload: &B,
    ) -> Result<T> {
        self.post(path, payload, decode_json).await
    }

    async fn post<B: Serialize, T>(
        &self,
        path: &str,
        payload: &B,
        parse: impl FnOnce(&str) -> Result<T>,
    ) -> Result<T> {
        let url = self.config.endpoint(path)?;
        let body = Body::from_json(payload)
            .map_err(|e| JukeJamError::InvalidRequest(format!("cannot encode body: {e}")))?;

        let mut request = Request::new(Method::Post, url);
        add_json_body_headers(&mut request, self.config.user_agent());
        request.set_body(body);
        self.execute(request, parse).await
    }

    /// Send a request and parse the body of a successful response.
    ///
    /// Transport, status and parse failures all broadcast `RequestFailed`.
    async fn execute<T>(
        &self,
        request: Request,
        parse: impl FnOnce(&str) -> Result<T>,
    ) -> Result<T> {
        let method = request.method().to_string();
        let request_info = RequestInfo::from_url_and_method(request.url(), &method);
        let request_start = Instant::now();

        log::debug!("{}", request_info.short_description());
        self.broadcaster.broadcast_event(ClientEvent::RequestStarted {
            request: request_info.clone(),
        });

        let result = self
            .send_and_read(request, &request_info, request_start)
            .await
            .and_then(|body| parse(&body));

        if let Err(e) = &result {
            log::warn!("{} failed: {e}", request_info.short_description());
            self.broadcaster.broadcast_event(ClientEvent::RequestFailed {
                request: request_info,
                error: e.to_string(),
                duration_ms: request_start.elapsed().as_millis() as u64,
                timestamp: Utc::now(),
            });
        }

        result
    }

    async fn send_and_read(
        &self,
        request: Request,
        request_info: &RequestInfo,
        request_start: Instant,
    ) -> Result<String> {
        let mut response = self
            .client
            .send(request)
            .await
            .map_err(|e| JukeJamError::Http(e.to_string()))?;

        let status = response.status();
        self.broadcaster.broadcast_event(ClientEvent::RequestCompleted {
            request: request_info.clone(),
            status_code: status.into(),
            duration_ms: request_start.elapsed().as_millis() as u64,
        });

        if !status.is_success() {
            return Err(JukeJamError::Status {
                method: request_info.method.clone(),
                url: request_info.uri.clone(),
                status: status.into(),
            });
        }

        let body = response
            .body_string()
            .await
            .map_err(|e| JukeJamError::Http(e.to_string()))?;
        log::trace!("Response body for {}: {body}", request_info.path);
        Ok(body)
    }
}

impl std::fmt::Debug for JukeJamClientImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JukeJamClientImpl")
            .field("config", &self.config)
            .field("broadcaster", &self.broadcaster)
            .finish()
    }
}

fn user_path(prefix: &str, user_id: &str) -> String {
    format!("{prefix}/{}", urlencoding::encode(user_id))
}

#[async_trait(?Send)]
impl JukeJamClient for JukeJamClientImpl {
    async fn list_genres(&self) -> Result<Vec<String>> {
        self.get_json("genres").await
    }

    async fn list_moods(&self) -> Result<Vec<String>> {
        self.get_json("moods").await
    }

    async fn list_energy_levels(&self) -> Result<Vec<String>> {
        self.get_json("energy-levels").await
    }

    async fn list_users(&self) -> Result<Vec<String>> {
        self.get_json("users").await
    }

    async fn search_songs(&self, request: &SearchRequest) -> Result<Vec<Song>> {
        log::debug!("Searching songs: {}", request.describe());
        let songs: Vec<Song> = self.post_json("search", request).await?;
        log::debug!("Search returned {} songs", songs.len());
        Ok(songs)
    }

    async fn recommend_songs(&self, request: &RecommendRequest) -> Result<Vec<Song>> {
        log::debug!(
            "Requesting recommendations for '{}' (mood={}, activity={:?})",
            request.user_id(),
            request.mood(),
            request.activity()
        );
        self.post_json("recommend", request).await
    }

    async fn get_user_profile(&self, user_id: &str) -> Result<UserProfile> {
        self.get_json(&user_path("user", user_id)).await
    }

    async fn submit_onboarding(&self, request: &OnboardingRequest) -> Result<()> {
        log::debug!("Submitting onboarding for '{}'", request.user_id());
        self.post("user/onboarding", request, |_| Ok(())).await
    }

    async fn auto_suggest(&self, user_id: &str, top_k: u32) -> Result<AutoSuggestion> {
        let path = format!("{}?top_k={top_k}", user_path("auto-suggest", user_id));
        self.get_json(&path).await
    }

    async fn health(&self) -> Result<HealthStatus> {
        self.get_json("health").await
    }
}
