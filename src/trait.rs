use crate::{
    AutoSuggestion, HealthStatus, OnboardingRequest, RecommendRequest, Result, SearchRequest,
    Song, UserProfile,
};
use async_trait::async_trait;

/// Trait for JukeJam API operations that can be mocked for testing.
///
/// Each method is one independent request/response exchange with the backend:
/// no retry, no caching, no batching. Screens take `&dyn JukeJamClient`, so a
/// mock can stand in for the network.
///
/// # Mocking Support
///
/// When the `mock` feature is enabled, this crate provides `MockJukeJamClient`
/// that implements this trait using the `mockall` library.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait(?Send)]
pub trait JukeJamClient {
    /// All genres known to the catalog, in server order.
    async fn list_genres(&self) -> Result<Vec<String>>;

    /// Available mood buckets.
    async fn list_moods(&self) -> Result<Vec<String>>;

    /// Available energy labels.
    async fn list_energy_levels(&self) -> Result<Vec<String>>;

    /// Ids of existing users.
    ///
    /// Callers on the login path usually treat a failure here as "no users".
    async fn list_users(&self) -> Result<Vec<String>>;

    /// Search the catalog. Result order is the server's ranking.
    async fn search_songs(&self, request: &SearchRequest) -> Result<Vec<Song>>;

    /// Context-aware recommendations for a user and mood.
    async fn recommend_songs(&self, request: &RecommendRequest) -> Result<Vec<Song>>;

    /// Fetch the aggregated profile of a user.
    async fn get_user_profile(&self, user_id: &str) -> Result<UserProfile>;

    /// Store a new user's onboarding answers. The acknowledgment body is ignored.
    async fn submit_onboarding(&self, request: &OnboardingRequest) -> Result<()>;

    /// Suggestions for the current time of day based on the user's history.
    async fn auto_suggest(&self, user_id: &str, top_k: u32) -> Result<AutoSuggestion>;

    /// Backend liveness and data summary.
    async fn health(&self) -> Result<HealthStatus>;
}
