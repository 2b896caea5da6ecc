pub mod client;
pub mod config;
mod decode;
pub mod error;
pub mod events;
pub mod headers;
pub mod profile;
pub mod requests;
pub mod screens;
pub mod song;
pub mod r#trait;
pub mod types;

pub use client::JukeJamClientImpl;
pub use config::{ClientConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use decode::decode_json;
pub use error::JukeJamError;
pub use events::{
    ClientEvent, ClientEventReceiver, ClientEventWatcher, RequestInfo, SharedEventBroadcaster,
};
pub use profile::{UserProfile, UNKNOWN_MOOD};
pub use r#trait::JukeJamClient;
pub use requests::{
    OnboardingRequest, RecommendRequest, SearchRequest, SearchRequestBuilder, Vibes,
    DEFAULT_TOP_K, MAX_ONBOARDING_FAVORITES,
};
pub use song::Song;
pub use types::{AutoSuggestion, HealthStatus, InferredContext};

#[cfg(any(test, feature = "mock"))]
pub use r#trait::MockJukeJamClient;

pub type Result<T> = std::result::Result<T, JukeJamError>;
