//! Auxiliary response shapes for the suggestion and health endpoints.

use crate::decode::null_as_default;
use crate::Song;
use serde::{Deserialize, Serialize};

// ================================================================================================
// AUTO SUGGESTION
// ================================================================================================

/// Context the backend inferred for a time-of-day suggestion.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InferredContext {
    /// morning, afternoon, evening or night
    #[serde(default, deserialize_with = "null_as_default")]
    pub time_of_day: String,
    /// Backend-local hour the suggestion was computed at
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_hour: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub suggested_mood: String,
    #[serde(default)]
    pub suggested_activity: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres_used: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub confidence: f64,
    /// Whether the user's own history drove the suggestion, rather than defaults
    #[serde(default, deserialize_with = "null_as_default")]
    pub based_on_history: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reason: String,
}

/// Response of `GET /auto-suggest/{user_id}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AutoSuggestion {
    #[serde(default, deserialize_with = "null_as_default")]
    pub inferred_context: InferredContext,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tracks: Vec<Song>,
}

// ================================================================================================
// HEALTH
// ================================================================================================

/// Response of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub songs_loaded: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub users_loaded: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub time_context_users: u64,
    /// Names of the inverted indexes the backend has loaded
    #[serde(default, deserialize_with = "null_as_default")]
    pub index_keys: Vec<String>,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_auto_suggestion() {
        let suggestion: AutoSuggestion = serde_json::from_str(
            r#"{
                "inferred_context": {
                    "time_of_day": "night",
                    "current_hour": 23,
                    "suggested_mood": "chill",
                    "suggested_activity": null,
                    "genres_used": null,
                    "confidence": 0.0,
                    "based_on_history": false,
                    "reason": "Suggested for night listening"
                },
                "tracks": [{"track_id": "a"}, {"track_id": "b"}]
            }"#,
        )
        .unwrap();

        let context = &suggestion.inferred_context;
        assert_eq!(context.time_of_day, "night");
        assert_eq!(context.current_hour, 23);
        assert_eq!(context.suggested_activity, None);
        assert!(context.genres_used.is_empty());
        assert!(!context.based_on_history);
        let ids: Vec<&str> = suggestion.tracks.iter().map(|t| t.track_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_decode_health() {
        let health: HealthStatus = serde_json::from_str(
            r#"{"status": "ok", "songs_loaded": 89741, "users_loaded": 12,
                "time_context_users": 0, "index_keys": ["genre", "mood", "energy"]}"#,
        )
        .unwrap();
        assert!(health.is_ok());
        assert_eq!(health.songs_loaded, 89741);
        assert_eq!(health.index_keys.len(), 3);
    }
}
