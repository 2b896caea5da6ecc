//! Request bodies sent to the backend.
//!
//! Optional fields are left out of the JSON entirely rather than sent as
//! `null` or `""`, which keeps the wire contract minimal.

use crate::{JukeJamError, Result};
use serde::{Deserialize, Serialize};

/// Result count used when the caller does not pick one.
pub const DEFAULT_TOP_K: u32 = 20;

/// Maximum number of favorite genres or artists accepted during onboarding.
pub const MAX_ONBOARDING_FAVORITES: usize = 5;

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Body of `POST /search`.
///
/// Built through [`SearchRequest::builder`], which drops empty values.
///
/// ```rust
/// use jukejam_client::SearchRequest;
///
/// let request = SearchRequest::builder().title("").artist("Drake").build();
/// let body = serde_json::to_value(&request).unwrap();
/// assert_eq!(body, serde_json::json!({"artist": "Drake", "top_k": 20}));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    genres: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mood: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    energy: Option<String>,
    top_k: u32,
}

impl SearchRequest {
    pub fn builder() -> SearchRequestBuilder {
        SearchRequestBuilder::default()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn artist(&self) -> Option<&str> {
        self.artist.as_deref()
    }

    pub fn genres(&self) -> &[String] {
        self.genres.as_deref().unwrap_or_default()
    }

    pub fn mood(&self) -> Option<&str> {
        self.mood.as_deref()
    }

    pub fn energy(&self) -> Option<&str> {
        self.energy.as_deref()
    }

    pub fn top_k(&self) -> u32 {
        self.top_k
    }

    /// True when no filter at all is set.
    pub fn is_unfiltered(&self) -> bool {
        self.title.is_none()
            && self.artist.is_none()
            && self.genres.is_none()
            && self.mood.is_none()
            && self.energy.is_none()
    }

    /// Short description of the active filters for logging.
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if let Some(title) = &self.title {
            parts.push(format!("title='{title}'"));
        }
        if let Some(artist) = &self.artist {
            parts.push(format!("artist='{artist}'"));
        }
        if let Some(genres) = &self.genres {
            parts.push(format!("genres={}", genres.join(",")));
        }
        if let Some(mood) = &self.mood {
            parts.push(format!("mood={mood}"));
        }
        if let Some(energy) = &self.energy {
            parts.push(format!("energy={energy}"));
        }
        parts.push(format!("top_k={}", self.top_k));
        parts.join(" ")
    }
}

impl Default for SearchRequest {
    fn default() -> Self {
        SearchRequest::builder().build()
    }
}

/// Builder for [`SearchRequest`]. Each setter only records a value when it is
/// non-empty after trimming.
#[derive(Debug, Clone, Default)]
pub struct SearchRequestBuilder {
    title: Option<String>,
    artist: Option<String>,
    genres: Vec<String>,
    mood: Option<String>,
    energy: Option<String>,
    top_k: Option<u32>,
}

impl SearchRequestBuilder {
    pub fn title(mut self, title: &str) -> Self {
        self.title = non_empty(title);
        self
    }

    pub fn artist(mut self, artist: &str) -> Self {
        self.artist = non_empty(artist);
        self
    }

    /// Genres to filter by. Blank entries and duplicates are skipped.
    pub fn genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for genre in genres {
            if let Some(genre) = non_empty(genre.as_ref()) {
                if !self.genres.contains(&genre) {
                    self.genres.push(genre);
                }
            }
        }
        self
    }

    pub fn genre(self, genre: &str) -> Self {
        self.genres([genre])
    }

    pub fn mood(mut self, mood: &str) -> Self {
        self.mood = non_empty(mood);
        self
    }

    pub fn energy(mut self, energy: &str) -> Self {
        self.energy = non_empty(energy);
        self
    }

    pub fn top_k(mut self, top_k: u32) -> Self {
        self.top_k = Some(top_k);
        self
    }

    pub fn build(self) -> SearchRequest {
        SearchRequest {
            title: self.title,
            artist: self.artist,
            genres: if self.genres.is_empty() {
                None
            } else {
                Some(self.genres)
            },
            mood: self.mood,
            energy: self.energy,
            top_k: self.top_k.unwrap_or(DEFAULT_TOP_K),
        }
    }
}

/// Body of `POST /recommend`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendRequest {
    user_id: String,
    mood: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    activity: Option<String>,
    top_k: u32,
}

impl RecommendRequest {
    /// Fails with [`JukeJamError::InvalidRequest`] when the user id or mood
    /// is blank.
    pub fn new(user_id: &str, mood: &str) -> Result<Self> {
        let user_id = non_empty(user_id)
            .ok_or_else(|| JukeJamError::InvalidRequest("user id must not be empty".into()))?;
        let mood = non_empty(mood)
            .ok_or_else(|| JukeJamError::InvalidRequest("mood must not be empty".into()))?;
        Ok(Self {
            user_id,
            mood,
            activity: None,
            top_k: DEFAULT_TOP_K,
        })
    }

    /// Restrict recommendations to an activity context. Empty clears it.
    pub fn with_activity(mut self, activity: Option<&str>) -> Self {
        self.activity = activity.and_then(non_empty);
        self
    }

    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn mood(&self) -> &str {
        &self.mood
    }

    pub fn activity(&self) -> Option<&str> {
        self.activity.as_deref()
    }

    pub fn top_k(&self) -> u32 {
        self.top_k
    }
}

/// Mood a user picks for each activity context during onboarding.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Vibes {
    #[serde(rename = "vibe_study")]
    pub study: String,
    #[serde(rename = "vibe_workout")]
    pub workout: String,
    #[serde(rename = "vibe_getting_ready")]
    pub getting_ready: String,
    #[serde(rename = "vibe_cleaning")]
    pub cleaning: String,
}

/// Body of `POST /user/onboarding`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OnboardingRequest {
    user_id: String,
    favorite_genres: Vec<String>,
    favorite_artists: Vec<String>,
    #[serde(flatten)]
    vibes: Vibes,
}

impl OnboardingRequest {
    /// Validate and assemble an onboarding submission.
    ///
    /// Blank genres and artists are dropped. Fails with
    /// [`JukeJamError::InvalidRequest`] when the user id is blank or more than
    /// [`MAX_ONBOARDING_FAVORITES`] genres or artists remain.
    pub fn new(
        user_id: &str,
        favorite_genres: Vec<String>,
        favorite_artists: Vec<String>,
        vibes: Vibes,
    ) -> Result<Self> {
        let user_id = non_empty(user_id)
            .ok_or_else(|| JukeJamError::InvalidRequest("user id must not be empty".into()))?;

        let favorite_genres = clean_favorites("genres", favorite_genres)?;
        let favorite_artists = clean_favorites("artists", favorite_artists)?;

        Ok(Self {
            user_id,
            favorite_genres,
            favorite_artists,
            vibes,
        })
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn favorite_genres(&self) -> &[String] {
        &self.favorite_genres
    }

    pub fn favorite_artists(&self) -> &[String] {
        &self.favorite_artists
    }

    pub fn vibes(&self) -> &Vibes {
        &self.vibes
    }
}

fn clean_favorites(kind: &str, values: Vec<String>) -> Result<Vec<String>> {
    let cleaned: Vec<String> = values.iter().filter_map(|v| non_empty(v)).collect();
    if cleaned.len() > MAX_ONBOARDING_FAVORITES {
        return Err(JukeJamError::InvalidRequest(format!(
            "at most {MAX_ONBOARDING_FAVORITES} favorite {kind} allowed, got {}",
            cleaned.len()
        )));
    }
    Ok(cleaned)
}
