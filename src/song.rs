use crate::decode::null_as_default;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

const SPOTIFY_TRACK_URL: &str = "https://open.spotify.com/track";
const SPOTIFY_EMBED_URL: &str = "https://open.spotify.com/embed/track";
const YOUTUBE_SEARCH_URL: &str = "https://www.youtube.com/results";

/// One catalog track as returned by search and recommendation calls.
///
/// Every field tolerates being absent or `null` in the response and falls back
/// to its zero value. The categorical labels (`mood_bucket`, `energy_label`,
/// `mood_label`, `tempo_label`) are backend vocabulary and are passed through
/// unvalidated.
///
/// # Examples
///
/// ```rust
/// use jukejam_client::Song;
///
/// let song: Song = serde_json::from_str(r#"{
///     "track_id": "abc123",
///     "title": "Blue",
///     "artist_name": "Sky",
///     "duration_ms": 230000
/// }"#).unwrap();
///
/// assert_eq!(song.formatted_duration(), "3:50");
/// assert_eq!(song.spotify_url(), "https://open.spotify.com/track/abc123");
/// assert_eq!(song.popularity, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Song {
    /// Opaque catalog identifier
    #[serde(default, deserialize_with = "null_as_default")]
    pub track_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub artist_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub album_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genre: String,
    /// Track length in milliseconds
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration_ms: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub popularity: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mood_bucket: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub energy_label: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mood_label: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tempo_label: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub danceability: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub energy: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub valence: f64,
    /// Relevance score. Only meaningful relative to other songs in the same
    /// response; no fixed range.
    #[serde(default, deserialize_with = "null_as_default")]
    pub score: f64,
    /// Per-component contribution to `score`, present on recommendations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_breakdown: Option<BTreeMap<String, f64>>,
    /// Human-readable reason the song was recommended
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl Song {
    /// Duration as `minutes:seconds`, seconds zero-padded to two digits.
    pub fn formatted_duration(&self) -> String {
        format_duration_ms(self.duration_ms)
    }

    /// Catalog page for this track.
    pub fn spotify_url(&self) -> String {
        format!("{SPOTIFY_TRACK_URL}/{}", self.track_id)
    }

    /// Embeddable player URL for previewing this track.
    pub fn embed_url(&self) -> String {
        format!("{SPOTIFY_EMBED_URL}/{}", self.track_id)
    }

    /// Video-site search for "title artist".
    pub fn youtube_search_url(&self) -> String {
        let query = format!("{} {}", self.title, self.artist_name);
        format!(
            "{YOUTUBE_SEARCH_URL}?search_query={}",
            urlencoding::encode(query.trim())
        )
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.album_name.is_empty() {
            write!(f, "{} - {}", self.artist_name, self.title)
        } else {
            write!(f, "{} - {} [{}]", self.artist_name, self.title, self.album_name)
        }
    }
}

/// Format a millisecond duration as `m:ss`.
pub fn format_duration_ms(duration_ms: u64) -> String {
    let total_seconds = duration_ms / 1000;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}
