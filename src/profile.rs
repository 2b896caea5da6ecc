use crate::decode::null_as_default;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Label returned by [`UserProfile::dominant_mood`] when no mood weights exist.
pub const UNKNOWN_MOOD: &str = "unknown";

/// Aggregated listening-taste summary for one user.
///
/// The three distributions map a category label to a weight. Weights are
/// relative: they are not guaranteed to sum to 1, so use
/// [`relative_weights`] when shares are needed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_id: String,
    /// Genres in server-provided rank order
    #[serde(default, deserialize_with = "null_as_default")]
    pub top_genres: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub preferred_moods: BTreeMap<String, f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub avg_energy_preference: f64,
    /// Time-of-day label (morning, afternoon, night) to weight
    #[serde(default, deserialize_with = "null_as_default")]
    pub listening_time_profile: BTreeMap<String, f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skip_rate: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub platform_mix: BTreeMap<String, f64>,
}

impl UserProfile {
    /// The mood with the highest weight, or [`UNKNOWN_MOOD`].
    ///
    /// Ties go to the alphabetically first label.
    pub fn dominant_mood(&self) -> &str {
        dominant_label(&self.preferred_moods).unwrap_or(UNKNOWN_MOOD)
    }

    /// Skip rate as a fraction in `[0, 1]`.
    ///
    /// Values above 1 are read as percentages.
    pub fn skip_rate_fraction(&self) -> f64 {
        let rate = if self.skip_rate > 1.0 {
            self.skip_rate / 100.0
        } else {
            self.skip_rate
        };
        rate.clamp(0.0, 1.0)
    }

    pub fn mood_shares(&self) -> Vec<(String, f64)> {
        relative_weights(&self.preferred_moods)
    }

    pub fn listening_time_shares(&self) -> Vec<(String, f64)> {
        relative_weights(&self.listening_time_profile)
    }

    pub fn platform_shares(&self) -> Vec<(String, f64)> {
        relative_weights(&self.platform_mix)
    }
}

/// Label with the maximum weight; `None` for an empty mapping.
pub fn dominant_label(weights: &BTreeMap<String, f64>) -> Option<&str> {
    let mut best: Option<(&str, f64)> = None;
    for (label, &weight) in weights {
        match best {
            Some((_, best_weight)) if weight <= best_weight => {}
            _ => best = Some((label.as_str(), weight)),
        }
    }
    best.map(|(label, _)| label)
}

/// Each label with its share of the mapping total, heaviest first.
///
/// A mapping whose weights sum to zero (or less) yields zero shares.
pub fn relative_weights(weights: &BTreeMap<String, f64>) -> Vec<(String, f64)> {
    let total: f64 = weights.values().sum();
    let mut shares: Vec<(String, f64)> = weights
        .iter()
        .map(|(label, &weight)| {
            let share = if total > 0.0 { weight / total } else { 0.0 };
            (label.clone(), share)
        })
        .collect();
    shares.sort_by(|a, b| b.1.total_cmp(&a.1));
    shares
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_dominant_mood() {
        let profile = UserProfile {
            preferred_moods: weights(&[("happy", 0.2), ("chill", 0.6), ("sad", 0.2)]),
            ..Default::default()
        };
        assert_eq!(profile.dominant_mood(), "chill");
    }

    #[test]
    fn test_dominant_mood_empty_is_unknown() {
        let profile = UserProfile::default();
        assert_eq!(profile.dominant_mood(), UNKNOWN_MOOD);
    }

    #[test]
    fn test_dominant_mood_tie_picks_first_label() {
        let profile = UserProfile {
            preferred_moods: weights(&[
                ("happy", 0.25),
                ("chill", 0.25),
                ("hype", 0.25),
                ("sad", 0.25),
            ]),
            ..Default::default()
        };
        assert_eq!(profile.dominant_mood(), "chill");
    }

    #[test]
    fn test_relative_weights_do_not_assume_unit_sum() {
        let shares = relative_weights(&weights(&[("mobile", 3.0), ("desktop", 1.0)]));
        assert_eq!(
            shares,
            vec![("mobile".to_string(), 0.75), ("desktop".to_string(), 0.25)]
        );
    }

    #[test]
    fn test_relative_weights_all_zero() {
        let shares = relative_weights(&weights(&[("morning", 0.0), ("night", 0.0)]));
        assert!(shares.iter().all(|(_, share)| *share == 0.0));
        assert_eq!(shares.len(), 2);
    }

    #[test]
    fn test_skip_rate_fraction() {
        let mut profile = UserProfile {
            skip_rate: 0.12,
            ..Default::default()
        };
        assert_eq!(profile.skip_rate_fraction(), 0.12);

        profile.skip_rate = 35.0;
        assert_eq!(profile.skip_rate_fraction(), 0.35);

        profile.skip_rate = -0.5;
        assert_eq!(profile.skip_rate_fraction(), 0.0);
    }

    #[test]
    fn test_decode_profile_with_nulls() {
        let profile: UserProfile = serde_json::from_str(
            r#"{
                "user_id": "alice",
                "top_genres": ["pop", "indie", "k-pop"],
                "preferred_moods": null,
                "skip_rate": 0.1
            }"#,
        )
        .unwrap();
        assert_eq!(profile.user_id, "alice");
        assert_eq!(profile.top_genres, vec!["pop", "indie", "k-pop"]);
        assert!(profile.preferred_moods.is_empty());
        assert!(profile.platform_mix.is_empty());
        assert_eq!(profile.avg_energy_preference, 0.0);
        assert_eq!(profile.dominant_mood(), UNKNOWN_MOOD);
    }
}
