use super::state::{Completion, RequestSlot, ViewState};
use crate::{JukeJamClient, OnboardingRequest, Vibes, MAX_ONBOARDING_FAVORITES};

/// Genre and mood choices offered during onboarding.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OnboardingOptions {
    pub genres: Vec<String>,
    pub moods: Vec<String>,
}

/// Answers collected so far.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OnboardingDraft {
    pub user_id: String,
    pub genres: Vec<String>,
    pub artists: Vec<String>,
    pub vibes: Vibes,
}

impl OnboardingDraft {
    pub fn new(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            ..Default::default()
        }
    }

    /// Select or deselect a genre. Selecting beyond the limit is refused and
    /// returns `false`.
    pub fn toggle_genre(&mut self, genre: &str) -> bool {
        toggle(&mut self.genres, genre)
    }

    /// Add an artist; blank names, duplicates and additions beyond the limit
    /// are refused.
    pub fn add_artist(&mut self, artist: &str) -> bool {
        let artist = artist.trim();
        if artist.is_empty()
            || self.artists.iter().any(|a| a == artist)
            || self.artists.len() >= MAX_ONBOARDING_FAVORITES
        {
            return false;
        }
        self.artists.push(artist.to_string());
        true
    }

    pub fn remove_artist(&mut self, artist: &str) {
        self.artists.retain(|a| a != artist);
    }

    pub fn to_request(&self) -> crate::Result<OnboardingRequest> {
        OnboardingRequest::new(
            &self.user_id,
            self.genres.clone(),
            self.artists.clone(),
            self.vibes.clone(),
        )
    }
}

fn toggle(selected: &mut Vec<String>, value: &str) -> bool {
    if let Some(pos) = selected.iter().position(|v| v == value) {
        selected.remove(pos);
        return true;
    }
    if selected.len() >= MAX_ONBOARDING_FAVORITES {
        return false;
    }
    selected.push(value.to_string());
    true
}

#[derive(Debug, Default)]
pub struct OnboardingScreen {
    options: RequestSlot<OnboardingOptions>,
    submission: RequestSlot<()>,
}

impl OnboardingScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load_options(&self, client: &dyn JukeJamClient) -> Completion {
        self.options
            .run(async {
                futures::try_join!(client.list_genres(), client.list_moods())
                    .map(|(genres, moods)| OnboardingOptions { genres, moods })
            })
            .await
    }

    /// Validate the draft and send it. An invalid draft fails without a
    /// network call.
    pub async fn submit(&self, client: &dyn JukeJamClient, draft: &OnboardingDraft) -> Completion {
        self.submission
            .run(async {
                let request = draft.to_request()?;
                client.submit_onboarding(&request).await
            })
            .await
    }

    pub fn options(&self) -> ViewState<OnboardingOptions> {
        self.options.snapshot()
    }

    pub fn submission(&self) -> ViewState<()> {
        self.submission.snapshot()
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.submission.snapshot(), ViewState::Loaded(()))
    }
}
