use super::state::{Completion, RequestSlot, ViewState};
use crate::{AutoSuggestion, JukeJamClient, RecommendRequest, Song, DEFAULT_TOP_K};
use std::sync::{Mutex, PoisonError};

/// Mood and activity currently picked on the home screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HomeSelection {
    pub mood: Option<String>,
    pub activity: Option<String>,
}

/// Home: mood picker, activity filter, recommendations and the time-of-day
/// suggestion.
///
/// Changing the mood or activity while a recommendation request is in flight
/// supersedes it; the older response is discarded when it arrives.
#[derive(Debug)]
pub struct HomeScreen {
    user_id: String,
    top_k: u32,
    selection: Mutex<HomeSelection>,
    recommendations: RequestSlot<Vec<Song>>,
    suggestion: RequestSlot<AutoSuggestion>,
}

impl HomeScreen {
    pub fn new(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            top_k: DEFAULT_TOP_K,
            selection: Mutex::new(HomeSelection::default()),
            recommendations: RequestSlot::new(),
            suggestion: RequestSlot::new(),
        }
    }

    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn selection(&self) -> HomeSelection {
        self.selection
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn update_selection(&self, update: impl FnOnce(&mut HomeSelection)) -> HomeSelection {
        let mut selection = self.selection.lock().unwrap_or_else(PoisonError::into_inner);
        update(&mut selection);
        selection.clone()
    }

    /// Pick a mood and fetch recommendations for it.
    pub async fn select_mood(&self, client: &dyn JukeJamClient, mood: &str) -> Completion {
        let selection = self.update_selection(|s| s.mood = Some(mood.to_string()));
        self.fetch(client, &selection).await
    }

    /// Change the activity filter. Refetches when a mood is already picked;
    /// returns `None` otherwise.
    pub async fn set_activity(
        &self,
        client: &dyn JukeJamClient,
        activity: Option<&str>,
    ) -> Option<Completion> {
        let selection = self.update_selection(|s| {
            s.activity = activity
                .map(str::trim)
                .filter(|a| !a.is_empty())
                .map(str::to_string)
        });
        if selection.mood.is_none() {
            return None;
        }
        Some(self.fetch(client, &selection).await)
    }

    /// Re-run the request for the current selection.
    pub async fn refresh(&self, client: &dyn JukeJamClient) -> Option<Completion> {
        let selection = self.selection();
        if selection.mood.is_none() {
            return None;
        }
        Some(self.fetch(client, &selection).await)
    }

    async fn fetch(&self, client: &dyn JukeJamClient, selection: &HomeSelection) -> Completion {
        let mood = selection.mood.as_deref().unwrap_or_default();
        self.recommendations
            .run(async {
                let request = RecommendRequest::new(&self.user_id, mood)?
                    .with_activity(selection.activity.as_deref())
                    .with_top_k(self.top_k);
                client.recommend_songs(&request).await
            })
            .await
    }

    pub async fn load_suggestion(&self, client: &dyn JukeJamClient) -> Completion {
        self.suggestion
            .run(client.auto_suggest(&self.user_id, self.top_k))
            .await
    }

    pub fn recommendations(&self) -> ViewState<Vec<Song>> {
        self.recommendations.snapshot()
    }

    pub fn suggestion(&self) -> ViewState<AutoSuggestion> {
        self.suggestion.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::test_support::{song, GatedClient};
    use crate::MockJukeJamClient;

    #[tokio::test]
    async fn test_select_mood_requests_recommendations() {
        let mut client = MockJukeJamClient::new();
        client
            .expect_recommend_songs()
            .withf(|req| {
                req.user_id() == "alice"
                    && req.mood() == "chill"
                    && req.activity().is_none()
                    && req.top_k() == 10
            })
            .times(1)
            .returning(|_| Ok(vec![song("t1"), song("t2")]));

        let screen = HomeScreen::new("alice").with_top_k(10);
        assert_eq!(screen.select_mood(&client, "chill").await, Completion::Applied);

        let ids: Vec<String> = screen
            .recommendations()
            .loaded()
            .unwrap()
            .iter()
            .map(|s| s.track_id.clone())
            .collect();
        assert_eq!(ids, vec!["t1", "t2"]);
    }

    #[tokio::test]
    async fn test_blank_mood_fails_without_request() {
        let client = MockJukeJamClient::new();
        let screen = HomeScreen::new("alice");

        assert_eq!(screen.select_mood(&client, "  ").await, Completion::Applied);
        assert_eq!(
            screen.recommendations().error(),
            Some("Invalid request: mood must not be empty")
        );
    }

    #[tokio::test]
    async fn test_activity_without_mood_does_not_fetch() {
        let client = MockJukeJamClient::new();
        let screen = HomeScreen::new("alice");

        assert_eq!(screen.set_activity(&client, Some("workout")).await, None);
        assert_eq!(screen.refresh(&client).await, None);
        assert_eq!(screen.selection().activity.as_deref(), Some("workout"));
        assert_eq!(screen.recommendations(), ViewState::Idle);
    }

    #[tokio::test]
    async fn test_stale_recommendation_is_discarded() {
        let (client, open_gate) = GatedClient::new("study");
        let screen = HomeScreen::new("alice");
        screen.select_mood(&client, "happy").await;

        let slow = screen.set_activity(&client, Some("study"));
        let fast = async {
            let completion = screen.set_activity(&client, Some("workout")).await;
            let _ = open_gate.send(());
            completion
        };
        let (slow_completion, fast_completion) = futures::join!(slow, fast);

        assert_eq!(slow_completion, Some(Completion::Superseded));
        assert_eq!(fast_completion, Some(Completion::Applied));
        assert_eq!(
            screen.recommendations(),
            ViewState::Loaded(vec![song("workout")])
        );
    }

    #[tokio::test]
    async fn test_load_suggestion() {
        let mut client = MockJukeJamClient::new();
        client
            .expect_auto_suggest()
            .withf(|user_id, top_k| user_id == "alice" && *top_k == DEFAULT_TOP_K)
            .times(1)
            .returning(|_, _| {
                Ok(AutoSuggestion {
                    tracks: vec![song("s1")],
                    ..Default::default()
                })
            });

        let screen = HomeScreen::new("alice");
        screen.load_suggestion(&client).await;
        assert_eq!(screen.suggestion().loaded().unwrap().tracks.len(), 1);
    }
}
