use crate::{
    AutoSuggestion, HealthStatus, JukeJamClient, OnboardingRequest, RecommendRequest, Result,
    SearchRequest, Song, UserProfile,
};
use async_trait::async_trait;
use std::cell::RefCell;
use tokio::sync::oneshot;

pub(crate) fn song(track_id: &str) -> Song {
    Song {
        track_id: track_id.to_string(),
        ..Default::default()
    }
}

/// Answers searches and recommendations with a single song named after the
/// request key (search title or recommendation activity). The request whose
/// key matches `gated_key` is held until the returned sender fires.
pub(crate) struct GatedClient {
    gated_key: String,
    gate: RefCell<Option<oneshot::Receiver<()>>>,
}

impl GatedClient {
    pub(crate) fn new(gated_key: &str) -> (Self, oneshot::Sender<()>) {
        let (open_gate, gate) = oneshot::channel();
        let client = Self {
            gated_key: gated_key.to_string(),
            gate: RefCell::new(Some(gate)),
        };
        (client, open_gate)
    }

    async fn answer(&self, key: &str) -> Result<Vec<Song>> {
        if key == self.gated_key {
            let gate = self.gate.borrow_mut().take();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
        }
        Ok(vec![song(key)])
    }
}

#[async_trait(?Send)]
impl JukeJamClient for GatedClient {
    async fn list_genres(&self) -> Result<Vec<String>> {
        unimplemented!()
    }
    async fn list_moods(&self) -> Result<Vec<String>> {
        unimplemented!()
    }
    async fn list_energy_levels(&self) -> Result<Vec<String>> {
        unimplemented!()
    }
    async fn list_users(&self) -> Result<Vec<String>> {
        unimplemented!()
    }
    async fn search_songs(&self, request: &SearchRequest) -> Result<Vec<Song>> {
        self.answer(request.title().unwrap_or("none")).await
    }
    async fn recommend_songs(&self, request: &RecommendRequest) -> Result<Vec<Song>> {
        self.answer(request.activity().unwrap_or("none")).await
    }
    async fn get_user_profile(&self, _user_id: &str) -> Result<UserProfile> {
        unimplemented!()
    }
    async fn submit_onboarding(&self, _request: &OnboardingRequest) -> Result<()> {
        unimplemented!()
    }
    async fn auto_suggest(&self, _user_id: &str, _top_k: u32) -> Result<AutoSuggestion> {
        unimplemented!()
    }
    async fn health(&self) -> Result<HealthStatus> {
        unimplemented!()
    }
}
