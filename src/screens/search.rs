use super::state::{Completion, RequestSlot, ViewState};
use crate::{JukeJamClient, SearchRequest, Song, DEFAULT_TOP_K};

/// Values offered by the search filter pickers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchFilters {
    pub genres: Vec<String>,
    pub moods: Vec<String>,
    pub energy_levels: Vec<String>,
}

/// Raw contents of the search form as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchForm {
    pub title: String,
    pub artist: String,
    pub genres: Vec<String>,
    pub mood: Option<String>,
    pub energy: Option<String>,
}

impl SearchForm {
    pub fn to_request(&self, top_k: u32) -> SearchRequest {
        let mut builder = SearchRequest::builder()
            .title(&self.title)
            .artist(&self.artist)
            .genres(&self.genres)
            .top_k(top_k);
        if let Some(mood) = &self.mood {
            builder = builder.mood(mood);
        }
        if let Some(energy) = &self.energy {
            builder = builder.energy(energy);
        }
        builder.build()
    }
}

#[derive(Debug)]
pub struct SearchScreen {
    top_k: u32,
    filters: RequestSlot<SearchFilters>,
    results: RequestSlot<Vec<Song>>,
}

impl Default for SearchScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchScreen {
    pub fn new() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            filters: RequestSlot::new(),
            results: RequestSlot::new(),
        }
    }

    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = top_k;
        self
    }

    /// Load genre, mood and energy options for the pickers.
    pub async fn load_filters(&self, client: &dyn JukeJamClient) -> Completion {
        self.filters
            .run(async {
                futures::try_join!(
                    client.list_genres(),
                    client.list_moods(),
                    client.list_energy_levels()
                )
                .map(|(genres, moods, energy_levels)| SearchFilters {
                    genres,
                    moods,
                    energy_levels,
                })
            })
            .await
    }

    /// Run a search for the form. A newer search supersedes an older one.
    pub async fn search(&self, client: &dyn JukeJamClient, form: &SearchForm) -> Completion {
        let request = form.to_request(self.top_k);
        self.results.run(client.search_songs(&request)).await
    }

    pub fn filters(&self) -> ViewState<SearchFilters> {
        self.filters.snapshot()
    }

    pub fn results(&self) -> ViewState<Vec<Song>> {
        self.results.snapshot()
    }

    pub fn clear_results(&self) {
        self.results.reset();
    }
}
