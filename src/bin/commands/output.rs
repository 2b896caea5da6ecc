use jukejam_client::{HealthStatus, InferredContext, Song, UserProfile};
use serde::Serialize;

/// Events emitted by command handlers
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum OutputEvent {
    /// A request is about to be sent
    Started { command: String, detail: String },
    /// A plain catalog label (genre, mood, energy level, user id)
    LabelFound { index: usize, label: String },
    /// A song in a result list, in server order
    SongFound { index: usize, song: Song },
    /// Context inferred for an auto-suggestion
    ContextInferred { context: InferredContext },
    ProfileLoaded { profile: UserProfile },
    HealthChecked { health: HealthStatus },
    /// Onboarding answers were accepted
    OnboardingSaved { user_id: String },
    /// A list finished with this many entries
    Summary { command: String, total: usize },
    NoResults { command: String },
}

pub trait OutputHandler {
    fn handle_event(&mut self, event: OutputEvent);
}

/// Status messages go to stderr, results go to stdout as readable lines.
pub struct HumanReadableHandler {
    details: bool,
}

impl HumanReadableHandler {
    pub fn new(details: bool) -> Self {
        Self { details }
    }

    fn print_song(&self, index: usize, song: &Song) {
        println!("{index:>3}. {song} ({})", song.formatted_duration());
        if !self.details {
            return;
        }
        println!(
            "     genre={} mood={} energy={} tempo={} score={:.3}",
            song.genre, song.mood_bucket, song.energy_label, song.tempo_label, song.score
        );
        if let Some(explanation) = &song.explanation {
            println!("     why: {explanation}");
        }
        println!("     {}", song.spotify_url());
        println!("     {}", song.youtube_search_url());
    }

    fn print_weights(title: &str, weights: &[(String, f64)]) {
        if weights.is_empty() {
            return;
        }
        println!("{title}:");
        for (label, share) in weights {
            println!("  {label:<16} {:>5.1}%", share * 100.0);
        }
    }
}

impl OutputHandler for HumanReadableHandler {
    fn handle_event(&mut self, event: OutputEvent) {
        match event {
            OutputEvent::Started { command, detail } => {
                if detail.is_empty() {
                    eprintln!("Fetching {command}...");
                } else {
                    eprintln!("Fetching {command} ({detail})...");
                }
            }
            OutputEvent::LabelFound { label, .. } => {
                println!("{label}");
            }
            OutputEvent::SongFound { index, song } => {
                self.print_song(index, &song);
            }
            OutputEvent::ContextInferred { context } => {
                eprintln!(
                    "Inferred {} for {} ({}:00), confidence {:.0}%",
                    context.suggested_mood,
                    context.time_of_day,
                    context.current_hour,
                    context.confidence * 100.0
                );
                if !context.reason.is_empty() {
                    eprintln!("  {}", context.reason);
                }
            }
            OutputEvent::ProfileLoaded { profile } => {
                println!("User: {}", profile.user_id);
                println!("Top genres: {}", profile.top_genres.join(", "));
                println!("Dominant mood: {}", profile.dominant_mood());
                println!(
                    "Average energy: {:.2}  Skip rate: {:.0}%",
                    profile.avg_energy_preference,
                    profile.skip_rate_fraction() * 100.0
                );
                Self::print_weights("Moods", &profile.mood_shares());
                Self::print_weights("Listening time", &profile.listening_time_shares());
                Self::print_weights("Platforms", &profile.platform_shares());
            }
            OutputEvent::HealthChecked { health } => {
                println!(
                    "{}: {} songs, {} users ({} with time context)",
                    health.status,
                    health.songs_loaded,
                    health.users_loaded,
                    health.time_context_users
                );
            }
            OutputEvent::OnboardingSaved { user_id } => {
                eprintln!("Saved onboarding answers for '{user_id}'");
            }
            OutputEvent::Summary { total, .. } => {
                eprintln!("Displayed {total} result(s)");
            }
            OutputEvent::NoResults { command } => {
                eprintln!("No {command} found");
            }
        }
    }
}

/// Status events go to stderr as JSON, results go to stdout one per line.
#[derive(Default)]
pub struct JsonHandler;

impl JsonHandler {
    pub fn new() -> Self {
        Self
    }
}

impl OutputHandler for JsonHandler {
    fn handle_event(&mut self, event: OutputEvent) {
        let result = match &event {
            OutputEvent::LabelFound { label, .. } => serde_json::to_string(label),
            OutputEvent::SongFound { song, .. } => serde_json::to_string(song),
            OutputEvent::ProfileLoaded { profile } => serde_json::to_string(profile),
            OutputEvent::HealthChecked { health } => serde_json::to_string(health),
            _ => {
                if let Ok(json) = serde_json::to_string(&event) {
                    eprintln!("{json}");
                }
                return;
            }
        };
        if let Ok(json) = result {
            println!("{json}");
        }
    }
}

pub fn create_handler(json: bool, details: bool) -> Box<dyn OutputHandler> {
    if json {
        Box::new(JsonHandler::new())
    } else {
        Box::new(HumanReadableHandler::new(details))
    }
}

/// Emit `Summary` or `NoResults` depending on `total`.
pub fn finish_list(handler: &mut dyn OutputHandler, command: &str, total: usize) {
    if total == 0 {
        handler.handle_event(OutputEvent::NoResults {
            command: command.to_string(),
        });
    } else {
        handler.handle_event(OutputEvent::Summary {
            command: command.to_string(),
            total,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        events: Vec<OutputEvent>,
    }

    impl OutputHandler for Recorder {
        fn handle_event(&mut self, event: OutputEvent) {
            self.events.push(event);
        }
    }

    #[test]
    fn test_json_handler_default() {
        let mut handler = JsonHandler::default();
        handler.handle_event(OutputEvent::NoResults {
            command: "genres".to_string(),
        });
    }

    #[test]
    fn test_finish_list() {
        let mut recorder = Recorder::default();
        finish_list(&mut recorder, "songs", 0);
        finish_list(&mut recorder, "songs", 3);
        assert!(matches!(recorder.events[0], OutputEvent::NoResults { .. }));
        assert!(matches!(
            recorder.events[1],
            OutputEvent::Summary { total: 3, .. }
        ));
    }
}
