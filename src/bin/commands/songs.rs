use super::output::{finish_list, OutputEvent, OutputHandler};
use jukejam_client::{JukeJamClient, JukeJamClientImpl, RecommendRequest, SearchRequest, Song};

/// Search flags as parsed from the command line
pub struct SearchArgs {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub genres: Vec<String>,
    pub mood: Option<String>,
    pub energy: Option<String>,
    pub top_k: u32,
}

impl SearchArgs {
    fn to_request(&self) -> SearchRequest {
        let mut builder = SearchRequest::builder().genres(&self.genres).top_k(self.top_k);
        if let Some(title) = &self.title {
            builder = builder.title(title);
        }
        if let Some(artist) = &self.artist {
            builder = builder.artist(artist);
        }
        if let Some(mood) = &self.mood {
            builder = builder.mood(mood);
        }
        if let Some(energy) = &self.energy {
            builder = builder.energy(energy);
        }
        builder.build()
    }
}

fn emit_songs(handler: &mut dyn OutputHandler, command: &str, songs: Vec<Song>) {
    let total = songs.len();
    for (i, song) in songs.into_iter().enumerate() {
        handler.handle_event(OutputEvent::SongFound { index: i + 1, song });
    }
    finish_list(handler, command, total);
}

pub async fn handle_search(
    client: &JukeJamClientImpl,
    handler: &mut dyn OutputHandler,
    args: &SearchArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let request = args.to_request();
    handler.handle_event(OutputEvent::Started {
        command: "songs".to_string(),
        detail: request.describe(),
    });
    let songs = client.search_songs(&request).await?;
    emit_songs(handler, "songs", songs);
    Ok(())
}

pub async fn handle_recommend(
    client: &JukeJamClientImpl,
    handler: &mut dyn OutputHandler,
    user_id: &str,
    mood: &str,
    activity: Option<&str>,
    top_k: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let request = RecommendRequest::new(user_id, mood)?
        .with_activity(activity)
        .with_top_k(top_k);
    let detail = match request.activity() {
        Some(activity) => format!("user={user_id} mood={mood} activity={activity}"),
        None => format!("user={user_id} mood={mood}"),
    };
    handler.handle_event(OutputEvent::Started {
        command: "recommendations".to_string(),
        detail,
    });
    let songs = client.recommend_songs(&request).await?;
    emit_songs(handler, "recommendations", songs);
    Ok(())
}

pub async fn handle_suggest(
    client: &JukeJamClientImpl,
    handler: &mut dyn OutputHandler,
    user_id: &str,
    top_k: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    handler.handle_event(OutputEvent::Started {
        command: "suggestions".to_string(),
        detail: format!("user={user_id}"),
    });
    let suggestion = client.auto_suggest(user_id, top_k).await?;
    handler.handle_event(OutputEvent::ContextInferred {
        context: suggestion.inferred_context,
    });
    emit_songs(handler, "suggestions", suggestion.tracks);
    Ok(())
}
