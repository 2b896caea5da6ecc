pub mod catalog;
pub mod output;
pub mod songs;
pub mod user;

use clap::Subcommand;
use jukejam_client::{JukeJamClientImpl, DEFAULT_TOP_K};
use output::OutputHandler;

#[derive(Subcommand)]
pub enum Commands {
    /// List all genres in the catalog
    Genres,

    /// List the available mood buckets
    Moods,

    /// List the available energy labels
    EnergyLevels,

    /// List existing user ids
    Users,

    /// Search the catalog
    ///
    /// Every filter is optional; blank values are ignored.
    ///
    /// Usage examples:
    /// # Songs by an artist
    /// jukejam search --artist "Drake" --top-k 5
    ///
    /// # Chill pop or soul
    /// jukejam search --genre pop --genre soul --mood chill
    Search {
        /// Title substring
        #[arg(long)]
        title: Option<String>,

        /// Artist substring
        #[arg(long)]
        artist: Option<String>,

        /// Genre filter (repeatable)
        #[arg(long = "genre")]
        genres: Vec<String>,

        /// Mood bucket
        #[arg(long)]
        mood: Option<String>,

        /// Energy label
        #[arg(long)]
        energy: Option<String>,

        /// Maximum number of results
        #[arg(long, default_value_t = DEFAULT_TOP_K)]
        top_k: u32,

        /// Show genre, labels, score and links for each song
        #[arg(long)]
        details: bool,
    },

    /// Recommend songs for a user and mood
    ///
    /// Usage examples:
    /// # Happy songs for alice while studying
    /// jukejam recommend alice happy --activity study
    Recommend {
        /// User id
        user_id: String,

        /// Mood bucket
        mood: String,

        /// Activity context, such as study or workout
        #[arg(long)]
        activity: Option<String>,

        /// Maximum number of results
        #[arg(long, default_value_t = DEFAULT_TOP_K)]
        top_k: u32,

        /// Show genre, labels, score and links for each song
        #[arg(long)]
        details: bool,
    },

    /// Show a user's taste profile
    Profile {
        /// User id
        user_id: String,
    },

    /// Submit onboarding answers for a new user
    ///
    /// At most five genres and five artists are accepted.
    ///
    /// Usage examples:
    /// jukejam onboard newbie --genre pop --artist Drake --study focus --workout hype \
    ///     --getting-ready happy --cleaning chill
    Onboard {
        /// New user id
        user_id: String,

        /// Favorite genre (repeatable)
        #[arg(long = "genre")]
        genres: Vec<String>,

        /// Favorite artist (repeatable)
        #[arg(long = "artist")]
        artists: Vec<String>,

        /// Mood while studying
        #[arg(long, default_value = "")]
        study: String,

        /// Mood while working out
        #[arg(long, default_value = "")]
        workout: String,

        /// Mood while getting ready
        #[arg(long, default_value = "")]
        getting_ready: String,

        /// Mood while cleaning
        #[arg(long, default_value = "")]
        cleaning: String,
    },

    /// Suggest songs for the current time of day
    Suggest {
        /// User id
        user_id: String,

        /// Maximum number of results
        #[arg(long, default_value_t = DEFAULT_TOP_K)]
        top_k: u32,

        /// Show genre, labels, score and links for each song
        #[arg(long)]
        details: bool,
    },

    /// Check that the backend is up
    Health,
}

/// Execute the appropriate command handler based on the parsed command
pub async fn execute_command(
    command: Commands,
    client: &JukeJamClientImpl,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let details = matches!(
        command,
        Commands::Search { details: true, .. }
            | Commands::Recommend { details: true, .. }
            | Commands::Suggest { details: true, .. }
    );
    let mut handler = output::create_handler(json, details);
    let handler: &mut dyn OutputHandler = handler.as_mut();

    match command {
        Commands::Genres => catalog::handle_genres(client, handler).await,
        Commands::Moods => catalog::handle_moods(client, handler).await,
        Commands::EnergyLevels => catalog::handle_energy_levels(client, handler).await,
        Commands::Users => catalog::handle_users(client, handler).await,
        Commands::Health => catalog::handle_health(client, handler).await,

        Commands::Search {
            title,
            artist,
            genres,
            mood,
            energy,
            top_k,
            ..
        } => {
            let form = songs::SearchArgs {
                title,
                artist,
                genres,
                mood,
                energy,
                top_k,
            };
            songs::handle_search(client, handler, &form).await
        }

        Commands::Recommend {
            user_id,
            mood,
            activity,
            top_k,
            ..
        } => {
            songs::handle_recommend(client, handler, &user_id, &mood, activity.as_deref(), top_k)
                .await
        }

        Commands::Suggest { user_id, top_k, .. } => {
            songs::handle_suggest(client, handler, &user_id, top_k).await
        }

        Commands::Profile { user_id } => user::handle_profile(client, handler, &user_id).await,

        Commands::Onboard {
            user_id,
            genres,
            artists,
            study,
            workout,
            getting_ready,
            cleaning,
        } => {
            let vibes = jukejam_client::Vibes {
                study,
                workout,
                getting_ready,
                cleaning,
            };
            user::handle_onboard(client, handler, &user_id, genres, artists, vibes).await
        }
    }
}
