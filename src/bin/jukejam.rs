mod commands;

use clap::Parser;
use commands::{execute_command, Commands};
use jukejam_client::{ClientConfig, JukeJamClientImpl};

/// Command-line client for the JukeJam recommendation backend
#[derive(Parser)]
#[command(
    name = "jukejam",
    about = "Command-line client for the JukeJam recommendation backend",
    long_about = None
)]
struct Cli {
    /// Show detailed debug information
    #[arg(long, global = true)]
    verbose: bool,

    /// Backend address (defaults to $JUKEJAM_API_URL, then http://127.0.0.1:8000)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Print results as JSON, one document per line
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let mut config = ClientConfig::from_env();
    if let Some(base_url) = &args.base_url {
        config = config.with_base_url(base_url);
    }
    log::debug!("Using backend at {}", config.base_url());

    let http_client = http_client::native::NativeClient::new();
    let client = JukeJamClientImpl::new(Box::new(http_client), config);

    if let Err(e) = execute_command(args.command, &client, args.json).await {
        eprintln!("Command failed: {e}");
        std::process::exit(1);
    }

    Ok(())
}
