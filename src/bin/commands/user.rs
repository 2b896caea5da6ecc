use super::output::{OutputEvent, OutputHandler};
use jukejam_client::{JukeJamClient, JukeJamClientImpl, OnboardingRequest, Vibes};

pub async fn handle_profile(
    client: &JukeJamClientImpl,
    handler: &mut dyn OutputHandler,
    user_id: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    handler.handle_event(OutputEvent::Started {
        command: "profile".to_string(),
        detail: format!("user={user_id}"),
    });
    let profile = client.get_user_profile(user_id).await?;
    handler.handle_event(OutputEvent::ProfileLoaded { profile });
    Ok(())
}

pub async fn handle_onboard(
    client: &JukeJamClientImpl,
    handler: &mut dyn OutputHandler,
    user_id: &str,
    genres: Vec<String>,
    artists: Vec<String>,
    vibes: Vibes,
) -> Result<(), Box<dyn std::error::Error>> {
    // Rejects bad input before anything is sent.
    let request = OnboardingRequest::new(user_id, genres, artists, vibes)?;

    handler.handle_event(OutputEvent::Started {
        command: "onboarding".to_string(),
        detail: format!("user={}", request.user_id()),
    });
    client.submit_onboarding(&request).await?;
    handler.handle_event(OutputEvent::OnboardingSaved {
        user_id: request.user_id().to_string(),
    });
    Ok(())
}
