use super::output::{finish_list, OutputEvent, OutputHandler};
use jukejam_client::{JukeJamClient, JukeJamClientImpl};

fn started(handler: &mut dyn OutputHandler, command: &str) {
    handler.handle_event(OutputEvent::Started {
        command: command.to_string(),
        detail: String::new(),
    });
}

fn emit_labels(handler: &mut dyn OutputHandler, command: &str, labels: Vec<String>) {
    let total = labels.len();
    for (i, label) in labels.into_iter().enumerate() {
        handler.handle_event(OutputEvent::LabelFound {
            index: i + 1,
            label,
        });
    }
    finish_list(handler, command, total);
}

pub async fn handle_genres(
    client: &JukeJamClientImpl,
    handler: &mut dyn OutputHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    started(handler, "genres");
    let genres = client.list_genres().await?;
    emit_labels(handler, "genres", genres);
    Ok(())
}

pub async fn handle_moods(
    client: &JukeJamClientImpl,
    handler: &mut dyn OutputHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    started(handler, "moods");
    let moods = client.list_moods().await?;
    emit_labels(handler, "moods", moods);
    Ok(())
}

pub async fn handle_energy_levels(
    client: &JukeJamClientImpl,
    handler: &mut dyn OutputHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    started(handler, "energy levels");
    let levels = client.list_energy_levels().await?;
    emit_labels(handler, "energy levels", levels);
    Ok(())
}

pub async fn handle_users(
    client: &JukeJamClientImpl,
    handler: &mut dyn OutputHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    started(handler, "users");
    let users = client.list_users().await?;
    emit_labels(handler, "users", users);
    Ok(())
}

pub async fn handle_health(
    client: &JukeJamClientImpl,
    handler: &mut dyn OutputHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    started(handler, "health");
    let health = client.health().await?;
    let ok = health.is_ok();
    let status = health.status.clone();
    handler.handle_event(OutputEvent::HealthChecked { health });
    if !ok {
        return Err(format!("backend reported status '{status}'").into());
    }
    Ok(())
}
