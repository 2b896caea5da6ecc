use super::state::{Completion, RequestSlot, ViewState};
use crate::{JukeJamClient, UserProfile};

/// Taste summary for the signed-in user.
#[derive(Debug, Default)]
pub struct ProfileScreen {
    profile: RequestSlot<UserProfile>,
}

impl ProfileScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load(&self, client: &dyn JukeJamClient, user_id: &str) -> Completion {
        self.profile.run(client.get_user_profile(user_id)).await
    }

    pub fn profile(&self) -> ViewState<UserProfile> {
        self.profile.snapshot()
    }
}
