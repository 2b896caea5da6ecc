use super::state::{RequestSlot, ViewState};
use crate::JukeJamClient;

/// Login: pick an existing user or continue to onboarding with a new id.
#[derive(Debug, Default)]
pub struct LoginScreen {
    existing_users: RequestSlot<Vec<String>>,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the existing-users list.
    ///
    /// A failure is not shown as an error: the screen falls back to an empty
    /// list so a new user can still proceed to onboarding.
    pub async fn load(&self, client: &dyn JukeJamClient) {
        let ticket = self.existing_users.begin();
        let users = match client.list_users().await {
            Ok(users) => users,
            Err(e) => {
                log::warn!("Could not load existing users, showing none: {e}");
                Vec::new()
            }
        };
        self.existing_users.complete(ticket, Ok(users));
    }

    pub fn existing_users(&self) -> ViewState<Vec<String>> {
        self.existing_users.snapshot()
    }

    /// True when `user_id` matches a loaded user. Ids are compared
    /// case-insensitively.
    pub fn is_existing_user(&self, user_id: &str) -> bool {
        let user_id = user_id.trim();
        self.existing_users
            .snapshot()
            .loaded()
            .is_some_and(|users| users.iter().any(|u| u.eq_ignore_ascii_case(user_id)))
    }
}
