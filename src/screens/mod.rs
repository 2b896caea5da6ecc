//! Per-screen state holders.
//!
//! Each screen owns one [`RequestSlot`] per piece of remote data it shows and
//! drives it through a `&dyn JukeJamClient`. Rendering is left to the caller.

pub mod home;
pub mod login;
pub mod onboarding;
pub mod profile;
pub mod search;
pub mod state;

#[cfg(test)]
mod test_support;

pub use home::{HomeScreen, HomeSelection};
pub use login::LoginScreen;
pub use onboarding::{OnboardingDraft, OnboardingOptions, OnboardingScreen};
pub use profile::ProfileScreen;
pub use search::{SearchFilters, SearchForm, SearchScreen};
pub use state::{Completion, RequestSlot, Ticket, ViewState};
