use crate::Result;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// What a screen shows for one piece of remote data.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    /// Nothing requested yet
    Idle,
    /// A request is in flight
    Loading,
    /// Latest request succeeded
    Loaded(T),
    /// Latest request failed; holds the message to show
    Failed(String),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Idle
    }
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            ViewState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Identifies one request issued through a [`RequestSlot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Whether a completed request was allowed to update the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// A newer request was issued meanwhile; the response was dropped
    Superseded,
}

/// View state for one logical action plus the generation of its newest request.
///
/// Each [`begin`](Self::begin) supersedes every earlier ticket, so when
/// responses arrive out of order only the newest one lands.
///
/// ```rust
/// use jukejam_client::screens::{Completion, RequestSlot, ViewState};
/// use jukejam_client::JukeJamError;
///
/// # tokio_test::block_on(async {
/// let slot: RequestSlot<Vec<String>> = RequestSlot::new();
///
/// let old = slot.begin();
/// let completion = slot.run(async { Ok::<_, JukeJamError>(vec!["new".to_string()]) }).await;
/// assert_eq!(completion, Completion::Applied);
///
/// // The older request answers last and is dropped.
/// assert_eq!(slot.complete(old, Ok(vec!["old".to_string()])), Completion::Superseded);
/// assert_eq!(slot.snapshot(), ViewState::Loaded(vec!["new".to_string()]));
/// # });
/// ```
#[derive(Debug)]
pub struct RequestSlot<T> {
    state: Mutex<ViewState<T>>,
    generation: AtomicU64,
}

impl<T: Clone> Default for RequestSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> RequestSlot<T> {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(ViewState::Idle),
            generation: AtomicU64::new(0),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ViewState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Issue a new request: bump the generation and show `Loading`.
    pub fn begin(&self) -> Ticket {
        let mut state = self.lock();
        let ticket = Ticket(self.generation.fetch_add(1, Ordering::SeqCst) + 1);
        *state = ViewState::Loading;
        ticket
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Store a result unless `ticket` was superseded.
    pub fn complete(&self, ticket: Ticket, result: Result<T>) -> Completion {
        let mut state = self.lock();
        if !self.is_current(ticket) {
            log::debug!("Discarding stale response for request #{}", ticket.0);
            return Completion::Superseded;
        }
        *state = match result {
            Ok(value) => ViewState::Loaded(value),
            Err(e) => ViewState::Failed(e.to_string()),
        };
        Completion::Applied
    }

    /// `begin`, await `request`, then `complete`.
    pub async fn run<F>(&self, request: F) -> Completion
    where
        F: Future<Output = Result<T>>,
    {
        let ticket = self.begin();
        let result = request.await;
        self.complete(ticket, result)
    }

    /// Back to `Idle`, superseding anything in flight.
    pub fn reset(&self) {
        let mut state = self.lock();
        self.generation.fetch_add(1, Ordering::SeqCst);
        *state = ViewState::Idle;
    }

    pub fn snapshot(&self) -> ViewState<T> {
        self.lock().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().is_loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::JukeJamError;

    #[test]
    fn test_lifecycle() {
        let slot: RequestSlot<u32> = RequestSlot::new();
        assert_eq!(slot.snapshot(), ViewState::Idle);

        let ticket = slot.begin();
        assert!(slot.is_loading());

        assert_eq!(slot.complete(ticket, Ok(7)), Completion::Applied);
        assert_eq!(slot.snapshot(), ViewState::Loaded(7));
        assert_eq!(slot.snapshot().loaded(), Some(&7));
    }

    #[test]
    fn test_failure_keeps_message_only() {
        let slot: RequestSlot<u32> = RequestSlot::new();
        let ticket = slot.begin();
        slot.complete(ticket, Err(JukeJamError::Http("connection refused".into())));
        assert_eq!(
            slot.snapshot().error(),
            Some("HTTP error: connection refused")
        );
    }

    #[test]
    fn test_out_of_order_completion_keeps_newest() {
        let slot: RequestSlot<&'static str> = RequestSlot::new();
        let first = slot.begin();
        let second = slot.begin();

        assert_eq!(slot.complete(second, Ok("second")), Completion::Applied);
        assert_eq!(slot.complete(first, Ok("first")), Completion::Superseded);
        assert_eq!(slot.snapshot(), ViewState::Loaded("second"));
    }

    #[test]
    fn test_stale_response_does_not_clear_loading() {
        let slot: RequestSlot<u32> = RequestSlot::new();
        let first = slot.begin();
        let _second = slot.begin();

        slot.complete(first, Ok(1));
        assert!(slot.is_loading());
    }

    #[test]
    fn test_reset_supersedes_in_flight() {
        let slot: RequestSlot<u32> = RequestSlot::new();
        let ticket = slot.begin();
        slot.reset();
        assert_eq!(slot.complete(ticket, Ok(1)), Completion::Superseded);
        assert_eq!(slot.snapshot(), ViewState::Idle);
    }

    #[tokio::test]
    async fn test_run() {
        let slot: RequestSlot<Vec<String>> = RequestSlot::new();
        let completion = slot
            .run(async { Ok::<_, JukeJamError>(vec!["pop".to_string()]) })
            .await;
        assert_eq!(completion, Completion::Applied);
        assert_eq!(slot.snapshot().loaded().map(Vec::len), Some(1));
    }
}
