//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use trip_planner::{ClientResult, Session, SessionStore};

use super::session::LocalSessionStore;

/// Toasts dismiss themselves after this many milliseconds
pub const TOAST_MS: u32 = 3000;

/// One toast slot; each message shown gets a new generation
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastSlot {
    pub text: Option<String>,
    generation: u64,
}

impl ToastSlot {
    /// Replace the message, returning its generation
    pub fn show(&mut self, message: &str) -> u64 {
        self.generation += 1;
        self.text = Some(message.to_string());
        self.generation
    }

    /// Clear the message if it is still the one from `generation`
    pub fn dismiss(&mut self, generation: u64) {
        if self.generation == generation {
            self.text = None;
        }
    }
}

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Current session, mirrored from local storage
    pub session: RwSignal<Option<Session>>,
    /// Error message to display
    pub error: RwSignal<ToastSlot>,
    /// Success message (for toasts)
    pub success: RwSignal<ToastSlot>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        session: create_rw_signal(LocalSessionStore.load()),
        error: create_rw_signal(ToastSlot::default()),
        success: create_rw_signal(ToastSlot::default()),
    };

    provide_context(state);
}

/// Global state of the current component tree
pub fn use_global_state() -> GlobalState {
    expect_context::<GlobalState>()
}

impl GlobalState {
    pub fn is_logged_in(&self) -> bool {
        self.session.with(|s| s.is_some())
    }

    /// User id of the stored session
    pub fn user_id(&self) -> ClientResult<String> {
        LocalSessionStore.user_id()
    }

    /// Persist a fresh session
    pub fn log_in(&self, session: Session) -> ClientResult<()> {
        LocalSessionStore.save(&session)?;
        self.session.set(Some(session));
        Ok(())
    }

    /// Forget the session in storage and in memory
    pub fn log_out(&self) {
        if let Err(e) = LocalSessionStore.clear() {
            web_sys::console::error_1(&format!("Failed to clear session: {}", e).into());
        }
        self.session.set(None);
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        show_toast(self.success, message);
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        show_toast(self.error, message);
    }
}

/// A newer message in the same slot outlives the older message's timer
fn show_toast(slot: RwSignal<ToastSlot>, message: &str) {
    let mut generation = 0;
    slot.update(|s| generation = s.show(message));

    gloo_timers::callback::Timeout::new(TOAST_MS, move || {
        slot.update(|s| s.dismiss(generation));
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_dismiss_keeps_newer_message() {
        let mut slot = ToastSlot::default();
        let first = slot.show("Error creating trip. Please try again.");
        let second = slot.show("Budget is required");

        // The first message's timer fires while the second is showing
        slot.dismiss(first);
        assert_eq!(slot.text.as_deref(), Some("Budget is required"));

        slot.dismiss(second);
        assert_eq!(slot.text, None);
    }

    #[test]
    fn test_dismiss_current_message() {
        let mut slot = ToastSlot::default();
        let generation = slot.show("Trip created successfully!");
        assert_eq!(slot.text.as_deref(), Some("Trip created successfully!"));

        slot.dismiss(generation);
        assert_eq!(slot.text, None);
    }
}
