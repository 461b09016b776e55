//! View-model for the person form.
//!
//! The controller is built explicitly by the composition root and handed to
//! the view. The view calls the intent methods and renders whatever the
//! channel publishes; it never touches state directly.

use crate::form::{FormIntent, FormReducer, FormState};
use crate::model::Person;
use crate::mvi::{StateChannel, Store, SubscribeMode, Subscription, SubscriptionId};

/// Intent handlers plus a read-only view of the published form state.
///
/// Clones share the same state and observers.
#[derive(Clone, Debug)]
pub struct FormController {
    store: Store<FormReducer>,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(SubscribeMode::default())
    }
}

impl FormController {
    /// Create a controller holding the empty form.
    pub fn new(mode: SubscribeMode) -> Self {
        Self {
            store: Store::new(mode),
        }
    }

    pub fn set_first_name(&self, text: impl Into<String>) {
        self.dispatch(FormIntent::SetFirstName(text.into()));
    }

    pub fn set_last_name(&self, text: impl Into<String>) {
        self.dispatch(FormIntent::SetLastName(text.into()));
    }

    /// Store the raw age text; `age` becomes `None` when it does not parse.
    pub fn set_age(&self, text: impl Into<String>) {
        self.dispatch(FormIntent::SetAge(text.into()));
    }

    /// Validate the current fields.
    ///
    /// Returns the new person on success. On failure returns `None` and the
    /// published state carries the error message; the previous result is kept.
    pub fn submit(&self) -> Option<Person> {
        self.dispatch(FormIntent::Submit)
    }

    /// Replace the state with the empty form.
    pub fn reset(&self) {
        self.dispatch(FormIntent::Reset);
    }

    /// Apply any intent and publish the resulting state.
    ///
    /// An intent dispatched from inside an observer callback is dropped with
    /// a warning; the state is left unchanged and `None` is returned.
    pub fn dispatch(&self, intent: FormIntent) -> Option<Person> {
        match self.store.dispatch(intent) {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::warn!(error = %err, "Intent dropped");
                None
            }
        }
    }

    /// Latest published snapshot.
    pub fn current(&self) -> FormState {
        self.store.channel().current()
    }

    pub fn subscribe<F>(&self, observer: F) -> Subscription<FormState>
    where
        F: Fn(&FormState) + Send + Sync + 'static,
    {
        self.store.channel().subscribe(observer)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.store.channel().unsubscribe(id)
    }

    pub fn channel(&self) -> &StateChannel<FormState> {
        self.store.channel()
    }
}
