//! Reducer trait for the MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen. It is a
/// pure function `(State, Intent) -> (State, Outcome)`: the outcome is the
/// value handed back to whoever dispatched the intent, while the new state
/// is published to every observer.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Value returned to the caller of a dispatch.
    type Outcome;

    /// Process an intent and return the new state plus the caller's outcome.
    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Self::Outcome);
}
