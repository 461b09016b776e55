//! Person form: a single-screen form built on a small MVI core.
//!
//! - [`mvi`]: state/intent/reducer traits and the observable [`mvi::StateChannel`]
//! - [`form`]: the form snapshot, its intents and the pure reducer
//! - [`controller`]: the view-model the view talks to
//! - [`ui`]: terminal view used by the `persona-form` binary

pub mod config;
pub mod controller;
pub mod form;
pub mod logging;
pub mod model;
pub mod mvi;
pub mod ui;

pub use controller::FormController;
pub use form::{FormIntent, FormState};
pub use model::{Person, ValidationError};
