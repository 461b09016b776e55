//! Terminal view for the person form.
//!
//! The view is the composition root: it owns the controller, subscribes to
//! its state channel and turns key presses into intents.

pub mod app;
pub mod events;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
