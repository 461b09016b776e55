//! Domain values produced by the form.

mod person;

pub use person::{Person, ValidationError, INVALID_DATA_MESSAGE};
