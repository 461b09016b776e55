//! Intents the view can send to the form.

use crate::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormIntent {
    SetFirstName(String),
    SetLastName(String),
    /// Raw age text; parsed by the reducer.
    SetAge(String),
    /// Validate the fields and create a person.
    Submit,
    /// Back to the empty form.
    Reset,
}

impl Intent for FormIntent {
    fn name(&self) -> &'static str {
        match self {
            FormIntent::SetFirstName(_) => "set_first_name",
            FormIntent::SetLastName(_) => "set_last_name",
            FormIntent::SetAge(_) => "set_age",
            FormIntent::Submit => "submit",
            FormIntent::Reset => "reset",
        }
    }
}
