//! Snapshot of the person form.

use crate::model::Person;
use crate::mvi::UiState;

/// Everything the view needs to render the form.
///
/// Replaced wholesale on every intent; the default value is the empty form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub first_name: String,
    pub last_name: String,
    /// Raw age text exactly as typed.
    pub age_text: String,
    /// `age_text` parsed as a base-10 integer, `None` if it does not parse.
    pub age: Option<i32>,
    /// Last successfully created person.
    pub result: Option<Person>,
    pub error_message: Option<String>,
}

impl UiState for FormState {}

impl FormState {
    pub fn has_error(&self) -> bool {
        self.error_message.is_some()
    }

    /// Person the current fields would produce on submit.
    ///
    /// An unparsed age counts as 0, which never passes validation.
    pub fn candidate(&self) -> Person {
        Person::new(
            self.first_name.clone(),
            self.last_name.clone(),
            self.age.unwrap_or(0),
        )
    }
}
