//! Reducer for the person form.

use crate::model::Person;
use crate::mvi::Reducer;

use super::intent::FormIntent;
use super::state::FormState;

/// Pure state transitions for the form.
///
/// Field edits clear any pending error. `Submit` yields the created person
/// as its outcome; every other intent yields `None`.
pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;
    type Outcome = Option<Person>;

    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Self::Outcome) {
        match intent {
            FormIntent::SetFirstName(first_name) => (
                FormState {
                    first_name,
                    error_message: None,
                    ..state
                },
                None,
            ),
            FormIntent::SetLastName(last_name) => (
                FormState {
                    last_name,
                    error_message: None,
                    ..state
                },
                None,
            ),
            FormIntent::SetAge(age_text) => {
                let age = parse_age(&age_text);
                (
                    FormState {
                        age_text,
                        age,
                        error_message: None,
                        ..state
                    },
                    None,
                )
            }
            FormIntent::Submit => submit(state),
            FormIntent::Reset => (FormState::default(), None),
        }
    }
}

fn submit(state: FormState) -> (FormState, Option<Person>) {
    let person = state.candidate();
    match person.validate() {
        Ok(()) => {
            tracing::info!(person = %person, "Person created");
            (
                FormState {
                    result: Some(person.clone()),
                    error_message: None,
                    ..state
                },
                Some(person),
            )
        }
        Err(err) => {
            tracing::debug!(
                blank_first_name = err.blank_first_name,
                blank_last_name = err.blank_last_name,
                non_positive_age = err.non_positive_age,
                "Submission rejected"
            );
            (
                FormState {
                    error_message: Some(err.to_string()),
                    ..state
                },
                None,
            )
        }
    }
}

/// Base-10 `i32` with an optional leading sign; anything else is `None`.
fn parse_age(text: &str) -> Option<i32> {
    text.parse().ok()
}
