mod common;

use common::{fill, recorded_controller};
use persona_form::model::INVALID_DATA_MESSAGE;
use persona_form::mvi::SubscribeMode;
use persona_form::{FormController, FormIntent, FormState, Person};

#[test]
fn create_valid_person() {
    let controller = FormController::default();
    fill(&controller, "Ana", "Pérez", "30");

    let person = controller.submit();
    assert_eq!(person, Some(Person::new("Ana", "Pérez", 30)));

    let state = controller.current();
    assert_eq!(state.error_message, None);
    assert_eq!(state.result, person);
}

#[test]
fn blank_first_name_is_rejected() {
    let controller = FormController::default();
    fill(&controller, "", "Pérez", "30");

    assert_eq!(controller.submit(), None);
    assert_eq!(
        controller.current().error_message.as_deref(),
        Some("Invalid data. Verify all fields are filled and age is positive.")
    );
}

#[test]
fn non_numeric_age_is_kept_as_text() {
    let controller = FormController::default();
    controller.set_age("abc");

    let state = controller.current();
    assert_eq!(state.age, None);
    assert_eq!(state.age_text, "abc");
}

#[test]
fn reset_after_success_returns_to_empty_form() {
    let controller = FormController::default();
    fill(&controller, "Ana", "Pérez", "30");
    controller.submit();

    controller.reset();
    assert_eq!(controller.current(), FormState::default());
}

#[test]
fn reset_twice_equals_reset_once() {
    let controller = FormController::default();
    fill(&controller, "Ana", "Pérez", "30");
    controller.reset();
    let once = controller.current();
    controller.reset();
    assert_eq!(controller.current(), once);
    assert_eq!(once, FormState::default());
}

#[test]
fn missing_age_fails_validation() {
    let controller = FormController::default();
    controller.set_first_name("Ana");
    controller.set_last_name("Pérez");

    assert_eq!(controller.submit(), None);
    assert_eq!(
        controller.current().error_message.as_deref(),
        Some(INVALID_DATA_MESSAGE)
    );
}

#[test]
fn whitespace_last_name_fails_validation() {
    let controller = FormController::default();
    fill(&controller, "Ana", "   ", "30");
    assert_eq!(controller.submit(), None);
}

#[test]
fn failed_submit_keeps_previous_result() {
    let controller = FormController::default();
    fill(&controller, "Ana", "Pérez", "30");
    controller.submit();

    controller.set_age("-1");
    assert_eq!(controller.submit(), None);

    let state = controller.current();
    assert_eq!(state.result, Some(Person::new("Ana", "Pérez", 30)));
    assert!(state.error_message.is_some());
}

#[test]
fn new_valid_submit_replaces_result() {
    let controller = FormController::default();
    fill(&controller, "Ana", "Pérez", "30");
    controller.submit();
    controller.set_first_name("Luis");
    controller.submit();

    assert_eq!(
        controller.current().result,
        Some(Person::new("Luis", "Pérez", 30))
    );
}

#[test]
fn every_edit_clears_error() {
    let controller = FormController::default();
    for edit in [
        FormIntent::SetFirstName("a".into()),
        FormIntent::SetLastName("b".into()),
        FormIntent::SetAge("x".into()),
    ] {
        controller.submit();
        assert!(controller.current().error_message.is_some());
        controller.dispatch(edit);
        assert_eq!(controller.current().error_message, None);
    }
}

#[test]
fn each_intent_publishes_exactly_once() {
    let (controller, seen) = recorded_controller();
    fill(&controller, "Ana", "Pérez", "30");
    controller.submit();
    controller.reset();

    let seen = seen.lock();
    assert_eq!(seen.len(), 5);
    assert_eq!(seen[0].first_name, "Ana");
    assert_eq!(seen[1].last_name, "Pérez");
    assert_eq!(seen[2].age, Some(30));
    assert_eq!(seen[3].result, Some(Person::new("Ana", "Pérez", 30)));
    assert_eq!(seen[4], FormState::default());
}

#[test]
fn replay_mode_delivers_current_snapshot_on_subscribe() {
    let controller = FormController::new(SubscribeMode::ReplayLatest);
    controller.set_first_name("Ana");

    let (seen, _sub) = common::record(controller.channel());
    assert_eq!(seen.lock().len(), 1);
    assert_eq!(seen.lock()[0].first_name, "Ana");
}

#[test]
fn unsubscribed_observer_sees_nothing_more() {
    let controller = FormController::default();
    let (seen, sub) = common::record(controller.channel());
    controller.set_first_name("A");
    assert!(controller.unsubscribe(sub.id()));
    controller.set_first_name("B");

    assert_eq!(seen.lock().len(), 1);
}

#[test]
fn person_display_in_result() {
    let controller = FormController::default();
    fill(&controller, "Ana", "Pérez", "30");
    let person = controller.submit().unwrap();
    assert_eq!(person.to_string(), "Ana Pérez, 30 años");
}
