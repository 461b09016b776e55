//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use parking_lot::Mutex;
use persona_form::mvi::{StateChannel, Subscription, UiState};
use persona_form::{FormController, FormState};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Every snapshot an observer received, in delivery order.
pub type Recorded<S> = Arc<Mutex<Vec<S>>>;

/// Subscribe an observer that records every snapshot it sees.
pub fn record<S: UiState>(channel: &StateChannel<S>) -> (Recorded<S>, Subscription<S>) {
    let seen: Recorded<S> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let sub = channel.subscribe(move |state: &S| sink.lock().push(state.clone()));
    (seen, sub)
}

/// Controller with one recording observer attached.
pub fn recorded_controller() -> (FormController, Recorded<FormState>) {
    let controller = FormController::default();
    let (seen, _sub) = record(controller.channel());
    (controller, seen)
}

/// Fill all three fields in one go.
pub fn fill(controller: &FormController, first: &str, last: &str, age: &str) {
    controller.set_first_name(first);
    controller.set_last_name(last);
    controller.set_age(age);
}

/// Write `content` to a config.toml inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
