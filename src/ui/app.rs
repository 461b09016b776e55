use std::sync::Arc;

use parking_lot::Mutex;

use crate::controller::FormController;
use crate::form::FormState;
use crate::model::Person;
use crate::mvi::Subscription;

/// Focusable elements of the form, in tab order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    FirstName,
    LastName,
    Age,
    Create,
    Clear,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::FirstName,
        Focus::LastName,
        Focus::Age,
        Focus::Create,
        Focus::Clear,
    ];

    pub fn next(self) -> Self {
        let index = self.index();
        Self::ORDER[(index + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let index = self.index();
        Self::ORDER[(index + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }
}

/// View-side application state.
///
/// Owns the controller and renders from the last snapshot the controller
/// published to it. Field edits are forwarded as whole-field intents.
pub struct App {
    controller: FormController,
    /// Latest snapshot delivered through the subscription.
    snapshot: Arc<Mutex<FormState>>,
    subscription: Option<Subscription<FormState>>,
    focus: Focus,
    should_quit: bool,
}

impl App {
    pub fn new(controller: FormController) -> Self {
        let snapshot = Arc::new(Mutex::new(controller.current()));
        let sink = Arc::clone(&snapshot);
        let subscription = controller.subscribe(move |state: &FormState| {
            *sink.lock() = state.clone();
        });

        Self {
            controller,
            snapshot,
            subscription: Some(subscription),
            focus: Focus::FirstName,
            should_quit: false,
        }
    }

    /// The snapshot the view renders.
    pub fn state(&self) -> FormState {
        self.snapshot.lock().clone()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Text of the focused field, if a text field has focus.
    pub fn focused_text(&self) -> Option<String> {
        let state = self.snapshot.lock();
        match self.focus {
            Focus::FirstName => Some(state.first_name.clone()),
            Focus::LastName => Some(state.last_name.clone()),
            Focus::Age => Some(state.age_text.clone()),
            Focus::Create | Focus::Clear => None,
        }
    }

    pub fn insert_char(&mut self, ch: char) {
        if let Some(mut text) = self.focused_text() {
            text.push(ch);
            self.set_focused_text(text);
        }
    }

    pub fn insert_str(&mut self, input: &str) {
        if let Some(mut text) = self.focused_text() {
            text.extend(input.chars().filter(|c| !c.is_control()));
            self.set_focused_text(text);
        }
    }

    pub fn delete_char(&mut self) {
        if let Some(mut text) = self.focused_text() {
            if text.pop().is_some() {
                self.set_focused_text(text);
            }
        }
    }

    /// Enter: press the focused button, or move on from a text field.
    pub fn activate(&mut self) -> Option<Person> {
        match self.focus {
            Focus::Create => self.submit(),
            Focus::Clear => {
                self.reset();
                None
            }
            _ => {
                self.focus_next();
                None
            }
        }
    }

    pub fn submit(&mut self) -> Option<Person> {
        self.controller.submit()
    }

    pub fn reset(&mut self) {
        self.controller.reset();
        self.focus = Focus::FirstName;
    }

    fn set_focused_text(&self, text: String) {
        match self.focus {
            Focus::FirstName => self.controller.set_first_name(text),
            Focus::LastName => self.controller.set_last_name(text),
            Focus::Age => self.controller.set_age(text),
            Focus::Create | Focus::Clear => {}
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.cancel();
        }
    }
}
