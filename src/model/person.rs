use std::fmt;

use thiserror::Error;

/// Message shown to the user when a submitted form fails validation.
pub const INVALID_DATA_MESSAGE: &str =
    "Invalid data. Verify all fields are filled and age is positive.";

/// A submitted form that failed the validity check.
///
/// The flags record which rule failed; the display text is the single
/// user-facing message regardless of which one it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", INVALID_DATA_MESSAGE)]
pub struct ValidationError {
    pub blank_first_name: bool,
    pub blank_last_name: bool,
    pub non_positive_age: bool,
}

/// A person record built from a valid form submission.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, age: i32) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
        }
    }

    /// Both names must contain a non-whitespace character and age must be positive.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let error = ValidationError {
            blank_first_name: is_blank(&self.first_name),
            blank_last_name: is_blank(&self.last_name),
            non_positive_age: self.age <= 0,
        };
        if error.blank_first_name || error.blank_last_name || error.non_positive_age {
            return Err(error);
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Renders as `"{first_name} {last_name}, {age} años"`.
impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}, {} años", self.first_name, self.last_name, self.age)
    }
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_person_passes() {
        assert!(Person::new("Ana", "Pérez", 30).is_valid());
        assert!(Person::new("A", "B", 1).is_valid());
    }

    #[test]
    fn blank_names_fail() {
        let err = Person::new("  \t", "Pérez", 30).validate().unwrap_err();
        assert!(err.blank_first_name);
        assert!(!err.blank_last_name);
        assert!(!err.non_positive_age);

        let err = Person::new("Ana", "", 30).validate().unwrap_err();
        assert!(err.blank_last_name);
    }

    #[test]
    fn unicode_whitespace_counts_as_blank() {
        assert!(!Person::new("\u{3000}", "Pérez", 30).is_valid());
    }

    #[test]
    fn zero_and_negative_age_fail() {
        assert!(Person::new("Ana", "Pérez", 0).validate().unwrap_err().non_positive_age);
        assert!(!Person::new("Ana", "Pérez", -4).is_valid());
    }

    #[test]
    fn error_text_is_user_message() {
        let err = Person::new("", "", 0).validate().unwrap_err();
        assert_eq!(err.to_string(), INVALID_DATA_MESSAGE);
    }

    #[test]
    fn display_format() {
        assert_eq!(Person::new("Ana", "Pérez", 30).to_string(), "Ana Pérez, 30 años");
    }
}
