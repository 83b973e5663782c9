//! Form models and their validation rules.
//!
//! Validation is synchronous and pure. Submission (with its simulated delay)
//! lives in the API layer.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::demo::DEPARTMENT_OPTIONS;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("email pattern must compile")
});

/// Syntactic e-mail check: no leading dot, no `..`, a dotted domain with an
/// alphabetic TLD of at least two letters.
pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_RE.is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
    Info,
}

/// User-visible toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Field-level errors in form order. At most one message per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field` unless the field already has one.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        if self.get(field).is_none() {
            self.0.push(FieldError {
                field,
                message: message.into(),
            });
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    fn into_result<T>(self, ok: T) -> Result<T, Self> {
        if self.is_empty() { Ok(ok) } else { Err(self) }
    }
}

/// A form value that may arrive as a JSON number or as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberInput {
    Number(f64),
    Text(String),
}

impl NumberInput {
    /// Coerce to a number. Blank text counts as zero; other non-numeric text
    /// (and non-finite numbers) yield `None`.
    pub fn coerce(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.is_finite().then_some(*n),
            Self::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return Some(0.0);
                }
                s.parse::<f64>().ok().filter(|n| n.is_finite())
            }
        }
    }
}

/// The validated example form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidExample {
    pub name: String,
    pub email: String,
    pub age: f64,
    pub message: String,
}

/// The example sign-up form (name, e-mail, age, message).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExampleForm {
    pub name: String,
    pub email: String,
    pub age: Option<NumberInput>,
    pub message: String,
}

impl ExampleForm {
    pub fn validate(&self) -> Result<ValidExample, FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.name.chars().count() < 2 {
            errors.add("name", "Name must be at least 2 characters");
        }

        if !is_valid_email(&self.email) {
            errors.add("email", "Invalid email address");
        }

        let age = self.age.as_ref().and_then(NumberInput::coerce);
        match age {
            None => errors.add("age", "Expected number"),
            Some(a) if a < 18.0 => errors.add("age", "Must be at least 18 years old"),
            Some(a) if a > 100.0 => errors.add("age", "Must be less than 100"),
            Some(_) => {}
        }

        if self.message.chars().count() < 10 {
            errors.add("message", "Message must be at least 10 characters");
        }

        errors.into_result(ValidExample {
            name: self.name.clone(),
            email: self.email.clone(),
            age: age.unwrap_or_default(),
            message: self.message.clone(),
        })
    }
}

/// The demo contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub message: String,
    pub gender: String,
    pub notifications: bool,
    pub terms: bool,
}

impl ContactForm {
    /// Checks run in order; the first failure is reported as an error toast.
    pub fn validate(&self) -> Result<(), Notification> {
        if self.full_name.is_empty() || self.email.is_empty() {
            return Err(Notification::error("Please fill in required fields!"));
        }

        if !self.terms {
            return Err(Notification::error("Please accept the terms and conditions!"));
        }

        if !self.department.is_empty()
            && !DEPARTMENT_OPTIONS.iter().any(|(value, _)| *value == self.department)
        {
            return Err(Notification::error("Please choose a department from the list!"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_example() -> ExampleForm {
        ExampleForm {
            name: "Priya".to_string(),
            email: "priya@example.com".to_string(),
            age: Some(NumberInput::Text("30".to_string())),
            message: "Hello there, friends".to_string(),
        }
    }

    #[test]
    fn valid_example_passes() {
        let ok = valid_example().validate().unwrap();
        assert_eq!(ok.age, 30.0);
        assert_eq!(ok.name, "Priya");
    }

    #[test]
    fn every_field_reports_its_own_message() {
        let form = ExampleForm {
            name: "A".to_string(),
            email: "nope".to_string(),
            age: Some(NumberInput::Number(12.0)),
            message: "short".to_string(),
        };
        let errors = form.validate().unwrap_err();

        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get("name"), Some("Name must be at least 2 characters"));
        assert_eq!(errors.get("email"), Some("Invalid email address"));
        assert_eq!(errors.get("age"), Some("Must be at least 18 years old"));
        assert_eq!(errors.get("message"), Some("Message must be at least 10 characters"));
        let order: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(order, ["name", "email", "age", "message"]);
    }

    #[test]
    fn age_coercion_rules() {
        let with_age = |age: Option<NumberInput>| ExampleForm { age, ..valid_example() }.validate();

        assert_eq!(
            with_age(None).unwrap_err().get("age"),
            Some("Expected number")
        );
        assert_eq!(
            with_age(Some(NumberInput::Text("abc".to_string()))).unwrap_err().get("age"),
            Some("Expected number")
        );
        assert_eq!(
            with_age(Some(NumberInput::Text(" ".to_string()))).unwrap_err().get("age"),
            Some("Must be at least 18 years old")
        );
        assert_eq!(
            with_age(Some(NumberInput::Number(101.0))).unwrap_err().get("age"),
            Some("Must be less than 100")
        );
        assert!(with_age(Some(NumberInput::Number(100.0))).is_ok());
        assert!(with_age(Some(NumberInput::Text("18".to_string()))).is_ok());
    }

    #[test]
    fn email_syntax() {
        assert!(is_valid_email("a.b+tag@mail.example.co"));
        assert!(!is_valid_email(".a@example.com"));
        assert!(!is_valid_email("a..b@example.com"));
        assert!(!is_valid_email("a@localhost"));
        assert!(!is_valid_email("a@example.c"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn example_form_deserializes_number_or_text_age() {
        let form: ExampleForm =
            serde_json::from_str(r#"{"name":"Amit","email":"amit@example.com","age":42,"message":"0123456789"}"#)
                .unwrap();
        assert_eq!(form.age, Some(NumberInput::Number(42.0)));

        let form: ExampleForm = serde_json::from_str(r#"{"age":"42"}"#).unwrap();
        assert_eq!(form.age, Some(NumberInput::Text("42".to_string())));
        assert!(form.name.is_empty());
    }

    #[test]
    fn contact_form_requires_name_email_then_terms() {
        let mut form = ContactForm::default();
        assert_eq!(
            form.validate(),
            Err(Notification::error("Please fill in required fields!"))
        );

        form.full_name = "Sneha Gupta".to_string();
        form.email = "sneha@example.com".to_string();
        assert_eq!(
            form.validate(),
            Err(Notification::error("Please accept the terms and conditions!"))
        );

        form.terms = true;
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn contact_form_rejects_unknown_department() {
        let form = ContactForm {
            full_name: "Vikram Singh".to_string(),
            email: "vikram@example.com".to_string(),
            department: "legal".to_string(),
            terms: true,
            ..ContactForm::default()
        };
        assert!(form.validate().is_err());

        let form = ContactForm {
            department: "finance".to_string(),
            ..form
        };
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn contact_form_uses_camel_case_fields() {
        let form: ContactForm =
            serde_json::from_str(r#"{"fullName":"Rahul","email":"r@example.com","terms":true}"#).unwrap();
        assert_eq!(form.full_name, "Rahul");
        assert!(form.terms);
        assert!(!form.notifications);
    }
}
