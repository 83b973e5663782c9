//! Form submission: validate, wait out the simulated backend call, report.
//!
//! Single shot: no retry, no cancellation. Every outcome is a toast or a set
//! of field errors for the caller to show.

use std::time::Duration;

use launchpad_ui::{ContactForm, ExampleForm, FieldErrors, Notification};

pub async fn submit_example(form: &ExampleForm, delay: Duration) -> Result<Notification, FieldErrors> {
    let valid = form.validate()?;

    tokio::time::sleep(delay).await;

    tracing::info!(name = %valid.name, email = %valid.email, age = valid.age, "example form submitted");
    Ok(Notification::success(format!(
        "Form submitted successfully! Hello, {}!",
        valid.name
    )))
}

pub async fn submit_contact(form: &ContactForm, delay: Duration) -> Result<Notification, Notification> {
    form.validate()?;

    tokio::time::sleep(delay).await;

    tracing::info!(
        department = %form.department,
        notifications = form.notifications,
        "contact form submitted"
    );
    Ok(Notification::success("Form submitted successfully!"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use launchpad_ui::{NotificationLevel, NumberInput};

    #[tokio::test]
    async fn example_submission_greets_by_name() {
        let form = ExampleForm {
            name: "Amit".to_string(),
            email: "amit@example.com".to_string(),
            age: Some(NumberInput::Number(33.0)),
            message: "Looking forward to it".to_string(),
        };
        let toast = submit_example(&form, Duration::ZERO).await.unwrap();
        assert_eq!(toast.level, NotificationLevel::Success);
        assert_eq!(toast.message, "Form submitted successfully! Hello, Amit!");
    }

    #[tokio::test]
    async fn invalid_example_is_rejected_before_waiting() {
        let started = std::time::Instant::now();
        let errors = submit_example(&ExampleForm::default(), Duration::from_secs(30))
            .await
            .unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn contact_submission_reports_first_problem() {
        let toast = submit_contact(&ContactForm::default(), Duration::ZERO)
            .await
            .unwrap_err();
        assert_eq!(toast, Notification::error("Please fill in required fields!"));

        let form = ContactForm {
            full_name: "Priya Patel".to_string(),
            email: "priya@example.com".to_string(),
            terms: true,
            ..ContactForm::default()
        };
        assert_eq!(
            submit_contact(&form, Duration::ZERO).await,
            Ok(Notification::success("Form submitted successfully!"))
        );
    }
}
