//! Contact form validation and submission.
//!
//! A single submission walks Idle → Validating → Submitting → Success or
//! Failed. Validation failures are reported per field, all at once, and block
//! the transition to Submitting. The submit control is disabled while a
//! request is in flight and always restored on exit, whichever path is taken.

use std::sync::LazyLock;

use regex::Regex;
use reqwest::Client;

use vitrine_content::{ContactResponse, ContactSubmission};

/// Any non-whitespace local and domain segments, at least one dot in the domain.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

const SUBMIT_LABEL: &str = "Send Message";
const BUSY_LABEL: &str = "Sending...";
const SENT_FALLBACK: &str = "Message sent, thank you!";
const FAILED_FALLBACK: &str = "Failed to send message. Try again later.";
const NETWORK_ERROR: &str = "Network error. Please try again.";

/// Current form field values, as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    /// Explicit consent checkbox.
    pub agree: bool,
}

impl ContactForm {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Form fields that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
    Agree,
}

/// A human-readable validation message attached to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    fn new(field: Field, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

/// Validate the form synchronously, reporting every failing rule at once.
pub fn validate(form: &ContactForm) -> Result<ContactSubmission, Vec<FieldError>> {
    let mut errors = Vec::new();

    if form.name.is_empty() {
        errors.push(FieldError::new(Field::Name, "Please enter your name."));
    }
    if !EMAIL_RE.is_match(&form.email) {
        errors.push(FieldError::new(
            Field::Email,
            "Please enter a valid email address.",
        ));
    }
    if form.subject.is_empty() {
        errors.push(FieldError::new(Field::Subject, "Please enter a subject."));
    }
    if form.message.chars().count() < 10 {
        errors.push(FieldError::new(
            Field::Message,
            "Your message must be at least 10 characters long.",
        ));
    }
    if !form.agree {
        errors.push(FieldError::new(
            Field::Agree,
            "Please agree to be contacted.",
        ));
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ContactSubmission {
        name: form.name.clone(),
        email: form.email.clone(),
        phone: if form.phone.is_empty() {
            None
        } else {
            Some(form.phone.clone())
        },
        subject: form.subject.clone(),
        message: form.message.clone(),
    })
}

/// State of the current submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Validating,
    Submitting,
    Success,
    Failed,
}

/// Result of one call to [`ContactController::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Invalid,
    Success,
    Failed,
}

/// The submit button as the user sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub enabled: bool,
    pub label: String,
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self {
            enabled: true,
            label: SUBMIT_LABEL.to_string(),
        }
    }
}

/// Drives a contact form through validation, submission and result display.
pub struct ContactController {
    client: Client,
    endpoint: String,
    state: SubmitState,
    field_errors: Vec<FieldError>,
    status: Option<String>,
    control: SubmitControl,
}

impl ContactController {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            state: SubmitState::Idle,
            field_errors: Vec::new(),
            status: None,
            control: SubmitControl::default(),
        }
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// Per-field messages from the last validation pass.
    pub fn field_errors(&self) -> &[FieldError] {
        &self.field_errors
    }

    /// The status line shown under the form, if any.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn control(&self) -> &SubmitControl {
        &self.control
    }

    /// Run one submission cycle. On success the form fields are reset.
    pub async fn submit(&mut self, form: &mut ContactForm) -> SubmitOutcome {
        self.state = SubmitState::Validating;
        self.field_errors.clear();
        self.status = None;

        let submission = match validate(form) {
            Ok(submission) => submission,
            Err(errors) => {
                self.field_errors = errors;
                self.state = SubmitState::Idle;
                return SubmitOutcome::Invalid;
            }
        };

        self.state = SubmitState::Submitting;
        self.control.enabled = false;
        self.control.label = BUSY_LABEL.to_string();

        let (succeeded, status) = self.send(&submission).await;

        // Restore the control on every exit path out of Submitting.
        self.control.enabled = true;
        self.control.label = SUBMIT_LABEL.to_string();

        self.status = Some(status);
        if succeeded {
            form.reset();
            self.state = SubmitState::Success;
            SubmitOutcome::Success
        } else {
            self.state = SubmitState::Failed;
            SubmitOutcome::Failed
        }
    }

    /// Send the payload once and fold transport and logical outcomes into a
    /// (succeeded, display message) pair.
    async fn send(&self, submission: &ContactSubmission) -> (bool, String) {
        let response = match self
            .client
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!("contact submission failed in transit: {err}");
                return (false, NETWORK_ERROR.to_string());
            }
        };

        let transport_ok = response.status().is_success();
        let body = response
            .json::<ContactResponse>()
            .await
            .unwrap_or_else(|_| ContactResponse::failure(FAILED_FALLBACK));

        if transport_ok && body.ok {
            (true, body.message.unwrap_or_else(|| SENT_FALLBACK.to_string()))
        } else {
            (
                false,
                body.error.unwrap_or_else(|| FAILED_FALLBACK.to_string()),
            )
        }
    }
}
