//! Operational log for contact submissions.
//!
//! Every valid submission is recorded here exactly once, regardless of
//! whether persistence is configured or whether the save succeeds.

use vitrine_content::ContactSubmission;

pub trait SubmissionLog: Send + Sync {
    fn record(&self, submission: &ContactSubmission);
}

/// Production log: structured fields through `tracing`.
pub struct TracingLog;

impl SubmissionLog for TracingLog {
    fn record(&self, submission: &ContactSubmission) {
        tracing::info!(
            name = %submission.name,
            email = %submission.email,
            phone = %submission.phone.as_deref().unwrap_or("not provided"),
            subject = %submission.subject,
            message = %submission.message,
            "new contact message"
        );
    }
}
