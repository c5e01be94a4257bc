// src/domain/complaint.rs

/// What the user has typed into the complaint form so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComplaintForm {
    pub description: String,
    /// Empty string means "not provided".
    pub contact_email: String,
    pub consent_given: bool,
}

pub const GENERIC_FAILURE_MESSAGE: &str =
    "Unable to submit your complaint. Please try again later.";

/// Result of one submission attempt. Consumed once by the view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    Failure { reason: String },
}

impl SubmissionOutcome {
    pub fn failure() -> Self {
        SubmissionOutcome::Failure {
            reason: GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// A one-time message shown to the user (the mobile "alert").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}
