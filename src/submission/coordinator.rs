// src/submission/coordinator.rs

use crate::api::ApiError;
use crate::domain::{validate_form, Attachment, ComplaintForm, SubmissionOutcome, ValidationResult};
use crate::submission::ComplaintRequest;
use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Anything that can deliver a complaint upload and report the HTTP status.
pub trait ComplaintTransport: Send + Sync {
    fn send(&self, request: &ComplaintRequest) -> Result<u16, ApiError>;
}

/// True only while a complaint POST is outstanding.
/// Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct BusyFlag(Arc<AtomicBool>);

impl BusyFlag {
    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn enter(&self) -> BusyGuard<'_> {
        self.0.store(true, Ordering::SeqCst);
        BusyGuard(self)
    }
}

/// Clears the flag on drop, whichever way the request ended.
struct BusyGuard<'a>(&'a BusyFlag);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        (self.0).0.store(false, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    /// Validation failed; nothing was sent.
    Invalid(ValidationResult),
    /// Exactly one request was issued.
    Sent(SubmissionOutcome),
}

pub struct SubmissionCoordinator {
    transport: Box<dyn ComplaintTransport>,
}

impl SubmissionCoordinator {
    pub fn new(transport: Box<dyn ComplaintTransport>) -> Self {
        Self { transport }
    }

    /// Validate, then send one multipart POST and map its status.
    /// Validation always completes before the network call.
    pub fn submit(
        &self,
        project_id: &str,
        form: &ComplaintForm,
        attachments: &[Attachment],
        busy: &BusyFlag,
    ) -> SubmitResult {
        let validation = validate_form(form);
        if !validation.is_valid() {
            tracing::debug!(
                project_id,
                errors = validation.len(),
                "complaint rejected by validation"
            );
            return SubmitResult::Invalid(validation);
        }

        let request = ComplaintRequest::build(project_id, form, attachments, Utc::now());

        let result = {
            let _guard = busy.enter();
            self.transport.send(&request)
        };

        let outcome = match result {
            Ok(200) | Ok(201) => {
                tracing::info!(
                    project_id,
                    attachments = attachments.len(),
                    "complaint submitted"
                );
                SubmissionOutcome::Success
            }
            Ok(status) => {
                tracing::warn!(project_id, status, "complaint endpoint refused submission");
                SubmissionOutcome::failure()
            }
            Err(e) => {
                tracing::warn!(project_id, error = %e, "complaint submission failed");
                SubmissionOutcome::failure()
            }
        };

        SubmitResult::Sent(outcome)
    }
}
