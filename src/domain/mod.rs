pub mod attachment;
pub mod complaint;
pub mod project;
pub mod validation;

pub use attachment::{Attachment, MediaKind, MAX_ATTACHMENT_BYTES};
pub use complaint::{ComplaintForm, Notice, SubmissionOutcome};
pub use project::Project;
pub use validation::{validate_form, FormField, ValidationResult};
