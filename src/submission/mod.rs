mod coordinator;
mod request;

pub use coordinator::{BusyFlag, ComplaintTransport, SubmissionCoordinator, SubmitResult};
pub use request::{ComplaintRequest, ATTACHMENTS_FIELD};
