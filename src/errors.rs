use astra::Response;
// errors.rs
use thiserror::Error;

/// Errors surfaced by the HTTP layer (routing, missing resources, lock
/// trouble). Each variant maps to a status page.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    /// The form is busy with an outstanding submission.
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Conflict(_) => 409,
            ServerError::InternalError => 500,
        }
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
