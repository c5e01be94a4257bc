mod api_error;
mod client;
pub mod models;

pub use api_error::ApiError;
pub use client::{HttpComplaintClient, HttpProjectSource};
