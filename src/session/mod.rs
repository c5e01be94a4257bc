mod store;
pub mod token;

pub use store::{FormSession, FormSessions};
