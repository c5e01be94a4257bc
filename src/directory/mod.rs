#[allow(clippy::module_inception)]
mod directory;
mod placeholder;

pub use directory::{ProjectDirectory, ProjectSource};
pub use placeholder::PlaceholderProjects;
