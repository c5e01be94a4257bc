use crate::api::models::ProjectRecord;
use crate::api::ApiError;
use crate::domain::Project;

pub const LOAD_ERROR_MESSAGE: &str = "Failed to load projects";

/// Where the project list comes from.
pub trait ProjectSource {
    fn fetch_records(&self) -> Result<Vec<ProjectRecord>, ApiError>;
}

/// In-memory set of projects, loaded once and never mutated.
#[derive(Debug, Default)]
pub struct ProjectDirectory {
    projects: Vec<Project>,
    load_error: Option<String>,
}

impl ProjectDirectory {
    /// Fetch and convert. A failed fetch leaves the directory empty with a
    /// load error for the list view; individual bad records are skipped.
    pub fn load(source: &dyn ProjectSource) -> Self {
        let records = match source.fetch_records() {
            Ok(records) => records,
            Err(e) => {
                tracing::error!(error = %e, "project load failed");
                return Self {
                    projects: Vec::new(),
                    load_error: Some(LOAD_ERROR_MESSAGE.to_string()),
                };
            }
        };

        let mut projects = Vec::with_capacity(records.len());
        for record in &records {
            match Project::from_record(record) {
                Ok(project) => projects.push(project),
                Err(reason) => tracing::warn!(%reason, "skipping project record"),
            }
        }

        tracing::info!(count = projects.len(), "projects loaded");

        Self {
            projects,
            load_error: None,
        }
    }

    pub fn all(&self) -> &[Project] {
        &self.projects
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn filter(&self, query: &str) -> Vec<&Project> {
        filter_projects(&self.projects, query)
    }
}

/// Case-insensitive substring match on name, location or contractor.
/// Blank queries match everything; load order is kept.
pub fn filter_projects<'a, I>(projects: I, query: &str) -> Vec<&'a Project>
where
    I: IntoIterator<Item = &'a Project>,
{
    if query.trim().is_empty() {
        return projects.into_iter().collect();
    }

    let needle = query.to_lowercase();
    projects
        .into_iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle)
                || p.location.to_lowercase().contains(&needle)
                || p.contractor.to_lowercase().contains(&needle)
        })
        .collect()
}
