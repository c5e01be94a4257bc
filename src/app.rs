// src/app.rs

use crate::api::{ApiError, HttpComplaintClient, HttpProjectSource};
use crate::config::AppConfig;
use crate::directory::{PlaceholderProjects, ProjectDirectory, ProjectSource};
use crate::media::{LocalMediaPicker, MediaPicker};
use crate::session::FormSessions;
use crate::submission::SubmissionCoordinator;

/// Everything the request handlers share. Built once in `main`.
pub struct App {
    pub directory: ProjectDirectory,
    pub sessions: FormSessions,
    pub coordinator: SubmissionCoordinator,
    pub picker: Box<dyn MediaPicker>,
}

impl App {
    pub fn new(
        directory: ProjectDirectory,
        coordinator: SubmissionCoordinator,
        picker: Box<dyn MediaPicker>,
    ) -> Self {
        Self {
            directory,
            sessions: FormSessions::default(),
            coordinator,
            picker,
        }
    }

    pub fn from_config(cfg: &AppConfig) -> Result<Self, ApiError> {
        let source: Box<dyn ProjectSource> = match &cfg.projects_url {
            Some(url) => {
                tracing::info!(%url, "loading projects from API");
                Box::new(HttpProjectSource::new(url.clone(), cfg.submit_timeout)?)
            }
            None => {
                tracing::info!("no projects URL configured, using sample projects");
                Box::new(PlaceholderProjects)
            }
        };
        let directory = ProjectDirectory::load(source.as_ref());

        let client = HttpComplaintClient::new(cfg.complaints_url.clone(), cfg.submit_timeout)?;
        let picker = LocalMediaPicker::new(cfg.camera_dir.clone(), cfg.media_library_dir.clone());

        Ok(Self::new(
            directory,
            SubmissionCoordinator::new(Box::new(client)),
            Box::new(picker),
        ))
    }
}
