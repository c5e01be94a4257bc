use crate::api::models::{ProjectId, ProjectRecord};
use crate::api::ApiError;
use crate::directory::ProjectSource;

/// Fixed sample set used until a real projects endpoint is configured.
pub struct PlaceholderProjects;

impl ProjectSource for PlaceholderProjects {
    fn fetch_records(&self) -> Result<Vec<ProjectRecord>, ApiError> {
        Ok(vec![
            ProjectRecord {
                id: ProjectId::Text("1".into()),
                name: "Highway 401 Expansion".into(),
                location: "Toronto, ON".into(),
                contractor: "ABC Construction Ltd.".into(),
                contract_amount: 25_000_000.0,
                tender_date: "2024-01-15".into(),
                contractor_email: "contact@abcconstruction.com".into(),
                description: Some("Expansion of Highway 401 from 4 to 6 lanes".into()),
                status: "In Progress".into(),
            },
            ProjectRecord {
                id: ProjectId::Text("2".into()),
                name: "Downtown Bridge Repair".into(),
                location: "Vancouver, BC".into(),
                contractor: "XYZ Infrastructure Inc.".into(),
                contract_amount: 15_000_000.0,
                tender_date: "2024-02-20".into(),
                contractor_email: "projects@xyzinfra.com".into(),
                description: Some("Structural repair and maintenance of downtown bridge".into()),
                status: "Completed".into(),
            },
        ])
    }
}
