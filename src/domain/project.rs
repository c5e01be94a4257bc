// src/domain/project.rs

use crate::api::models::{ProjectId, ProjectRecord};
use chrono::NaiveDate;
use std::fmt;

/// Lifecycle label of a project. The set is open: anything the API sends
/// that we don't recognise is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectStatus {
    Planned,
    InProgress,
    Completed,
    Other(String),
}

impl ProjectStatus {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "planned" => ProjectStatus::Planned,
            "in progress" | "in_progress" => ProjectStatus::InProgress,
            "completed" => ProjectStatus::Completed,
            _ => ProjectStatus::Other(label.trim().to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ProjectStatus::Planned => "Planned",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::Other(label) => label,
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A road project as shown in the list and detail views.
/// Built once from the wire record and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub location: String,
    pub contractor: String,
    pub contractor_email: String,
    /// Contract value in CAD. Always finite and non-negative.
    pub contract_amount: f64,
    pub tender_date: NaiveDate,
    pub status: ProjectStatus,
    pub description: Option<String>,
}

impl Project {
    /// Validates a wire record and turns it into a `Project`.
    /// This is the only way records from the API enter the directory.
    pub fn from_record(record: &ProjectRecord) -> Result<Self, String> {
        let id = match &record.id {
            ProjectId::Text(s) => s.trim().to_string(),
            ProjectId::Number(n) => n.to_string(),
        };
        if id.is_empty() {
            return Err("Missing or empty project id".into());
        }

        let name = record.name.trim();
        if name.is_empty() {
            return Err(format!("Project {id}: missing or empty name"));
        }

        if !record.contract_amount.is_finite() || record.contract_amount < 0.0 {
            return Err(format!(
                "Project {id}: invalid contract amount {}",
                record.contract_amount
            ));
        }

        let tender_date = NaiveDate::parse_from_str(record.tender_date.trim(), "%Y-%m-%d")
            .map_err(|e| {
                format!(
                    "Project {id}: invalid tender date {:?}: {e}",
                    record.tender_date
                )
            })?;

        let description = record
            .description
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(Project {
            id,
            name: name.to_string(),
            location: record.location.trim().to_string(),
            contractor: record.contractor.trim().to_string(),
            contractor_email: record.contractor_email.trim().to_string(),
            contract_amount: record.contract_amount,
            tender_date,
            status: ProjectStatus::from_label(&record.status),
            description,
        })
    }
}
