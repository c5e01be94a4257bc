use crate::domain::{Attachment, ComplaintForm};
use chrono::{DateTime, SecondsFormat, Utc};

/// One file part of the complaint upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentPart {
    pub source: String,
    pub content_type: &'static str,
    pub file_name: String,
}

/// Transport-neutral description of the multipart complaint body.
/// Text fields keep their insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplaintRequest {
    pub fields: Vec<(&'static str, String)>,
    pub attachments: Vec<AttachmentPart>,
}

/// Multipart name shared by every file part.
pub const ATTACHMENTS_FIELD: &str = "attachments";

impl ComplaintRequest {
    pub fn build(
        project_id: &str,
        form: &ComplaintForm,
        attachments: &[Attachment],
        submitted_at: DateTime<Utc>,
    ) -> Self {
        let fields = vec![
            ("projectId", project_id.to_string()),
            ("description", form.description.clone()),
            ("contactEmail", form.contact_email.clone()),
            ("consentGiven", form.consent_given.to_string()),
            (
                "submissionDate",
                submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            ),
        ];

        let attachments = attachments
            .iter()
            .map(|a| AttachmentPart {
                source: a.source.clone(),
                content_type: a.kind.as_str(),
                file_name: a.file_name.clone(),
            })
            .collect();

        Self {
            fields,
            attachments,
        }
    }

    #[cfg(test)]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }
}
