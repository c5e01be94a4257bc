// client.rs
use crate::api::models::{decode_records, ProjectRecord};
use crate::api::ApiError;
use crate::directory::ProjectSource;
use crate::submission::{ComplaintRequest, ComplaintTransport, ATTACHMENTS_FIELD};
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("roadwatch/", env!("CARGO_PKG_VERSION"));

/// Posts complaints to the complaint endpoint as multipart/form-data.
pub struct HttpComplaintClient {
    client: Client,
    endpoint: Url,
}

impl HttpComplaintClient {
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    fn multipart_form(request: &ComplaintRequest) -> Result<Form, ApiError> {
        let mut form = Form::new();

        for (name, value) in &request.fields {
            form = form.text(*name, value.clone());
        }

        for part in &request.attachments {
            let path = source_path(&part.source)?;
            let file = Part::file(&path)
                .map_err(|e| ApiError::Attachment(format!("{}: {e}", path.display())))?
                .file_name(part.file_name.clone())
                .mime_str(part.content_type)
                .map_err(|e| ApiError::Attachment(e.to_string()))?;
            form = form.part(ATTACHMENTS_FIELD, file);
        }

        Ok(form)
    }
}

impl ComplaintTransport for HttpComplaintClient {
    fn send(&self, request: &ComplaintRequest) -> Result<u16, ApiError> {
        let form = Self::multipart_form(request)?;

        // reqwest sets `multipart/form-data; boundary=...` itself
        let resp = self
            .client
            .post(self.endpoint.clone())
            .multipart(form)
            .send()?;

        Ok(resp.status().as_u16())
    }
}

/// Resolves an attachment locator to a readable path.
/// `file://` URLs are converted, anything else is taken as a plain path.
fn source_path(source: &str) -> Result<PathBuf, ApiError> {
    match Url::parse(source) {
        Ok(url) if url.scheme() == "file" => url
            .to_file_path()
            .map_err(|_| ApiError::Attachment(format!("not a local file: {source}"))),
        Ok(url) => Err(ApiError::Attachment(format!(
            "unsupported locator scheme {:?}",
            url.scheme()
        ))),
        Err(_) => Ok(PathBuf::from(source)),
    }
}

/// Fetches the project list as JSON.
pub struct HttpProjectSource {
    client: Client,
    url: Url,
}

impl HttpProjectSource {
    pub fn new(url: Url, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { client, url })
    }
}

impl ProjectSource for HttpProjectSource {
    fn fetch_records(&self) -> Result<Vec<ProjectRecord>, ApiError> {
        let resp = self
            .client
            .get(self.url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let text = resp.text()?;
        decode_records(&text)
    }
}
