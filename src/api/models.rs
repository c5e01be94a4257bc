use crate::api::ApiError;
use serde::Deserialize;

// GET <projects url> returns a JSON array of these:
//
// {
//   "id": "1",
//   "name": "Highway 401 Expansion",
//   "location": "Toronto, ON",
//   "contractor": "ABC Construction Ltd.",
//   "contractAmount": 25000000,
//   "tenderDate": "2024-01-15",
//   "contractorEmail": "contact@abcconstruction.com",
//   "description": "...",            (optional)
//   "status": "In Progress"
// }

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub contractor: String,
    pub contract_amount: f64,
    pub tender_date: String,
    #[serde(default)]
    pub contractor_email: String,
    pub description: Option<String>,
    #[serde(default)]
    pub status: String,
}

/// Some backends send ids as numbers, some as strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ProjectId {
    Text(String),
    Number(i64),
}

/// Decodes a JSON array of project records. Elements that do not fit the
/// record shape are logged and dropped; only a body that is not an array
/// at all is an error.
pub fn decode_records(body: &str) -> Result<Vec<ProjectRecord>, ApiError> {
    let values: Vec<serde_json::Value> =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;

    let mut records = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<ProjectRecord>(value) {
            Ok(record) => records.push(record),
            Err(e) => tracing::warn!(index, error = %e, "skipping malformed project record"),
        }
    }

    Ok(records)
}
