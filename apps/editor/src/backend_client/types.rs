//! Request and response bodies of the resume backend.

use serde::{Deserialize, Serialize};

use crate::models::entry::Entry;
use crate::models::tailored::TailoredEntry;

#[derive(Debug, Serialize)]
pub struct ProcessMasterResumeBody<'a> {
    pub file: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredFileResponse {
    pub s3_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterResume {
    pub url: String,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TailorBody<'a> {
    pub job_description: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TailorResponse {
    #[serde(default)]
    pub resume_items: Vec<TailoredEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TailoredFile {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TailoredFiles {
    #[serde(default)]
    pub files: Vec<TailoredFile>,
}

#[derive(Debug, Serialize)]
pub struct UploadBody<'a> {
    pub file: &'a str,
    pub filename: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ScoreBody<'a> {
    pub s3_key: &'a str,
    pub job_description: &'a str,
    pub with_auth: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreTicket {
    pub result_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub result_id: String,
    #[serde(default)]
    pub file_content: String,
    #[serde(default)]
    pub job_description: String,
    pub score: f64,
    #[serde(default)]
    pub feedback: Vec<String>,
}

/// Error body the backend sends with non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: Option<String>,
}
