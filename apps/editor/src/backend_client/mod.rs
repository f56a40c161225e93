//! Backend client — the single point of entry for all calls to the resume API.
//!
//! Upload, extraction, tailoring, PDF storage and scoring all live behind the
//! remote API. Route handlers talk to it only through `ResumeBackend`, so the
//! HTTP implementation can be swapped for a fake in tests.
//!
//! Every call is one request: no retries, no cancellation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

pub mod types;
pub mod upload;

use crate::backend_client::types::{
    ErrorBody, MasterResume, ProcessMasterResumeBody, ScoreBody, ScoreResult, ScoreTicket,
    StoredFileResponse, TailorBody, TailorResponse, TailoredFiles, UploadBody,
};

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Backend returned no content")]
    NoContent,
}

impl BackendError {
    pub fn status(&self) -> Option<u16> {
        match self {
            BackendError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[async_trait]
pub trait ResumeBackend: Send + Sync {
    /// Uploads a base64 resume file as the user's master resume.
    async fn process_master_resume(
        &self,
        file_base64: &str,
    ) -> Result<StoredFileResponse, BackendError>;

    async fn get_master_resume(&self) -> Result<MasterResume, BackendError>;

    async fn tailor_master_resume(
        &self,
        job_description: &str,
    ) -> Result<TailorResponse, BackendError>;

    async fn get_tailored_resumes(&self) -> Result<TailoredFiles, BackendError>;

    /// Stores a rendered PDF for the signed-in user.
    async fn upload_resume(
        &self,
        file_base64: &str,
        filename: &str,
    ) -> Result<StoredFileResponse, BackendError>;

    async fn upload_resume_guest(
        &self,
        file_base64: &str,
        filename: &str,
    ) -> Result<StoredFileResponse, BackendError>;

    async fn score_resume(
        &self,
        s3_key: &str,
        job_description: &str,
        with_auth: bool,
    ) -> Result<ScoreTicket, BackendError>;

    async fn get_score(&self, result_id: &str) -> Result<ScoreResult, BackendError>;
}

/// `ResumeBackend` over HTTP with reqwest.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpBackend {
    pub fn new(
        base_url: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, BackendError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.client
            .get(self.url(path))
            .header(header::CONTENT_TYPE, "application/json")
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.client.post(self.url(path))
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        let token = self.token.as_deref().unwrap_or_default();
        request.header(header::AUTHORIZATION, format!("Bearer {token}"))
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, BackendError> {
        let response = request.send().await?;
        let status = response.status();
        let url = response.url().path().to_string();
        let body = response.text().await?;

        if !status.is_success() {
            let message = error_message(status, &body);
            warn!("Backend {url} returned {status}: {message}");
            return Err(BackendError::Api {
                status: status.as_u16(),
                message,
            });
        }

        if status == StatusCode::NO_CONTENT {
            return Err(BackendError::NoContent);
        }

        debug!("Backend {url} returned {status} ({} bytes)", body.len());
        Ok(serde_json::from_str(&body)?)
    }
}

/// Prefers the backend's own `error` field over a generic status message.
fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_else(|| format!("HTTP error! Status: {}", status.as_u16()))
}

/// One request builder per endpoint, kept apart from sending.
impl HttpBackend {
    fn process_master_resume_request(&self, file_base64: &str) -> RequestBuilder {
        let body = ProcessMasterResumeBody { file: file_base64 };
        self.authorized(self.post("/master")).json(&body)
    }

    fn get_master_resume_request(&self) -> RequestBuilder {
        self.authorized(self.get("/master"))
    }

    fn tailor_request(&self, job_description: &str) -> RequestBuilder {
        let body = TailorBody { job_description };
        self.authorized(self.post("/tailor")).json(&body)
    }

    fn tailored_resumes_request(&self) -> RequestBuilder {
        self.authorized(self.get("/tailor"))
    }

    fn upload_request(&self, file_base64: &str, filename: &str) -> RequestBuilder {
        let body = UploadBody {
            file: file_base64,
            filename,
        };
        self.authorized(self.post("/upload")).json(&body)
    }

    fn upload_guest_request(&self, file_base64: &str, filename: &str) -> RequestBuilder {
        let body = UploadBody {
            file: file_base64,
            filename,
        };
        self.post("/upload-guest").json(&body)
    }

    fn score_request(&self, s3_key: &str, job_description: &str, with_auth: bool) -> RequestBuilder {
        let body = ScoreBody {
            s3_key,
            job_description,
            with_auth,
        };
        self.post("/score").json(&body)
    }

    fn get_score_request(&self, result_id: &str) -> RequestBuilder {
        self.get("/score").query(&[("resultId", result_id)])
    }
}

#[async_trait]
impl ResumeBackend for HttpBackend {
    async fn process_master_resume(
        &self,
        file_base64: &str,
    ) -> Result<StoredFileResponse, BackendError> {
        self.execute(self.process_master_resume_request(file_base64))
            .await
    }

    async fn get_master_resume(&self) -> Result<MasterResume, BackendError> {
        self.execute(self.get_master_resume_request()).await
    }

    async fn tailor_master_resume(
        &self,
        job_description: &str,
    ) -> Result<TailorResponse, BackendError> {
        self.execute(self.tailor_request(job_description)).await
    }

    async fn get_tailored_resumes(&self) -> Result<TailoredFiles, BackendError> {
        self.execute(self.tailored_resumes_request()).await
    }

    async fn upload_resume(
        &self,
        file_base64: &str,
        filename: &str,
    ) -> Result<StoredFileResponse, BackendError> {
        self.execute(self.upload_request(file_base64, filename))
            .await
    }

    async fn upload_resume_guest(
        &self,
        file_base64: &str,
        filename: &str,
    ) -> Result<StoredFileResponse, BackendError> {
        self.execute(self.upload_guest_request(file_base64, filename))
            .await
    }

    async fn score_resume(
        &self,
        s3_key: &str,
        job_description: &str,
        with_auth: bool,
    ) -> Result<ScoreTicket, BackendError> {
        self.execute(self.score_request(s3_key, job_description, with_auth))
            .await
    }

    async fn get_score(&self, result_id: &str) -> Result<ScoreResult, BackendError> {
        self.execute(self.get_score_request(result_id)).await
    }
}
