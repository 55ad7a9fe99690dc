use reqwest::multipart::{Form, Part};
use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::{
    ApiError, ClientSettings, DocumentUpload, FailureKind, QueryResponse, StatusResponse,
    UploadResponse,
};

const STATUS_PATH: &str = "api/status";
const UPLOAD_PATH: &str = "api/upload";
const QUERY_PATH: &str = "api/query";
const RESET_PATH: &str = "api/reset";

/// The four round trips the document Q&A service offers.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    async fn check_status(&self) -> Result<StatusResponse, ApiError>;
    async fn upload(&self, document: DocumentUpload) -> Result<UploadResponse, ApiError>;
    async fn query(&self, query: &str) -> Result<QueryResponse, ApiError>;
    async fn reset(&self) -> Result<(), ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl ReqwestBackend {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }
}

#[async_trait::async_trait]
impl Backend for ReqwestBackend {
    async fn check_status(&self) -> Result<StatusResponse, ApiError> {
        let url = self.settings.endpoint(STATUS_PATH)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        read_json(response).await
    }

    async fn upload(&self, document: DocumentUpload) -> Result<UploadResponse, ApiError> {
        let url = self.settings.endpoint(UPLOAD_PATH)?;
        let part = Part::bytes(document.bytes)
            .file_name(document.file_name)
            .mime_str(&document.mime)
            .map_err(|err| ApiError::new(FailureKind::InvalidDocument, err.to_string()))?;
        let form = Form::new().part("file", part);
        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        read_json(response).await
    }

    async fn query(&self, query: &str) -> Result<QueryResponse, ApiError> {
        let url = self.settings.endpoint(QUERY_PATH)?;
        let form = Form::new().text("query", query.to_string());
        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        read_json(response).await
    }

    async fn reset(&self) -> Result<(), ApiError> {
        let url = self.settings.endpoint(RESET_PATH)?;
        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.bytes().await.map_err(map_reqwest_error)?;
        Err(ApiError::http_status(status.as_u16(), extract_detail(&body)))
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.bytes().await.map_err(map_reqwest_error)?;
    if !status.is_success() {
        return Err(ApiError::http_status(status.as_u16(), extract_detail(&body)));
    }
    serde_json::from_slice(&body).map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))
}

/// Pulls a string `detail` out of an error body. Structured details (such as
/// validation error lists) and non-JSON bodies yield `None`.
pub(crate) fn extract_detail(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    value
        .get("detail")
        .and_then(serde_json::Value::as_str)
        .filter(|detail| !detail.is_empty())
        .map(ToOwned::to_owned)
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ApiError::new(FailureKind::Decode, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
