use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Body of `GET /api/status`. Extra fields sent by the backend are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusResponse {
    pub vector_store_exists: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UploadResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QueryResponse {
    pub result: String,
}

/// Completion of one command sent to [`crate::ClientHandle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    StatusChecked(Result<StatusResponse, ApiError>),
    Uploaded(Result<UploadResponse, ApiError>),
    Answered(Result<QueryResponse, ApiError>),
    ResetDone(Result<(), ApiError>),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: FailureKind,
    /// `detail` string from the backend's error body, when it sent one.
    pub detail: Option<String>,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            detail: None,
            message: message.into(),
        }
    }

    pub(crate) fn http_status(code: u16, detail: Option<String>) -> Self {
        let message = detail
            .clone()
            .unwrap_or_else(|| format!("backend answered with status {code}"));
        Self {
            kind: FailureKind::HttpStatus(code),
            detail,
            message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    Network,
    Timeout,
    HttpStatus(u16),
    Decode,
    InvalidDocument,
    Io,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Decode => write!(f, "malformed response"),
            FailureKind::InvalidDocument => write!(f, "invalid document"),
            FailureKind::Io => write!(f, "io error"),
        }
    }
}
