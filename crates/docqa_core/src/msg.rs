use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Front end is up; triggers the initial status check.
    Started,
    /// User asked for a status refresh.
    StatusRequested,
    /// User dropped or picked one or more files for upload.
    FilesSelected(Vec<PathBuf>),
    /// User edited the query input.
    QueryInputChanged(String),
    /// User submitted the current query input.
    QuerySubmitted,
    /// User clicked Reset.
    ResetRequested,
    /// Status endpoint answered.
    StatusChecked(Result<StatusReport, Failure>),
    /// Upload endpoint answered; `Ok` carries the server message.
    UploadFinished(Result<String, Failure>),
    /// Query endpoint answered; `Ok` carries the answer text.
    QueryFinished(Result<String, Failure>),
    /// Reset endpoint answered.
    ResetFinished(Result<(), Failure>),
    /// Fallback for placeholder wiring.
    NoOp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub vector_store_exists: bool,
    pub message: String,
}

/// A failed round trip as seen by the state machine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Failure {
    /// Human-readable detail reported by the backend, if any.
    pub detail: Option<String>,
}

impl Failure {
    pub fn with_detail(detail: impl Into<String>) -> Self {
        Self {
            detail: Some(detail.into()),
        }
    }

    /// Detail text when present and non-empty, else `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        match self.detail.as_deref() {
            Some(detail) if !detail.is_empty() => detail.to_string(),
            _ => fallback.to_string(),
        }
    }
}
