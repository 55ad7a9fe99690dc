use std::path::Path;

use crate::{ApiError, FailureKind};

/// A document read into memory, ready to go out as the `file` multipart field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentUpload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl DocumentUpload {
    pub fn new(file_name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    pub async fn from_path(path: &Path, mime: &str) -> Result<Self, ApiError> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                ApiError::new(
                    FailureKind::InvalidDocument,
                    format!("{} has no file name", path.display()),
                )
            })?;
        let bytes = tokio::fs::read(path).await.map_err(|err| {
            ApiError::new(
                FailureKind::Io,
                format!("could not read {}: {err}", path.display()),
            )
        })?;
        Ok(Self::new(file_name, mime, bytes))
    }
}
