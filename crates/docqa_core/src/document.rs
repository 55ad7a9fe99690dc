use std::path::{Path, PathBuf};

/// Extensions offered to the user in the upload zone, in display order.
pub const SUPPORTED_EXTENSIONS: [&str; 7] = ["pdf", "docx", "doc", "png", "jpg", "jpeg", "txt"];

/// Document types the upload endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Doc,
    Docx,
    Png,
    Jpeg,
    Text,
}

impl DocumentKind {
    /// Resolves a kind from a file extension, ignoring ASCII case.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let kind = match ext.to_ascii_lowercase().as_str() {
            "pdf" => Self::Pdf,
            "doc" => Self::Doc,
            "docx" => Self::Docx,
            "png" => Self::Png,
            "jpg" | "jpeg" => Self::Jpeg,
            "txt" => Self::Text,
            _ => return None,
        };
        Some(kind)
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn mime(self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Doc => "application/msword",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Text => "text/plain",
        }
    }
}

/// A file the user picked that passed the input-boundary check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub file_name: String,
    pub kind: DocumentKind,
}

impl SelectedFile {
    /// Returns `None` when the path has no file name or an unsupported extension.
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let file_name = path.file_name()?.to_string_lossy().into_owned();
        let kind = DocumentKind::from_path(&path)?;
        Some(Self {
            path,
            file_name,
            kind,
        })
    }
}

pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensions_are_case_insensitive() {
        assert_eq!(
            DocumentKind::from_path(Path::new("Lease.PDF")),
            Some(DocumentKind::Pdf)
        );
        assert_eq!(
            DocumentKind::from_path(Path::new("scan.JpEg")),
            Some(DocumentKind::Jpeg)
        );
    }

    #[test]
    fn every_supported_extension_resolves() {
        for ext in SUPPORTED_EXTENSIONS {
            assert!(DocumentKind::from_extension(ext).is_some(), "{ext}");
        }
        assert_eq!(DocumentKind::from_extension("xlsx"), None);
    }

    #[test]
    fn selected_file_requires_name_and_supported_extension() {
        let file = SelectedFile::from_path("/tmp/notes/contract.docx").unwrap();
        assert_eq!(file.file_name, "contract.docx");
        assert_eq!(
            file.kind.mime(),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );

        assert!(SelectedFile::from_path("/tmp/notes/archive.zip").is_none());
        assert!(SelectedFile::from_path("/tmp/notes/README").is_none());
    }
}
