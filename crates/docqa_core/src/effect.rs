use crate::SelectedFile;

/// Requests for the outside world, produced by `update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    CheckStatus,
    UploadDocument { file: SelectedFile },
    SubmitQuery { query: String },
    ResetSession,
}
