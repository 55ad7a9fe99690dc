use crate::view_model::{Activity, AppViewModel};
use crate::{SelectedFile, StatusReport};

pub const STATUS_CHECK_FAILED: &str = "Failed to check status";
pub const UPLOAD_FAILED: &str = "Upload failed";
pub const QUERY_FAILED: &str = "Query failed";
pub const RESET_FAILED: &str = "Failed to reset vector store";
pub const RESET_CONFIRMATION: &str = "Vector store reset successfully";

/// Everything the client remembers between events. Nothing here outlives the process.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    status_message: Option<String>,
    vector_store_exists: bool,
    query_input: String,
    answer: String,
    error: String,
    pending_file: Option<SelectedFile>,
    rejected_file: Option<String>,
    checking_status: bool,
    querying: bool,
    resetting: bool,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let activity = if self.pending_file.is_some() {
            Activity::Uploading
        } else if self.querying {
            Activity::Querying
        } else if self.resetting {
            Activity::Resetting
        } else if self.checking_status {
            Activity::CheckingStatus
        } else {
            Activity::Idle
        };
        let show_query_form = self.vector_store_exists;

        AppViewModel {
            document_ready: self.vector_store_exists,
            status_message: self.status_message.clone(),
            activity,
            checking_status: self.checking_status,
            uploading: self.pending_file.is_some(),
            uploading_file: self.pending_file.as_ref().map(|file| file.file_name.clone()),
            rejected_file: self.rejected_file.clone(),
            querying: self.querying,
            resetting: self.resetting,
            show_query_form,
            show_reset: self.vector_store_exists,
            can_submit_query: show_query_form && !self.querying && has_text(&self.query_input),
            query_input: self.query_input.clone(),
            answer: non_empty(&self.answer),
            error: non_empty(&self.error),
            dirty: self.dirty,
        }
    }

    pub fn vector_store_exists(&self) -> bool {
        self.vector_store_exists
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn query_input(&self) -> &str {
        &self.query_input
    }

    /// Last answer; empty when none.
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Last error; empty when the previous operation succeeded.
    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn is_checking_status(&self) -> bool {
        self.checking_status
    }

    pub fn is_uploading(&self) -> bool {
        self.pending_file.is_some()
    }

    pub fn is_querying(&self) -> bool {
        self.querying
    }

    pub fn is_resetting(&self) -> bool {
        self.resetting
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn begin_status_check(&mut self) -> bool {
        if self.checking_status {
            return false;
        }
        self.checking_status = true;
        self.mark_dirty();
        true
    }

    pub(crate) fn apply_status(&mut self, report: StatusReport) {
        self.checking_status = false;
        self.vector_store_exists = report.vector_store_exists;
        self.status_message = Some(report.message);
        self.mark_dirty();
    }

    pub(crate) fn begin_upload(&mut self, file: SelectedFile) {
        self.pending_file = Some(file);
        self.rejected_file = None;
        self.error.clear();
        self.mark_dirty();
    }

    pub(crate) fn reject_file(&mut self, name: String) {
        self.rejected_file = Some(name);
        self.mark_dirty();
    }

    pub(crate) fn apply_upload_success(&mut self, message: String) {
        self.pending_file = None;
        self.status_message = Some(message);
        self.vector_store_exists = true;
        self.error.clear();
        self.mark_dirty();
    }

    pub(crate) fn set_query_input(&mut self, text: String) {
        if self.query_input != text {
            self.query_input = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn begin_query(&mut self) {
        self.querying = true;
        self.error.clear();
        self.mark_dirty();
    }

    pub(crate) fn apply_answer(&mut self, answer: String) {
        self.querying = false;
        self.answer = answer;
        self.error.clear();
        self.mark_dirty();
    }

    pub(crate) fn begin_reset(&mut self) {
        self.resetting = true;
        self.mark_dirty();
    }

    pub(crate) fn apply_reset(&mut self) {
        self.resetting = false;
        self.vector_store_exists = false;
        self.status_message = Some(RESET_CONFIRMATION.to_string());
        self.answer.clear();
        self.error.clear();
        self.mark_dirty();
    }

    pub(crate) fn finish_status_check_failed(&mut self) {
        self.checking_status = false;
        self.set_error(STATUS_CHECK_FAILED.to_string());
    }

    pub(crate) fn finish_upload_failed(&mut self, error: String) {
        self.pending_file = None;
        self.set_error(error);
    }

    pub(crate) fn finish_query_failed(&mut self, error: String) {
        self.querying = false;
        self.set_error(error);
    }

    pub(crate) fn finish_reset_failed(&mut self) {
        self.resetting = false;
        self.set_error(RESET_FAILED.to_string());
    }

    fn set_error(&mut self, error: String) {
        self.error = error;
        self.mark_dirty();
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

fn has_text(input: &str) -> bool {
    !input.trim().is_empty()
}

fn non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}
