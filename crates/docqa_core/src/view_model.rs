pub const LABEL_DOCUMENT_READY: &str = "Document Ready";
pub const LABEL_NO_DOCUMENT: &str = "No Document Loaded";

/// What the client is currently waiting on. Uploads take precedence when several
/// requests of different kinds are outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activity {
    #[default]
    Idle,
    CheckingStatus,
    Uploading,
    Querying,
    Resetting,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub document_ready: bool,
    pub status_message: Option<String>,
    pub activity: Activity,
    pub checking_status: bool,
    pub uploading: bool,
    pub uploading_file: Option<String>,
    pub rejected_file: Option<String>,
    pub querying: bool,
    pub resetting: bool,
    pub show_query_form: bool,
    pub show_reset: bool,
    pub can_submit_query: bool,
    pub query_input: String,
    pub answer: Option<String>,
    pub error: Option<String>,
    pub dirty: bool,
}

impl AppViewModel {
    pub fn readiness_label(&self) -> &'static str {
        if self.document_ready {
            LABEL_DOCUMENT_READY
        } else {
            LABEL_NO_DOCUMENT
        }
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}
