pub const APP_TITLE: &str = "DocQA";
pub const APP_TAGLINE: &str = "AI-powered document analysis and Q&A";

pub const HEADING_STATUS: &str = "System Status";
pub const HEADING_UPLOAD: &str = "Upload Document";
pub const HEADING_QUERY: &str = "Ask Questions";

pub const UPLOAD_HINT: &str = "Type `upload <path>` to select a file";
pub const UPLOAD_BUSY: &str = "Processing document...";
pub const QUERY_HINT: &str = "Type `ask <question>` to ask about your document";
pub const QUERY_BUSY: &str = "Thinking...";
pub const RESET_HINT: &str = "Type `reset` to discard the document";

pub const RULE: &str = "------------------------------------------------------------";
