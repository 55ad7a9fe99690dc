//! DocQA core: pure state machine and view-model helpers.
mod document;
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use document::{DocumentKind, SelectedFile, SUPPORTED_EXTENSIONS};
pub use effect::Effect;
pub use msg::{Failure, Msg, StatusReport};
pub use state::{
    AppState, RESET_CONFIRMATION, STATUS_CHECK_FAILED, QUERY_FAILED, RESET_FAILED, UPLOAD_FAILED,
};
pub use update::update;
pub use view_model::{Activity, AppViewModel, LABEL_DOCUMENT_READY, LABEL_NO_DOCUMENT};
