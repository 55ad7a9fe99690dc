//! DocQA client: HTTP calls to the document Q&A backend and effect execution.
mod backend;
mod engine;
mod settings;
mod types;
mod upload;

pub use backend::{Backend, ReqwestBackend};
pub use engine::{ChannelEventSink, ClientCommand, ClientHandle, EventSink};
pub use settings::{ClientSettings, DEFAULT_BASE_URL};
pub use types::{
    ApiError, ClientEvent, FailureKind, QueryResponse, StatusResponse, UploadResponse,
};
pub use upload::DocumentUpload;
