use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;

use docqa_logging::{docqa_debug, docqa_warn};

use crate::{
    ApiError, Backend, ClientEvent, ClientSettings, DocumentUpload, FailureKind, ReqwestBackend,
};

/// Work the handle can be asked to do. Each command becomes one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCommand {
    CheckStatus,
    Upload { path: PathBuf, mime: String },
    Query { query: String },
    Reset,
}

/// Receives completions. Called from runtime worker threads.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: ClientEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<ClientEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<ClientEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: ClientEvent) {
        let _ = self.tx.send(event);
    }
}

/// Runs backend requests on a private tokio runtime. Commands are accepted from
/// any thread; requests run concurrently and complete in whatever order the
/// backend answers.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
}

impl ClientHandle {
    pub fn new(settings: ClientSettings, sink: Arc<dyn EventSink>) -> Result<Self, ApiError> {
        let backend = Arc::new(ReqwestBackend::new(settings)?);
        Self::with_backend(backend, sink)
    }

    pub fn with_backend(
        backend: Arc<dyn Backend>,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, ApiError> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<ClientCommand>();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("docqa-client-worker")
            .enable_all()
            .build()
            .map_err(|err| ApiError::new(FailureKind::Io, err.to_string()))?;

        thread::Builder::new()
            .name("docqa-client".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let backend = backend.clone();
                    let sink = sink.clone();
                    runtime.spawn(async move {
                        let event = handle_command(backend.as_ref(), command).await;
                        sink.emit(event);
                    });
                }
                docqa_debug!("client command channel closed; stopping runtime");
            })
            .map_err(|err| ApiError::new(FailureKind::Io, err.to_string()))?;

        Ok(Self { cmd_tx })
    }

    /// Queues a command. Returns `false` if the worker thread is gone.
    pub fn submit(&self, command: ClientCommand) -> bool {
        self.cmd_tx.send(command).is_ok()
    }
}

async fn handle_command(backend: &dyn Backend, command: ClientCommand) -> ClientEvent {
    match command {
        ClientCommand::CheckStatus => ClientEvent::StatusChecked(backend.check_status().await),
        ClientCommand::Upload { path, mime } => {
            let result = match DocumentUpload::from_path(&path, &mime).await {
                Ok(document) => backend.upload(document).await,
                Err(err) => {
                    docqa_warn!("Could not prepare upload of {:?}: {}", path, err);
                    Err(err)
                }
            };
            ClientEvent::Uploaded(result)
        }
        ClientCommand::Query { query } => ClientEvent::Answered(backend.query(&query).await),
        ClientCommand::Reset => ClientEvent::ResetDone(backend.reset().await),
    }
}
