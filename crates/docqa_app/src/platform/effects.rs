use std::sync::{mpsc, Arc};

use docqa_client::{ApiError, ClientCommand, ClientEvent, ClientHandle, ClientSettings, EventSink};
use docqa_core::{Effect, Failure, Msg, StatusReport};
use docqa_logging::{docqa_error, docqa_info, docqa_warn};

use super::input::AppInput;

/// Forwards client completions into the main loop as state-machine messages.
struct MsgSink {
    tx: mpsc::Sender<AppInput>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: ClientEvent) {
        let _ = self.tx.send(AppInput::Msg(map_event(event)));
    }
}

pub struct EffectRunner {
    client: ClientHandle,
    tx: mpsc::Sender<AppInput>,
}

impl EffectRunner {
    pub fn new(settings: ClientSettings, tx: mpsc::Sender<AppInput>) -> Result<Self, ApiError> {
        docqa_info!("Using backend at {}", settings.base_url);
        let sink = Arc::new(MsgSink { tx: tx.clone() });
        let client = ClientHandle::new(settings, sink)?;
        Ok(Self { client, tx })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            let command = to_command(effect);
            log_command(&command);
            if !self.client.submit(command.clone()) {
                // Without a worker the busy flag would never clear.
                docqa_error!("Client worker is gone; failing {:?} locally", command);
                let _ = self.tx.send(AppInput::Msg(local_failure(&command)));
            }
        }
    }
}

fn log_command(command: &ClientCommand) {
    match command {
        ClientCommand::CheckStatus => docqa_info!("CheckStatus"),
        ClientCommand::Upload { path, mime } => {
            docqa_info!("Upload path={:?} mime={}", path, mime)
        }
        ClientCommand::Query { query } => docqa_info!("Query query_len={}", query.len()),
        ClientCommand::Reset => docqa_info!("Reset"),
    }
}

pub(crate) fn to_command(effect: Effect) -> ClientCommand {
    match effect {
        Effect::CheckStatus => ClientCommand::CheckStatus,
        Effect::UploadDocument { file } => ClientCommand::Upload {
            path: file.path,
            mime: file.kind.mime().to_string(),
        },
        Effect::SubmitQuery { query } => ClientCommand::Query { query },
        Effect::ResetSession => ClientCommand::Reset,
    }
}

pub(crate) fn map_event(event: ClientEvent) -> Msg {
    match event {
        ClientEvent::StatusChecked(result) => Msg::StatusChecked(
            result
                .map(|status| StatusReport {
                    vector_store_exists: status.vector_store_exists,
                    message: status.message,
                })
                .map_err(|err| map_failure("status check", err)),
        ),
        ClientEvent::Uploaded(result) => Msg::UploadFinished(
            result
                .map(|upload| upload.message)
                .map_err(|err| map_failure("upload", err)),
        ),
        ClientEvent::Answered(result) => Msg::QueryFinished(
            result
                .map(|answer| answer.result)
                .map_err(|err| map_failure("query", err)),
        ),
        ClientEvent::ResetDone(result) => {
            Msg::ResetFinished(result.map_err(|err| map_failure("reset", err)))
        }
    }
}

fn map_failure(operation: &str, err: ApiError) -> Failure {
    docqa_warn!("{} failed: {}", operation, err);
    Failure { detail: err.detail }
}

fn local_failure(command: &ClientCommand) -> Msg {
    let failure = Failure::default();
    match command {
        ClientCommand::CheckStatus => Msg::StatusChecked(Err(failure)),
        ClientCommand::Upload { .. } => Msg::UploadFinished(Err(failure)),
        ClientCommand::Query { .. } => Msg::QueryFinished(Err(failure)),
        ClientCommand::Reset => Msg::ResetFinished(Err(failure)),
    }
}
