use crate::document::display_name;
use crate::{AppState, Effect, Msg, SelectedFile, QUERY_FAILED, UPLOAD_FAILED};

/// Pure update function: applies a message to state and returns any effects.
///
/// Completions are applied in arrival order; a late response of one kind may
/// overwrite the outcome of another kind that was issued after it.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started | Msg::StatusRequested => {
            if state.begin_status_check() {
                vec![Effect::CheckStatus]
            } else {
                Vec::new()
            }
        }
        Msg::FilesSelected(paths) => {
            // Single-file control: anything after the first path is dropped.
            let Some(first) = paths.into_iter().next() else {
                return (state, Vec::new());
            };
            if state.is_uploading() {
                return (state, Vec::new());
            }
            match SelectedFile::from_path(first.clone()) {
                Some(file) => {
                    state.begin_upload(file.clone());
                    vec![Effect::UploadDocument { file }]
                }
                None => {
                    state.reject_file(display_name(&first));
                    Vec::new()
                }
            }
        }
        Msg::QueryInputChanged(text) => {
            state.set_query_input(text);
            Vec::new()
        }
        Msg::QuerySubmitted => {
            let query = state.query_input();
            if query.trim().is_empty() || state.is_querying() || !state.vector_store_exists() {
                return (state, Vec::new());
            }
            let query = query.to_string();
            state.begin_query();
            vec![Effect::SubmitQuery { query }]
        }
        Msg::ResetRequested => {
            if state.is_resetting() || !state.vector_store_exists() {
                return (state, Vec::new());
            }
            state.begin_reset();
            vec![Effect::ResetSession]
        }
        Msg::StatusChecked(result) => {
            match result {
                Ok(report) => state.apply_status(report),
                Err(_) => state.finish_status_check_failed(),
            }
            Vec::new()
        }
        Msg::UploadFinished(result) => {
            match result {
                Ok(message) => state.apply_upload_success(message),
                Err(failure) => state.finish_upload_failed(failure.message_or(UPLOAD_FAILED)),
            }
            Vec::new()
        }
        Msg::QueryFinished(result) => {
            match result {
                Ok(answer) => state.apply_answer(answer),
                Err(failure) => state.finish_query_failed(failure.message_or(QUERY_FAILED)),
            }
            Vec::new()
        }
        Msg::ResetFinished(result) => {
            match result {
                Ok(()) => state.apply_reset(),
                Err(_) => state.finish_reset_failed(),
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
