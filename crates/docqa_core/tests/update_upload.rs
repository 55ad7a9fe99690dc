use std::path::PathBuf;

use docqa_core::{
    update, Activity, AppState, DocumentKind, Effect, Failure, Msg, SelectedFile, StatusReport,
    UPLOAD_FAILED,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    docqa_logging::initialize_for_tests();
}

fn select(state: AppState, paths: &[&str]) -> (AppState, Vec<Effect>) {
    update(
        state,
        Msg::FilesSelected(paths.iter().map(PathBuf::from).collect()),
    )
}

fn ready_state() -> AppState {
    let (state, _) = update(AppState::new(), Msg::Started);
    let (state, _) = update(
        state,
        Msg::StatusChecked(Ok(StatusReport {
            vector_store_exists: true,
            message: "Vector store exists".to_string(),
        })),
    );
    state
}

#[test]
fn selecting_supported_file_starts_upload() {
    init_logging();
    let (state, effects) = select(AppState::new(), &["/docs/lease.pdf"]);

    assert_eq!(
        effects,
        vec![Effect::UploadDocument {
            file: SelectedFile {
                path: PathBuf::from("/docs/lease.pdf"),
                file_name: "lease.pdf".to_string(),
                kind: DocumentKind::Pdf,
            }
        }]
    );
    let view = state.view();
    assert!(view.uploading);
    assert_eq!(view.activity, Activity::Uploading);
    assert_eq!(view.uploading_file.as_deref(), Some("lease.pdf"));
}

#[test]
fn only_first_file_of_multi_selection_is_uploaded() {
    init_logging();
    let (_, effects) = select(AppState::new(), &["/docs/a.txt", "/docs/b.pdf"]);

    assert_eq!(effects.len(), 1);
    match &effects[0] {
        Effect::UploadDocument { file } => assert_eq!(file.file_name, "a.txt"),
        other => panic!("unexpected effect {other:?}"),
    }
}

#[test]
fn unsupported_file_is_rejected_without_request() {
    init_logging();
    let (state, _) = select(AppState::new(), &["/docs/bad.pdf"]);
    let (state, _) = update(state, Msg::UploadFinished(Err(Failure::default())));
    let error_before = state.error().to_string();

    let (state, effects) = select(state, &["/docs/sheet.xlsx"]);

    assert!(effects.is_empty());
    assert!(!state.is_uploading());
    assert_eq!(state.error(), error_before);
    assert_eq!(state.view().rejected_file.as_deref(), Some("sheet.xlsx"));

    // The next accepted file clears the rejection notice.
    let (state, _) = select(state, &["/docs/ok.txt"]);
    assert_eq!(state.view().rejected_file, None);
}

#[test]
fn selection_is_ignored_while_upload_in_flight() {
    init_logging();
    let (state, _) = select(AppState::new(), &["/docs/first.pdf"]);
    let (state, effects) = select(state, &["/docs/second.pdf"]);

    assert!(effects.is_empty());
    assert_eq!(state.view().uploading_file.as_deref(), Some("first.pdf"));
}

#[test]
fn successful_upload_marks_store_ready_and_clears_error() {
    init_logging();
    for start in [AppState::new(), ready_state()] {
        let (state, _) = select(start, &["/docs/x.pdf"]);
        let (state, _) = update(state, Msg::UploadFinished(Err(Failure::default())));
        assert_eq!(state.error(), UPLOAD_FAILED);

        let (state, _) = select(state, &["/docs/x.pdf"]);
        assert_eq!(state.error(), "");
        let (state, effects) = update(
            state,
            Msg::UploadFinished(Ok("File uploaded and processed successfully".to_string())),
        );

        assert!(effects.is_empty());
        assert!(state.vector_store_exists());
        assert_eq!(state.error(), "");
        assert!(!state.is_uploading());
        assert_eq!(
            state.status_message(),
            Some("File uploaded and processed successfully")
        );
        assert!(state.view().show_query_form);
    }
}

#[test]
fn failed_upload_keeps_store_flag() {
    init_logging();
    for (start, expected) in [(AppState::new(), false), (ready_state(), true)] {
        let (state, _) = select(start, &["/docs/x.pdf"]);
        let (state, _) = update(
            state,
            Msg::UploadFinished(Err(Failure::with_detail("Unsupported file type"))),
        );

        assert_eq!(state.vector_store_exists(), expected);
        assert_eq!(state.error(), "Unsupported file type");
        assert!(!state.is_uploading());
    }
}

#[test]
fn failed_upload_without_detail_uses_fallback() {
    init_logging();
    let (state, _) = select(AppState::new(), &["/docs/x.png"]);
    let (state, _) = update(
        state,
        Msg::UploadFinished(Err(Failure::with_detail(""))),
    );

    assert_eq!(state.error(), UPLOAD_FAILED);
}
