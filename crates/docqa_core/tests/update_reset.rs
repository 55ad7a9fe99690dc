use std::path::PathBuf;

use docqa_core::{
    update, AppState, Effect, Failure, Msg, RESET_CONFIRMATION, RESET_FAILED,
};

fn init_logging() {
    docqa_logging::initialize_for_tests();
}

/// Uploaded a document and received one answer.
fn answered_state() -> AppState {
    let (state, _) = update(
        AppState::new(),
        Msg::FilesSelected(vec![PathBuf::from("/docs/lease.pdf")]),
    );
    let (state, _) = update(state, Msg::UploadFinished(Ok("processed".to_string())));
    let (state, _) = update(state, Msg::QueryInputChanged("term?".to_string()));
    let (state, _) = update(state, Msg::QuerySubmitted);
    let (state, _) = update(state, Msg::QueryFinished(Ok("12 months".to_string())));
    state
}

#[test]
fn reset_success_clears_answer_error_and_store() {
    init_logging();
    let (state, _) = update(answered_state(), Msg::QuerySubmitted);
    let (state, _) = update(state, Msg::QueryFinished(Err(Failure::default())));
    assert!(!state.error().is_empty());

    let (state, effects) = update(state, Msg::ResetRequested);
    assert_eq!(effects, vec![Effect::ResetSession]);
    assert!(state.is_resetting());

    let (state, _) = update(state, Msg::ResetFinished(Ok(())));

    assert!(!state.vector_store_exists());
    assert_eq!(state.answer(), "");
    assert_eq!(state.error(), "");
    assert_eq!(state.status_message(), Some(RESET_CONFIRMATION));
    assert!(!state.is_resetting());
    let view = state.view();
    assert!(!view.show_query_form);
    assert!(!view.show_reset);
    assert_eq!(view.answer, None);
}

#[test]
fn reset_failure_leaves_store_flag_and_answer() {
    init_logging();
    let (state, _) = update(answered_state(), Msg::ResetRequested);
    let (state, _) = update(
        state,
        Msg::ResetFinished(Err(Failure::with_detail("permission denied"))),
    );

    assert!(state.vector_store_exists());
    assert_eq!(state.error(), RESET_FAILED);
    assert_eq!(state.answer(), "12 months");
    assert_eq!(state.status_message(), Some("processed"));
}

#[test]
fn reset_not_offered_without_document() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::ResetRequested);

    assert!(effects.is_empty());
    assert!(!state.is_resetting());
}

#[test]
fn repeated_reset_click_is_suppressed() {
    init_logging();
    let (state, _) = update(answered_state(), Msg::ResetRequested);
    let (_, effects) = update(state, Msg::ResetRequested);

    assert!(effects.is_empty());
}

#[test]
fn late_answer_after_reset_wins_by_arrival() {
    init_logging();
    let (state, _) = update(answered_state(), Msg::QueryInputChanged("parties?".to_string()));
    let (state, _) = update(state, Msg::QuerySubmitted);
    let (state, _) = update(state, Msg::ResetRequested);
    let (state, _) = update(state, Msg::ResetFinished(Ok(())));
    let (state, _) = update(state, Msg::QueryFinished(Ok("Alice and Bob".to_string())));

    assert!(!state.vector_store_exists());
    assert_eq!(state.answer(), "Alice and Bob");
}
