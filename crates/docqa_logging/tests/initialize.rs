use docqa_logging::{docqa_info, initialize_with_file, LogDestination};
use log::LevelFilter;

#[test]
fn file_destination_writes_messages_and_refuses_second_init() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("docqa.log");

    assert!(initialize_with_file(
        LogDestination::File,
        LevelFilter::Info,
        &log_path
    ));
    docqa_info!("upload started file={}", "contract.pdf");

    let written = std::fs::read_to_string(&log_path).unwrap();
    assert!(written.contains("upload started file=contract.pdf"));

    let second = dir.path().join("second.log");
    assert!(!initialize_with_file(
        LogDestination::File,
        LevelFilter::Info,
        &second
    ));
}
