use super::constants::{APP_TAGLINE, APP_TITLE, RULE};

/// Lines printed once at start-up, before the first render.
pub fn banner() -> Vec<String> {
    let mut lines = vec![
        RULE.to_string(),
        APP_TITLE.to_string(),
        APP_TAGLINE.to_string(),
        RULE.to_string(),
    ];
    lines.extend(help());
    lines
}

pub fn help() -> Vec<String> {
    [
        "Commands:",
        "  upload <path>     upload a document (quote paths with spaces)",
        "  ask <question>    ask about the uploaded document",
        "  ask               resubmit the current question",
        "  input <text>      edit the question without sending it",
        "  status            refresh the system status",
        "  reset             discard the processed document",
        "  help              show this list",
        "  quit              leave",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect()
}
