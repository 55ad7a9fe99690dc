use docqa_core::{AppViewModel, SUPPORTED_EXTENSIONS};

use super::constants::*;

/// Renders the whole screen as text lines.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec![RULE.to_string()];

    lines.push(HEADING_STATUS.to_string());
    let mut status_line = format!("  [{}]", view.readiness_label());
    if let Some(message) = &view.status_message {
        status_line.push_str(&format!(" {message}"));
    }
    if view.checking_status {
        status_line.push_str(" (checking...)");
    }
    lines.push(status_line);
    if view.resetting {
        lines.push("  Resetting...".to_string());
    } else if view.show_reset {
        lines.push(format!("  {RESET_HINT}"));
    }

    lines.push(String::new());
    lines.push(HEADING_UPLOAD.to_string());
    match &view.uploading_file {
        Some(name) => lines.push(format!("  {UPLOAD_BUSY} ({name})")),
        None => lines.push(format!("  {UPLOAD_HINT}")),
    }
    lines.push(format!("  Supports: {}", supported_types()));
    if let Some(name) = &view.rejected_file {
        lines.push(format!("  Not a supported file: {name}"));
    }

    if view.show_query_form {
        lines.push(String::new());
        lines.push(HEADING_QUERY.to_string());
        lines.push(format!("  > {}", view.query_input));
        if view.querying {
            lines.push(format!("  {QUERY_BUSY}"));
        } else if !view.can_submit_query {
            lines.push(format!("  {QUERY_HINT}"));
        }
        if let Some(answer) = &view.answer {
            lines.push(String::new());
            lines.push("  Answer:".to_string());
            lines.extend(answer.lines().map(|line| format!("    {line}")));
        }
    }

    if let Some(error) = &view.error {
        lines.push(String::new());
        lines.push(format!("Error: {error}"));
    }

    lines.push(RULE.to_string());
    lines
}

fn supported_types() -> String {
    SUPPORTED_EXTENSIONS
        .iter()
        .map(|ext| ext.to_ascii_uppercase())
        .collect::<Vec<_>>()
        .join(", ")
}
