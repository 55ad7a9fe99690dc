use std::io::BufRead;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use docqa_core::Msg;
use docqa_logging::{docqa_debug, docqa_warn};

/// Everything the main loop reacts to.
#[derive(Debug)]
pub enum AppInput {
    /// A message for the state machine, typically a client completion.
    Msg(Msg),
    /// A line the user typed.
    Command(Command),
    /// Stdin reached end of file.
    InputClosed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Empty,
    Upload(Vec<PathBuf>),
    /// `ask <text>` replaces the input and submits; bare `ask` resubmits.
    Ask(Option<String>),
    Input(String),
    Status,
    Reset,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        let (word, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (trimmed, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "" => Command::Empty,
            "upload" | "u" => Command::Upload(split_paths(rest)),
            "ask" | "a" => {
                let text = rest.trim_start();
                if text.trim().is_empty() {
                    Command::Ask(None)
                } else {
                    Command::Ask(Some(text.to_string()))
                }
            }
            "input" => Command::Input(rest.trim_start().to_string()),
            "status" => Command::Status,
            "reset" => Command::Reset,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => Command::Unknown(word.to_string()),
        }
    }

    /// State-machine messages for commands that touch application state.
    pub fn into_msgs(self) -> Vec<Msg> {
        match self {
            Command::Upload(paths) => vec![Msg::FilesSelected(paths)],
            Command::Ask(Some(text)) => vec![Msg::QueryInputChanged(text), Msg::QuerySubmitted],
            Command::Ask(None) => vec![Msg::QuerySubmitted],
            Command::Input(text) => vec![Msg::QueryInputChanged(text)],
            Command::Status => vec![Msg::StatusRequested],
            Command::Reset => vec![Msg::ResetRequested],
            Command::Empty | Command::Help | Command::Quit | Command::Unknown(_) => Vec::new(),
        }
    }
}

/// Splits on whitespace, honouring single and double quotes so paths may contain spaces.
fn split_paths(raw: &str) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut in_token = false;

    for ch in raw.chars() {
        match (quote, ch) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(ch);
                in_token = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_token {
                    paths.push(PathBuf::from(std::mem::take(&mut current)));
                    in_token = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_token = true;
            }
        }
    }
    if in_token {
        paths.push(PathBuf::from(current));
    }
    paths
}

/// Reads stdin line by line on a background thread until EOF or the loop goes away.
pub fn spawn_stdin_reader(tx: mpsc::Sender<AppInput>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    docqa_warn!("Failed to read from stdin: {}", err);
                    break;
                }
            };
            if tx.send(AppInput::Command(Command::parse(&line))).is_err() {
                return;
            }
        }
        docqa_debug!("stdin closed");
        let _ = tx.send(AppInput::InputClosed);
    });
}
