use std::io::{self, Write};
use std::sync::mpsc;

use anyhow::Context;
use docqa_core::{update, Activity, AppState, Msg};
use docqa_logging::{docqa_debug, docqa_info};

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::input::{spawn_stdin_reader, AppInput, Command};
use super::ui;

pub fn run_app() -> anyhow::Result<()> {
    let config = AppConfig::load().context("loading configuration")?;
    docqa_logging::initialize(config.log.destination(), config.log_level.filter());
    docqa_info!("Starting docqa with {:?}", config);

    let settings = config
        .client_settings()
        .context("invalid backend base url")?;
    let (tx, rx) = mpsc::channel::<AppInput>();
    let runner = EffectRunner::new(settings, tx.clone()).context("starting HTTP client")?;
    spawn_stdin_reader(tx);

    let mut out = io::stdout().lock();
    write_lines(&mut out, &ui::layout::banner())?;

    let mut state = dispatch(AppState::new(), Msg::Started, &runner, &mut out)?;
    let mut input_closed = false;

    while let Ok(input) = rx.recv() {
        match input {
            AppInput::Msg(msg) => {
                state = dispatch(state, msg, &runner, &mut out)?;
            }
            AppInput::Command(Command::Quit) => break,
            AppInput::Command(Command::Help) => write_lines(&mut out, &ui::layout::help())?,
            AppInput::Command(Command::Unknown(word)) => {
                writeln!(out, "Unknown command: {word}")?;
                write_lines(&mut out, &ui::layout::help())?;
            }
            AppInput::Command(command) => {
                for msg in command.into_msgs() {
                    state = dispatch(state, msg, &runner, &mut out)?;
                }
            }
            AppInput::InputClosed => input_closed = true,
        }

        // With stdin gone, stay only until outstanding requests have answered.
        if input_closed && state.view().activity == Activity::Idle {
            docqa_debug!("input closed and nothing in flight; exiting");
            break;
        }
    }

    docqa_info!("docqa exiting");
    Ok(())
}

/// Runs one message through the state machine, hands effects to the runner and
/// re-renders when anything changed.
fn dispatch(
    state: AppState,
    msg: Msg,
    runner: &EffectRunner,
    out: &mut impl Write,
) -> io::Result<AppState> {
    docqa_debug!("dispatch {:?}", msg);
    let (mut state, effects) = update(state, msg);
    runner.run(effects);
    if state.consume_dirty() {
        write_lines(out, &ui::render::render(&state.view()))?;
    }
    Ok(state)
}

fn write_lines(out: &mut impl Write, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
