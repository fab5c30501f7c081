use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::Context;
use coverletter_core::{update, AppState, AppViewModel, Msg, SNAPSHOT_KEY};
use coverletter_engine::{EngineConfig, EngineHandle, FileSnapshotStore, SnapshotStore};
use letter_logging::{letter_info, letter_warn};

use super::clipboard::SystemClipboard;
use super::config::AppConfig;
use super::effects::{EffectRunner, InboxSink};
use super::ui::commands::{parse_command, Command, HELP};
use super::ui::render::render;
use super::{logging, persistence};

pub fn run_app() -> anyhow::Result<()> {
    let config = AppConfig::from_build();
    logging::initialize(config.log_destination, config.log_level);
    letter_info!(
        "Starting; endpoint configured={} state_dir={:?}",
        config.endpoint.is_configured(),
        config.state_dir
    );

    let store: Arc<dyn SnapshotStore> = Arc::new(FileSnapshotStore::new(config.state_dir.clone()));
    let (inbox_tx, inbox_rx) = mpsc::channel::<Command>();

    let mut engine_config = EngineConfig::new(config.endpoint.as_str(), store.clone(), SNAPSHOT_KEY);
    engine_config.debounce_delay = config.debounce_delay;
    let engine = EngineHandle::new(engine_config, Arc::new(InboxSink::new(inbox_tx.clone())))
        .context("starting generation engine")?;
    let mut runner = EffectRunner::new(engine, Box::new(SystemClipboard::new()), inbox_tx.clone());

    let mut state = AppState::new(config.endpoint.clone());
    let restored = persistence::load_inputs(store.as_ref());
    dispatch(&mut state, &mut runner, Msg::InputsRestored(restored));
    print_view(&state.view());
    println!("Type `help` for commands.");

    spawn_input_reader(inbox_tx);

    while let Ok(command) = inbox_rx.recv() {
        match command {
            Command::Msg(msg) => {
                if let Some(view) = dispatch(&mut state, &mut runner, msg) {
                    print_view(&view);
                }
            }
            Command::Show => print_view(&state.view()),
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
        }
    }

    runner.shutdown();
    letter_info!("Exited cleanly");
    Ok(())
}

/// Applies one message and runs its effects. Returns a fresh view when
/// something visible changed.
fn dispatch(state: &mut AppState, runner: &mut EffectRunner, msg: Msg) -> Option<AppViewModel> {
    let (next, effects) = update(std::mem::take(state), msg);
    *state = next;
    runner.run(effects);
    state.consume_dirty().then(|| state.view())
}

fn print_view(view: &AppViewModel) {
    let mut out = io::stdout().lock();
    for line in render(view) {
        let _ = writeln!(out, "{line}");
    }
    let _ = out.flush();
}

/// Reads form commands from stdin. End of input counts as `quit`.
fn spawn_input_reader(inbox: mpsc::Sender<Command>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    letter_warn!("Failed to read input: {}", err);
                    break;
                }
            };
            match parse_command(&line) {
                Ok(Some(command)) => {
                    let quit = command == Command::Quit;
                    if inbox.send(command).is_err() || quit {
                        return;
                    }
                }
                Ok(None) => {}
                Err(err) => eprintln!("{err}"),
            }
        }
        let _ = inbox.send(Command::Quit);
    });
}
