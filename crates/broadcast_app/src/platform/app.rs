use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use broadcast_core::{Msg, Picker, SelectionSink};
use broadcast_logging::{broadcast_info, broadcast_warn};

use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::ui;
use super::ui::commands::{parse_command, to_msgs, Command};

/// Everything the main loop reacts to, in arrival order.
pub enum AppEvent {
    Input(String),
    InputClosed,
    Msg(Msg),
}

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::File);
    broadcast_info!("broadcast_app starting");

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    spawn_stdin_reader(event_tx.clone());
    let runner = EffectRunner::new(event_tx);
    let mut picker = Picker::new(|ids: &[String]| hand_off(ids));

    dispatch(&mut picker, &runner, Msg::Mounted);
    draw(&mut picker, true)?;

    while let Ok(event) = event_rx.recv() {
        match event {
            AppEvent::Msg(msg) => dispatch(&mut picker, &runner, msg),
            AppEvent::InputClosed => break,
            AppEvent::Input(line) => match parse_command(&line) {
                Ok(None) => {}
                Ok(Some(Command::Quit)) => break,
                Ok(Some(Command::Help)) => print_lines(ui::constants::HELP_LINES.iter().copied())?,
                Ok(Some(Command::List)) => {
                    draw(&mut picker, true)?;
                    continue;
                }
                Ok(Some(command)) => match to_msgs(&command, &picker.view()) {
                    Ok(msgs) => {
                        for msg in msgs {
                            dispatch(&mut picker, &runner, msg);
                        }
                    }
                    Err(err) => print_lines([err.to_string()])?,
                },
                Err(err) => print_lines([err.to_string()])?,
            },
        }
        draw(&mut picker, false)?;
    }

    runner.shutdown();
    broadcast_info!("broadcast_app exiting");
    Ok(())
}

fn dispatch<S: SelectionSink>(picker: &mut Picker<S>, runner: &EffectRunner, msg: Msg) {
    let effects = picker.dispatch(msg);
    runner.enqueue(effects);
}

/// Redraws when the state changed, or unconditionally when `force` is set.
fn draw<S: SelectionSink>(picker: &mut Picker<S>, force: bool) -> io::Result<()> {
    let dirty = picker.consume_dirty();
    if !dirty && !force {
        return prompt();
    }
    print_lines(ui::render::render(&picker.view()))?;
    prompt()
}

fn prompt() -> io::Result<()> {
    let mut out = io::stdout().lock();
    write!(out, "{}", ui::constants::PROMPT)?;
    out.flush()
}

fn print_lines<I, L>(lines: I) -> io::Result<()>
where
    I: IntoIterator<Item = L>,
    L: AsRef<str>,
{
    let mut out = io::stdout().lock();
    for line in lines {
        writeln!(out, "{}", line.as_ref())?;
    }
    out.flush()
}

/// Stands in for the parent application receiving the picked ids.
fn hand_off(ids: &[String]) {
    let text = if ids.is_empty() {
        "Handing off: no broadcasts selected".to_string()
    } else {
        format!("Handing off {} broadcast(s): {}", ids.len(), ids.join(", "))
    };
    if let Err(err) = print_lines([text]) {
        broadcast_warn!("Could not print hand-off: {}", err);
    }
}

fn spawn_stdin_reader(event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if event_tx.send(AppEvent::Input(line)).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    broadcast_warn!("stdin read failed: {}", err);
                    break;
                }
            }
        }
        let _ = event_tx.send(AppEvent::InputClosed);
    });
}
