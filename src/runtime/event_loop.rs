use std::io::Stdout;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, info, warn};

use crate::config;
use crate::display::DisplayPower;
use crate::input::{
    Button, Command, KeyInput, TriggerAxes, command_for, command_for_trigger, map_key,
};
use crate::player::Player;
use crate::session::Session;
use crate::ui;

/// Whether the loop keeps going after handling an input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Main tick loop: lifecycle first, then triggers and buttons, then the
/// frame. Returns `Ok(())` when the user quits.
pub fn run<P: Player>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    settings: &config::Settings,
    session: &mut Session<P>,
    display: &mut DisplayPower,
) -> Result<(), Box<dyn std::error::Error>> {
    let tick = Duration::from_millis(settings.playback.tick_ms);
    let mut triggers = TriggerAxes::new(settings.input.trigger_threshold);

    loop {
        thread::sleep(tick);
        session.tick(Instant::now());

        // Triggers skip tracks even with the screen off.
        for trigger in triggers.sample() {
            debug!(?trigger, "trigger pressed");
            handle_command(command_for_trigger(trigger), terminal, session, display)?;
        }

        while event::poll(Duration::ZERO)? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            let flow = match map_key(&key) {
                Some(KeyInput::Interrupt) => Flow::Quit,
                Some(KeyInput::Trigger(trigger)) => {
                    triggers.press(trigger);
                    Flow::Continue
                }
                Some(KeyInput::Button(button)) => {
                    handle_button(button, terminal, session, display)?
                }
                None => Flow::Continue,
            };
            if flow == Flow::Quit {
                info!("quit requested");
                return Ok(());
            }
        }

        if !display.is_off() {
            let rows = ui::list_rows(terminal.size()?.height);
            session.catalog_mut().update_scroll(rows);
            terminal.draw(|f| ui::draw(f, session))?;
        }
    }
}

fn handle_button<P: Player>(
    button: Button,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    session: &mut Session<P>,
    display: &mut DisplayPower,
) -> Result<Flow, Box<dyn std::error::Error>> {
    if display.is_off() && button != Button::Guide {
        return Ok(Flow::Continue);
    }
    match command_for(session.mode(), button) {
        Some(command) => handle_command(command, terminal, session, display),
        None => Ok(Flow::Continue),
    }
}

fn handle_command<P: Player>(
    command: Command,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    session: &mut Session<P>,
    display: &mut DisplayPower,
) -> Result<Flow, Box<dyn std::error::Error>> {
    match command {
        Command::Quit => return Ok(Flow::Quit),
        Command::Session(action) => session.apply(action, Instant::now()),
        Command::ToggleDisplay => match display.toggle() {
            Ok(()) if !display.is_off() => terminal.clear()?,
            Ok(()) => {}
            Err(e) => warn!("display power toggle failed: {e}"),
        },
    }
    Ok(Flow::Continue)
}
