use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::display::DisplayPower;
use crate::library::Catalog;
use crate::player::DecoderProcess;
use crate::session::{LoopMode, Session};

mod event_loop;
mod logging;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();
    logging::init(&settings.logging);
    info!(
        root = %settings.library.root.display(),
        decoder = %settings.decoder.program.display(),
        loop_mode = ?settings.playback.loop_mode,
        "starting"
    );

    let catalog = Catalog::open(&settings.library);
    let player = DecoderProcess::new(&settings.decoder);
    let loop_mode = LoopMode::from(settings.playback.loop_mode);
    let mut session = Session::new(catalog, player, loop_mode, settings.playback.grace_seconds);
    let mut display = DisplayPower::new(&settings.display);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut session, &mut display);

    session.shutdown();
    display.restore();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("stopped");
    run_result
}
