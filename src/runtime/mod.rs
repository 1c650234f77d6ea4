use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use cuelist::{FileStore, NotificationSink, logging};

use crate::app::App;

mod event_loop;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings::Startup {
        settings,
        mut notices,
    } = settings::load_settings();

    if let Err(e) = logging::init(&settings.log) {
        notices.push(format!("Logging disabled: {e}"));
    }
    tracing::info!("starting");

    let mut app = App::new(
        FileStore::new(&settings.upload),
        settings.ui.status_history,
        settings.ui.autoplay_on_navigation,
    );
    // Stderr is hidden behind the alternate screen; report on the status line.
    for notice in &notices {
        app.playlist.sink_mut().warning(notice);
    }

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &run_result {
        tracing::error!(error = %e, "event loop failed");
    }
    tracing::info!(tracks = app.playlist.len(), "exiting");
    run_result
}
