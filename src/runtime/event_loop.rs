use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};

use cuelist::config;

use crate::app::{App, InputMode};
use crate::ui;

/// Main terminal event loop: draws the UI and dispatches key presses.
/// Returns `Ok(())` when the user quits.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|f| ui::draw(f, app, &settings.ui))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, app) {
                    return Ok(());
                }
            }
        }
    }
}

/// Apply a key press to `app`. Returns true when the app should quit.
fn handle_key_event(key: KeyEvent, app: &mut App) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if app.mode != InputMode::Normal {
        match key.code {
            KeyCode::Esc => app.cancel_input(),
            KeyCode::Enter => app.submit(),
            KeyCode::Backspace => app.pop_char(),
            KeyCode::Char(c) => {
                if !c.is_control() {
                    app.push_char(c);
                }
            }
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('a') => app.begin_add(),
        KeyCode::Char('d') => app.begin_delete(),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Char('j') | KeyCode::Down => app.next(),
        KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('k') | KeyCode::Up => app.prev(),
        KeyCode::Char('p') | KeyCode::Char(' ') | KeyCode::Enter => app.play_current(),
        _ => {}
    }
    false
}
