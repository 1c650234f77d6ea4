//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use cuelist::Severity;
use cuelist::config::UiSettings;

use crate::app::{App, InputMode};

const CONTROLS: &[(&str, &str)] = &[
    ("a", "add song"),
    ("d", "delete song"),
    ("h/l", "prev/next song"),
    ("enter/space/p", "play current"),
    ("esc", "cancel prompt"),
    ("q", "quit"),
];

/// Render the controls help text.
fn controls_text() -> String {
    CONTROLS
        .iter()
        .map(|(k, v)| format!("[{k}] {v}"))
        .collect::<Vec<String>>()
        .join(" | ")
}

fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::Success => Style::default().fg(Color::Green),
        Severity::Warning => Style::default().fg(Color::Yellow),
        Severity::Error => Style::default().fg(Color::Red),
    }
}

fn left_padded(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding {
            left: 1,
            right: 0,
            top: 0,
            bottom: 0,
        })
}

/// Human-readable byte count.
fn format_size(bytes: usize) -> String {
    const KIB: f64 = 1024.0;
    let b = bytes as f64;
    if b < KIB {
        format!("{bytes} B")
    } else if b < KIB * KIB {
        format!("{:.1} KiB", b / KIB)
    } else {
        format!("{:.1} MiB", b / (KIB * KIB))
    }
}

fn now_playing_lines(app: &App) -> Vec<Line<'static>> {
    let Some((track, playing)) = app.now_playing() else {
        return vec![Line::from("No song selected.")];
    };

    let mut lines = vec![
        Line::from(format!("Title: {}", track.title)),
        Line::from(format!("Artist: {}", track.artist)),
    ];
    match &track.payload {
        Some(payload) => {
            let state = if playing { "playing" } else { "ready" };
            lines.push(Line::from(format!(
                "Audio: {} ({state})",
                format_size(payload.len())
            )));
        }
        None => lines.push(Line::styled(
            "No audio data available for this song.",
            severity_style(Severity::Warning),
        )),
    }
    lines
}

fn status_line(app: &App) -> Line<'static> {
    let total = format!(
        "Total songs in playlist: {} song(s)",
        app.playlist.len()
    );
    match app.playlist.sink().latest() {
        Some(n) => Line::from(vec![
            Span::styled(n.message.clone(), severity_style(n.severity)),
            Span::raw(" • "),
            Span::raw(total),
        ]),
        None => Line::from(total),
    }
}

fn draw_playlist(frame: &mut Frame, app: &App, area: Rect) {
    let entries = app.playlist.list_all();
    if entries.is_empty() {
        let empty = Paragraph::new("Playlist is empty. Add some songs with [a]!")
            .block(left_padded(" playlist "));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = entries
        .iter()
        .map(|e| ListItem::new(e.to_string()))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" playlist "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(app.playlist.cursor_index());
    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw(frame: &mut Frame, app: &App, ui_settings: &UiSettings) {
    let prompt_height = if app.mode == InputMode::Normal { 0 } else { 3 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Length(prompt_height),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" cuelist ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    draw_playlist(frame, app, chunks[1]);

    let now_playing = Paragraph::new(now_playing_lines(app))
        .block(left_padded(" currently playing "))
        .wrap(Wrap { trim: true });
    frame.render_widget(now_playing, chunks[2]);

    let status = Paragraph::new(status_line(app))
        .block(left_padded(" status "))
        .wrap(Wrap { trim: true });
    frame.render_widget(status, chunks[3]);

    if let Some(label) = app.mode.label() {
        let prompt = Paragraph::new(format!("{}_", app.input()))
            .block(left_padded(label).title_bottom(" enter confirms, esc cancels "));
        frame.render_widget(prompt, chunks[4]);
    }

    let footer = Paragraph::new(controls_text())
        .block(left_padded(" controls "))
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[5]);
}
