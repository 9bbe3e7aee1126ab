//! User interface components.
//!
//! Provides TUI widgets and drawing functions for the application's
//! terminal-based user interface using ratatui.

mod lyric_panel;

pub use lyric_panel::{centered_offset, LyricPanel};

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::constants::ui::{PLAYBACK_PANEL_HEIGHT, STATUS_BAR_HEIGHT};
use crate::sync::{format_time, SyncView};

/// Render the full application UI to the terminal frame.
pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(PLAYBACK_PANEL_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(STATUS_BAR_HEIGHT), // Command/status bar at bottom
        ])
        .split(f.size());

    let view = app.engine.view();
    draw_playback_panel(f, &view, chunks[0]);
    app.lyric_panel.draw(f, chunks[1], &view, &app.title);
    draw_command_bar(f, chunks[2]);

    // Draw status/info modal (blocking)
    if let Some(status) = &app.status_message {
        draw_status_message(f, status);
        return;
    }
    // Draw error message if present (blocking)
    if let Some(error) = &app.error_message {
        draw_error_message(f, error);
        return;
    }

    if app.show_help {
        draw_help_modal(f);
    }
}

/// Current time, play/pause control, active line and seek bar.
fn draw_playback_panel(f: &mut Frame, view: &SyncView<'_>, area: Rect) {
    let block = create_titled_block("Playback", view.is_playing);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    let label_style = if view.is_playing {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    };
    let time_line = Line::from(vec![
        Span::raw(" Current Time: "),
        Span::styled(&view.time_label, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        Span::styled(format!(" / {}", format_time(view.duration)), Style::default().fg(Color::Gray)),
        Span::raw("   "),
        Span::styled(format!("[{}]", view.play_label), label_style),
    ]);
    f.render_widget(Paragraph::new(time_line), rows[0]);

    let active = Paragraph::new(Line::from(Span::styled(
        view.active_text,
        Style::default().fg(Color::Cyan),
    )))
    .alignment(Alignment::Center);
    f.render_widget(active, rows[1]);

    f.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(Color::LightBlue).bg(Color::Black))
            .ratio(seek_ratio(view.current_time, view.duration))
            .label(""),
        rows[2],
    );
}

/// Position of the seek bar, always within `[0, 1]`.
fn seek_ratio(current: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return 0.0;
    }
    let ratio = current / duration;
    if ratio.is_nan() {
        0.0
    } else {
        ratio.clamp(0.0, 1.0)
    }
}

fn draw_command_bar(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(Span::styled("Commands/Status", Style::default().fg(Color::Yellow)));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let help_text = create_help_text(&[
        ("Space", "Play/Pause"),
        ("←/→", "Seek"),
        ("Home", "Start"),
        ("r", "Reload"),
        ("?", "Help"),
        ("q", "Quit"),
    ]);

    let status_bar = Paragraph::new(Line::from(help_text)).style(Style::default().fg(Color::Gray));
    f.render_widget(status_bar, inner_area);
}

/// Build styled help text spans from key-description pairs for the command bar.
pub fn create_help_text<'a>(commands: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut text = vec![Span::raw(" ")]; // Start with padding

    for (i, (key, description)) in commands.iter().enumerate() {
        text.push(Span::styled(*key, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)));
        text.push(Span::raw(format!(": {description}")));

        if i < commands.len() - 1 {
            text.push(Span::raw(" | "));
        }
    }

    text
}

/// Create a bordered block with a title, highlighted when focused.
pub fn create_titled_block(title: &str, is_focused: bool) -> Block<'_> {
    let title_style = if is_focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let border_style = if is_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    Block::default()
        .title(Span::styled(title, title_style))
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// A rectangle of at most `width` x `height` centered in `outer`.
const fn centered_rect(outer: Rect, width: u16, height: u16) -> Rect {
    let width = if width < outer.width { width } else { outer.width };
    let height = if height < outer.height { height } else { outer.height };
    Rect {
        x: outer.x + (outer.width - width) / 2,
        y: outer.y + (outer.height - height) / 2,
        width,
        height,
    }
}

// Draw an error message overlay
fn draw_error_message(f: &mut Frame, message: &str) {
    let size = f.size();
    let area = centered_rect(size, 40.min(size.width.saturating_sub(4)), 5);

    let block = Block::default()
        .title(Span::styled("Error", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));

    let text = Paragraph::new(message)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area); // Clear the area first
    f.render_widget(block, area);

    let inner_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1), // Space for a "Press Esc to dismiss" hint
        ])
        .margin(1)
        .split(area);

    f.render_widget(text, inner_area[0]);

    let hint = Paragraph::new("Press Esc to dismiss")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(hint, inner_area[1]);
}

#[allow(clippy::cast_possible_truncation)]
fn draw_status_message(f: &mut Frame, message: &str) {
    use unicode_width::UnicodeWidthStr;
    let size = f.size();

    // Calculate box width (max 80% of screen, min 30)
    let max_width = (size.width as usize * 80) / 100;
    let width = message.width().saturating_add(6).min(max_width).max(30) as u16;

    // Calculate how many lines the message will need when wrapped
    let inner_width = width.saturating_sub(4) as usize;
    let msg_lines = message.width().div_ceil(inner_width.max(1));
    let height = (msg_lines as u16 + 4).min(size.height.saturating_sub(4));

    let area = centered_rect(size, width, height);

    let block = Block::default()
        .title(Span::styled("Info", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    let text = Paragraph::new(message)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let inner_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // message (flexible)
            Constraint::Length(1), // hint
        ])
        .margin(1)
        .split(area);

    f.render_widget(text, inner_area[0]);

    let hint = Paragraph::new("Press Esc to dismiss")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(hint, inner_area[1]);
}

// Draw the help modal with keybindings
fn draw_help_modal(f: &mut Frame) {
    let size = f.size();
    let area = centered_rect(size, 50.min(size.width.saturating_sub(4)), 16.min(size.height.saturating_sub(4)));

    let block = Block::default()
        .title(Span::styled(" Help - Keybindings ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    let inner_area = block.inner(area);
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let help_text: Vec<Line> = HELP_LINES
        .iter()
        .map(|(key, desc, is_header)| {
            if *is_header {
                Line::from(vec![Span::styled(*key, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))])
            } else {
                Line::from(vec![
                    Span::styled(format!("{key:>12}"), Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                    Span::raw("  "),
                    Span::styled(*desc, Style::default().fg(Color::White)),
                ])
            }
        })
        .collect();

    f.render_widget(Paragraph::new(help_text).wrap(Wrap { trim: true }), inner_area);
}

const HELP_LINES: &[(&str, &str, bool)] = &[
    ("── Playback ──", "", true),
    ("Space / p", "Play or pause", false),
    ("←/→ or h/l", "Seek by the configured step", false),
    ("Shift+←/→", "Fine seek (0.1s)", false),
    ("Home / 0", "Seek to start", false),
    ("End", "Seek to end", false),
    ("", "", false),
    ("── Global ──", "", true),
    ("r", "Reload transcript", false),
    ("F1 / ?", "Toggle this help", false),
    ("q / Esc", "Quit", false),
    ("", "", false),
    ("Press Esc, F1 or ? to close", "", true),
];
