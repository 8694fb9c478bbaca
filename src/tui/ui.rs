//! UI rendering using ratatui
//!
//! One board screen with two overlays:
//! - End-of-round popup, once its delay has passed
//! - Settings picker (Tab)

use super::theme::{self, Palette};
use crate::app::{App, NoticeKind, SettingField};
use crate::game::{GameStatus, KeyState, RoundState};
use crate::storage::KeyValueStore;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

const KEYBOARD_ROWS: [&str; 2] = ["abcdefghijklm", "nopqrstuvwxyz"];

/// Parts of the figure, drawn one per wrong guess
pub const FIGURE_PARTS: usize = 6;

/// Render the board and any open overlay
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>) {
    let palette = theme::palette_for(&app.settings().theme);
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with stats
            Constraint::Min(10),   // Board
            Constraint::Length(1), // Notification
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, layout[0], app, palette);
    render_board(frame, layout[1], app, palette);
    render_notification(frame, layout[2], app, palette);
    render_footer(frame, layout[3], palette);

    if let Some(selected) = app.screen().selected_field() {
        render_settings(frame, area, app, selected, palette);
    } else if app.feedback().popup().is_some() {
        render_popup(frame, area, app, palette);
    }
}

/// Render the header: title, lifetime stats, the round's difficulty and category
fn render_header<S: KeyValueStore>(frame: &mut Frame, area: Rect, app: &App<S>, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette.muted));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(10), // Title
            Constraint::Min(30),    // Stats
            Constraint::Length(34), // Round selection
        ])
        .split(inner);

    let title = Paragraph::new("HANGMAN")
        .style(Style::default().fg(palette.accent).bold())
        .alignment(Alignment::Left);
    frame.render_widget(title, header_layout[0]);

    let stats = app.engine().stats();
    let status = format!(
        "Wins: {}  Hints: {}  Games: {}  Win rate: {}%",
        stats.wins,
        app.engine().hints_remaining(),
        stats.games_played,
        stats.win_percent()
    );
    let status = Paragraph::new(status)
        .style(Style::default().fg(palette.text))
        .alignment(Alignment::Center);
    frame.render_widget(status, header_layout[1]);

    let selection = match app.engine().round() {
        Some(round) => {
            let mut text = format!("{} | {}", round.difficulty().label(), round.category().label());
            if round.used_fallback() {
                text.push_str(" (any length)");
            }
            text
        }
        None => {
            let settings = app.settings();
            format!("{} | {}", settings.difficulty.label(), settings.category.label())
        }
    };
    let selection = Paragraph::new(selection)
        .style(Style::default().fg(palette.muted))
        .alignment(Alignment::Right);
    frame.render_widget(selection, header_layout[2]);
}

/// Render the figure beside the word, wrong letters and keyboard
fn render_board<S: KeyValueStore>(frame: &mut Frame, area: Rect, app: &App<S>, palette: &Palette) {
    let Some(round) = app.engine().round() else {
        let idle = Paragraph::new("[ Press ENTER to start ]")
            .style(Style::default().fg(palette.muted))
            .alignment(Alignment::Center);
        frame.render_widget(idle, area);
        return;
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16), // Figure
            Constraint::Min(30),    // Word and keyboard
        ])
        .split(area);

    let max_wrong = app.engine().config().max_wrong_guesses;
    let parts = figure_parts(round.wrong_count(), max_wrong);
    let figure_color = match round.status() {
        GameStatus::Active => palette.gallows,
        GameStatus::Won => palette.correct,
        GameStatus::Lost => palette.wrong,
    };
    let figure = Paragraph::new(gallows_lines(parts).join("\n"))
        .style(Style::default().fg(figure_color))
        .block(Block::default().borders(Borders::RIGHT).border_style(Style::default().fg(palette.muted)));
    frame.render_widget(figure, columns[0]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Word
            Constraint::Length(2), // Wrong letters
            Constraint::Length(2), // Keyboard
            Constraint::Min(0),    // Remaining space
        ])
        .split(columns[1]);

    let word = Paragraph::new(word_line(app, round, palette)).alignment(Alignment::Center);
    frame.render_widget(word, rows[0]);

    let wrong: Vec<String> = round
        .wrong_letters()
        .iter()
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect();
    let wrong_text = format!("Wrong ({}/{}): {}", round.wrong_count(), max_wrong, wrong.join(" "));
    let wrong = Paragraph::new(wrong_text)
        .style(Style::default().fg(palette.wrong))
        .alignment(Alignment::Center);
    frame.render_widget(wrong, rows[1]);

    let keyboard = Paragraph::new(keyboard_lines(round, palette)).alignment(Alignment::Center);
    frame.render_widget(keyboard, rows[2]);
}

/// The word with blanks; fresh letters highlighted, missed letters shown after a loss
fn word_line<S: KeyValueStore>(app: &App<S>, round: &RoundState, palette: &Palette) -> Line<'static> {
    let lost = round.status() == GameStatus::Lost;
    let spans: Vec<Span> = round
        .word()
        .chars()
        .map(|c| {
            let upper = c.to_ascii_uppercase();
            if round.correct_letters().contains(&c) {
                let style = if app.feedback().is_fresh(c) {
                    Style::default().fg(palette.fresh).bold()
                } else {
                    Style::default().fg(palette.text).bold()
                };
                Span::styled(format!("{} ", upper), style)
            } else if lost {
                Span::styled(format!("{} ", upper), Style::default().fg(palette.wrong))
            } else {
                Span::styled("_ ", Style::default().fg(palette.muted))
            }
        })
        .collect();
    Line::from(spans)
}

fn keyboard_lines(round: &RoundState, palette: &Palette) -> Vec<Line<'static>> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|c| {
                    let style = match round.key_state(c) {
                        KeyState::Unused => Style::default().fg(palette.text),
                        KeyState::Correct => Style::default().fg(palette.correct).bold(),
                        KeyState::Wrong => Style::default()
                            .fg(palette.wrong)
                            .add_modifier(Modifier::CROSSED_OUT),
                    };
                    Span::styled(format!(" {} ", c.to_ascii_uppercase()), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn render_notification<S: KeyValueStore>(frame: &mut Frame, area: Rect, app: &App<S>, palette: &Palette) {
    let Some(notice) = app.feedback().notification() else {
        return;
    };
    let color = match notice.kind {
        NoticeKind::Warning => palette.accent,
        NoticeKind::Error => palette.wrong,
        NoticeKind::Hint => palette.fresh,
    };
    let text = format!("[{}] {}", notice.kind.icon(), notice.message);
    let widget = Paragraph::new(text)
        .style(Style::default().fg(color).bold())
        .alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn render_footer(frame: &mut Frame, area: Rect, palette: &Palette) {
    let footer = Paragraph::new("A-Z Guess  ? Hint  Enter New game  Tab Settings  Esc Quit")
        .style(Style::default().fg(palette.muted))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Render the end-of-round popup
fn render_popup<S: KeyValueStore>(frame: &mut Frame, area: Rect, app: &App<S>, palette: &Palette) {
    let Some(popup) = app.feedback().popup() else {
        return;
    };
    let popup_area = centered_rect(60, 50, area);
    frame.render_widget(Clear, popup_area);

    let (title, color) = if popup.won {
        (" YOU WON ", palette.correct)
    } else {
        (" GAME OVER ", palette.wrong)
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(palette.background));

    let elapsed = app
        .engine()
        .round()
        .map(|round| round.elapsed_millis(app.engine().now_millis()))
        .unwrap_or(0);

    let text = Text::from(vec![
        Line::from(""),
        Line::from(Span::styled(popup.title(), Style::default().fg(color).bold())),
        Line::from(""),
        Line::from(Span::styled(popup.reveal_line(), Style::default().fg(palette.text))),
        Line::from(Span::styled(
            format!("Time: {}", format_elapsed(elapsed)),
            Style::default().fg(palette.muted),
        )),
        Line::from(Span::styled(
            format!("Total wins: {}", popup.wins),
            Style::default().fg(palette.accent),
        )),
        Line::from(""),
        Line::from(Span::styled("Press Enter to play again", Style::default().fg(palette.muted))),
    ]);

    let widget = Paragraph::new(text).alignment(Alignment::Center).block(block);
    frame.render_widget(widget, popup_area);
}

/// Render the settings picker
fn render_settings<S: KeyValueStore>(
    frame: &mut Frame,
    area: Rect,
    app: &App<S>,
    selected: SettingField,
    palette: &Palette,
) {
    let popup_area = centered_rect(50, 40, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Settings ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.background));

    let settings = app.settings();
    let mut lines = vec![Line::from("")];
    // Left-aligned so the value columns line up
    for field in SettingField::all() {
        let value = match field {
            SettingField::Difficulty => settings.difficulty.label(),
            SettingField::Category => settings.category.label(),
            SettingField::Theme => theme::label_for(&settings.theme),
        };
        let is_selected = *field == selected;
        let style = if is_selected {
            Style::default().fg(palette.accent).bold()
        } else {
            Style::default().fg(palette.text)
        };
        let prefix = if is_selected { "> " } else { "  " };
        lines.push(Line::from(Span::styled(
            format!("{}{:<11} < {} >", prefix, field.label(), value),
            style,
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "↑↓ Field  ←→ Change  Esc Close",
        Style::default().fg(palette.muted),
    )));

    let widget = Paragraph::new(Text::from(lines)).block(block);
    frame.render_widget(widget, popup_area);
}

/// Figure parts to draw for `wrong` misses out of `max_wrong`. Reaching the
/// limit always completes the figure.
pub fn figure_parts(wrong: usize, max_wrong: usize) -> usize {
    if max_wrong == 0 {
        return FIGURE_PARTS;
    }
    (wrong.min(max_wrong) * FIGURE_PARTS) / max_wrong
}

/// Gallows with the first `parts` of head, body, left arm, right arm,
/// left leg and right leg
pub fn gallows_lines(parts: usize) -> Vec<String> {
    let part = |n: usize, glyph: char| if parts >= n { glyph } else { ' ' };
    vec![
        "  +----+".to_string(),
        "  |    |".to_string(),
        format!("  |    {}", part(1, 'O')),
        format!("  |   {}{}{}", part(3, '/'), part(2, '|'), part(4, '\\')),
        format!("  |   {} {}", part(5, '/'), part(6, '\\')),
        "  |".to_string(),
        "=====".to_string(),
    ]
}

/// Format a duration as m:ss
pub fn format_elapsed(millis: u64) -> String {
    let seconds = millis / 1000;
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
