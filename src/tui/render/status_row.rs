use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

pub const NAVIGATE_HINTS: &str = "Up/Down: Navigate | Enter: Select/Move | Left/Right: Change Day | Ctrl+A: Add | Ctrl+D: Delete | Ctrl+U: Update | Ctrl+X: Complete/Incomplete | Ctrl+Q: Quit";
pub const MOVE_HINTS: &str =
    "Move Mode: Up/Down to move item, Enter to confirm position | Ctrl+Q: Quit";
const EDIT_HINTS: &str = "Enter: Save | Esc: Cancel";
const CONFIRM_HINTS: &str = "y: Delete | n/Esc: Cancel";

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = if let Some(message) = &app.status_message {
        let fg = if app.status_is_error {
            app.theme.red
        } else {
            app.theme.text_bright
        };
        Line::from(Span::styled(
            unicode::truncate_to_width(message, width),
            Style::default().fg(fg).bg(bg),
        ))
    } else {
        match app.mode {
            // Move mode is always announced, even with hints off
            Mode::Move => Line::from(Span::styled(
                unicode::truncate_to_width(MOVE_HINTS, width),
                Style::default()
                    .fg(app.theme.highlight)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            )),
            _ if !app.show_key_hints => Line::from(""),
            Mode::Navigate => hint_line(app, NAVIGATE_HINTS, width),
            Mode::Edit => hint_line(app, EDIT_HINTS, width),
            Mode::Confirm => hint_line(app, CONFIRM_HINTS, width),
        }
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn hint_line<'a>(app: &App, hints: &str, width: usize) -> Line<'a> {
    Line::from(Span::styled(
        unicode::truncate_to_width(hints, width),
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    ))
}
