use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::TodoRecord;
use crate::ops::projection::Slot;
use crate::tui::app::App;
use crate::util::unicode;

pub const SEPARATOR_LABEL: &str = "--- Completed Items ---";

/// Render the day's slots, one line each, keeping the cursor in view
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.sequence.is_empty() {
        let empty = Paragraph::new(" No todos for this day (Ctrl+A to add)")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let height = area.height as usize;
    if height == 0 {
        return;
    }
    adjust_scroll(app, height);

    let app: &App = app;
    let width = area.width as usize;
    let anchor = app.move_state.anchor();
    let lines: Vec<Line> = app
        .sequence
        .slots()
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(height)
        .map(|(i, slot)| {
            let is_cursor = i == app.cursor;
            match slot {
                Slot::Item(record) => item_line(app, record, is_cursor, anchor == Some(i), width),
                Slot::Separator => separator_line(app, is_cursor, width),
            }
        })
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Scroll just enough to keep the cursor row visible
fn adjust_scroll(app: &mut App, height: usize) {
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if app.cursor >= app.scroll_offset + height {
        app.scroll_offset = app.cursor + 1 - height;
    }
    let max_scroll = app.sequence.len().saturating_sub(height);
    app.scroll_offset = app.scroll_offset.min(max_scroll);
}

fn item_line<'a>(
    app: &App,
    record: &TodoRecord,
    is_cursor: bool,
    is_moving: bool,
    width: usize,
) -> Line<'a> {
    let theme = &app.theme;
    let bg = if is_moving {
        theme.move_bg
    } else if is_cursor {
        theme.selection_bg
    } else {
        theme.background
    };

    let mut style = Style::default().fg(theme.text).bg(bg);
    if record.completed {
        style = style.fg(theme.dim).add_modifier(Modifier::CROSSED_OUT);
    }
    if is_cursor {
        style = style.add_modifier(Modifier::BOLD);
    }
    if is_moving {
        style = style.fg(theme.highlight).add_modifier(Modifier::REVERSED);
    }

    let marker = if is_moving { "\u{2195} " } else { "  " };
    let text = unicode::truncate_to_width(&record.content, width.saturating_sub(2));
    let used = 2 + unicode::display_width(&text);

    let mut spans = vec![
        Span::styled(marker, Style::default().fg(theme.highlight).bg(bg)),
        Span::styled(text, style),
    ];
    // Pad cursor line so the selection bar spans the full width
    if (is_cursor || is_moving) && used < width {
        spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(bg)));
    }
    Line::from(spans)
}

fn separator_line<'a>(app: &App, is_cursor: bool, width: usize) -> Line<'a> {
    let bg = if is_cursor {
        app.theme.selection_bg
    } else {
        app.theme.background
    };
    let text = unicode::truncate_to_width(SEPARATOR_LABEL, width.saturating_sub(2));
    Line::from(vec![
        Span::styled("  ", Style::default().bg(bg)),
        Span::styled(text, Style::default().fg(app.theme.separator).bg(bg)),
    ])
}
