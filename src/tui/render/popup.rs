use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::util::unicode;

const CONFIRM_TEXT: &str = "Delete this todo? (y/n)";

/// A `width` x `height` rect centered in `area` (clamped to fit)
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Half the screen wide, at least 20 columns
fn popup_width(area: Rect) -> u16 {
    (area.width / 2).max(20)
}

fn popup_block<'a>(app: &App, title: &'a str) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow).bg(app.theme.background))
        .title(title)
        .style(Style::default().bg(app.theme.background))
}

/// Single-line text entry for add/update
pub fn render_edit_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(edit) = &app.edit else {
        return;
    };
    let rect = centered_rect(area, popup_width(area), 3);
    let block = popup_block(app, edit.title());
    let inner = block.inner(rect);

    // Scroll horizontally so the cursor stays inside the box
    let visible = inner.width.saturating_sub(1) as usize;
    let cursor_col = unicode::column_at(&edit.buffer, edit.cursor);
    let mut start = 0;
    while unicode::column_at(&edit.buffer, edit.cursor) - unicode::column_at(&edit.buffer, start)
        > visible
    {
        start = unicode::next_boundary(&edit.buffer, start);
    }
    let shown = unicode::truncate_to_width(&edit.buffer[start..], inner.width as usize);

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            shown,
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.background),
        )))
        .block(block),
        rect,
    );

    let offset = cursor_col - unicode::column_at(&edit.buffer, start);
    frame.set_cursor_position(Position::new(inner.x + offset as u16, inner.y));
}

/// y/n prompt for deleting the selected todo
pub fn render_confirm_popup(frame: &mut Frame, app: &App, area: Rect) {
    if app.confirm.is_none() {
        return;
    }
    let rect = centered_rect(area, popup_width(area), 3);
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            CONFIRM_TEXT,
            Style::default().fg(app.theme.text_bright),
        )))
        .block(popup_block(app, "")),
        rect,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::{EditState, EditTarget, Mode};
    use crate::tui::render::render;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn centered_rect_fits_inside() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(area, 40, 3), Rect::new(20, 10, 40, 3));
        let small = Rect::new(0, 0, 10, 2);
        assert_eq!(centered_rect(small, 40, 3), Rect::new(0, 0, 10, 2));
    }

    #[test]
    fn add_popup_shows_title_and_draft() {
        let mut app = app_with_abc();
        app.edit = Some(EditState::new(EditTarget::Add, "walk the dog"));
        app.mode = Mode::Edit;
        let output = render_to_string(TERM_W, TERM_H, |frame, _| render(frame, &mut app));
        assert!(output.contains("Enter new todo"));
        assert!(output.contains("walk the dog"));
    }

    #[test]
    fn long_draft_scrolls_to_cursor() {
        let mut app = app_with_abc();
        let draft = format!("{}END", "a".repeat(100));
        app.edit = Some(EditState::new(EditTarget::Add, &draft));
        app.mode = Mode::Edit;
        let output = render_to_string(TERM_W, TERM_H, |frame, _| render(frame, &mut app));
        assert!(output.contains("END"));
    }

    #[test]
    fn confirm_popup_asks() {
        let mut app = app_with_abc();
        app.confirm = Some(crate::tui::app::ConfirmState {
            id: app.sequence.record_at(0).unwrap().id,
            index: 0,
        });
        app.mode = Mode::Confirm;
        let output = render_to_string(TERM_W, TERM_H, |frame, _| render(frame, &mut app));
        assert!(output.contains(CONFIRM_TEXT));
    }
}
