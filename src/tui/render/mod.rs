pub mod date_bar;
pub mod list_view;
pub mod popup;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, Mode};

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: date bar (2 rows) | list | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // date + spacer
            Constraint::Min(1),    // todo list
            Constraint::Length(1), // status row
        ])
        .split(area);

    date_bar::render_date_bar(frame, app, chunks[0]);
    list_view::render_list_view(frame, app, chunks[1]);
    status_row::render_status_row(frame, app, chunks[2]);

    // Popups are drawn over everything
    match app.mode {
        Mode::Edit => popup::render_edit_popup(frame, app, area),
        Mode::Confirm => popup::render_confirm_popup(frame, app, area),
        Mode::Navigate | Mode::Move => {}
    }
}
