use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Centered "Current Date: YYYY-MM-DD (+N)" header
pub fn render_date_bar(frame: &mut Frame, app: &App, area: Rect) {
    let style = Style::default()
        .fg(app.theme.text_bright)
        .bg(app.theme.background)
        .add_modifier(Modifier::BOLD);
    let paragraph = Paragraph::new(Line::styled(app.date_label(), style))
        .alignment(Alignment::Center)
        .style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn shows_date_and_offset() {
        let mut app = app_with_abc();
        let output = render_to_string(TERM_W, 2, |frame, area| {
            render_date_bar(frame, &app, area);
        });
        assert!(output.contains("Current Date: 2024-01-01 (0)"));

        app.change_day(-2).unwrap();
        let output = render_to_string(TERM_W, 2, |frame, area| {
            render_date_bar(frame, &app, area);
        });
        assert!(output.contains("Current Date: 2023-12-30 (-2)"));
    }
}
