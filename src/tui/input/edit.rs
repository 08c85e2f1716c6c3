use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::io::store::StoreError;
use crate::ops::todo_ops;
use crate::tui::app::{App, EditState, EditTarget, Mode};
use crate::util::unicode;

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) -> Result<(), StoreError> {
    match key.code {
        KeyCode::Esc => {
            // Cancel: drop the draft, no store write
            app.edit = None;
            app.mode = Mode::Navigate;
        }
        KeyCode::Enter => submit_edit(app)?,
        _ => {
            if let Some(edit) = &mut app.edit {
                edit_buffer_key(edit, key);
            }
        }
    }
    Ok(())
}

/// Apply a cursor/text key to the draft
fn edit_buffer_key(edit: &mut EditState, key: KeyEvent) {
    match key.code {
        KeyCode::Left => edit.cursor = unicode::prev_boundary(&edit.buffer, edit.cursor),
        KeyCode::Right => edit.cursor = unicode::next_boundary(&edit.buffer, edit.cursor),
        KeyCode::Home => edit.cursor = 0,
        KeyCode::End => edit.cursor = edit.buffer.len(),
        KeyCode::Backspace => {
            let start = unicode::prev_boundary(&edit.buffer, edit.cursor);
            edit.buffer.replace_range(start..edit.cursor, "");
            edit.cursor = start;
        }
        KeyCode::Delete => {
            let end = unicode::next_boundary(&edit.buffer, edit.cursor);
            edit.buffer.replace_range(edit.cursor..end, "");
        }
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            edit.buffer.insert(edit.cursor, c);
            edit.cursor += c.len_utf8();
        }
        _ => {}
    }
}

/// Submit the draft. Blank text is discarded without touching the store.
fn submit_edit(app: &mut App) -> Result<(), StoreError> {
    app.mode = Mode::Navigate;
    let Some(edit) = app.edit.take() else {
        return Ok(());
    };

    match edit.target {
        EditTarget::Add => {
            let count = app.sequence.item_count();
            let added = todo_ops::add_todo(
                app.store.as_ref(),
                app.current_date,
                &edit.buffer,
                count,
            )?;
            if let Some(id) = added {
                app.reload(None)?;
                app.select_todo(id);
            }
        }
        EditTarget::Update { id, index } => {
            if todo_ops::update_todo(app.store.as_ref(), id, &edit.buffer)? {
                app.reload(Some(index))?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;
    use pretty_assertions::assert_eq;

    use crate::tui::app::Mode;
    use crate::tui::input::test_keys::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn add_appends_to_active_items_and_selects_it() {
        let mut app = app_with_abc();
        press(&mut app, &[ctrl('a')]);
        assert_eq!(app.mode, Mode::Edit);
        type_text(&mut app, "New thing");
        press(&mut app, &[key(KeyCode::Enter)]);

        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(slot_labels(&app), vec!["A", "B", "New thing", "--", "C"]);
        assert_eq!(app.cursor, 2);
        assert_eq!(app.sequence.record_at(2).unwrap().position, 3);
    }

    #[test]
    fn blank_add_creates_nothing() {
        let mut app = app_with_abc();
        press(&mut app, &[ctrl('a')]);
        type_text(&mut app, "   ");
        press(&mut app, &[key(KeyCode::Enter)]);
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.sequence.item_count(), 3);
    }

    #[test]
    fn esc_cancels_without_writing() {
        let mut app = app_with_abc();
        press(&mut app, &[ctrl('a')]);
        type_text(&mut app, "never saved");
        press(&mut app, &[key(KeyCode::Esc)]);
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.edit.is_none());

        app.reload(None).unwrap();
        assert_eq!(app.sequence.item_count(), 3);
    }

    #[test]
    fn update_prefills_and_replaces() {
        let mut app = app_with_abc();
        app.cursor = 1;
        press(&mut app, &[ctrl('u')]);
        let edit = app.edit.as_ref().unwrap();
        assert_eq!(edit.buffer, "B");
        assert_eq!(edit.cursor, 1);

        type_text(&mut app, "ee");
        press(&mut app, &[key(KeyCode::Enter)]);
        assert_eq!(slot_labels(&app), vec!["A", "Bee", "--", "C"]);
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn blank_update_keeps_text() {
        let mut app = app_with_abc();
        press(&mut app, &[ctrl('u'), key(KeyCode::Backspace)]);
        assert_eq!(app.edit.as_ref().unwrap().buffer, "");
        press(&mut app, &[key(KeyCode::Enter)]);
        assert_eq!(slot_labels(&app), vec!["A", "B", "--", "C"]);
    }

    #[test]
    fn cursor_keys_edit_in_place() {
        let mut app = app_with_abc();
        press(&mut app, &[ctrl('a')]);
        type_text(&mut app, "milk");
        press(&mut app, &[key(KeyCode::Home)]);
        type_text(&mut app, "buy ");
        press(
            &mut app,
            &[key(KeyCode::End), key(KeyCode::Left), key(KeyCode::Delete)],
        );
        assert_eq!(app.edit.as_ref().unwrap().buffer, "buy mil");
        press(&mut app, &[key(KeyCode::Backspace), key(KeyCode::Right)]);
        let edit = app.edit.as_ref().unwrap();
        assert_eq!(edit.buffer, "buy mi");
        assert_eq!(edit.cursor, 6);
    }

    #[test]
    fn control_chars_are_not_inserted() {
        let mut app = app_with_abc();
        press(&mut app, &[ctrl('a'), ctrl('x')]);
        assert_eq!(app.edit.as_ref().unwrap().buffer, "");
    }
}
