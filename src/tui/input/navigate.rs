use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::info;

use crate::io::store::StoreError;
use crate::ops::todo_ops;
use crate::tui::app::{App, ConfirmState, EditState, EditTarget, Mode};

use super::is_quit;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) -> Result<(), StoreError> {
    // Clear any transient status message on keypress
    app.status_message = None;
    app.status_is_error = false;

    if is_quit(&key) {
        app.should_quit = true;
        return Ok(());
    }

    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Up | KeyCode::Char('k')) => app.move_cursor(-1),
        (KeyModifiers::NONE, KeyCode::Down | KeyCode::Char('j')) => app.move_cursor(1),
        (_, KeyCode::Enter) => enter_move_mode(app),
        (_, KeyCode::Left) => app.change_day(-1)?,
        (_, KeyCode::Right) => app.change_day(1)?,
        (m, KeyCode::Char(c)) if m.contains(KeyModifiers::CONTROL) => match c {
            'a' => begin_add(app),
            'u' => begin_update(app),
            'd' => begin_delete(app),
            'x' => toggle_completed(app)?,
            _ => {}
        },
        _ => {}
    }
    Ok(())
}

/// Arm a move session on the cursor slot. No-op on the separator.
fn enter_move_mode(app: &mut App) {
    if app.move_state.begin(&app.sequence, app.cursor) {
        app.mode = Mode::Move;
        if let Some(record) = app.sequence.record_at(app.cursor) {
            info!(todo = %record.id, index = app.cursor, "move started");
        }
    }
}

fn begin_add(app: &mut App) {
    app.edit = Some(EditState::new(EditTarget::Add, ""));
    app.mode = Mode::Edit;
}

fn begin_update(app: &mut App) {
    let Some(record) = app.sequence.record_at(app.cursor) else {
        return;
    };
    let target = EditTarget::Update {
        id: record.id,
        index: app.cursor,
    };
    app.edit = Some(EditState::new(target, &record.content));
    app.mode = Mode::Edit;
}

fn begin_delete(app: &mut App) {
    let Some(record) = app.sequence.record_at(app.cursor) else {
        return;
    };
    app.confirm = Some(ConfirmState {
        id: record.id,
        index: app.cursor,
    });
    app.mode = Mode::Confirm;
}

fn toggle_completed(app: &mut App) -> Result<(), StoreError> {
    let Some(record) = app.sequence.record_at(app.cursor) else {
        return Ok(());
    };
    todo_ops::toggle_completed(app.store.as_ref(), record)?;
    app.reload(Some(app.cursor))
}
