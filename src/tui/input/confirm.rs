use crossterm::event::{KeyCode, KeyEvent};

use crate::io::store::StoreError;
use crate::ops::todo_ops;
use crate::tui::app::{App, Mode};

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) -> Result<(), StoreError> {
    match key.code {
        // Confirm: y
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            let pending = app.confirm.take();
            app.mode = Mode::Navigate;
            if let Some(pending) = pending {
                todo_ops::delete_todo(app.store.as_ref(), pending.id)?;
                app.reload(Some(pending.index))?;
            }
        }
        // Cancel: n or Esc
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.confirm = None;
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
    Ok(())
}
