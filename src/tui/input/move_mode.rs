use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

use crate::io::store::StoreError;
use crate::ops::move_session::{Direction, StepOutcome};
use crate::ops::reconcile;
use crate::tui::app::{App, Mode};

use super::is_quit;

/// Keys while a move session is armed. Only step, confirm and quit do
/// anything; every other command is suppressed until the move is confirmed.
pub(super) fn handle_move(app: &mut App, key: KeyEvent) -> Result<(), StoreError> {
    if is_quit(&key) {
        // Quitting abandons the session without saving the new order
        app.move_state.abort();
        app.mode = Mode::Navigate;
        app.should_quit = true;
        return Ok(());
    }

    match (key.modifiers, key.code) {
        (_, KeyCode::Enter) => confirm_move(app)?,
        (KeyModifiers::NONE, KeyCode::Up | KeyCode::Char('k')) => step(app, Direction::Up),
        (KeyModifiers::NONE, KeyCode::Down | KeyCode::Char('j')) => step(app, Direction::Down),
        _ => {}
    }
    Ok(())
}

fn step(app: &mut App, direction: Direction) {
    match app.move_state.step(&mut app.sequence, direction) {
        StepOutcome::Moved { to, .. } => app.cursor = to,
        StepOutcome::Rejected(reason) => {
            debug!(?direction, ?reason, "move step rejected");
        }
    }
}

/// Persist the in-memory order and reload the day from the store.
/// Individual write failures are reported on the status row, not raised.
fn confirm_move(app: &mut App) -> Result<(), StoreError> {
    let Some(anchor) = app.move_state.confirm() else {
        app.mode = Mode::Navigate;
        return Ok(());
    };
    app.mode = Mode::Navigate;
    let moved = app.sequence.record_at(anchor).map(|r| r.id);

    let report = reconcile::reconcile(app.store.as_ref(), &app.sequence);
    info!(
        written = report.written.len(),
        failed = report.failed.len(),
        "move confirmed"
    );

    app.reload(Some(anchor))?;
    if let Some(id) = moved {
        app.select_todo(id);
    }
    if !report.is_clean() {
        let n = report.failed.len();
        app.set_error(format!(
            "{} position{} could not be saved",
            n,
            if n == 1 { "" } else { "s" }
        ));
    }
    Ok(())
}
