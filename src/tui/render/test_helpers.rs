use chrono::NaiveDate;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::io::store::flaky::FlakyStore;
use crate::io::store::{SqliteStore, TodoStore};
use crate::model::{Config, TodoId};
use crate::ops::projection::Slot;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// The day every test app starts on
pub fn test_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// Build an App over an in-memory store seeded with `(content, position, completed)`.
pub fn app_with_rows(rows: &[(&str, i64, bool)]) -> App {
    let store = SqliteStore::open_in_memory().unwrap();
    for (content, position, completed) in rows {
        let id = store.insert(content, test_day(), *position).unwrap();
        if *completed {
            store.update_completed(id, true).unwrap();
        }
    }
    App::load(Box::new(store), test_day(), &Config::default()).unwrap()
}

/// A(active,0), B(active,1), C(completed,0) behind a store that can be
/// told to fail. Returns the store and the ids of A, B and C.
pub fn flaky_abc_store() -> (FlakyStore, [TodoId; 3]) {
    let inner = SqliteStore::open_in_memory().unwrap();
    let a = inner.insert("A", test_day(), 0).unwrap();
    let b = inner.insert("B", test_day(), 1).unwrap();
    let c = inner.insert("C", test_day(), 0).unwrap();
    inner.update_completed(c, true).unwrap();
    (FlakyStore::new(inner), [a, b, c])
}

/// Build an App over any store, viewing the test day
pub fn app_over(store: impl TodoStore + 'static) -> App {
    App::load(Box::new(store), test_day(), &Config::default()).unwrap()
}

/// Build an App whose todos take their list index as position.
pub fn app_with_todos(todos: &[(&str, bool)]) -> App {
    let rows: Vec<(&str, i64, bool)> = todos
        .iter()
        .enumerate()
        .map(|(i, (content, completed))| (*content, i as i64, *completed))
        .collect();
    app_with_rows(&rows)
}

/// A and B active, C completed: `[A, B, --, C]`
pub fn app_with_abc() -> App {
    app_with_rows(&[("A", 0, false), ("B", 1, false), ("C", 0, true)])
}

/// Slot contents top to bottom, `--` for the separator
pub fn slot_labels(app: &App) -> Vec<String> {
    app.sequence
        .slots()
        .iter()
        .map(|slot| match slot {
            Slot::Item(record) => record.content.clone(),
            Slot::Separator => "--".to_string(),
        })
        .collect()
}
