use chrono::NaiveDate;
use tracing::info;

use crate::io::store::{StoreError, TodoStore};
use crate::model::{TodoId, TodoRecord};

/// Trim submitted text; None if nothing is left
pub fn normalize_content(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

/// Add a todo at the end of `date`. `day_count` is the number of records
/// the day currently holds and becomes the new record's position.
///
/// Blank text is discarded and returns `Ok(None)`.
pub fn add_todo(
    store: &dyn TodoStore,
    date: NaiveDate,
    text: &str,
    day_count: usize,
) -> Result<Option<TodoId>, StoreError> {
    let Some(content) = normalize_content(text) else {
        return Ok(None);
    };
    let id = store.insert(content, date, day_count as i64)?;
    info!(todo = %id, %date, "added todo");
    Ok(Some(id))
}

/// Replace a todo's text. Blank text is discarded and returns `Ok(false)`.
pub fn update_todo(store: &dyn TodoStore, id: TodoId, text: &str) -> Result<bool, StoreError> {
    let Some(content) = normalize_content(text) else {
        return Ok(false);
    };
    store.update_content(id, content)?;
    Ok(true)
}

/// Flip completed/active, returning the new state
pub fn toggle_completed(store: &dyn TodoStore, record: &TodoRecord) -> Result<bool, StoreError> {
    let completed = !record.completed;
    store.update_completed(record.id, completed)?;
    Ok(completed)
}

pub fn delete_todo(store: &dyn TodoStore, id: TodoId) -> Result<(), StoreError> {
    store.delete(id)?;
    info!(todo = %id, "deleted todo");
    Ok(())
}
