use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rusqlite::{Connection, params};

use crate::model::{TodoId, TodoRecord};
use crate::util::calendar;

/// Schema version (increment when changing table definitions)
pub const SCHEMA_VERSION: i32 = 1;

/// Error type for record store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not open database {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
    #[error("could not create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("todo not found: {0}")]
    NotFound(TodoId),
}

/// Durable keyed storage of todo records.
///
/// `query_by_date` returns records ordered by ascending position; records
/// sharing a position come back in insertion order.
pub trait TodoStore {
    fn query_by_date(&self, date: NaiveDate) -> Result<Vec<TodoRecord>, StoreError>;
    fn insert(&self, content: &str, date: NaiveDate, position: i64)
    -> Result<TodoId, StoreError>;
    fn update_content(&self, id: TodoId, content: &str) -> Result<(), StoreError>;
    fn update_completed(&self, id: TodoId, completed: bool) -> Result<(), StoreError>;
    fn update_position(&self, id: TodoId, position: i64) -> Result<(), StoreError>;
    fn delete(&self, id: TodoId) -> Result<(), StoreError>;
}

/// SQLite-backed store (one `todos` table)
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database at `path`
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
            && !dir.exists()
        {
            fs::create_dir_all(dir).map_err(|e| StoreError::CreateDir {
                path: dir.to_path_buf(),
                source: e,
            })?;
        }
        let conn = Connection::open(path).map_err(|e| StoreError::Open {
            path: path.to_path_buf(),
            source: e,
        })?;
        let store = SqliteStore { conn };
        store.init_schema()?;
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let store = SqliteStore { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<(), StoreError> {
        // Rows written before versioning keep their data: the table layout
        // is the same, only user_version is new.
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS todos (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                content TEXT NOT NULL,
                completed INTEGER DEFAULT 0,
                date TEXT NOT NULL,
                position INTEGER
            );

            CREATE INDEX IF NOT EXISTS idx_todos_date ON todos(date, position);
            "#,
        )?;
        self.conn
            .execute(&format!("PRAGMA user_version = {}", SCHEMA_VERSION), [])?;
        Ok(())
    }

    /// Fail with `NotFound` when an UPDATE/DELETE touched no rows
    fn expect_one(changed: usize, id: TodoId) -> Result<(), StoreError> {
        if changed == 0 {
            Err(StoreError::NotFound(id))
        } else {
            Ok(())
        }
    }
}

impl TodoStore for SqliteStore {
    fn query_by_date(&self, date: NaiveDate) -> Result<Vec<TodoRecord>, StoreError> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, content, COALESCE(completed, 0), COALESCE(position, 0)
            FROM todos
            WHERE date = ?1
            ORDER BY COALESCE(position, 0), id
            "#,
        )?;

        let todos = stmt
            .query_map([calendar::format(date)], |row| {
                Ok(TodoRecord {
                    id: TodoId(row.get(0)?),
                    content: row.get(1)?,
                    completed: row.get(2)?,
                    date,
                    position: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, rusqlite::Error>>()?;

        Ok(todos)
    }

    fn insert(
        &self,
        content: &str,
        date: NaiveDate,
        position: i64,
    ) -> Result<TodoId, StoreError> {
        self.conn.execute(
            "INSERT INTO todos (content, date, position) VALUES (?1, ?2, ?3)",
            params![content, calendar::format(date), position],
        )?;
        Ok(TodoId(self.conn.last_insert_rowid()))
    }

    fn update_content(&self, id: TodoId, content: &str) -> Result<(), StoreError> {
        let changed = self.conn.execute(
            "UPDATE todos SET content = ?1 WHERE id = ?2",
            params![content, id.0],
        )?;
        Self::expect_one(changed, id)
    }

    fn update_completed(&self, id: TodoId, completed: bool) -> Result<(), StoreError> {
        let changed = self.conn.execute(
            "UPDATE todos SET completed = ?1 WHERE id = ?2",
            params![completed, id.0],
        )?;
        Self::expect_one(changed, id)
    }

    fn update_position(&self, id: TodoId, position: i64) -> Result<(), StoreError> {
        let changed = self.conn.execute(
            "UPDATE todos SET position = ?1 WHERE id = ?2",
            params![position, id.0],
        )?;
        Self::expect_one(changed, id)
    }

    fn delete(&self, id: TodoId) -> Result<(), StoreError> {
        let changed = self
            .conn
            .execute("DELETE FROM todos WHERE id = ?1", params![id.0])?;
        Self::expect_one(changed, id)
    }
}
