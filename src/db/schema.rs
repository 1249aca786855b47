//! Column mapping for the `task` table.
//!
//! `Task` itself knows nothing about storage; this module owns the table
//! definition and the conversion between rows and records.

use crate::types::Task;
use rusqlite::Row;

/// `deadline` holds `YYYY-MM-DD` text, so string comparison in SQL matches
/// calendar order. That only holds for years 0001 to 9999; wider years are
/// written with a sign and sort out of place.
pub(super) const INITIALIZE: &str = "
CREATE TABLE IF NOT EXISTS 'task' (
	'id'	INTEGER NOT NULL,
	'description'	TEXT NOT NULL,
	'deadline'	DATE NOT NULL,
	PRIMARY KEY('id' AUTOINCREMENT)
);
CREATE INDEX IF NOT EXISTS 'task_deadline' ON 'task'('deadline');
";

pub(super) const SELECT_TASKS: &str = "SELECT id, description, deadline FROM task";

pub(super) const INSERT_TASK: &str = "INSERT INTO task(description, deadline) VALUES(?1, ?2)";

pub(super) const DELETE_TASK: &str = "DELETE FROM task WHERE id = ?1";

pub(super) fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task::new(row.get(0)?, row.get(1)?, row.get(2)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    fn columns(conn: &Connection) -> Vec<String> {
        let mut stmt = conn.prepare("SELECT name FROM pragma_table_info('task')").unwrap();
        let names = stmt
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<rusqlite::Result<Vec<String>>>()
            .unwrap();
        names
    }

    #[test]
    fn initialize_creates_task_table() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(INITIALIZE).unwrap();
        assert_eq!(columns(&conn), ["id", "description", "deadline"]);
    }

    #[test]
    fn initialize_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(INITIALIZE).unwrap();
        conn.execute_batch(INITIALIZE).unwrap();
        assert_eq!(columns(&conn).len(), 3);
    }

    #[test]
    fn deadline_is_stored_as_iso_text() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(INITIALIZE).unwrap();
        let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        conn.execute(INSERT_TASK, ("Buy milk", date)).unwrap();
        let raw: String = conn
            .query_row("SELECT deadline FROM task", [], |row| row.get(0))
            .unwrap();
        assert_eq!(raw, "2024-01-10");
        let task = conn
            .query_row(SELECT_TASKS, [], task_from_row)
            .unwrap();
        assert_eq!(task, Task::new(1, "Buy milk".to_string(), date));
    }
}
