mod schema;

use crate::{
    error::{Error, Result},
    types::{Task, TaskId},
};
use chrono::NaiveDate;
use log::{debug, warn};
use rusqlite::{Connection, Params, Result as SQLiteResult};
use schema::{task_from_row, DELETE_TASK, INITIALIZE, INSERT_TASK, SELECT_TASKS};
use std::path::Path;

/// Handle to the task database. Every mutation commits as soon as it returns.
pub(crate) struct Db {
    conn: Connection,
}

impl Db {
    pub(crate) fn open(path: &Path) -> Result<Db> {
        debug!("Opening database at {path:?}");
        let conn = Connection::open(path)?;
        debug!("Database connection opened, initializing...");
        Self::initialize(&conn)?;
        debug!("Database initialized.");
        Ok(Db { conn })
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Db> {
        let conn = Connection::open_in_memory()?;
        Self::initialize(&conn)?;
        Ok(Db { conn })
    }

    fn initialize(conn: &Connection) -> Result<()> {
        conn.execute_batch(INITIALIZE)?;
        Ok(())
    }

    pub(crate) fn insert(&self, description: &str, deadline: NaiveDate) -> Result<TaskId> {
        if description.trim().is_empty() {
            return Err(Error::EmptyDescription);
        }
        self.conn.execute(INSERT_TASK, (description, deadline))?;
        let task_id = self.conn.last_insert_rowid();
        debug!("Inserted task {task_id} due {deadline}");
        Ok(task_id)
    }

    pub(crate) fn query_by_date(&self, date: NaiveDate) -> Result<Vec<Task>> {
        self.select("WHERE deadline = ?1 ORDER BY id", (date,))
    }

    /// Both ends of the range are inclusive.
    pub(crate) fn query_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Task>> {
        self.select(
            "WHERE deadline BETWEEN ?1 AND ?2 ORDER BY deadline, id",
            (start, end),
        )
    }

    pub(crate) fn query_all(&self) -> Result<Vec<Task>> {
        self.select("ORDER BY deadline, id", ())
    }

    pub(crate) fn query_overdue(&self, today: NaiveDate) -> Result<Vec<Task>> {
        self.select("WHERE deadline < ?1 ORDER BY deadline, id", (today,))
    }

    fn select<P: Params>(&self, clause: &str, params: P) -> Result<Vec<Task>> {
        let sql = format!("{SELECT_TASKS} {clause}");
        let mut stmt = self.conn.prepare_cached(&sql)?;
        let tasks = stmt
            .query_map(params, task_from_row)?
            .collect::<SQLiteResult<Vec<_>>>()?;
        debug!("{sql} returned {} task(s)", tasks.len());
        Ok(tasks)
    }

    pub(crate) fn delete(&self, task: &Task) -> Result<()> {
        let removed = self.conn.execute(DELETE_TASK, (task.id,))?;
        if removed == 0 {
            warn!("Task {} was already gone when deleting", task.id);
        } else {
            debug!("Deleted task {}", task.id);
        }
        Ok(())
    }

    pub(crate) fn close(self) -> Result<()> {
        debug!("Closing database.");
        self.conn.close().map_err(|(_, err)| Error::from(err))
    }
}
