use std::io::Error as IOError;

use rusqlite::Error as SQLiteError;
use xdg::BaseDirectoriesError;

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
    #[error("could not locate the state directory: {0}")]
    Config(#[from] BaseDirectoriesError),
    #[error("there was a database error: {0}")]
    Database(#[from] SQLiteError),
    #[error("console I/O failed: {0}")]
    Io(#[from] IOError),
    #[error("invalid deadline {input:?}, expected YYYY-MM-DD with a year from 0001 to 9999")]
    InvalidDeadline {
        input: String,
        #[source]
        source: Option<chrono::ParseError>,
    },
    #[error("task description must not be empty")]
    EmptyDescription,
    #[error("standard input was closed")]
    InputClosed,
}

pub(crate) type Result<T> = std::result::Result<T, Error>;
