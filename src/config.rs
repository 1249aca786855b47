use crate::error::Result;
use std::{ffi::OsString, path::PathBuf};

const APP_PREFIX: &str = "todolist";
const DATABASE: &str = "todo.db";
pub(crate) const DATABASE_ENV: &str = "TODOLIST_DB";

pub(crate) struct Config {
    pub(crate) database: PathBuf,
}

impl Config {
    /// Resolves the database location from `TODOLIST_DB`, falling back to the
    /// XDG state directory.
    pub(crate) fn load() -> Result<Config> {
        let database = match database_override(std::env::var_os(DATABASE_ENV)) {
            Some(path) => path,
            None => get_database_file()?,
        };
        Ok(Config { database })
    }
}

fn database_override(value: Option<OsString>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}

fn get_database_file() -> Result<PathBuf> {
    let dirs = xdg::BaseDirectories::with_prefix(APP_PREFIX)?;
    Ok(dirs.place_state_file(DATABASE)?)
}
