mod app;
mod commands;
mod config;
mod db;
mod error;
mod types;
mod views;
use crate::app::App;
use crate::error::Result;
use crate::types::SystemClock;
use crate::{config::Config, db::Db};
use log::debug;
use std::io::{stdin, stdout};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("{e:?}");
            eprintln!("todolist: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = Config::load()?;
    debug!("Initializing db...");
    let db = Db::open(&config.database)?;
    debug!("Initialized db.");

    let mut app = App::new(db, stdin().lock(), stdout().lock(), SystemClock);
    let outcome = app.run();
    let closed = app.into_db().close();
    outcome.and(closed)
}
