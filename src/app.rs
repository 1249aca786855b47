use crate::{
    commands::{render_menu, Action, Handler},
    db::Db,
    error::{Error, Result},
    types::{Clock, Task},
    views::tasks::{day_header, render, short_date},
};
use chrono::{Datelike, Duration, NaiveDate};
use log::debug;
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;

const WEEK_DAYS: i64 = 7;
const DEADLINE_FORMAT: &str = "%Y-%m-%d";
/// Deadlines compare as text in the database, which only orders four-digit years.
const DEADLINE_YEARS: RangeInclusive<i32> = 1..=9999;

/// What the menu loop does after a handler returns.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Exit,
}

/// The interactive menu. Owns the database handle for as long as it runs.
pub(crate) struct App<R, W, C> {
    db: Db,
    input: R,
    output: W,
    clock: C,
}

impl<R, W, C> App<R, W, C>
where
    R: BufRead,
    W: Write,
    C: Clock,
{
    pub(crate) fn new(db: Db, input: R, output: W, clock: C) -> Self {
        App {
            db,
            input,
            output,
            clock,
        }
    }

    /// Gives the database back so the caller can close it.
    pub(crate) fn into_db(self) -> Db {
        self.db
    }

    pub(crate) fn run(&mut self) -> Result<()> {
        loop {
            let action = self.choose()?;
            debug!("Dispatching {action:?}");
            let handler: Handler<R, W, C> = action.handler();
            if handler(self)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Shows the menu once, then keeps reading until a line names an action.
    fn choose(&mut self) -> Result<Action> {
        writeln!(self.output, "{}", render_menu())?;
        loop {
            let line = self.read_line()?;
            if let Some(action) = Action::from_key(&line) {
                return Ok(action);
            }
            debug!("Ignoring menu input {line:?}");
        }
    }

    fn read_line(&mut self) -> Result<String> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        let len = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(len);
        Ok(line)
    }

    pub(crate) fn today_tasks(&mut self) -> Result<Flow> {
        let today = self.clock.today();
        let tasks = self.db.query_by_date(today)?;
        writeln!(self.output, "\nToday {}:", short_date(today))?;
        writeln!(self.output, "{}\n", render(&tasks, false))?;
        Ok(Flow::Continue)
    }

    pub(crate) fn week_tasks(&mut self) -> Result<Flow> {
        let start = self.clock.today();
        let end = start + Duration::days(WEEK_DAYS - 1);
        let tasks = self.db.query_range(start, end)?;
        writeln!(self.output)?;
        for offset in 0..WEEK_DAYS {
            let day = start + Duration::days(offset);
            let due: Vec<Task> = tasks
                .iter()
                .filter(|task| task.deadline == day)
                .cloned()
                .collect();
            writeln!(self.output, "{}:", day_header(day))?;
            writeln!(self.output, "{}\n", render(&due, false))?;
        }
        Ok(Flow::Continue)
    }

    pub(crate) fn all_tasks(&mut self) -> Result<Flow> {
        let tasks = self.db.query_all()?;
        writeln!(self.output, "\nAll tasks:")?;
        writeln!(self.output, "{}\n", render(&tasks, true))?;
        Ok(Flow::Continue)
    }

    pub(crate) fn missed_tasks(&mut self) -> Result<Flow> {
        let tasks = self.db.query_overdue(self.clock.today())?;
        writeln!(self.output, "\nMissed tasks:")?;
        if tasks.is_empty() {
            writeln!(self.output, "Nothing is missed!\n")?;
        } else {
            writeln!(self.output, "{}\n", render(&tasks, true))?;
        }
        Ok(Flow::Continue)
    }

    /// A malformed deadline aborts the session rather than re-prompting.
    pub(crate) fn add_task(&mut self) -> Result<Flow> {
        writeln!(self.output, "\nEnter a task")?;
        let description = self.read_line()?;
        if description.trim().is_empty() {
            return Err(Error::EmptyDescription);
        }
        writeln!(self.output, "Enter a deadline")?;
        let deadline = parse_deadline(&self.read_line()?, self.clock.today())?;
        self.db.insert(&description, deadline)?;
        writeln!(self.output, "The task has been added!\n")?;
        Ok(Flow::Continue)
    }

    /// Deletes by position in the overdue list just shown, re-reading until
    /// the selection is a valid position.
    pub(crate) fn delete_task(&mut self) -> Result<Flow> {
        let tasks = self.db.query_overdue(self.clock.today())?;
        if tasks.is_empty() {
            writeln!(self.output, "\nNothing to delete\n")?;
            return Ok(Flow::Continue);
        }
        writeln!(
            self.output,
            "\nChoose the number of the task you want to delete:"
        )?;
        writeln!(self.output, "{}", render(&tasks, true))?;
        let index = loop {
            let line = self.read_line()?;
            match line.trim().parse::<usize>() {
                Ok(num) if (1..=tasks.len()).contains(&num) => break num - 1,
                _ => debug!("Ignoring selection {line:?}"),
            }
        };
        self.db.delete(&tasks[index])?;
        writeln!(self.output, "The task has been deleted!\n")?;
        Ok(Flow::Continue)
    }

    pub(crate) fn exit(&mut self) -> Result<Flow> {
        writeln!(self.output, "\nBye!")?;
        self.output.flush()?;
        Ok(Flow::Exit)
    }
}

/// An empty line means the task is due `today`.
fn parse_deadline(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(today);
    }
    let invalid = |source| Error::InvalidDeadline {
        input: input.to_string(),
        source,
    };
    let deadline =
        NaiveDate::parse_from_str(input, DEADLINE_FORMAT).map_err(|e| invalid(Some(e)))?;
    if !DEADLINE_YEARS.contains(&deadline.year()) {
        return Err(invalid(None));
    }
    Ok(deadline)
}
