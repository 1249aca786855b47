use crate::types::Task;
use chrono::NaiveDate;

pub(crate) const NOTHING_TO_DO: &str = "Nothing to do!";

/// Numbers `tasks` from 1, one per line. `verbose` appends the deadline.
pub(crate) fn render(tasks: &[Task], verbose: bool) -> String {
    if tasks.is_empty() {
        return NOTHING_TO_DO.to_string();
    }
    tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let num = i + 1;
            if verbose {
                format!("{num}. {task}. {}", short_date(task.deadline))
            } else {
                format!("{num}. {task}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `10 Jan`
pub(crate) fn short_date(date: NaiveDate) -> String {
    date.format("%-d %b").to_string()
}

/// `Wednesday 10 Jan`
pub(crate) fn day_header(date: NaiveDate) -> String {
    date.format("%A %-d %b").to_string()
}
