use std::fmt::Display;

use chrono::NaiveDate;

pub(crate) type TaskId = i64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Task {
    pub(crate) id: TaskId,
    pub(crate) description: String,
    pub(crate) deadline: NaiveDate,
}

impl Task {
    pub(crate) fn new(id: TaskId, description: String, deadline: NaiveDate) -> Self {
        Task {
            id,
            description,
            deadline,
        }
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        assert!(
            !self.description.is_empty(),
            "task {} has no description",
            self.id
        );
        f.write_str(&self.description)
    }
}

/// Source of the current calendar date.
pub(crate) trait Clock {
    fn today(&self) -> NaiveDate;
}

pub(crate) struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

#[cfg(test)]
pub(crate) struct FixedClock(pub(crate) NaiveDate);

#[cfg(test)]
impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
