use crate::{
    app::{App, Flow},
    error::Result,
    types::Clock,
};
use std::io::{BufRead, Write};

/// Menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    Today,
    Week,
    All,
    Missed,
    Add,
    Delete,
    Exit,
}

pub(crate) type Handler<R, W, C> = fn(&mut App<R, W, C>) -> Result<Flow>;

impl Action {
    pub(crate) const MENU: [Action; 7] = [
        Action::Today,
        Action::Week,
        Action::All,
        Action::Missed,
        Action::Add,
        Action::Delete,
        Action::Exit,
    ];

    pub(crate) fn key(self) -> &'static str {
        match self {
            Action::Today => "1",
            Action::Week => "2",
            Action::All => "3",
            Action::Missed => "4",
            Action::Add => "5",
            Action::Delete => "6",
            Action::Exit => "0",
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Action::Today => "Today's tasks",
            Action::Week => "Week's tasks",
            Action::All => "All tasks",
            Action::Missed => "Missed tasks",
            Action::Add => "Add a task",
            Action::Delete => "Delete a task",
            Action::Exit => "Exit",
        }
    }

    /// Exact match only, no trimming or case folding.
    pub(crate) fn from_key(input: &str) -> Option<Action> {
        Self::MENU.into_iter().find(|action| action.key() == input)
    }

    pub(crate) fn handler<R, W, C>(self) -> Handler<R, W, C>
    where
        R: BufRead,
        W: Write,
        C: Clock,
    {
        match self {
            Action::Today => App::today_tasks,
            Action::Week => App::week_tasks,
            Action::All => App::all_tasks,
            Action::Missed => App::missed_tasks,
            Action::Add => App::add_task,
            Action::Delete => App::delete_task,
            Action::Exit => App::exit,
        }
    }
}

pub(crate) fn render_menu() -> String {
    Action::MENU
        .iter()
        .map(|action| format!("{}) {}", action.key(), action.label()))
        .collect::<Vec<_>>()
        .join("\n")
}
