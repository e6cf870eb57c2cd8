//! Actions that modules can return to communicate with the app

use crate::nav::Route;

/// Actions returned by modules to communicate state changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action needed
    None,

    /// Switch to another page, optionally leaving a note in the status line
    Navigate { route: Route, note: Option<String> },

    /// Switch to a page and select one of its records
    OpenRecord { route: Route, id: String },

    /// Copy text to the system clipboard
    Copy(String),

    /// Show notification in status bar
    Notify(String, NotifyLevel),

    /// Start live search on the current page
    BeginSearch,

    /// Request quit
    Quit,
}

impl Action {
    pub fn info(msg: impl Into<String>) -> Self {
        Action::Notify(msg.into(), NotifyLevel::Info)
    }

    pub fn warn(msg: impl Into<String>) -> Self {
        Action::Notify(msg.into(), NotifyLevel::Warn)
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Action::Notify(msg.into(), NotifyLevel::Error)
    }
}

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warn,
    Error,
}
