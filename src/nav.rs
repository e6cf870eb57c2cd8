//! Routes, the sidebar and page transitions.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Dashboard,
    Expenses,
    Inventory,
    Tasks,
    Payroll,
    Employees,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Dashboard,
        Route::Expenses,
        Route::Inventory,
        Route::Tasks,
        Route::Payroll,
        Route::Employees,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Expenses => "/expenses",
            Route::Inventory => "/inventory",
            Route::Tasks => "/tasks",
            Route::Payroll => "/payroll",
            Route::Employees => "/employees",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Expenses => "Expenses & Receipts",
            Route::Inventory => "Equipment Inventory",
            Route::Tasks => "Task Monitoring",
            Route::Payroll => "Workers Payroll",
            Route::Employees => "Employee Management",
        }
    }

    /// Label used when the sidebar is collapsed.
    pub fn short_label(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dash",
            Route::Expenses => "Exp",
            Route::Inventory => "Inv",
            Route::Tasks => "Task",
            Route::Payroll => "Pay",
            Route::Employees => "Emp",
        }
    }

    /// Stem for export filenames.
    pub fn slug(&self) -> &'static str {
        match self {
            Route::Dashboard => "dashboard",
            Route::Expenses => "expenses",
            Route::Inventory => "inventory",
            Route::Tasks => "tasks",
            Route::Payroll => "payroll",
            Route::Employees => "employees",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|route| route.path() == path)
    }

    pub fn index(&self) -> usize {
        Route::ALL
            .iter()
            .position(|route| route == self)
            .unwrap_or_default()
    }

    pub fn from_index(index: usize) -> Option<Route> {
        Route::ALL.get(index).copied()
    }
}

/// Whether a sidebar entry should be highlighted for `current_path`.
pub fn is_active(item: Route, current_path: &str) -> bool {
    item.path() == current_path
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sidebar {
    #[default]
    Expanded,
    Collapsed,
}

impl Sidebar {
    pub const EXPANDED_WIDTH: u16 = 28;
    pub const COLLAPSED_WIDTH: u16 = 8;

    pub fn toggle(&mut self) {
        *self = match self {
            Sidebar::Expanded => Sidebar::Collapsed,
            Sidebar::Collapsed => Sidebar::Expanded,
        };
    }

    pub fn width(&self) -> u16 {
        match self {
            Sidebar::Expanded => Self::EXPANDED_WIDTH,
            Sidebar::Collapsed => Self::COLLAPSED_WIDTH,
        }
    }

    pub fn is_collapsed(&self) -> bool {
        *self == Sidebar::Collapsed
    }
}

/// Slide-in offset for the page body after a route change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    started: Instant,
}

impl Transition {
    pub const DURATION: Duration = Duration::from_millis(300);

    /// Columns the body starts shifted by.
    pub const OFFSET: u16 = 6;

    pub fn start(now: Instant) -> Self {
        Self { started: now }
    }

    pub fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= Self::DURATION
    }

    /// Current horizontal offset, shrinking linearly to zero.
    pub fn offset(&self, now: Instant) -> u16 {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= Self::DURATION {
            return 0;
        }
        let remaining = (Self::DURATION - elapsed).as_millis();
        let total = Self::DURATION.as_millis();
        // Rounded up: nonzero until the transition is done.
        let offset = (u128::from(Self::OFFSET) * remaining + total - 1) / total;
        u16::try_from(offset).unwrap_or(Self::OFFSET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/reports"), None);
        assert_eq!(Route::from_path("expenses"), None);
    }

    #[test]
    fn test_active_item_is_exact_path_match() {
        assert!(is_active(Route::Dashboard, "/"));
        assert!(!is_active(Route::Dashboard, "/expenses"));
        assert!(is_active(Route::Tasks, "/tasks"));
        let active: Vec<Route> = Route::ALL
            .into_iter()
            .filter(|r| is_active(*r, "/payroll"))
            .collect();
        assert_eq!(active, vec![Route::Payroll]);
    }

    #[test]
    fn test_sidebar_toggle_and_width() {
        let mut sidebar = Sidebar::default();
        assert_eq!(sidebar.width(), 28);
        sidebar.toggle();
        assert!(sidebar.is_collapsed());
        assert_eq!(sidebar.width(), 8);
        sidebar.toggle();
        assert_eq!(sidebar, Sidebar::Expanded);
    }

    #[test]
    fn test_transition_offset_shrinks_to_zero() {
        let start = Instant::now();
        let transition = Transition::start(start);
        assert_eq!(transition.offset(start), Transition::OFFSET);
        assert_eq!(transition.offset(start + Duration::from_millis(150)), 3);
        assert_eq!(transition.offset(start + Duration::from_millis(299)), 1);
        assert_eq!(transition.offset(start + Transition::DURATION), 0);
        assert!(transition.is_done(start + Duration::from_millis(301)));
    }
}
