//! Pages behind each route
//!
//! Each page implements the Module trait and handles its own:
//! - Key input processing
//! - Command handling
//! - Rendering
//!
//! Modules:
//! - dashboard: Overview cards, recent activity, alerts, quick actions
//! - pages: Record pages (expenses, inventory, tasks, payroll, employees)
//! - export: CSV/JSON export of the visible records

pub mod dashboard;
pub mod export;
pub mod pages;
