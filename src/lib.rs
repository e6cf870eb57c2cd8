//! Terminal business-management dashboard: expenses, equipment inventory,
//! task monitoring, payroll and employee records over static seed data.

pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod input;
pub mod logging;
pub mod modules;
pub mod nav;
pub mod session;
pub mod ui;
