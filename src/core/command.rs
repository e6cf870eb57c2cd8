//! Command parser for the : command system

use crate::modules::export::ExportFormat;
use crate::nav::Route;

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Navigation
    Go(Route),
    Sidebar,

    // Page commands
    Search(String),
    Filter(String),
    Clear,
    Open(String),
    Export(ExportFormat),

    // Session
    Logout,
    Help,
    Quit,

    // Unknown command
    Unknown(String),
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let mut parts = input.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("");
    let args = parts
        .next()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    match cmd.to_lowercase().as_str() {
        // Navigation
        "dashboard" | "dash" | "home" => Command::Go(Route::Dashboard),
        "expenses" | "exp" => Command::Go(Route::Expenses),
        "inventory" | "inv" | "equipment" => Command::Go(Route::Inventory),
        "tasks" | "task" => Command::Go(Route::Tasks),
        "payroll" | "pay" => Command::Go(Route::Payroll),
        "employees" | "emp" => Command::Go(Route::Employees),
        "go" => match args.as_deref().and_then(Route::from_path) {
            Some(route) => Command::Go(route),
            None => Command::Unknown(input.to_string()),
        },
        "sidebar" | "sb" => Command::Sidebar,

        // Page
        "search" | "find" => Command::Search(args.unwrap_or_default()),
        "filter" | "f" => {
            if let Some(args) = args {
                Command::Filter(args)
            } else {
                Command::Unknown(input.to_string())
            }
        }
        "clear" | "reset" => Command::Clear,
        "open" => {
            if let Some(id) = args {
                Command::Open(id)
            } else {
                Command::Unknown(input.to_string())
            }
        }
        "export" => match args.as_deref() {
            None => Command::Export(ExportFormat::Csv),
            Some(format) => match ExportFormat::parse(format) {
                Some(format) => Command::Export(format),
                None => Command::Unknown(input.to_string()),
            },
        },

        // Session
        "logout" | "signout" => Command::Logout,
        "help" | "?" => Command::Help,
        "quit" | "q" => Command::Quit,

        _ => Command::Unknown(input.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_navigation_commands() {
        assert_eq!(parse_command("expenses"), Command::Go(Route::Expenses));
        assert_eq!(parse_command("INV"), Command::Go(Route::Inventory));
        assert_eq!(parse_command("go /payroll"), Command::Go(Route::Payroll));
        assert_eq!(parse_command("go /"), Command::Go(Route::Dashboard));
        assert_eq!(
            parse_command("go /reports"),
            Command::Unknown("go /reports".to_string())
        );
        assert_eq!(parse_command("sidebar"), Command::Sidebar);
    }

    #[test]
    fn test_parse_page_commands() {
        assert_eq!(
            parse_command("filter status:approved cat:tools"),
            Command::Filter("status:approved cat:tools".to_string())
        );
        assert_eq!(parse_command("open EQ005"), Command::Open("EQ005".to_string()));
        assert_eq!(parse_command("clear"), Command::Clear);
        assert_eq!(parse_command("search drill"), Command::Search("drill".to_string()));
        assert_eq!(parse_command("search"), Command::Search(String::new()));
    }

    #[test]
    fn test_parse_export_formats() {
        assert_eq!(parse_command("export"), Command::Export(ExportFormat::Csv));
        assert_eq!(parse_command("export json"), Command::Export(ExportFormat::Json));
        assert_eq!(
            parse_command("export xml"),
            Command::Unknown("export xml".to_string())
        );
    }

    #[test]
    fn test_missing_arguments_are_unknown() {
        assert_eq!(parse_command("open"), Command::Unknown("open".to_string()));
        assert_eq!(parse_command("filter  "), Command::Unknown("filter".to_string()));
    }

    #[test]
    fn test_parse_session_commands() {
        assert_eq!(parse_command("logout"), Command::Logout);
        assert_eq!(parse_command("q"), Command::Quit);
        assert_eq!(
            parse_command("notacommand"),
            Command::Unknown("notacommand".to_string())
        );
    }
}
