//! Module trait for the pages behind each route

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

use super::{Action, Command, Context};

/// A page that can handle input and draw itself
pub trait Module {
    fn id(&self) -> &'static str;

    /// Handle keyboard input
    /// Returns an Action describing what should happen
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context) -> Action;

    /// Handle a page-level `:` command
    fn handle_command(&mut self, cmd: &Command, ctx: &mut Context) -> Action;

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context);

    /// Drop search text, selectors and selection.
    fn reset(&mut self);

    /// Current search text, if the page has one.
    fn query(&self) -> Option<&str> {
        None
    }
}
