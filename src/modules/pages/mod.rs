//! Record pages: Expenses, Inventory, Tasks, Payroll and Employees.
//!
//! Every page is a `Page<R>` over one record type. The page owns the seed
//! records, the filter criteria and the selection; the visible list and the
//! header statistics are derived on demand.

mod employees;
mod expenses;
mod inventory;
mod payroll;
mod tasks;

use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;
use serde::Serialize;

use crate::core::{Action, Command, Context, Module};
use crate::domain::filter::{self, RecordFilter};
use crate::domain::{find_by_id, FilterError, Record, RecordError, StatCard, Summarize};
use crate::modules::export::{self, ExportFormat};
use crate::nav::Route;
use crate::ui;

/// How a record type is listed, summarized and described.
pub trait PageRecord: Record + Serialize + Sized {
    type Filter: RecordFilter<Self> + Clone + fmt::Debug;
    type Summary: Summarize<Self>;

    const ROUTE: Route;

    /// Whether the page offers a card layout next to the table.
    const CARDS: bool = false;

    fn columns() -> &'static [(&'static str, Constraint)];

    fn cells(&self, ctx: &Context) -> Vec<Cell<'static>>;

    /// Every field, for the detail panel.
    fn detail(&self, ctx: &Context) -> Vec<Line<'static>>;

    /// Marked with `!` in lists.
    fn flagged(&self) -> bool {
        false
    }

    fn card(&self, _ctx: &Context) -> Vec<Line<'static>> {
        Vec::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Table,
    Cards,
}

type Options<R> = <<R as PageRecord>::Filter as RecordFilter<R>>::Options;

fn slots<R: PageRecord>() -> &'static [&'static str] {
    <R::Filter as RecordFilter<R>>::SLOTS
}

pub struct Page<R: PageRecord> {
    records: Vec<R>,
    options: Options<R>,
    filter: R::Filter,
    /// Position in the visible list.
    selected: usize,
    focused_slot: usize,
    view: ViewMode,
}

impl<R: PageRecord> fmt::Debug for Page<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("route", &R::ROUTE)
            .field("records", &self.records.len())
            .field("filter", &self.filter)
            .field("selected", &self.selected)
            .field("focused_slot", &self.focused_slot)
            .field("view", &self.view)
            .finish()
    }
}

impl<R: PageRecord> Page<R> {
    pub fn new(records: Vec<R>) -> Self {
        let options = <R::Filter as RecordFilter<R>>::options(&records);
        Self {
            records,
            options,
            filter: R::Filter::default(),
            selected: 0,
            focused_slot: 0,
            view: ViewMode::default(),
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn filter(&self) -> &R::Filter {
        &self.filter
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn focused_slot(&self) -> usize {
        self.focused_slot
    }

    pub fn visible(&self) -> Vec<&R> {
        filter::apply(&self.filter, &self.records)
    }

    pub fn selected_index(&self) -> Option<usize> {
        (!self.visible().is_empty()).then_some(self.selected)
    }

    pub fn selected(&self) -> Option<&R> {
        self.visible().get(self.selected).copied()
    }

    /// Header statistics under `ctx.stats_scope`.
    pub fn summary(&self, ctx: &Context) -> R::Summary {
        let chosen = ctx.stats_scope.select(&self.records, self.visible());
        <R::Summary as Summarize<R>>::summarize(&chosen)
    }

    pub fn stat_cards(&self, ctx: &Context) -> Vec<StatCard> {
        self.summary(ctx).cards(&ctx.currency)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.visible().len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.visible().len().saturating_sub(1);
    }

    /// Select the visible row at `row`, if there is one.
    pub fn select_row(&mut self, row: usize) {
        if row < self.visible().len() {
            self.selected = row;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    pub fn set_query(&mut self, query: &str) {
        let current = self.filter.query_mut();
        current.clear();
        current.push_str(query);
        self.clamp_selection();
    }

    pub fn focus_next_slot(&mut self) {
        self.focused_slot = (self.focused_slot + 1) % slots::<R>().len();
    }

    pub fn focus_prev_slot(&mut self) {
        let len = slots::<R>().len();
        self.focused_slot = (self.focused_slot + len - 1) % len;
    }

    pub fn cycle_focused(&mut self, forward: bool) {
        self.filter
            .cycle_slot(self.focused_slot, forward, &self.options);
        self.clamp_selection();
    }

    /// Apply `key:value` pairs from the command line. Nothing changes unless
    /// every pair resolves.
    pub fn apply_filter_args(&mut self, input: &str) -> Result<(), FilterError> {
        filter::assign_all::<R, _>(&mut self.filter, input, &self.options)?;
        self.clamp_selection();
        Ok(())
    }

    pub fn clear_filters(&mut self) {
        self.filter = R::Filter::default();
        self.focused_slot = 0;
        self.clamp_selection();
    }

    /// Move the selection to the record with `id`.
    ///
    /// Returns whether the filters had to be cleared to show it.
    pub fn open(&mut self, id: &str) -> Result<bool, RecordError> {
        let (index, _) = find_by_id(&self.records, id)?;
        let mut cleared = false;
        let position = match self.visible_position(index) {
            Some(position) => position,
            None => {
                self.filter = R::Filter::default();
                cleared = true;
                index
            }
        };
        self.selected = position;
        Ok(cleared)
    }

    fn visible_position(&self, record_index: usize) -> Option<usize> {
        filter::apply_indices(&self.filter, &self.records)
            .iter()
            .position(|idx| *idx == record_index)
    }

    pub fn toggle_view(&mut self) -> bool {
        if !R::CARDS {
            return false;
        }
        self.view = match self.view {
            ViewMode::Table => ViewMode::Cards,
            ViewMode::Cards => ViewMode::Table,
        };
        true
    }

    fn export(&self, format: ExportFormat, ctx: &Context) -> Action {
        export::export_page(&ctx.export_dir, R::ROUTE.slug(), &self.visible(), format)
    }

    fn filter_error(err: FilterError) -> Action {
        tracing::debug!(%err, page = R::ROUTE.slug(), "filter rejected");
        Action::error(err.to_string())
    }
}

impl<R: PageRecord> Module for Page<R> {
    fn id(&self) -> &'static str {
        R::ROUTE.slug()
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::None;
        }
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Home | KeyCode::Char('g') => self.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.select_last(),
            KeyCode::Char('f') => self.focus_next_slot(),
            KeyCode::Char('F') => self.focus_prev_slot(),
            KeyCode::Right | KeyCode::Char('l') => self.cycle_focused(true),
            KeyCode::Left | KeyCode::Char('h') => self.cycle_focused(false),
            KeyCode::Char('x') => {
                self.clear_filters();
                return Action::info("Filters cleared");
            }
            KeyCode::Char('/') => return Action::BeginSearch,
            KeyCode::Char('e') => return self.export(ExportFormat::Csv, ctx),
            KeyCode::Char('y') => {
                return match self.selected() {
                    Some(record) => Action::Copy(record.record_id()),
                    None => Action::warn("Nothing to copy"),
                }
            }
            KeyCode::Char('v') => {
                if !self.toggle_view() {
                    return Action::warn("This page has a single layout");
                }
            }
            _ => {}
        }
        Action::None
    }

    fn handle_command(&mut self, cmd: &Command, ctx: &mut Context) -> Action {
        match cmd {
            Command::Search(query) => {
                self.set_query(query);
                Action::None
            }
            Command::Filter(args) => match self.apply_filter_args(args) {
                Ok(()) => Action::info(format!("Filter applied: {args}")),
                Err(err) => Self::filter_error(err),
            },
            Command::Clear => {
                self.clear_filters();
                Action::info("Filters cleared")
            }
            Command::Open(id) => match self.open(id) {
                Ok(false) => Action::None,
                Ok(true) => Action::info(format!("Filters cleared to show {} {id}", R::KIND)),
                Err(err) => Action::error(err.to_string()),
            },
            Command::Export(format) => self.export(*format, ctx),
            _ => Action::None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(3),
            ])
            .split(area);

        ui::draw_stat_cards(frame, chunks[0], &self.stat_cards(ctx));
        self.render_filter_bar(frame, chunks[1]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(chunks[2]);

        let visible = self.visible();
        match self.view {
            ViewMode::Table => self.render_table(frame, body[0], &visible, ctx),
            ViewMode::Cards => self.render_cards(frame, body[0], &visible, ctx),
        }
        self.render_detail(frame, body[1], ctx);
    }

    fn reset(&mut self) {
        self.filter = R::Filter::default();
        self.selected = 0;
        self.focused_slot = 0;
        self.view = ViewMode::default();
    }

    fn query(&self) -> Option<&str> {
        Some(self.filter.query())
    }
}

impl<R: PageRecord> Page<R> {
    fn render_filter_bar(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled("Search ", Style::default().fg(Color::DarkGray)),
            Span::raw(if self.filter.query().is_empty() {
                "--".to_string()
            } else {
                format!("\"{}\"", self.filter.query())
            }),
        ];
        for (slot, name) in slots::<R>().iter().enumerate() {
            spans.push(Span::raw("  "));
            let focused = slot == self.focused_slot;
            let name_style = if focused {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(format!("{name} "), name_style));
            let label = self.filter.slot_label(slot);
            let value = if focused {
                format!("‹{label}›")
            } else {
                label
            };
            spans.push(Span::raw(value));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn list_title(&self, shown: usize) -> String {
        format!(" {} ({}/{}) ", R::ROUTE.label(), shown, self.records.len())
    }

    fn render_table(&self, frame: &mut Frame, area: Rect, visible: &[&R], ctx: &Context) {
        let header = Row::new(
            std::iter::once(Cell::from(""))
                .chain(R::columns().iter().map(|(name, _)| Cell::from(*name))),
        )
        .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = visible
            .iter()
            .map(|record| {
                let marker = if record.flagged() {
                    Cell::from("!").style(Style::default().fg(Color::LightRed))
                } else {
                    Cell::from(" ")
                };
                Row::new(std::iter::once(marker).chain(record.cells(ctx)))
            })
            .collect();

        let widths: Vec<Constraint> = std::iter::once(Constraint::Length(1))
            .chain(R::columns().iter().map(|(_, width)| *width))
            .collect();

        let table = Table::new(rows, widths)
            .header(header)
            .block(ui::panel(&self.list_title(visible.len()), true))
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(">> ");

        let mut state = TableState::default();
        if !visible.is_empty() {
            state.select(Some(self.selected));
        }
        frame.render_stateful_widget(table, area, &mut state);
    }

    fn render_cards(&self, frame: &mut Frame, area: Rect, visible: &[&R], ctx: &Context) {
        let outer = ui::panel(&self.list_title(visible.len()), true);
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        const CARD_HEIGHT: u16 = 7;
        const COLUMNS: usize = 2;
        let rows_fit = (inner.height / CARD_HEIGHT).max(1) as usize;
        // Keep the selected card on screen.
        let first_row = (self.selected / COLUMNS).saturating_sub(rows_fit - 1);

        let row_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(CARD_HEIGHT); rows_fit])
            .split(inner);

        for (row_idx, row_area) in row_areas.iter().enumerate() {
            let col_areas = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(*row_area);
            for (col_idx, card_area) in col_areas.iter().enumerate() {
                let index = (first_row + row_idx) * COLUMNS + col_idx;
                let Some(record) = visible.get(index) else {
                    continue;
                };
                let selected = index == self.selected;
                let border = if selected {
                    Style::default().fg(Color::Cyan)
                } else if record.flagged() {
                    Style::default().fg(Color::LightRed)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                let card = Paragraph::new(Text::from(record.card(ctx)))
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_style(border)
                            .title(record.record_id()),
                    )
                    .wrap(Wrap { trim: true });
                frame.render_widget(card, *card_area);
            }
        }
    }

    fn render_detail(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let lines = match self.selected() {
            Some(record) => record.detail(ctx),
            None => vec![Line::from("No records match the current filters")],
        };
        let paragraph = Paragraph::new(Text::from(lines))
            .block(ui::panel(" Details ", false))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

/// `label  value` line for detail panels.
pub(crate) fn field(label: &str, value: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<14}"), Style::default().fg(Color::DarkGray)),
        Span::raw(value.into()),
    ])
}

pub(crate) fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::LightCyan).add_modifier(Modifier::BOLD),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::equipment::EquipmentItem;
    use crate::domain::expense::{Expense, ExpenseStatus};
    use crate::domain::seed;
    use crate::domain::Selector;
    use crate::domain::StatsScope;

    fn expenses_page() -> Page<Expense> {
        Page::new(seed::expenses())
    }

    #[test]
    fn test_default_filter_shows_everything() {
        let page = expenses_page();
        assert_eq!(page.visible().len(), 6);
        assert_eq!(page.selected().map(|e| e.id), Some(1));
    }

    #[test]
    fn test_selection_clamps_when_list_shrinks() {
        let mut page = expenses_page();
        page.select_last();
        assert_eq!(page.selected_index(), Some(5));
        page.set_query("cement");
        assert_eq!(page.selected_index(), Some(0));
        page.set_query("no such thing");
        assert_eq!(page.selected_index(), None);
        assert!(page.selected().is_none());
    }

    #[test]
    fn test_bad_filter_leaves_criteria_unchanged() {
        let mut page = expenses_page();
        page.apply_filter_args("status:approved").unwrap();
        let err = page
            .apply_filter_args("status:pending category:food")
            .unwrap_err();
        assert!(matches!(err, FilterError::UnknownValue { .. }));
        assert_eq!(page.filter().status, Selector::Only(ExpenseStatus::Approved));
        assert_eq!(page.visible().len(), 4);
    }

    #[test]
    fn test_open_clears_filters_for_hidden_record() {
        let mut page = expenses_page();
        page.apply_filter_args("status:approved").unwrap();
        assert_eq!(page.open("6"), Ok(true));
        assert_eq!(page.selected().map(|e| e.id), Some(6));

        assert_eq!(page.open("3"), Ok(false));
        assert_eq!(page.selected().map(|e| e.id), Some(3));

        assert_eq!(
            page.open("42"),
            Err(RecordError::NotFound {
                kind: "expense",
                id: "42".to_string()
            })
        );
    }

    #[test]
    fn test_summary_follows_scope() {
        let mut page = expenses_page();
        page.set_query("tools");
        let mut ctx = Context::default();

        ctx.stats_scope = StatsScope::Filtered;
        assert_eq!(page.summary(&ctx).count, 1);

        ctx.stats_scope = StatsScope::All;
        assert_eq!(page.summary(&ctx).count, 6);
    }

    #[test]
    fn test_cycle_focused_slot() {
        let mut page = expenses_page();
        page.focus_next_slot();
        assert_eq!(page.focused_slot(), 1);
        page.cycle_focused(true);
        assert_eq!(page.filter().status, Selector::Only(ExpenseStatus::Approved));
        page.focus_next_slot();
        assert_eq!(page.focused_slot(), 0);
        page.focus_prev_slot();
        assert_eq!(page.focused_slot(), 1);
    }

    #[test]
    fn test_only_inventory_has_cards() {
        let mut expenses = expenses_page();
        assert!(!expenses.toggle_view());
        assert_eq!(expenses.view(), ViewMode::Table);

        let mut inventory: Page<EquipmentItem> = Page::new(seed::equipment());
        assert!(inventory.toggle_view());
        assert_eq!(inventory.view(), ViewMode::Cards);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut page = expenses_page();
        page.apply_filter_args("category:tools").unwrap();
        page.focus_next_slot();
        Module::reset(&mut page);
        assert!(page.filter().is_default());
        assert_eq!(page.focused_slot(), 0);
    }
}
