use std::time::Instant;

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub mod layout;
pub mod widgets;

use crate::app::{App, Focus, InputMode};
use crate::core::NotifyLevel;
use crate::domain::StatCard;
use crate::input::describe_focus;
use crate::nav::{is_active, Route};
use crate::session::LoginField;
use widgets::ProgressBar;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw(f: &mut Frame, app: &App, now: Instant) {
    let size = f.size();

    if !app.session.is_logged_in() {
        draw_login(f, size, app, now);
        return;
    }

    let areas = layout::areas(size, app.sidebar.width());

    draw_header(f, areas.header, app);
    draw_sidebar(f, areas.sidebar_nav, areas.sidebar_footer, app);
    draw_body(f, areas.body, app, now);
    draw_status_line(f, areas.status_line, app);
    draw_command_line(f, areas.command_line, app);

    if app.help_open {
        draw_help_popup(f, areas.size, app);
    }
}

/// Bordered block used by every panel; cyan when it has focus.
pub fn panel(title: &str, active: bool) -> Block<'static> {
    let border_style = if active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .border_style(border_style)
}

/// A row of equal-width cards, one per figure.
pub fn draw_stat_cards(f: &mut Frame, area: Rect, cards: &[StatCard]) {
    if cards.is_empty() {
        return;
    }
    let count = cards.len() as u32;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            cards
                .iter()
                .map(|_| Constraint::Ratio(1, count))
                .collect::<Vec<_>>(),
        )
        .split(area);

    for (card, chunk) in cards.iter().zip(chunks.iter()) {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            card.value.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    card.label,
                    Style::default().fg(Color::LightCyan),
                )),
        );
        f.render_widget(paragraph, *chunk);
    }
}

fn draw_login(f: &mut Frame, area: Rect, app: &App, now: Instant) {
    let popup = centered_rect(50, 60, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Sign In ");
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let title = Paragraph::new(Text::from(vec![
        Line::from(Span::styled(
            "OPSBOARD",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Business Management Suite",
            Style::default().fg(Color::DarkGray),
        )),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(title, rows[0]);

    let form = &app.session.form;
    let field = |label: &str, value: String, focused: bool| {
        let border = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let cursor = if focused && !app.session.is_authenticating() {
            "▏"
        } else {
            ""
        };
        Paragraph::new(format!("{value}{cursor}")).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(label.to_string()),
        )
    };
    f.render_widget(
        field(
            " Username ",
            form.username.clone(),
            form.focus == LoginField::Username,
        ),
        rows[1],
    );
    f.render_widget(
        field(
            " Password ",
            form.password_display(),
            form.focus == LoginField::Password,
        ),
        rows[2],
    );

    if app.session.is_authenticating() {
        let progress = app.session.progress(now);
        let frame = ((progress * 20.0) as usize) % SPINNER.len();
        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(SPINNER[frame], Style::default().fg(Color::LightCyan)),
                Span::raw(" Signing in..."),
            ]))
            .alignment(Alignment::Center),
            rows[3],
        );
        let percent = (progress * 100.0).round().clamp(0.0, 100.0) as u8;
        f.render_widget(ProgressBar::new(percent), rows[4]);
    } else {
        f.render_widget(
            Paragraph::new(Span::styled(
                "[ Sign In ]",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            rows[3],
        );
        f.render_widget(
            Paragraph::new(Span::styled(
                "Tab switch field  Enter sign in  Ctrl-r show password  Esc quit",
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Center),
            rows[4],
        );
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    let title = Line::from(vec![
        Span::styled(
            "Opsboard",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(app.route().label(), Style::default().fg(Color::White)),
        Span::raw("  "),
        Span::styled(app.route().path(), Style::default().fg(Color::DarkGray)),
    ]);
    let left = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(left, chunks[0]);

    let user = app.session.user().unwrap_or("--").to_string();
    let right = Paragraph::new(Line::from(vec![
        Span::styled("● ", Style::default().fg(Color::LightGreen)),
        Span::raw(user),
    ]))
    .alignment(Alignment::Right)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(right, chunks[1]);
}

fn draw_sidebar(f: &mut Frame, nav_area: Rect, footer_area: Rect, app: &App) {
    let collapsed = app.sidebar.is_collapsed();
    let current = app.route().path();
    let items: Vec<ListItem> = Route::ALL
        .iter()
        .enumerate()
        .map(|(idx, route)| {
            let label = if collapsed {
                route.short_label().to_string()
            } else {
                format!("{} {}", idx + 1, route.label())
            };
            let style = if is_active(*route, current) {
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(Span::styled(label, style))
        })
        .collect();

    let sidebar_focused = app.focus == Focus::Sidebar;
    let title = if collapsed { "" } else { " Navigate " };
    let list = List::new(items)
        .block(panel(title, sidebar_focused))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = ListState::default();
    if sidebar_focused {
        state.select(Some(app.sidebar_cursor));
    }
    f.render_stateful_widget(list, nav_area, &mut state);

    let footer = if collapsed {
        Line::from(Span::styled("●", Style::default().fg(Color::LightGreen)))
    } else {
        Line::from(vec![
            Span::styled("● ", Style::default().fg(Color::LightGreen)),
            Span::raw("System Online"),
        ])
    };
    f.render_widget(
        Paragraph::new(footer)
            .alignment(Alignment::Center)
            .block(panel("", false)),
        footer_area,
    );
}

fn draw_body(f: &mut Frame, area: Rect, app: &App, now: Instant) {
    let offset = app.transition_offset(now).min(area.width);
    let shifted = Rect {
        x: area.x + offset,
        width: area.width - offset,
        ..area
    };
    f.render_widget(Clear, area);
    app.active_module().render(f, shifted, &app.ctx);
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled("Page ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", app.route().path())),
        Span::styled("Focus ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", describe_focus(app))),
        Span::styled("Stats ", Style::default().fg(Color::DarkGray)),
        Span::raw(app.ctx.stats_scope.title()),
    ];
    if let Some(query) = app.active_module().query().filter(|q| !q.is_empty()) {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("Search ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::raw(query.to_string()));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);
    f.render_widget(paragraph, area);
}

fn command_hint(input: &str) -> Option<&'static str> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }
    let word = input.split_whitespace().next().unwrap_or_default();

    let commands = [
        ("dashboard", "Go to the dashboard"),
        ("expenses", "Go to expenses & receipts"),
        ("inventory", "Go to equipment inventory"),
        ("tasks", "Go to task monitoring"),
        ("payroll", "Go to workers payroll"),
        ("employees", "Go to employee management"),
        ("go", "go <path>, e.g. go /tasks"),
        ("sidebar", "Collapse or expand the sidebar"),
        ("search", "search <text>"),
        ("filter", "filter key:value ..., e.g. filter status:approved"),
        ("clear", "Clear search and filters"),
        ("open", "open <id>"),
        ("export", "export [csv|json]"),
        ("logout", "Sign out"),
        ("help", "Show help"),
        ("quit", "Quit"),
    ];

    commands
        .iter()
        .find(|(cmd, _)| cmd.starts_with(word))
        .map(|(_, desc)| *desc)
}

fn draw_command_line(f: &mut Frame, area: Rect, app: &App) {
    let content = match app.input_mode {
        InputMode::Command => {
            let hint_text = command_hint(&app.command.input)
                .unwrap_or("expenses | filter key:value | open <id> | export | logout");
            Line::from(vec![
                Span::styled(": ", Style::default().fg(Color::Yellow)),
                Span::raw(app.command.input.clone()),
                Span::styled(
                    format!("  {hint_text}"),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        }
        InputMode::Search => Line::from(vec![
            Span::styled("/ ", Style::default().fg(Color::LightCyan)),
            Span::raw(app.command.input.clone()),
            Span::styled(
                "  (Enter=keep Esc=cancel)",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        InputMode::Normal => {
            if let Some((text, level)) = app.status_text() {
                let color = match level {
                    NotifyLevel::Info => Color::LightGreen,
                    NotifyLevel::Warn => Color::LightYellow,
                    NotifyLevel::Error => Color::LightRed,
                };
                Line::from(vec![
                    Span::styled("msg: ", Style::default().fg(Color::DarkGray)),
                    Span::styled(text.to_string(), Style::default().fg(color)),
                ])
            } else {
                action_hints(app)
            }
        }
    };

    let paragraph = Paragraph::new(content).style(Style::default().fg(Color::White));
    f.render_widget(paragraph, area);
}

fn action_hints(app: &App) -> Line<'static> {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::LightCyan));
    let mut spans = vec![
        key("1-6"),
        Span::raw(" Page  "),
        key("b"),
        Span::raw(" Sidebar  "),
        key(":"),
        Span::raw(" Command  "),
    ];
    if app.route() == Route::Dashboard {
        spans.extend([key("Tab"), Span::raw(" Panel  "), key("Enter"), Span::raw(" Open  ")]);
    } else {
        spans.extend([
            key("/"),
            Span::raw(" Search  "),
            key("f h/l"),
            Span::raw(" Filter  "),
            key("x"),
            Span::raw(" Clear  "),
            key("e"),
            Span::raw(" Export  "),
            key("y"),
            Span::raw(" Copy  "),
        ]);
        if app.route() == Route::Inventory {
            spans.extend([key("v"), Span::raw(" View  ")]);
        }
    }
    spans.extend([key("?"), Span::raw(" Help  "), key("q"), Span::raw(" Quit")]);
    Line::from(spans)
}

fn draw_help_popup(f: &mut Frame, area: Rect, app: &App) {
    let popup_area = centered_rect(72, 70, area);
    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from("Navigation"),
        Line::from("  1-6        Jump to page"),
        Line::from("  Tab / Esc  Switch focus between sidebar and page"),
        Line::from("  j / k      Move selection"),
        Line::from("  g / G      Top / bottom"),
        Line::from("  b          Collapse / expand sidebar"),
        Line::from("  Mouse      Click sidebar, scroll lists"),
        Line::from(""),
        Line::from("Pages"),
        Line::from("  /          Live search"),
        Line::from("  f / F      Next / previous filter"),
        Line::from("  h / l      Change the focused filter"),
        Line::from("  x          Clear search and filters"),
        Line::from("  y          Copy record id"),
        Line::from("  e          Export visible records (CSV)"),
        Line::from("  v          Table / cards (Inventory)"),
        Line::from(""),
        Line::from("Dashboard"),
        Line::from("  Tab        Next panel"),
        Line::from("  Enter      Open activity, alert or quick action"),
        Line::from(""),
        Line::from("Commands"),
        Line::from("  :filter status:approved category:tools"),
        Line::from("  :open EQ005   :export json   :go /tasks"),
        Line::from("  :clear   :sidebar   :logout   :quit"),
        Line::from(""),
        Line::from(format!("Current page: {}", app.route().label())),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Help").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, popup_area);
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
