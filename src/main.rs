use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context as _, Result};
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;

use opsboard::app::App;
use opsboard::config::{self, Config};
use opsboard::domain::{seed, StatsScope};
use opsboard::{input, logging, ui};

#[derive(Debug, Parser)]
#[command(
    name = "opsboard",
    version,
    about = "Opsboard: expenses, inventory, tasks, payroll and staff in one terminal"
)]
struct Args {
    /// Config file (default: $OPSBOARD_CONFIG or ~/.config/opsboard/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start signed in
    #[arg(long)]
    skip_login: bool,

    /// Start with the sidebar collapsed
    #[arg(long)]
    collapsed: bool,

    /// Record set the page statistics cover
    #[arg(long, value_enum)]
    stats_scope: Option<StatsScope>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let loaded = config::load(args.config.as_deref());
    let mut config = loaded.as_ref().cloned().unwrap_or_default();
    if args.collapsed {
        config.sidebar_collapsed = true;
    }
    if let Some(scope) = args.stats_scope {
        config.stats_scope = scope;
    }

    let _log_guard = logging::init(&config.log_dir())?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "opsboard starting");
    if let Err(err) = &loaded {
        tracing::warn!(%err, "config not usable, running with defaults");
    }
    for item in seed::equipment()
        .iter()
        .filter(|item| !item.quantities_consistent())
    {
        tracing::warn!(
            id = %item.id,
            total = item.total_quantity,
            available = item.available_quantity,
            borrowed = item.borrowed_quantity,
            "equipment quantities do not add up"
        );
    }

    let mut stdout = io::stdout();
    enable_raw_mode().context("failed to enable raw mode")?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(&config, args.skip_login);
    let res = run_app(&mut terminal, app, &config);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(?err, "terminal loop failed");
        eprintln!("{err:?}");
    }
    tracing::info!("opsboard stopped");

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App, config: &Config) -> Result<()> {
    let tick_rate = Duration::from_millis(config.tick_rate_ms.max(1));
    let mut last_tick = Instant::now();

    loop {
        let now = Instant::now();
        terminal.draw(|f| ui::draw(f, &app, now))?;
        if app.should_quit {
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => input::handle_key(&mut app, key, Instant::now()),
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    input::handle_mouse(&mut app, mouse, size, Instant::now());
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick(Instant::now());
            last_tick = Instant::now();
        }
    }
}
