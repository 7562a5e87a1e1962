use std::io;
use std::time::Duration;

use clap::Parser;
use ratatui::Terminal;
use ratatui::crossterm::event;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::CrosstermBackend;

mod action;
mod app;
mod config_file;
mod input;
mod logging;
mod model;
mod theme;
mod view;

use app::App;

/// FinGuide: the financial-literacy site, in your terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Article id to open on startup (unknown ids are ignored)
    #[arg(long)]
    article: Option<String>,

    /// Color theme: dark (default) or light
    #[arg(long)]
    theme: Option<String>,

    /// Redraw/animation rate in frames per second
    #[arg(long)]
    fps: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _log_guard = logging::init();

    // Resolve display settings: CLI flags > config file > defaults.
    let config = config_file::load_config();
    let theme_name = args
        .theme
        .or_else(|| config.theme().map(str::to_string))
        .unwrap_or_else(|| "dark".to_string());
    let fps = args.fps.or_else(|| config.fps()).unwrap_or(60).clamp(10, 120);

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Install panic hook that restores terminal before printing panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Drain any stray input events (e.g. Enter keypress from launching the command)
    while event::poll(Duration::from_millis(50)).unwrap_or(false) {
        let _ = event::read();
    }

    let mut app = App::new(&theme_name);
    if let Some(id) = &args.article
        && !app.open_article(id)
    {
        tracing::info!(article = %id, "startup article not found, opening normally");
    }

    // Main event loop. The tick doubles as the animation step.
    let tick_rate = Duration::from_millis((1000 / fps) as u64);
    loop {
        terminal.draw(|f| app.view(f))?;

        if event::poll(tick_rate).unwrap_or(false)
            && let Ok(evt) = event::read()
        {
            let action = input::map_event(&evt);
            app.update(action);
        }

        app.update(action::Action::Tick);

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;

    // Keep the chosen theme for next launch.
    if app.theme_name != theme_name
        && let Err(e) = config_file::save_config(&app.theme_name, fps)
    {
        tracing::warn!(error = %e, "could not persist display config");
    }

    Ok(())
}
