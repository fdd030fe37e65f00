//! SuperDato TUI: terminal showcase with draggable before/after sliders.
//!
//! Sections:
//! 1. Home: studio pitch and a featured restoration
//! 2. Services: what the workshop does
//! 3. Gallery: comparison sliders, paged
//! 4. Reviews: testimonial carousel
//! 5. Contact: how to reach the studio, and a quote request form

use std::fs::File;
use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use superdato_core::config::CONFIG_ENV;
use superdato_core::{config_path, pick_hero, scan, SiteConfig};
use superdato_tui::{input, load_showcases, persistence, ui, App};

const LOG_ENV: &str = "SUPERDATO_LOG";

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), DisableMouseCapture, LeaveAlternateScreen);
        default_hook(info);
    }));

    // Paths
    let state_dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("superdato");
    let state_path = state_dir.join("state.json");

    init_tracing(&state_dir)?;

    let env_config = std::env::var(CONFIG_ENV).ok();
    let config_file = config_path(env_config.as_deref());
    let config = SiteConfig::load_or_default(&config_file)
        .with_context(|| format!("loading {}", config_file.display()))?;

    let (restorations, scan_error) = match scan(&config.gallery.root) {
        Ok(found) => (found, None),
        Err(err) => {
            tracing::warn!(error = %err, "gallery scan failed");
            (Vec::new(), Some(err.to_string()))
        }
    };
    let hero_id = pick_hero(&restorations, &mut rand::thread_rng()).map(|r| r.id.clone());
    tracing::info!(
        config = %config_file.display(),
        restorations = restorations.len(),
        hero = hero_id.as_deref().unwrap_or("-"),
        "starting showcase"
    );

    let showcases = load_showcases(restorations);
    let mut app = App::new(config, showcases, hero_id.as_deref());

    // Apply persisted state
    persistence::apply(&mut app, persistence::load(&state_path));
    if let Some(err) = scan_error {
        app.set_warning(err);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Save state before exit
    let persisted = persistence::extract(&app);
    if let Err(err) = persistence::save(&state_path, &persisted) {
        tracing::warn!(error = %err, "failed to save ui state");
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let tick = Duration::from_millis(app.config.ui.tick_ms);
    loop {
        // 1. Render; this also refreshes slider bounds.
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events
        if event::poll(tick)? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                _ => {}
            }
        }

        // 3. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}

/// Log to a file next to the saved state; the terminal is the UI.
fn init_tracing(state_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(state_dir)
        .with_context(|| format!("creating {}", state_dir.display()))?;
    let log_path = state_dir.join("superdato.log");
    let file = File::create(&log_path)
        .with_context(|| format!("creating {}", log_path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .try_init()
        .context("installing tracing subscriber")?;
    Ok(())
}
