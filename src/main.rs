//! WeatherPro - terminal weather dashboard
//!
//! A terminal UI application that displays current conditions, an hourly
//! strip and a five-day forecast for a searched city, with animated numeric
//! readouts. Data comes from a mock weather source with artificial latency.

mod anim;
mod app;
mod cli;
mod data;
mod ui;
mod units;

use std::io;
use std::panic;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use app::{App, FetchTicket, InputMode};
use cli::{Cli, StartupConfig};
use data::{FetchError, MockWeatherSource, StubLocationProvider, WeatherBundle, WeatherSource};

/// Interval between render/animation ticks (roughly 30 fps)
const TICK_INTERVAL: Duration = Duration::from_millis(33);

/// Outcome of one fetch task, tagged with the generation that spawned it
struct FetchOutcome {
    generation: u64,
    result: Result<WeatherBundle, FetchError>,
}

/// Sets up a panic hook that restores the terminal before printing the panic
/// message. This ensures the terminal is usable even if the application
/// panics.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Attempt to restore the terminal
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        // Call the original panic hook
        original_hook(panic_info);
    }));
}

/// Builds the weather source from startup configuration
fn build_source(config: &StartupConfig) -> Arc<dyn WeatherSource> {
    if let Some(reason) = &config.fail_reason {
        return Arc::new(MockWeatherSource::failing(reason.clone()));
    }

    let mut source = MockWeatherSource::new();
    if let Some(ms) = config.mock_delay_ms {
        source = source.with_delay(Duration::from_millis(ms));
    }
    Arc::new(source)
}

/// Spawns a task resolving the ticket against the source.
///
/// The task is never interrupted; if the query is superseded before it
/// resolves, the outcome's stale generation gets it discarded on apply.
fn dispatch_fetch(
    source: &Arc<dyn WeatherSource>,
    ticket: FetchTicket,
    tx: mpsc::Sender<FetchOutcome>,
) {
    let source = Arc::clone(source);
    tokio::spawn(async move {
        let result = source.fetch(&ticket.location).await;
        let _ = tx
            .send(FetchOutcome {
                generation: ticket.generation,
                result,
            })
            .await;
    });
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = StartupConfig::from_cli(&cli);

    // Set up panic hook to restore terminal on crash
    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let source = build_source(&config);
    let location_provider = StubLocationProvider;
    let (tx, mut rx) = mpsc::channel::<FetchOutcome>(8);

    // Create app instance and dispatch the initial query
    let (mut app, initial_ticket) = App::with_startup_config(&config);
    if let Some(ticket) = initial_ticket {
        dispatch_fetch(&source, ticket, tx.clone());
    }

    // Main event loop
    loop {
        terminal.draw(|f| ui::render_dashboard(f, &app))?;

        // Poll for keyboard events; the timeout doubles as the animation tick
        if event::poll(TICK_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    // The current-location shortcut needs the provider, so it
                    // is routed here instead of inside App::handle_key.
                    let ticket = if app.mode == InputMode::Normal
                        && key.code == KeyCode::Char('l')
                    {
                        app.use_current_location(&location_provider)
                    } else {
                        app.handle_key(key, Instant::now())
                    };

                    if let Some(ticket) = ticket {
                        dispatch_fetch(&source, ticket, tx.clone());
                    }
                }
            }
        }

        // Apply any completed fetches; stale generations are discarded
        while let Ok(outcome) = rx.try_recv() {
            app.apply_fetch(outcome.generation, outcome.result, Instant::now());
        }

        // Advance animations and the spinner
        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}
