//! `lyricsync` - play a timestamped transcript against a software clock.
//!
//! Usage: `lyricsync <file.lrc> [--duration SECS]`

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use lyricsync::app::App;
use lyricsync::config::Config;
use lyricsync::error::{Error, Result};
use lyricsync::services::FileTranscript;
use lyricsync::{constants, logging, ui};
use ratatui::prelude::*;
use std::{io, panic, time::Duration};

// Helper function to ensure the terminal is cleaned up on exit
fn cleanup_terminal<B: Backend + std::io::Write>(terminal: &mut Terminal<B>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Transcript name and optional `--duration` from the command line.
fn parse_args() -> Result<(String, Option<f64>)> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let duration = match args.iter().position(|a| a == "--duration") {
        Some(i) => {
            let raw = args.get(i + 1).ok_or("--duration needs a value in seconds")?;
            let secs = raw
                .parse::<f64>()
                .ok()
                .filter(|d| d.is_finite() && *d > 0.0)
                .ok_or_else(|| Error::Msg(format!("Invalid --duration {raw:?}")))?;
            Some(secs)
        }
        None => None,
    };

    let name = args
        .iter()
        .enumerate()
        .find(|(i, a)| !a.starts_with("--") && !(*i > 0 && args[i - 1] == "--duration"))
        .map(|(_, a)| a.clone())
        .ok_or("Usage: lyricsync <file.lrc> [--duration SECS]")?;

    Ok((name, duration))
}

#[tokio::main]
async fn main() -> Result<()> {
    let (name, duration) = parse_args()?;
    let config = Config::load()?;
    logging::init(config.log_file.as_deref())?;

    let source = FileTranscript::resolve(&name, config.lyrics_path.as_deref())?;
    let mut app = App::new(config);
    app.set_duration_override(duration);
    app.load_transcript(source)?;

    // Setup better panic handling that cleans up terminal first
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app).await;

    // Restore terminal
    if let Err(e) = cleanup_terminal(&mut terminal) {
        eprintln!("Error cleaning up terminal: {e:?}");
    }

    if let Err(err) = res {
        eprintln!("{err:?}");
    }

    Ok(())
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let tick = Duration::from_millis(app.config.tick_ms);
    loop {
        app.handle_updates(); // Advance the clock before drawing

        terminal.draw(|f| ui::draw(f, &mut app))?;

        if event::poll(tick)? {
            if let event::Event::Key(key) = event::read()? {
                if key.kind == event::KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        } else {
            tokio::time::sleep(Duration::from_millis(constants::event_loop::IDLE_SLEEP_MS)).await;
        }

        if app.should_quit() {
            break;
        }
    }
    tracing::info!("Exiting at {}", lyricsync::format_time(app.engine.current_time()));
    Ok(())
}
