//! Nexus Hack: terminal hacking-quiz campaigns
//!
//! Pick Cyber Hack or Nexus Hack, answer the challenges, keep your lives.

use anyhow::Context;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use nexus_hack::game::session;
use nexus_hack::tui::App;
use nexus_hack::{Config, GameError, Result};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::fs::OpenOptions;
use std::io::stdout;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Logs go to a file; stdout belongs to the terminal UI
fn init_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let config = Config::from_args();
    init_logging(&config.log_file)?;
    tracing::info!(campaign = ?config.campaign, seed = ?config.seed, "starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = App::new(terminal, config.clone());
    let outcome = session::run(&config, &mut app);

    // Cleanup, even when the session failed
    disable_raw_mode()?;
    execute!(app.terminal_mut().backend_mut(), LeaveAlternateScreen)?;
    app.terminal_mut().show_cursor()?;

    match outcome {
        Err(err) if !GameError::is_quit(&err) => {
            tracing::error!("session ended with error: {:#}", err);
            return Err(err);
        }
        _ => tracing::info!("session closed"),
    }

    println!("\n╔════════════════════════════════════════════════════════╗");
    println!("║  Thanks for playing Nexus Hack!                        ║");
    println!("║                                                        ║");
    println!("║  Stay in the shadows, hacker.                          ║");
    println!("╚════════════════════════════════════════════════════════╝\n");

    Ok(())
}
