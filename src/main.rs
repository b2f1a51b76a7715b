mod app;
mod domain;
mod input;
mod logging;
mod notifications;
mod persistence;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use domain::Mode;
use notifications::TerminalAlarm;
use persistence::{config_file, init_config, load_config, AppConfig};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use ticker::IntervalScheduler;

#[derive(Parser)]
#[command(name = "tomato")]
#[command(about = "A terminal Pomodoro timer", long_about = None)]
struct Cli {
    /// Path to the config file. Defaults to ~/.config/tomato/config.json
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Disable the bell and desktop notification for this run
    #[arg(long)]
    silent: bool,

    /// Session type to open with: pomodoro, shortBreak or longBreak
    #[arg(short, long, value_parser = parse_mode, default_value = "pomodoro")]
    mode: Mode,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file
    Init,
    /// Show the config file location and effective settings
    Config,
}

fn parse_mode(id: &str) -> Result<Mode, String> {
    Mode::from_id(id).ok_or_else(|| {
        let known: Vec<&str> = Mode::all().iter().map(|m| m.id()).collect();
        format!("unknown mode '{}' (expected one of: {})", id, known.join(", "))
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = match cli.config {
        Some(path) => path,
        None => config_file()?,
    };

    match cli.command {
        Some(Commands::Init) => {
            init_config(&config_path)?;
            println!("Wrote default config: {}", config_path.display());
            Ok(())
        }
        Some(Commands::Config) => {
            let config = load_config(&config_path)?;
            println!("Config file: {}", config_path.display());
            println!("Log file: {}", logging::log_path(&config)?.display());
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
        None => {
            let config = load_config(&config_path)?;
            run_tui(&config, cli.mode, cli.silent)
        }
    }
}

fn run_tui(config: &AppConfig, mode: Mode, silent: bool) -> Result<()> {
    let log_path = logging::init_logging(config)?;

    let alarm = if silent {
        TerminalAlarm::silent()
    } else {
        TerminalAlarm::new(config.bell, config.notify)
    };
    let mut app = AppState::new(IntervalScheduler::default(), alarm);
    app.timer.select_mode(mode);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    clear_title(terminal.backend_mut())?;
    terminal.show_cursor()?;

    log::info!("exiting");

    // Print any errors
    if let Err(err) = result {
        log::error!("{:#}", err);
        eprintln!("Error: {:#}", err);
        eprintln!("See log: {}", log_path.display());
    }

    Ok(())
}

/// Drop the countdown from the terminal window title
fn clear_title(out: &mut impl io::Write) -> io::Result<()> {
    execute!(out, SetTitle(""))
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    let tick_rate = ticker::tick_duration();

    loop {
        // Mirror the clock into the terminal window title
        if let Some(title) = app.take_title_update() {
            execute!(terminal.backend_mut(), SetTitle(title))
                .context("Failed to set window title")?;
        }

        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key) {
                    return Ok(());
                }
            }
        }

        // Drain due countdown ticks
        app.tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode() {
        assert_eq!(parse_mode("shortBreak"), Ok(Mode::ShortBreak));
        assert_eq!(parse_mode("longBreak"), Ok(Mode::LongBreak));

        let err = parse_mode("lunch").unwrap_err();
        assert!(err.contains("pomodoro, shortBreak, longBreak"));
    }

    #[cfg(unix)]
    #[test]
    fn test_clear_title_emits_empty_title() {
        let mut out = Vec::new();
        clear_title(&mut out).unwrap();
        assert_eq!(out, b"\x1b]0;\x07".to_vec());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["tomato"]).unwrap();
        assert_eq!(cli.mode, Mode::Pomodoro);
        assert!(!cli.silent);
        assert!(cli.command.is_none());

        let cli = Cli::try_parse_from(["tomato", "--silent", "-m", "longBreak"]).unwrap();
        assert_eq!(cli.mode, Mode::LongBreak);
        assert!(cli.silent);
    }
}
