//! resume-view - Terminal viewer for randomly generated resumes
//!
//! Usage:
//!   resume-view              Run TUI mode (default)
//!   resume-view --cli <cmd>  Run CLI mode (headless)
//!   resume-view --help       Show help

use std::fs::File;
use std::io::{self, stdout, Stdout};
use std::sync::mpsc;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::FmtSubscriber;

mod app;
mod cli;
mod event;
mod screens;
pub mod theme;
mod widgets;
mod worker;

use app::App;
use resume_view_core::{Config, ResumeClient};
use worker::Worker;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    // Check for --help
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    // Check for --cli flag
    if let Some(cli_pos) = args.iter().position(|a| a == "--cli") {
        // Get args after --cli
        let cli_args: Vec<String> = args.iter().skip(cli_pos + 1).cloned().collect();

        if cli_args.is_empty() || cli_args.iter().any(|a| a == "--help" || a == "-h") {
            cli::print_help();
            return Ok(());
        }

        match cli::parse_args(&cli_args) {
            Ok(command) => {
                return cli::run(command);
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                eprintln!();
                cli::print_help();
                std::process::exit(1);
            }
        }
    }

    // Default: TUI mode
    install_panic_hook();
    init_logging();
    let result = run();
    restore_terminal()?;
    result
}

fn print_help() {
    println!("resume-view v{}", env!("CARGO_PKG_VERSION"));
    println!("Fetch and display randomly generated resumes");
    println!();
    println!("USAGE:");
    println!("    resume-view [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --cli <cmd>     Run in CLI mode (headless, for scripting)");
    println!("    --help          Show this help message");
    println!();
    println!("By default, resume-view runs in TUI (terminal) mode.");
    println!();
    println!("For CLI mode help: resume-view --cli --help");
}

fn init_logging() {
    // For TUI apps, log to a file to avoid corrupting the terminal display
    // Try to create a log file, fall back to no logging if it fails
    if let Ok(log_file) = File::create("resume-view.log") {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::WARN)
            .with_target(false)
            .with_ansi(false)
            .with_writer(log_file.with_max_level(Level::WARN))
            .finish();

        let _ = tracing::subscriber::set_global_default(subscriber);
    }
    // If file creation fails, logging is simply disabled (no subscriber set)
}

/// A type alias for the terminal type used in this application
type Tui = Terminal<CrosstermBackend<Stdout>>;

fn init_terminal() -> io::Result<Tui> {
    execute!(stdout(), EnterAlternateScreen)?;
    enable_raw_mode()?;
    Terminal::new(CrosstermBackend::new(stdout()))
}

fn restore_terminal() -> io::Result<()> {
    execute!(stdout(), LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

/// Restore the terminal before printing a panic
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = restore_terminal();
        original_hook(panic);
    }));
}

fn run() -> anyhow::Result<()> {
    // Load config and set theme
    let config = Config::load();
    theme::set_theme(config.theme);

    // Initialize terminal
    let mut terminal = init_terminal()?;

    // Set up worker communication
    let client = ResumeClient::new(config.endpoint.clone());
    let (app_tx, app_rx) = mpsc::channel();
    let worker = Worker::spawn(app_tx, client)?;

    // Create app with channels
    let mut app = App::new(config.default_name).with_channels(worker.sender(), app_rx);

    // Fetch a resume for the configured name on startup
    app.start_fetch();

    // Main event loop
    loop {
        // Render
        terminal.draw(|frame| app.render(frame))?;

        // Handle input events
        if let Some(key) = event::poll(Duration::from_millis(50))? {
            app.handle_key(key);
        }

        // Process worker messages
        app.process_worker_messages();

        // Check for quit
        if app.should_quit {
            break;
        }
    }

    // Shutdown worker
    worker.shutdown();

    Ok(())
}
