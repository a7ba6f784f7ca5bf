// Sortty: terminal sorting algorithm visualizer

use std::io;
use std::process;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use sortty::algorithms::Algorithm;
use sortty::audio::{CueSink, Muted, TerminalBell};
use sortty::config::{Cli, Settings};
use sortty::controller::{Controller, TickOutcome};
use sortty::logging::{init_logging, LogConfig};
use sortty::sequence;
use sortty::ui::App;

fn main() {
    let cli = Cli::parse();
    let settings = match Settings::from_cli(&cli) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(2);
        }
    };

    let log_config = if settings.headless {
        LogConfig::headless(settings.log_level, settings.log_file.clone())
    } else {
        LogConfig::interactive(settings.log_level, settings.log_file.clone())
    };
    if let Err(err) = init_logging(&log_config) {
        eprintln!("Error: failed to initialize logging: {}", err);
        process::exit(1);
    }

    let result = match settings.algorithm {
        Some(algorithm) if settings.headless => run_headless(&settings, algorithm),
        _ => run_tui(&settings),
    };

    if let Err(err) = result {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}

/// Build the audio sink once for the whole session
fn cue_sink(settings: &Settings) -> Box<dyn CueSink> {
    if settings.mute || settings.headless {
        Box::new(Muted)
    } else {
        Box::new(TerminalBell::stdout(settings.bell_gap))
    }
}

fn build_controller(settings: &Settings) -> Controller {
    let mut controller = Controller::new(settings.elements, settings.rng(), cue_sink(settings));
    if let Some(algorithm) = settings.algorithm {
        controller.select(algorithm);
    }
    controller
}

/// Sort once through the controller and print the counters
fn run_headless(settings: &Settings, algorithm: Algorithm) -> anyhow::Result<()> {
    let mut controller = build_controller(settings);
    let start = controller.sequence().to_vec();
    tracing::info!(%algorithm, elements = settings.elements, "headless run");

    controller.start();
    let stats = loop {
        match controller.tick() {
            TickOutcome::Stepped(_) => {}
            TickOutcome::Finished(stats) => break stats,
            TickOutcome::Failed(err) => return Err(err).context("sort aborted"),
            TickOutcome::Idle => anyhow::bail!("run stopped before finishing"),
        }
    };

    println!("algorithm:  {}", stats.algorithm);
    println!("elements:   {}", start.len());
    println!("inversions: {}", sequence::inversions(&start));
    println!("steps:      {}", stats.steps);
    println!("cues:       {}", stats.cues);
    println!("sorted:     {}", sequence::is_sorted(controller.sequence()));
    Ok(())
}

fn enter_terminal() -> anyhow::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn run_tui(settings: &Settings) -> anyhow::Result<()> {
    let controller = build_controller(settings);

    // Set up terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut terminal = match enter_terminal() {
        Ok(terminal) => terminal,
        Err(err) => {
            // Leave the shell usable when setup fails halfway
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            let _ = disable_raw_mode();
            return Err(err.context("failed to set up terminal"));
        }
    };

    // Create and run app
    let mut app = App::new(controller, settings.frame_interval);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res.context("event loop failed")
}
