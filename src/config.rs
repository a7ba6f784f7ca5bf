//! Command-line configuration
//!
//! [`Cli`] is the raw clap surface; [`Settings`] is what the rest of the
//! program consumes once the flags have been checked against each other.

use std::path::PathBuf;
use std::time::Duration;

use clap::builder::TypedValueParser;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

use crate::algorithms::Algorithm;

pub const DEFAULT_ELEMENTS: usize = 50;
pub const DEFAULT_FPS: u32 = 60;
pub const DEFAULT_BELL_GAP_MS: u64 = 25;

#[derive(Debug, Parser)]
#[command(
    name = "sortty",
    version,
    about = "Watch sorting algorithms work, one swap per frame",
    long_about = "Animates bubble, insertion, heap, quick and merge sort as a bar chart.\n\n\
                  Pick an algorithm with 1-5 or the mouse, press space to sort and r to reshuffle."
)]
pub struct Cli {
    /// Number of bars (the sequence is a shuffled permutation of 1..=N).
    #[arg(short = 'n', long, default_value_t = DEFAULT_ELEMENTS,
          value_parser = clap::value_parser!(u16).range(1..=500).map(usize::from))]
    pub elements: usize,

    /// Frames per second; one sorting step is taken per frame.
    #[arg(long, default_value_t = DEFAULT_FPS,
          value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub fps: u32,

    /// Algorithm selected at startup.
    #[arg(short, long, value_enum)]
    pub algorithm: Option<Algorithm>,

    /// Seed for the shuffles, for reproducible runs.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Disable the terminal bell cues.
    #[arg(long)]
    pub mute: bool,

    /// Minimum gap between two bells, in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_BELL_GAP_MS)]
    pub bell_gap_ms: u64,

    /// Sort once without the TUI and print the step and cue counts.
    #[arg(long)]
    pub headless: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Write logs to a file (the TUI owns the terminal, so logs are dropped otherwise).
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("--headless needs an algorithm; pass one with --algorithm")]
    HeadlessWithoutAlgorithm,
}

/// Validated runtime settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub elements: usize,
    pub frame_interval: Duration,
    pub algorithm: Option<Algorithm>,
    pub seed: Option<u64>,
    pub mute: bool,
    pub bell_gap: Duration,
    pub headless: bool,
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Settings {
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        if cli.headless && cli.algorithm.is_none() {
            return Err(ConfigError::HeadlessWithoutAlgorithm);
        }
        Ok(Settings {
            elements: cli.elements,
            frame_interval: Duration::from_secs(1) / cli.fps.max(1),
            algorithm: cli.algorithm,
            seed: cli.seed,
            mute: cli.mute,
            bell_gap: Duration::from_millis(cli.bell_gap_ms),
            headless: cli.headless,
            log_level: cli.verbosity.tracing_level_filter(),
            log_file: cli.log_file.clone(),
        })
    }

    /// Shuffle source, seeded when `--seed` was given
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            elements: DEFAULT_ELEMENTS,
            frame_interval: Duration::from_secs(1) / DEFAULT_FPS,
            algorithm: None,
            seed: None,
            mute: false,
            bell_gap: Duration::from_millis(DEFAULT_BELL_GAP_MS),
            headless: false,
            log_level: LevelFilter::WARN,
            log_file: None,
        }
    }
}
