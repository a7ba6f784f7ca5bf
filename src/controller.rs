//! Interaction controller
//!
//! Owns the visual state (sequence + highlight) and the idle/running state
//! machine.  The UI resolves input into [`Command`]s; the frame loop issues one
//! [`Command::Tick`] per rendered frame.
//!
//! | Command  | Idle                          | Running                        |
//! |----------|-------------------------------|--------------------------------|
//! | `Select` | set selection                 | set selection (run unaffected) |
//! | `Start`  | start if something selected   | ignored                        |
//! | `Tick`   | ignored                       | advance one step               |
//! | `Reset`  | reshuffle                     | drop run, reshuffle            |

use rand::rngs::StdRng;

use crate::algorithms::Algorithm;
use crate::audio::{CueCounter, CueSink};
use crate::engine::{EngineError, Highlight, Step, Stepper};
use crate::sequence::{self, Value};

/// Whether a sort is in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
}

/// Already-resolved user intents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Select(Algorithm),
    Start,
    Reset,
    Tick,
}

/// Result of a single tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing running
    Idle,
    /// One mutation was applied
    Stepped(Step),
    /// The run was exhausted and the controller is idle again
    Finished(RunStats),
    /// The run hit an engine error and was abandoned
    Failed(EngineError),
}

/// Counters for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub algorithm: Algorithm,
    pub steps: usize,
    pub cues: usize,
}

struct Run {
    stepper: Box<dyn Stepper>,
    stats: RunStats,
}

pub struct Controller {
    sequence: Vec<Value>,
    highlight: Highlight,
    selection: Option<Algorithm>,
    run: Option<Run>,
    last_run: Option<RunStats>,
    last_error: Option<EngineError>,
    cues: Box<dyn CueSink>,
    rng: StdRng,
}

impl Controller {
    /// Create a controller over a freshly shuffled permutation of `1..=len`
    pub fn new(len: usize, mut rng: StdRng, cues: Box<dyn CueSink>) -> Self {
        let sequence = sequence::shuffled(len, &mut rng);
        Controller::with_sequence(sequence, rng, cues)
    }

    /// Create a controller over a given starting sequence
    pub fn with_sequence(sequence: Vec<Value>, rng: StdRng, cues: Box<dyn CueSink>) -> Self {
        Controller {
            sequence,
            highlight: Highlight::none(),
            selection: None,
            run: None,
            last_run: None,
            last_error: None,
            cues,
            rng,
        }
    }

    pub fn sequence(&self) -> &[Value] {
        &self.sequence
    }

    pub fn highlight(&self) -> &Highlight {
        &self.highlight
    }

    pub fn selection(&self) -> Option<Algorithm> {
        self.selection
    }

    pub fn run_state(&self) -> RunState {
        if self.run.is_some() {
            RunState::Running
        } else {
            RunState::Idle
        }
    }

    /// Counters of the run in progress
    pub fn current_run(&self) -> Option<&RunStats> {
        self.run.as_ref().map(|run| &run.stats)
    }

    /// Counters of the most recently finished run
    pub fn last_run(&self) -> Option<&RunStats> {
        self.last_run.as_ref()
    }

    pub fn last_error(&self) -> Option<&EngineError> {
        self.last_error.as_ref()
    }

    /// Dispatch a command; only [`Command::Tick`] produces an outcome
    pub fn handle(&mut self, command: Command) -> Option<TickOutcome> {
        match command {
            Command::Select(algorithm) => {
                self.select(algorithm);
                None
            }
            Command::Start => {
                self.start();
                None
            }
            Command::Reset => {
                self.reset();
                None
            }
            Command::Tick => Some(self.tick()),
        }
    }

    pub fn select(&mut self, algorithm: Algorithm) {
        tracing::debug!(%algorithm, "algorithm selected");
        self.selection = Some(algorithm);
    }

    /// Start a run with the selected algorithm.
    ///
    /// Returns `false` (and changes nothing) when nothing is selected or a run
    /// is already in progress.
    pub fn start(&mut self) -> bool {
        if self.run.is_some() {
            tracing::debug!("start ignored: already running");
            return false;
        }
        let Some(algorithm) = self.selection else {
            tracing::debug!("start ignored: no algorithm selected");
            return false;
        };

        tracing::debug!(%algorithm, len = self.sequence.len(), "starting run");
        self.highlight = Highlight::none();
        self.last_error = None;
        self.run = Some(Run {
            stepper: algorithm.stepper(self.sequence.len()),
            stats: RunStats {
                algorithm,
                steps: 0,
                cues: 0,
            },
        });
        true
    }

    /// Advance the running sort by exactly one step
    pub fn tick(&mut self) -> TickOutcome {
        let Some(run) = self.run.as_mut() else {
            return TickOutcome::Idle;
        };

        let mut counter = CueCounter::new(self.cues.as_mut());
        let advanced = run.stepper.advance(&mut self.sequence, &mut counter);
        run.stats.cues += counter.count();

        match advanced {
            Ok(Some(step)) => {
                run.stats.steps += 1;
                tracing::trace!(kind = ?step.kind, highlight = ?step.highlight.indices(), "step");
                self.highlight = step.highlight.clone();
                TickOutcome::Stepped(step)
            }
            Ok(None) => {
                let stats = run.stats;
                self.run = None;
                self.highlight = Highlight::none();
                self.last_run = Some(stats);
                tracing::info!(
                    algorithm = %stats.algorithm,
                    steps = stats.steps,
                    cues = stats.cues,
                    "run finished"
                );
                TickOutcome::Finished(stats)
            }
            Err(err) => {
                let stats = run.stats;
                self.run = None;
                self.highlight = Highlight::none();
                tracing::error!(
                    algorithm = %stats.algorithm,
                    steps = stats.steps,
                    error = %err,
                    "run aborted"
                );
                self.last_error = Some(err.clone());
                TickOutcome::Failed(err)
            }
        }
    }

    /// Reshuffle the sequence and drop any run in progress.  The selection
    /// survives.
    pub fn reset(&mut self) {
        if let Some(run) = self.run.take() {
            tracing::debug!(algorithm = %run.stats.algorithm, steps = run.stats.steps, "run discarded by reset");
        }
        self.sequence = sequence::shuffled(self.sequence.len(), &mut self.rng);
        self.highlight = Highlight::none();
        self.last_error = None;
        tracing::debug!(len = self.sequence.len(), "sequence reshuffled");
    }
}
