//! Step engine
//!
//! A sort is modelled as a lazy, finite, non-restartable stream of [`Step`]s.
//! Each algorithm is written as a set of [`Routine`] frames; a [`Coroutine`]
//! keeps an explicit frame stack and resumes the top frame until it yields a
//! step, so nested calls (heapify, partition, merge) flatten into the caller's
//! stream in exact call order.
//!
//! - [`step`]: [`Step`], [`StepKind`] and the [`Highlight`] index set
//! - [`coroutine`]: the [`Routine`] suspension trait and its driver
//! - [`ops`]: bounds-checked sequence access used by every routine
//! - [`errors`]: [`EngineError`]
//!
//! The sequence is never owned by a run.  It is lent to [`Stepper::advance`]
//! for exactly one step at a time.

pub mod coroutine;
pub mod errors;
pub mod ops;
pub mod step;

pub use coroutine::{Coroutine, Resume, Routine, Stepper};
pub use errors::EngineError;
pub use step::{Highlight, Step, StepKind};

use crate::audio::{CueCounter, CueSink};
use crate::sequence::Value;

/// Everything a stepper produced while being driven to exhaustion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    pub steps: Vec<Step>,
    pub cues: usize,
}

/// Drive `stepper` until it is exhausted, collecting every step
pub fn run_to_end(
    stepper: &mut dyn Stepper,
    data: &mut [Value],
    cues: &mut dyn CueSink,
) -> Result<Trace, EngineError> {
    let mut counter = CueCounter::new(cues);
    let mut steps = Vec::new();
    while let Some(step) = stepper.advance(data, &mut counter)? {
        steps.push(step);
    }
    Ok(Trace {
        steps,
        cues: counter.count(),
    })
}
