//! Suspension protocol
//!
//! A [`Routine`] is one activation record of an algorithm: the local state a
//! generator would keep between `yield`s.  Resuming it does at most one
//! visible mutation and then says what happens next:
//!
//! - [`Resume::Yield`]: a step was produced, suspend here
//! - [`Resume::Call`]: run a nested routine to completion first, then resume
//!   this frame with whatever the child returned
//! - [`Resume::Return`]: this frame is done
//!
//! [`Coroutine`] owns the frame stack and turns that protocol into a flat
//! stream of steps.  A child's steps are always produced before the parent's
//! next step, so the stream matches the order of a plain recursive sort.

use super::errors::EngineError;
use super::step::Step;
use crate::audio::CueSink;
use crate::sequence::Value;

/// What a frame asks the driver to do after being resumed
pub enum Resume<R: Routine> {
    Yield(Step),
    Call(R),
    Return(R::Output),
}

/// A resumable frame of a sorting algorithm
pub trait Routine: Sized {
    /// Value handed back to the calling frame
    type Output;

    /// Continue from the last suspension point.
    ///
    /// `returned` carries the output of the child that just finished, if the
    /// previous resume was a [`Resume::Call`].
    fn resume(
        &mut self,
        data: &mut [Value],
        cues: &mut dyn CueSink,
        returned: Option<Self::Output>,
    ) -> Result<Resume<Self>, EngineError>;
}

/// Object-safe view of a running sort
pub trait Stepper {
    /// Perform the next mutation.
    ///
    /// Returns `Ok(None)` once the sort is exhausted, and keeps returning it.
    fn advance(
        &mut self,
        data: &mut [Value],
        cues: &mut dyn CueSink,
    ) -> Result<Option<Step>, EngineError>;

    fn is_finished(&self) -> bool;
}

/// Explicit frame stack driving a [`Routine`] tree
pub struct Coroutine<R: Routine> {
    frames: Vec<R>,
    returned: Option<R::Output>,
    len: usize,
}

impl<R: Routine> Coroutine<R> {
    /// Start a run over a sequence of `len` elements rooted at `root`
    pub fn new(root: R, len: usize) -> Self {
        Coroutine {
            frames: vec![root],
            returned: None,
            len,
        }
    }
}

impl<R: Routine> Stepper for Coroutine<R> {
    fn advance(
        &mut self,
        data: &mut [Value],
        cues: &mut dyn CueSink,
    ) -> Result<Option<Step>, EngineError> {
        if self.frames.is_empty() {
            return Ok(None);
        }
        if data.len() != self.len {
            self.frames.clear();
            return Err(EngineError::LengthChanged {
                expected: self.len,
                actual: data.len(),
            });
        }

        loop {
            let returned = self.returned.take();
            let Some(frame) = self.frames.last_mut() else {
                return Ok(None);
            };

            match frame.resume(data, cues, returned) {
                Ok(Resume::Yield(step)) => return Ok(Some(step)),
                Ok(Resume::Call(child)) => self.frames.push(child),
                Ok(Resume::Return(output)) => {
                    self.frames.pop();
                    self.returned = Some(output);
                }
                Err(err) => {
                    self.frames.clear();
                    return Err(err);
                }
            }
        }
    }

    fn is_finished(&self) -> bool {
        self.frames.is_empty()
    }
}
