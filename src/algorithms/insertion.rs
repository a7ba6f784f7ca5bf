//! Insertion sort: shift larger values right, then drop the key into the gap

use crate::audio::CueSink;
use crate::engine::{ops, EngineError, Highlight, Resume, Routine, Step, StepKind};
use crate::sequence::Value;

#[derive(Debug, Clone, Copy)]
enum Phase {
    /// Pick up the next unsorted element
    Pick,
    /// Holding `key`; `hole` is where it would go right now
    Shift { key: Value, hole: usize },
}

pub struct Insertion {
    len: usize,
    next: usize,
    phase: Phase,
}

impl Insertion {
    pub fn new(len: usize) -> Self {
        Insertion {
            len,
            next: 1,
            phase: Phase::Pick,
        }
    }
}

impl Routine for Insertion {
    type Output = ();

    fn resume(
        &mut self,
        data: &mut [Value],
        cues: &mut dyn CueSink,
        _returned: Option<()>,
    ) -> Result<Resume<Self>, EngineError> {
        loop {
            match self.phase {
                Phase::Pick => {
                    if self.next >= self.len {
                        return Ok(Resume::Return(()));
                    }
                    let key = ops::get(data, self.next)?;
                    self.phase = Phase::Shift {
                        key,
                        hole: self.next,
                    };
                    self.next += 1;
                }
                Phase::Shift { key, hole } => {
                    if hole > 0 {
                        let left = ops::get(data, hole - 1)?;
                        if key < left {
                            ops::set(data, hole, left)?;
                            self.phase = Phase::Shift {
                                key,
                                hole: hole - 1,
                            };
                            return Ok(Resume::Yield(Step::new(
                                StepKind::Shift,
                                Highlight::pair(hole - 1, hole),
                            )));
                        }
                    }
                    ops::set(data, hole, key)?;
                    cues.play_cue();
                    self.phase = Phase::Pick;
                    return Ok(Resume::Yield(Step::new(
                        StepKind::Place,
                        Highlight::single(hole),
                    )));
                }
            }
        }
    }
}
