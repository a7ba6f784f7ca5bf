//! Heap sort
//!
//! Builds a max-heap by sifting down every internal node from the last one to
//! the root, then repeatedly swaps the root with the last unsorted slot and
//! sifts the new root down through the shrunken heap.

use crate::audio::CueSink;
use crate::engine::{ops, EngineError, Highlight, Resume, Routine, Step, StepKind};
use crate::sequence::Value;

/// Where the outer sort loop is suspended
#[derive(Debug, Clone, Copy)]
pub enum Phase {
    /// `remaining` internal nodes still need sifting; the next is `remaining - 1`
    Build { remaining: usize },
    /// Swap the root into `end`
    Extract { end: usize },
    /// Sift the new root through `0..end`
    Sift { end: usize },
    /// Sifting after extraction into `end` finished
    Extracted { end: usize },
}

pub enum HeapSort {
    Sort { len: usize, phase: Phase },
    Heapify { size: usize, root: usize },
}

impl HeapSort {
    pub fn new(len: usize) -> Self {
        HeapSort::Sort {
            len,
            phase: Phase::Build { remaining: len / 2 },
        }
    }
}

impl Routine for HeapSort {
    type Output = ();

    fn resume(
        &mut self,
        data: &mut [Value],
        cues: &mut dyn CueSink,
        _returned: Option<()>,
    ) -> Result<Resume<Self>, EngineError> {
        match self {
            HeapSort::Sort { len, phase } => resume_sort(*len, phase, data, cues),
            HeapSort::Heapify { size, root } => sift_down(*size, root, data),
        }
    }
}

fn resume_sort(
    len: usize,
    phase: &mut Phase,
    data: &mut [Value],
    cues: &mut dyn CueSink,
) -> Result<Resume<HeapSort>, EngineError> {
    loop {
        match *phase {
            Phase::Build { remaining: 0 } => {
                *phase = Phase::Extract {
                    end: len.saturating_sub(1),
                };
            }
            Phase::Build { remaining } => {
                *phase = Phase::Build {
                    remaining: remaining - 1,
                };
                return Ok(Resume::Call(HeapSort::Heapify {
                    size: len,
                    root: remaining - 1,
                }));
            }
            Phase::Extract { end: 0 } => return Ok(Resume::Return(())),
            Phase::Extract { end } => {
                ops::swap(data, 0, end)?;
                *phase = Phase::Sift { end };
                return Ok(Resume::Yield(Step::new(
                    StepKind::Swap,
                    Highlight::pair(0, end),
                )));
            }
            Phase::Sift { end } => {
                *phase = Phase::Extracted { end };
                return Ok(Resume::Call(HeapSort::Heapify { size: end, root: 0 }));
            }
            Phase::Extracted { end } => {
                cues.play_cue();
                *phase = Phase::Extract { end: end - 1 };
            }
        }
    }
}

/// One level of sift-down per resume.
///
/// The recursive call sits in tail position, so instead of pushing a child
/// frame the same frame moves its root down and continues on the next resume.
fn sift_down(
    size: usize,
    root: &mut usize,
    data: &mut [Value],
) -> Result<Resume<HeapSort>, EngineError> {
    let left = 2 * *root + 1;
    let right = 2 * *root + 2;
    let mut largest = *root;

    if left < size && ops::get(data, *root)? < ops::get(data, left)? {
        largest = left;
    }
    if right < size && ops::get(data, largest)? < ops::get(data, right)? {
        largest = right;
    }
    if largest == *root {
        return Ok(Resume::Return(()));
    }

    ops::swap(data, *root, largest)?;
    let step = Step::new(StepKind::Swap, Highlight::pair(*root, largest));
    *root = largest;
    Ok(Resume::Yield(step))
}
