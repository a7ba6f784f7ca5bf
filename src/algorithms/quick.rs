//! Quick sort with Lomuto partitioning
//!
//! The pivot is the last element of each range.  Cues fire after every
//! partition, after every range with at least two elements finishes, and once
//! more when the whole sort returns, so one logical milestone can cue several
//! times in a row.

use crate::audio::CueSink;
use crate::engine::{ops, EngineError, Highlight, Resume, Routine, Step, StepKind};
use crate::sequence::Value;

/// Progress through one `low..=high` range
#[derive(Debug, Clone, Copy)]
pub enum Stage {
    Start,
    Partitioned,
    LeftDone { pivot: usize },
    RightDone,
}

/// Lomuto partition state
pub struct Partition {
    high: usize,
    /// Next slot for an element `<=` the pivot
    store: usize,
    scan: usize,
    pivot: Option<Value>,
    placed: bool,
}

pub enum QuickSort {
    Root { len: usize, called: bool },
    Range { low: usize, high: usize, stage: Stage },
    Partition(Partition),
}

impl QuickSort {
    pub fn new(len: usize) -> Self {
        QuickSort::Root { len, called: false }
    }

    /// Frame for the inclusive range `low..=high`, or `None` if it holds fewer
    /// than two elements
    fn range(low: usize, high: usize) -> Option<Self> {
        (low < high).then_some(QuickSort::Range {
            low,
            high,
            stage: Stage::Start,
        })
    }
}

impl Routine for QuickSort {
    /// The pivot's final index, returned by partition frames only
    type Output = Option<usize>;

    fn resume(
        &mut self,
        data: &mut [Value],
        cues: &mut dyn CueSink,
        returned: Option<Option<usize>>,
    ) -> Result<Resume<Self>, EngineError> {
        match self {
            QuickSort::Root { len, called } => {
                if !*called {
                    *called = true;
                    if let Some(range) = len.checked_sub(1).and_then(|high| Self::range(0, high)) {
                        return Ok(Resume::Call(range));
                    }
                }
                cues.play_cue();
                Ok(Resume::Return(None))
            }
            QuickSort::Range { low, high, stage } => {
                resume_range(*low, *high, stage, cues, returned.flatten())
            }
            QuickSort::Partition(partition) => partition.resume(data, cues),
        }
    }
}

fn resume_range(
    low: usize,
    high: usize,
    stage: &mut Stage,
    cues: &mut dyn CueSink,
    returned: Option<usize>,
) -> Result<Resume<QuickSort>, EngineError> {
    loop {
        match *stage {
            Stage::Start => {
                *stage = Stage::Partitioned;
                return Ok(Resume::Call(QuickSort::Partition(Partition::new(low, high))));
            }
            Stage::Partitioned => {
                let pivot = returned.ok_or(EngineError::MissingReturn {
                    routine: "partition",
                })?;
                *stage = Stage::LeftDone { pivot };
                let left = pivot.checked_sub(1).and_then(|end| QuickSort::range(low, end));
                if let Some(left) = left {
                    return Ok(Resume::Call(left));
                }
            }
            Stage::LeftDone { pivot } => {
                *stage = Stage::RightDone;
                if let Some(right) = QuickSort::range(pivot + 1, high) {
                    return Ok(Resume::Call(right));
                }
            }
            Stage::RightDone => {
                cues.play_cue();
                return Ok(Resume::Return(None));
            }
        }
    }
}

impl Partition {
    fn new(low: usize, high: usize) -> Self {
        Partition {
            high,
            store: low,
            scan: low,
            pivot: None,
            placed: false,
        }
    }

    fn resume(
        &mut self,
        data: &mut [Value],
        cues: &mut dyn CueSink,
    ) -> Result<Resume<QuickSort>, EngineError> {
        if self.placed {
            cues.play_cue();
            return Ok(Resume::Return(Some(self.store)));
        }

        let pivot = match self.pivot {
            Some(pivot) => pivot,
            None => {
                let pivot = ops::get(data, self.high)?;
                self.pivot = Some(pivot);
                pivot
            }
        };

        while self.scan < self.high {
            let j = self.scan;
            self.scan += 1;
            if ops::get(data, j)? <= pivot {
                let i = self.store;
                ops::swap(data, i, j)?;
                self.store += 1;
                return Ok(Resume::Yield(Step::new(StepKind::Swap, Highlight::pair(i, j))));
            }
        }

        ops::swap(data, self.store, self.high)?;
        self.placed = true;
        Ok(Resume::Yield(Step::new(
            StepKind::Swap,
            Highlight::pair(self.store, self.high),
        )))
    }
}

#[cfg(test)]
mod tests {
    use crate::algorithms::Algorithm;
    use crate::audio::CueTally;

    #[test]
    fn test_quick_trivial_inputs_still_cue_once() {
        for mut data in [vec![], vec![1]] {
            let trace = Algorithm::Quick
                .trace(&mut data, &mut CueTally::default())
                .unwrap();
            assert!(trace.steps.is_empty());
            assert_eq!(trace.cues, 1);
        }
    }

    #[test]
    fn test_quick_pair() {
        let mut data = vec![2, 1];
        let trace = Algorithm::Quick
            .trace(&mut data, &mut CueTally::default())
            .unwrap();
        assert_eq!(data, vec![1, 2]);
        assert_eq!(trace.steps.len(), 1);
        assert_eq!(trace.steps[0].highlight.indices(), &[0, 1]);
        // partition, range, whole sort
        assert_eq!(trace.cues, 3);
    }

    #[test]
    fn test_quick_self_swaps_are_steps() {
        let mut data = vec![1, 2, 3];
        let trace = Algorithm::Quick
            .trace(&mut data, &mut CueTally::default())
            .unwrap();
        assert_eq!(data, vec![1, 2, 3]);
        assert_eq!(trace.steps[0].highlight.indices(), &[0, 0]);
    }
}
