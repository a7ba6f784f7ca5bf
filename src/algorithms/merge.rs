//! Top-down merge sort
//!
//! Each range is split at its midpoint, both halves are sorted, then the two
//! sorted runs are merged from copies and the result is written back over the
//! original positions.

use crate::audio::CueSink;
use crate::engine::{ops, EngineError, Highlight, Resume, Routine, Step, StepKind};
use crate::sequence::Value;

/// Progress through one `start..end` range
#[derive(Debug, Clone, Copy)]
pub enum Stage {
    Split,
    LeftSorted,
    RightSorted,
    Merged,
    Written,
}

/// Merge of two sorted runs copied out of `start..mid` and `mid..end`
pub struct Merge {
    start: usize,
    mid: usize,
    left: Vec<Value>,
    right: Vec<Value>,
    i: usize,
    j: usize,
    merged: Vec<Value>,
}

pub enum MergeSort {
    Range { start: usize, end: usize, stage: Stage },
    Merge(Merge),
}

impl MergeSort {
    pub fn new(len: usize) -> Self {
        MergeSort::range(0, len)
    }

    fn range(start: usize, end: usize) -> Self {
        MergeSort::Range {
            start,
            end,
            stage: Stage::Split,
        }
    }
}

impl Routine for MergeSort {
    type Output = ();

    fn resume(
        &mut self,
        data: &mut [Value],
        cues: &mut dyn CueSink,
        _returned: Option<()>,
    ) -> Result<Resume<Self>, EngineError> {
        match self {
            MergeSort::Range { start, end, stage } => {
                resume_range(*start, *end, stage, data, cues)
            }
            MergeSort::Merge(merge) => merge.resume(data),
        }
    }
}

fn resume_range(
    start: usize,
    end: usize,
    stage: &mut Stage,
    data: &mut [Value],
    cues: &mut dyn CueSink,
) -> Result<Resume<MergeSort>, EngineError> {
    let mid = start + (end - start) / 2;
    match *stage {
        Stage::Split => {
            if end - start <= 1 {
                return Ok(Resume::Return(()));
            }
            *stage = Stage::LeftSorted;
            Ok(Resume::Call(MergeSort::range(start, mid)))
        }
        Stage::LeftSorted => {
            *stage = Stage::RightSorted;
            Ok(Resume::Call(MergeSort::range(mid, end)))
        }
        Stage::RightSorted => {
            *stage = Stage::Merged;
            let merge = Merge::new(data, start, mid, end)?;
            Ok(Resume::Call(MergeSort::Merge(merge)))
        }
        Stage::Merged => {
            *stage = Stage::Written;
            Ok(Resume::Yield(Step::new(
                StepKind::Rewrite,
                Highlight::range(start..end),
            )))
        }
        Stage::Written => {
            cues.play_cue();
            Ok(Resume::Return(()))
        }
    }
}

impl Merge {
    fn new(data: &[Value], start: usize, mid: usize, end: usize) -> Result<Self, EngineError> {
        Ok(Merge {
            start,
            mid,
            left: ops::copy_range(data, start, mid)?,
            right: ops::copy_range(data, mid, end)?,
            i: 0,
            j: 0,
            merged: Vec::with_capacity(end - start),
        })
    }

    /// Take one head per resume; when a run empties, drain the other and
    /// write the result back
    fn resume(&mut self, data: &mut [Value]) -> Result<Resume<MergeSort>, EngineError> {
        if let (Some(&a), Some(&b)) = (self.left.get(self.i), self.right.get(self.j)) {
            let heads = Highlight::pair(self.start + self.i, self.mid + self.j);
            if a <= b {
                self.merged.push(a);
                self.i += 1;
            } else {
                self.merged.push(b);
                self.j += 1;
            }
            return Ok(Resume::Yield(Step::new(StepKind::Merge, heads)));
        }

        self.merged.extend_from_slice(&self.left[self.i..]);
        self.merged.extend_from_slice(&self.right[self.j..]);
        ops::write_range(data, self.start, &self.merged)?;
        Ok(Resume::Return(()))
    }
}
