//! Steps and highlight sets

use std::ops::Range;

/// Which kind of mutation produced a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// Two positions exchanged values
    Swap,
    /// A value moved one position to the right to open a gap
    Shift,
    /// A held value was dropped into its final slot
    Place,
    /// One value was taken from the head of a run into the merge buffer
    Merge,
    /// A merged run was written back over its range
    Rewrite,
}

/// Indices to emphasize for the current frame
///
/// Order follows the algorithm that produced it.  An index may appear twice
/// when a routine swaps a position with itself; renderers treat it as a set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Highlight(Vec<usize>);

impl Highlight {
    pub fn none() -> Self {
        Highlight(Vec::new())
    }

    pub fn single(index: usize) -> Self {
        Highlight(vec![index])
    }

    pub fn pair(a: usize, b: usize) -> Self {
        Highlight(vec![a, b])
    }

    pub fn range(range: Range<usize>) -> Self {
        Highlight(range.collect())
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }
}

/// One atomic mutation of the sequence plus the positions it touched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub kind: StepKind,
    pub highlight: Highlight,
}

impl Step {
    pub fn new(kind: StepKind, highlight: Highlight) -> Self {
        Step { kind, highlight }
    }
}
