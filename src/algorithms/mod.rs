//! Sorting strategies
//!
//! Each module implements one textbook algorithm as a [`Routine`] whose
//! frames mirror the algorithm's natural recursion.  [`Algorithm`] is the
//! runtime selection value; [`Algorithm::stepper`] starts a fresh run.
//!
//! | Algorithm | Step per                                   | Cue per                          |
//! |-----------|--------------------------------------------|----------------------------------|
//! | bubble    | adjacent swap                              | outer pass                       |
//! | insertion | shift, and the final placement             | inserted element                 |
//! | heap      | heapify swap, and root extraction          | extraction                       |
//! | quick     | partition swap, and the pivot swap         | partition, finished range, whole sort |
//! | merge     | head extraction, and the range rewrite     | rewrite                          |
//!
//! [`Routine`]: crate::engine::Routine

pub mod bubble;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;

use std::fmt;

use crate::audio::CueSink;
use crate::engine::{self, Coroutine, EngineError, Stepper, Trace};
use crate::sequence::Value;

/// A selectable sorting strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Algorithm {
    Bubble,
    Insertion,
    Heap,
    Quick,
    Merge,
}

impl Algorithm {
    /// Menu order
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Heap,
        Algorithm::Quick,
        Algorithm::Merge,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Heap => "Heap Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Merge => "Merge Sort",
        }
    }

    /// Position in [`Algorithm::ALL`]
    pub fn index(self) -> usize {
        match self {
            Algorithm::Bubble => 0,
            Algorithm::Insertion => 1,
            Algorithm::Heap => 2,
            Algorithm::Quick => 3,
            Algorithm::Merge => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Algorithm> {
        Algorithm::ALL.get(index).copied()
    }

    /// Next entry in the menu, wrapping around
    pub fn next(self) -> Self {
        Algorithm::ALL[(self.index() + 1) % Algorithm::ALL.len()]
    }

    /// Previous entry in the menu, wrapping around
    pub fn prev(self) -> Self {
        Algorithm::ALL[(self.index() + Algorithm::ALL.len() - 1) % Algorithm::ALL.len()]
    }

    /// Start a fresh run over a sequence of `len` elements
    pub fn stepper(self, len: usize) -> Box<dyn Stepper> {
        match self {
            Algorithm::Bubble => Box::new(Coroutine::new(bubble::Bubble::new(len), len)),
            Algorithm::Insertion => {
                Box::new(Coroutine::new(insertion::Insertion::new(len), len))
            }
            Algorithm::Heap => Box::new(Coroutine::new(heap::HeapSort::new(len), len)),
            Algorithm::Quick => Box::new(Coroutine::new(quick::QuickSort::new(len), len)),
            Algorithm::Merge => Box::new(Coroutine::new(merge::MergeSort::new(len), len)),
        }
    }

    /// Sort `data` in place, returning every step and the cue count
    pub fn trace(self, data: &mut [Value], cues: &mut dyn CueSink) -> Result<Trace, EngineError> {
        let mut stepper = self.stepper(data.len());
        engine::run_to_end(stepper.as_mut(), data, cues)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_navigation_wraps() {
        assert_eq!(Algorithm::Merge.next(), Algorithm::Bubble);
        assert_eq!(Algorithm::Bubble.prev(), Algorithm::Merge);
        assert_eq!(Algorithm::Heap.next(), Algorithm::Quick);
        for (i, algorithm) in Algorithm::ALL.iter().enumerate() {
            assert_eq!(algorithm.index(), i);
            assert_eq!(Algorithm::from_index(i), Some(*algorithm));
        }
        assert_eq!(Algorithm::from_index(5), None);
    }
}
