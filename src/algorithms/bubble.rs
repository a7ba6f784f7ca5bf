//! Bubble sort: repeated adjacent-swap passes

use crate::audio::CueSink;
use crate::engine::{ops, EngineError, Highlight, Resume, Routine, Step, StepKind};
use crate::sequence::Value;

pub struct Bubble {
    len: usize,
    pass: usize,
    j: usize,
}

impl Bubble {
    pub fn new(len: usize) -> Self {
        Bubble { len, pass: 0, j: 0 }
    }
}

impl Routine for Bubble {
    type Output = ();

    fn resume(
        &mut self,
        data: &mut [Value],
        cues: &mut dyn CueSink,
        _returned: Option<()>,
    ) -> Result<Resume<Self>, EngineError> {
        while self.pass < self.len {
            let end = self.len - self.pass - 1;
            while self.j < end {
                let j = self.j;
                self.j += 1;
                if ops::get(data, j)? > ops::get(data, j + 1)? {
                    ops::swap(data, j, j + 1)?;
                    return Ok(Resume::Yield(Step::new(
                        StepKind::Swap,
                        Highlight::pair(j, j + 1),
                    )));
                }
            }
            // Every pass cues, including the empty trailing ones
            cues.play_cue();
            self.pass += 1;
            self.j = 0;
        }
        Ok(Resume::Return(()))
    }
}

#[cfg(test)]
mod tests {
    use crate::algorithms::Algorithm;
    use crate::audio::CueTally;

    #[test]
    fn test_bubble_swaps_equal_inversions() {
        let mut data = vec![3, 1, 4, 5, 2];
        let mut tally = CueTally::default();
        let trace = Algorithm::Bubble.trace(&mut data, &mut tally).unwrap();

        assert_eq!(data, vec![1, 2, 3, 4, 5]);
        let highlights: Vec<_> = trace
            .steps
            .iter()
            .map(|s| s.highlight.indices().to_vec())
            .collect();
        assert_eq!(highlights, vec![vec![0, 1], vec![3, 4], vec![2, 3], vec![1, 2]]);
        assert_eq!(trace.cues, 5);
    }

    #[test]
    fn test_bubble_sorted_input_only_cues() {
        let mut data = vec![1, 2, 3, 4];
        let trace = Algorithm::Bubble.trace(&mut data, &mut CueTally::default()).unwrap();
        assert!(trace.steps.is_empty());
        assert_eq!(trace.cues, 4);
    }
}
