// Integration tests for the five sorting routines

use rand::rngs::StdRng;
use rand::SeedableRng;
use sortty::algorithms::Algorithm;
use sortty::audio::CueTally;
use sortty::engine::{Step, StepKind};
use sortty::sequence;

fn run(algorithm: Algorithm, input: &[u32]) -> (Vec<u32>, Vec<Step>, usize) {
    let mut data = input.to_vec();
    let mut tally = CueTally::default();
    let trace = algorithm
        .trace(&mut data, &mut tally)
        .expect("Sort should not fail");
    assert_eq!(trace.cues, tally.count, "Trace and sink disagree on cues");
    (data, trace.steps, trace.cues)
}

fn highlights(steps: &[Step]) -> Vec<Vec<usize>> {
    steps
        .iter()
        .map(|s| s.highlight.indices().to_vec())
        .collect()
}

#[test]
fn test_every_algorithm_sorts_every_size() {
    let mut rng = StdRng::seed_from_u64(42);
    for len in [0, 1, 2, 10, 100] {
        let input = sequence::shuffled(len, &mut rng);
        for algorithm in Algorithm::ALL {
            let (data, _, _) = run(algorithm, &input);
            assert!(
                sequence::is_sorted(&data),
                "{} left {:?} unsorted",
                algorithm,
                data
            );
            assert!(sequence::is_permutation(&data));
            assert_eq!(data.len(), len);
        }
    }
}

#[test]
fn test_highlights_stay_in_bounds() {
    let mut rng = StdRng::seed_from_u64(9);
    let input = sequence::shuffled(40, &mut rng);
    for algorithm in Algorithm::ALL {
        let (_, steps, _) = run(algorithm, &input);
        for step in &steps {
            assert!(!step.highlight.is_empty());
            assert!(step.highlight.iter().all(|i| i < input.len()));
        }
    }
}

#[test]
fn test_single_element_produces_no_steps() {
    for algorithm in Algorithm::ALL {
        let (data, steps, _) = run(algorithm, &[1]);
        assert!(steps.is_empty(), "{} stepped on one element", algorithm);
        assert_eq!(data, vec![1]);
    }
}

#[test]
fn test_empty_sequence_exhausts_immediately() {
    for algorithm in Algorithm::ALL {
        let (data, steps, _) = run(algorithm, &[]);
        assert!(steps.is_empty());
        assert!(data.is_empty());
    }
}

#[test]
fn test_exact_counts_small_permutation() {
    let input = [3, 1, 4, 5, 2];
    let expected = [
        (Algorithm::Bubble, 4, 5),
        (Algorithm::Insertion, 8, 4),
        (Algorithm::Heap, 8, 4),
        (Algorithm::Quick, 4, 7),
        (Algorithm::Merge, 11, 4),
    ];
    for (algorithm, steps, cues) in expected {
        let (data, trace, played) = run(algorithm, &input);
        assert_eq!(data, vec![1, 2, 3, 4, 5]);
        assert_eq!(trace.len(), steps, "{} step count", algorithm);
        assert_eq!(played, cues, "{} cue count", algorithm);
    }
}

#[test]
fn test_exact_counts_ten_elements() {
    let input = [7, 3, 9, 1, 10, 5, 2, 8, 6, 4];
    let expected = [
        (Algorithm::Bubble, 24, 10),
        (Algorithm::Insertion, 33, 9),
        (Algorithm::Heap, 26, 9),
        (Algorithm::Quick, 13, 11),
        (Algorithm::Merge, 31, 9),
    ];
    for (algorithm, steps, cues) in expected {
        let (_, trace, played) = run(algorithm, &input);
        assert_eq!(trace.len(), steps, "{} step count", algorithm);
        assert_eq!(played, cues, "{} cue count", algorithm);
    }
}

#[test]
fn test_sorted_input_keeps_structural_steps() {
    let input = [1, 2, 3, 4, 5];
    let expected = [
        (Algorithm::Bubble, 0, 5),
        (Algorithm::Insertion, 4, 4),
        (Algorithm::Heap, 10, 4),
        (Algorithm::Quick, 14, 9),
        (Algorithm::Merge, 9, 4),
    ];
    for (algorithm, steps, cues) in expected {
        let (data, trace, played) = run(algorithm, &input);
        assert_eq!(data, input.to_vec());
        assert_eq!(trace.len(), steps, "{} step count", algorithm);
        assert_eq!(played, cues, "{} cue count", algorithm);
    }
}

#[test]
fn test_step_counts_are_deterministic() {
    let mut rng = StdRng::seed_from_u64(5);
    let input = sequence::shuffled(30, &mut rng);
    for algorithm in Algorithm::ALL {
        let (_, first, first_cues) = run(algorithm, &input);
        let (_, second, second_cues) = run(algorithm, &input);
        assert_eq!(first, second);
        assert_eq!(first_cues, second_cues);
    }
}

#[test]
fn test_bubble_scenario() {
    let (data, steps, _) = run(Algorithm::Bubble, &[3, 1, 4, 5, 2]);
    assert_eq!(data, vec![1, 2, 3, 4, 5]);
    assert_eq!(steps.len(), sequence::inversions(&[3, 1, 4, 5, 2]));
    assert!(steps.iter().all(|s| s.kind == StepKind::Swap));
}

#[test]
fn test_merge_scenario_merges_runs_bottom_up() {
    let (data, steps, cues) = run(Algorithm::Merge, &[5, 4, 3, 2, 1]);
    assert_eq!(data, vec![1, 2, 3, 4, 5]);
    assert_eq!(
        highlights(&steps),
        vec![
            vec![0, 1],
            vec![0, 1],
            vec![3, 4],
            vec![3, 4],
            vec![2, 3],
            vec![2, 4],
            vec![2, 3, 4],
            vec![0, 2],
            vec![0, 3],
            vec![0, 4],
            vec![0, 1, 2, 3, 4],
        ]
    );

    let rewrites: Vec<_> = steps
        .iter()
        .filter(|s| s.kind == StepKind::Rewrite)
        .map(|s| s.highlight.len())
        .collect();
    assert_eq!(rewrites, vec![2, 2, 3, 5]);
    assert_eq!(cues, 4);
}

#[test]
fn test_heap_scenario_highlights() {
    let (data, steps, _) = run(Algorithm::Heap, &[3, 1, 4, 5, 2]);
    assert_eq!(data, vec![1, 2, 3, 4, 5]);
    assert_eq!(
        highlights(&steps),
        vec![
            vec![1, 3],
            vec![0, 1],
            vec![0, 4],
            vec![0, 2],
            vec![0, 3],
            vec![0, 1],
            vec![0, 2],
            vec![0, 1],
        ]
    );
}

#[test]
fn test_quick_scenario_highlights() {
    let (data, steps, _) = run(Algorithm::Quick, &[3, 1, 4, 5, 2]);
    assert_eq!(data, vec![1, 2, 3, 4, 5]);
    assert_eq!(
        highlights(&steps),
        vec![vec![0, 1], vec![1, 4], vec![2, 4], vec![3, 4]]
    );
}

#[test]
fn test_insertion_scenario_highlights() {
    let (data, steps, _) = run(Algorithm::Insertion, &[3, 1, 4, 5, 2]);
    assert_eq!(data, vec![1, 2, 3, 4, 5]);
    assert_eq!(
        highlights(&steps),
        vec![
            vec![0, 1],
            vec![0],
            vec![2],
            vec![3],
            vec![3, 4],
            vec![2, 3],
            vec![1, 2],
            vec![1],
        ]
    );
}
