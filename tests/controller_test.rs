// Integration tests for the idle/running state machine

use rand::rngs::StdRng;
use rand::SeedableRng;
use sortty::algorithms::Algorithm;
use sortty::audio::Muted;
use sortty::controller::{Command, Controller, RunState, TickOutcome};
use sortty::sequence;

fn controller(sequence: Vec<u32>) -> Controller {
    Controller::with_sequence(sequence, StdRng::seed_from_u64(11), Box::new(Muted))
}

fn run_to_idle(ctl: &mut Controller) -> Vec<TickOutcome> {
    let mut outcomes = Vec::new();
    while ctl.run_state() == RunState::Running {
        outcomes.push(ctl.tick());
    }
    outcomes
}

#[test]
fn test_fresh_controller_holds_a_permutation() {
    let ctl = Controller::new(25, StdRng::seed_from_u64(1), Box::new(Muted));
    assert_eq!(ctl.sequence().len(), 25);
    assert!(sequence::is_permutation(ctl.sequence()));
    assert_eq!(ctl.run_state(), RunState::Idle);
    assert_eq!(ctl.selection(), None);
}

#[test]
fn test_second_start_does_not_restart() {
    let mut ctl = controller(vec![3, 1, 4, 5, 2]);
    ctl.select(Algorithm::Bubble);
    assert!(ctl.start());
    ctl.tick();
    ctl.tick();

    assert!(!ctl.start());
    assert_eq!(ctl.current_run().map(|s| s.steps), Some(2));

    let outcomes = run_to_idle(&mut ctl);
    assert!(matches!(outcomes.last(), Some(TickOutcome::Finished(stats)) if stats.steps == 4));
    assert_eq!(ctl.sequence(), &[1, 2, 3, 4, 5]);
}

#[test]
fn test_one_step_per_tick() {
    let mut ctl = controller(vec![3, 1, 4, 5, 2]);
    ctl.select(Algorithm::Merge);
    ctl.start();

    let outcomes = run_to_idle(&mut ctl);
    let stepped = outcomes
        .iter()
        .filter(|o| matches!(o, TickOutcome::Stepped(_)))
        .count();
    assert_eq!(stepped, 11);
    // every tick but the last one stepped
    assert_eq!(outcomes.len(), 12);
    assert_eq!(ctl.last_run().map(|s| s.steps), Some(11));
}

#[test]
fn test_tick_after_exhaustion_is_noop() {
    let mut ctl = controller(vec![1]);
    ctl.select(Algorithm::Quick);
    ctl.start();
    assert!(matches!(ctl.tick(), TickOutcome::Finished(_)));
    assert_eq!(ctl.tick(), TickOutcome::Idle);
    assert_eq!(ctl.tick(), TickOutcome::Idle);
    assert_eq!(ctl.sequence(), &[1]);
}

#[test]
fn test_reset_twice_gives_two_valid_shuffles() {
    let mut ctl = Controller::new(100, StdRng::seed_from_u64(2), Box::new(Muted));
    ctl.reset();
    let first = ctl.sequence().to_vec();
    ctl.reset();
    let second = ctl.sequence().to_vec();

    assert!(sequence::is_permutation(&first));
    assert!(sequence::is_permutation(&second));
    assert_ne!(first, second);
}

#[test]
fn test_reset_mid_run_then_restart() {
    let mut ctl = Controller::new(20, StdRng::seed_from_u64(3), Box::new(Muted));
    ctl.handle(Command::Select(Algorithm::Heap));
    ctl.handle(Command::Start);
    for _ in 0..5 {
        ctl.handle(Command::Tick);
    }
    ctl.handle(Command::Reset);
    assert_eq!(ctl.run_state(), RunState::Idle);
    assert!(sequence::is_permutation(ctl.sequence()));
    assert!(ctl.last_run().is_none());

    ctl.handle(Command::Start);
    run_to_idle(&mut ctl);
    assert!(sequence::is_sorted(ctl.sequence()));
    assert_eq!(ctl.last_run().map(|s| s.algorithm), Some(Algorithm::Heap));
}

#[test]
fn test_handle_only_ticks_return_outcomes() {
    let mut ctl = controller(vec![2, 1]);
    assert_eq!(ctl.handle(Command::Select(Algorithm::Insertion)), None);
    assert_eq!(ctl.handle(Command::Start), None);
    assert!(matches!(
        ctl.handle(Command::Tick),
        Some(TickOutcome::Stepped(_))
    ));
}

#[test]
fn test_every_algorithm_through_the_controller() {
    for algorithm in Algorithm::ALL {
        let mut ctl = Controller::new(60, StdRng::seed_from_u64(8), Box::new(Muted));
        ctl.select(algorithm);
        ctl.start();
        run_to_idle(&mut ctl);
        assert!(sequence::is_sorted(ctl.sequence()), "{} did not sort", algorithm);
        assert!(ctl.last_error().is_none());
    }
}
