//! Sequencer tests: the progress machine under every navigation pattern.
//!
//! The inline unit tests cover each transition in isolation; these
//! integration tests drive whole navigation histories, including an
//! exhaustive sweep over short transition sequences to pin the watermark
//! invariant.

use tutorlab_core::{ModuleProgress, ModuleState, Stage, StagePlan};

fn plan(n: usize) -> StagePlan {
    StagePlan::new(
        (0..n)
            .map(|i| Stage::reading(format!("s{i}"), format!("Stage {i}"), "body"))
            .collect(),
    )
    .unwrap()
}

// ============================================================================
// Scripted Histories
// ============================================================================

#[test]
fn test_canonical_walkthrough_four_stages() {
    let mut run = ModuleProgress::new("demo", plan(4));

    run.start();
    assert_eq!(run.state(), ModuleState::Active(0));

    run.advance();
    run.advance();
    run.advance();
    assert_eq!(run.state(), ModuleState::Active(3));

    run.advance();
    assert_eq!(run.state(), ModuleState::Finished);

    assert!(run.jump_to(1));
    assert_eq!(run.state(), ModuleState::Active(1));

    assert!(!run.jump_to(5));
    assert_eq!(run.state(), ModuleState::Active(1));
}

#[test]
fn test_forward_navigation_stays_gated_after_jump_back() {
    let mut run = ModuleProgress::new("demo", plan(5));
    run.start();
    run.advance();
    run.advance();
    run.advance(); // watermark 3

    run.jump_to(0);
    // The frontier is still reachable, but nothing beyond it.
    assert!(run.can_jump_to(3));
    assert!(!run.can_jump_to(4));
    assert!(run.jump_to(3));
    assert_eq!(run.state(), ModuleState::Active(3));
}

#[test]
fn test_finish_then_restart_then_finish_again() {
    let mut run = ModuleProgress::new("demo", plan(2));
    run.start();
    run.advance();
    run.advance();
    assert_eq!(run.state(), ModuleState::Finished);

    run.restart();
    assert_eq!(run.state(), ModuleState::NotStarted);
    assert_eq!(run.cursor(), -1);

    run.start();
    run.advance();
    run.advance();
    assert_eq!(run.state(), ModuleState::Finished);
    assert_eq!(run.cursor(), 2);
}

// ============================================================================
// Watermark Invariant (exhaustive over short histories)
// ============================================================================

/// Every navigation op the machine exposes, excluding restart.
#[derive(Clone, Copy, Debug)]
enum Op {
    Advance,
    Retreat,
    JumpTo(usize),
    EnterQuiz,
    ExitQuiz,
}

const OPS: [Op; 7] = [
    Op::Advance,
    Op::Retreat,
    Op::JumpTo(0),
    Op::JumpTo(1),
    Op::JumpTo(2),
    Op::EnterQuiz,
    Op::ExitQuiz,
];

fn apply(run: &mut ModuleProgress, op: Op) {
    match op {
        Op::Advance => {
            run.advance();
        }
        Op::Retreat => {
            run.retreat();
        }
        Op::JumpTo(target) => {
            run.jump_to(target);
        }
        Op::EnterQuiz => {
            run.enter_quiz();
        }
        Op::ExitQuiz => {
            run.exit_quiz();
        }
    }
}

#[test]
fn test_watermark_never_decreases_over_any_short_history() {
    // Drive a 3-stage module through every op sequence of length 4
    // (7^4 = 2401 histories) and check the watermark after each step.
    let num_ops = OPS.len();
    for seed in 0..num_ops.pow(4) {
        let mut run = ModuleProgress::new("demo", plan(3));
        run.start();

        let mut remaining = seed;
        let mut watermark = run.watermark();
        for _ in 0..4 {
            let op = OPS[remaining % num_ops];
            remaining /= num_ops;
            apply(&mut run, op);

            let now = run.watermark();
            assert!(
                now >= watermark,
                "watermark decreased from {watermark:?} to {now:?} (seed {seed})"
            );
            watermark = now;
        }
    }
}

#[test]
fn test_quiz_never_reenters_active_state() {
    // From Finished, any quiz open/close churn must land back on Finished.
    for toggles in 0..8 {
        let mut run = ModuleProgress::new("demo", plan(2));
        run.start();
        run.advance();
        run.advance();
        assert_eq!(run.state(), ModuleState::Finished);

        for i in 0..toggles {
            if i % 2 == 0 {
                run.enter_quiz();
            } else {
                run.exit_quiz();
            }
            assert_eq!(run.state(), ModuleState::Finished);
        }
    }
}
