//! Smoke tests for the core crate.
//!
//! These tests verify that the basic module infrastructure works together:
//! - Stage plans can be built and walked
//! - Progress persists through a store and resumes
//! - Hints travel with the session

use tutorlab_core::{
    HintSet, MemoryStore, ModuleProgress, ModuleState, ProgressStore, Stage, StagePlan, ToolChip,
};

fn demo_plan() -> StagePlan {
    StagePlan::new(vec![
        Stage::reading("intro", "Welcome", "What this module covers."),
        Stage::interactive(
            "play",
            "Try it",
            "Drag things around.",
            vec![ToolChip::new("slider", "Slider")],
        ),
        Stage::reading("recap", "Recap", "What you learned.").with_next_label("Finish"),
    ])
    .unwrap()
}

// ============================================================================
// Walkthrough Smoke
// ============================================================================

#[test]
fn smoke_plan_walk() {
    let mut run = ModuleProgress::new("demo", demo_plan());
    run.start();
    assert_eq!(run.current_stage().unwrap().key, "intro");

    run.advance();
    assert_eq!(run.current_stage().unwrap().tools().len(), 1);

    run.advance();
    assert_eq!(run.current_stage().unwrap().next_label, "Finish");

    run.advance();
    assert_eq!(run.state(), ModuleState::Finished);
}

// ============================================================================
// Persistence Smoke
// ============================================================================

#[test]
fn smoke_save_and_resume() {
    let mut store = MemoryStore::new();

    let mut run = ModuleProgress::new("demo", demo_plan());
    run.start();
    run.advance();
    store.save(run.module(), run.cursor());

    let cursor = store.load("demo").unwrap();
    let resumed = ModuleProgress::resume("demo", demo_plan(), cursor);
    assert_eq!(resumed.state(), ModuleState::Active(1));
    assert_eq!(resumed.current_stage().unwrap().key, "play");
}

// ============================================================================
// Hints Smoke
// ============================================================================

#[test]
fn smoke_hints_scope_to_session() {
    let mut hints = HintSet::new();
    hints.dismiss("slider");
    assert!(hints.is_dismissed("slider"));

    // A new session starts clean.
    let fresh = HintSet::new();
    assert!(!fresh.is_dismissed("slider"));
}
