//! The module progress state machine.
//!
//! Stage progress used to live in a bag of co-varying flags and counters;
//! here it is one explicit machine with a single authoritative transition
//! set:
//!
//! ```text
//!                start()            advance()xN           advance()
//!   NotStarted ─────────▶ Active(0) ──────────▶ Active(N-1) ─────────▶ Finished
//!        ▲                    │  ▲                                        │ ▲
//!        │                    ▼  │ retreat()/jump_to()      enter_quiz()  ▼ │ exit_quiz()
//!        └─── restart() ── (gated by the high watermark)              [quiz view]
//! ```
//!
//! The watermark records the furthest stage ever reached and only ever
//! grows (restart is the single exception), so a learner can always jump
//! back to their frontier but never skip ahead of it.
//!
//! Navigation is deliberately infallible: an ungated `jump_to` or a
//! mistimed quiz toggle is a silent no-op, not an error. Every transition
//! method returns whether it took effect, and emits a `tracing` event when
//! it does.

use tracing::{debug, info};

use crate::stage::{Stage, StagePlan};

/// Where a learner is within a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleState {
    /// Entry screen; no stage visited yet.
    NotStarted,
    /// Working through stage `i`.
    Active(usize),
    /// Past the last stage; recap screen (and quiz, when open).
    Finished,
}

/// Observer for module lifecycle events.
///
/// All methods default to no-ops; implement only the events you care
/// about. The started/completed notifications fire at most once per run;
/// redundant completion is possible in principle and must never be treated
/// as an error by implementors.
pub trait ProgressHook: Send + Sync {
    /// The learner left the entry screen for the first time.
    fn on_module_started(&self, _module: &str) {}

    /// The learner advanced past the final stage for the first time.
    fn on_module_completed(&self, _module: &str) {}

    /// The learner entered a stage (by any transition).
    fn on_stage_entered(&self, _module: &str, _stage: usize) {}
}

/// A hook that ignores every event.
pub struct NoopHook;

impl ProgressHook for NoopHook {}

/// Progress through one module: plan, cursor, watermark, quiz flag.
pub struct ModuleProgress {
    module: String,
    plan: StagePlan,
    state: ModuleState,
    watermark: Option<usize>,
    quiz_open: bool,
    started_notified: bool,
    completed_notified: bool,
    hooks: Vec<Box<dyn ProgressHook>>,
}

impl ModuleProgress {
    /// Create a fresh, not-yet-started module run.
    pub fn new(module: impl Into<String>, plan: StagePlan) -> Self {
        Self {
            module: module.into(),
            plan,
            state: ModuleState::NotStarted,
            watermark: None,
            quiz_open: false,
            started_notified: false,
            completed_notified: false,
            hooks: Vec::new(),
        }
    }

    /// Rebuild a run from a persisted cursor (see [`Self::cursor`]).
    ///
    /// The watermark resumes equal to the cursor: the store persists only
    /// the current stage, so that is the furthest position it can attest
    /// to. Notification latches resume set, so a restored run never
    /// re-fires started/completed.
    pub fn resume(module: impl Into<String>, plan: StagePlan, cursor: i32) -> Self {
        let mut progress = Self::new(module, plan);
        if cursor < 0 {
            return progress;
        }
        let len = progress.plan.len();
        let cursor = cursor as usize;
        progress.started_notified = true;
        if cursor >= len {
            progress.state = ModuleState::Finished;
            progress.watermark = Some(len - 1);
            progress.completed_notified = true;
        } else {
            progress.state = ModuleState::Active(cursor);
            progress.watermark = Some(cursor);
        }
        progress
    }

    /// Register a lifecycle observer.
    pub fn add_hook(&mut self, hook: Box<dyn ProgressHook>) {
        self.hooks.push(hook);
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// The module's stable key.
    pub fn module(&self) -> &str {
        &self.module
    }

    /// The current machine state.
    pub fn state(&self) -> ModuleState {
        self.state
    }

    /// Furthest stage index ever reached this run.
    pub fn watermark(&self) -> Option<usize> {
        self.watermark
    }

    /// Is the quiz view open (implies [`ModuleState::Finished`])?
    pub fn is_quiz_open(&self) -> bool {
        self.quiz_open
    }

    /// The stage being displayed, when one is.
    pub fn current_stage(&self) -> Option<&Stage> {
        match self.state {
            ModuleState::Active(i) => self.plan.get(i),
            _ => None,
        }
    }

    /// The plan this run walks.
    pub fn plan(&self) -> &StagePlan {
        &self.plan
    }

    /// Can the learner click through to `target` right now?
    ///
    /// True exactly when `jump_to(target)` would take effect.
    pub fn can_jump_to(&self, target: usize) -> bool {
        if self.quiz_open || target >= self.plan.len() {
            return false;
        }
        let gated = match self.watermark {
            Some(mark) => target <= mark,
            None => false,
        };
        gated && self.state != ModuleState::Active(target)
    }

    /// Persistable cursor: -1 not started, `0..N-1` active stage, `N`
    /// finished.
    pub fn cursor(&self) -> i32 {
        match self.state {
            ModuleState::NotStarted => -1,
            ModuleState::Active(i) => i as i32,
            ModuleState::Finished => self.plan.len() as i32,
        }
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Leave the entry screen: `NotStarted -> Active(0)`.
    ///
    /// No-op unless the module is not started. Fires the module-started
    /// notification the first time it takes effect.
    pub fn start(&mut self) -> bool {
        if self.state != ModuleState::NotStarted {
            return false;
        }
        if !self.started_notified {
            self.started_notified = true;
            info!(module = %self.module, "module started");
            for hook in &self.hooks {
                hook.on_module_started(&self.module);
            }
        }
        self.enter_stage(0);
        true
    }

    /// Move forward one stage, finishing after the last one.
    ///
    /// Fires the module-completed notification the first time the
    /// terminal transition happens. No-op outside `Active`.
    pub fn advance(&mut self) -> bool {
        let ModuleState::Active(i) = self.state else {
            return false;
        };
        if i + 1 < self.plan.len() {
            self.enter_stage(i + 1);
        } else {
            self.state = ModuleState::Finished;
            debug!(module = %self.module, "module finished");
            if !self.completed_notified {
                self.completed_notified = true;
                info!(module = %self.module, "module completed");
                for hook in &self.hooks {
                    hook.on_module_completed(&self.module);
                }
            }
        }
        true
    }

    /// Move back one stage. No-op at stage 0 and outside `Active`.
    ///
    /// The watermark is untouched: going back never forfeits progress.
    pub fn retreat(&mut self) -> bool {
        let ModuleState::Active(i) = self.state else {
            return false;
        };
        if i == 0 {
            return false;
        }
        self.enter_stage(i - 1);
        true
    }

    /// Jump directly to a visited stage.
    ///
    /// Allowed only up to the watermark, never to the stage already shown,
    /// and never while the quiz is open. An ungated jump is a silent
    /// no-op; the product is forgiving about navigation.
    pub fn jump_to(&mut self, target: usize) -> bool {
        if !self.can_jump_to(target) {
            return false;
        }
        self.enter_stage(target);
        true
    }

    /// Reset to the entry screen, clearing watermark and quiz state.
    ///
    /// This is the only transition that decreases the watermark. The
    /// notification latches survive: started/completed stay at-most-once
    /// per run object.
    pub fn restart(&mut self) {
        debug!(module = %self.module, "module restarted");
        self.state = ModuleState::NotStarted;
        self.watermark = None;
        self.quiz_open = false;
    }

    /// Open the quiz view. Only reachable from `Finished`.
    pub fn enter_quiz(&mut self) -> bool {
        if self.state != ModuleState::Finished || self.quiz_open {
            return false;
        }
        debug!(module = %self.module, "quiz opened");
        self.quiz_open = true;
        true
    }

    /// Close the quiz view, returning to the recap screen, never to an
    /// active stage.
    pub fn exit_quiz(&mut self) -> bool {
        if !self.quiz_open {
            return false;
        }
        debug!(module = %self.module, "quiz closed");
        self.quiz_open = false;
        true
    }

    fn enter_stage(&mut self, index: usize) {
        self.state = ModuleState::Active(index);
        self.watermark = Some(self.watermark.map_or(index, |mark| mark.max(index)));
        debug!(module = %self.module, stage = index, "stage entered");
        for hook in &self.hooks {
            hook.on_stage_entered(&self.module, index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::Stage;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn four_stage_run() -> ModuleProgress {
        let plan = StagePlan::new(
            ["one", "two", "three", "four"]
                .iter()
                .map(|k| Stage::reading(*k, *k, "body"))
                .collect(),
        )
        .unwrap();
        ModuleProgress::new("demo", plan)
    }

    #[test]
    fn test_full_walkthrough() {
        let mut run = four_stage_run();
        assert_eq!(run.state(), ModuleState::NotStarted);
        assert_eq!(run.cursor(), -1);

        assert!(run.start());
        assert_eq!(run.state(), ModuleState::Active(0));

        for expected in [1, 2, 3] {
            assert!(run.advance());
            assert_eq!(run.state(), ModuleState::Active(expected));
        }

        assert!(run.advance());
        assert_eq!(run.state(), ModuleState::Finished);
        assert_eq!(run.cursor(), 4);

        // Jump back from Finished is allowed: watermark is 3.
        assert!(run.jump_to(1));
        assert_eq!(run.state(), ModuleState::Active(1));

        // Out-of-range target: silent no-op.
        assert!(!run.jump_to(5));
        assert_eq!(run.state(), ModuleState::Active(1));
    }

    #[test]
    fn test_start_is_a_noop_when_active() {
        let mut run = four_stage_run();
        run.start();
        run.advance();
        assert!(!run.start());
        assert_eq!(run.state(), ModuleState::Active(1));
    }

    #[test]
    fn test_retreat_stops_at_zero() {
        let mut run = four_stage_run();
        run.start();
        assert!(!run.retreat());
        run.advance();
        assert!(run.retreat());
        assert_eq!(run.state(), ModuleState::Active(0));
    }

    #[test]
    fn test_watermark_survives_retreat_and_jump() {
        let mut run = four_stage_run();
        run.start();
        run.advance();
        run.advance();
        assert_eq!(run.watermark(), Some(2));

        run.retreat();
        run.retreat();
        assert_eq!(run.watermark(), Some(2));

        assert!(run.jump_to(2));
        assert!(run.jump_to(1));
        assert_eq!(run.watermark(), Some(2));
    }

    #[test]
    fn test_jump_cannot_skip_ahead() {
        let mut run = four_stage_run();
        run.start();
        assert!(!run.jump_to(1));
        assert!(!run.jump_to(3));
        assert_eq!(run.state(), ModuleState::Active(0));
    }

    #[test]
    fn test_jump_to_current_stage_is_a_noop() {
        let mut run = four_stage_run();
        run.start();
        run.advance();
        assert!(!run.jump_to(1));
    }

    #[test]
    fn test_quiz_only_from_finished() {
        let mut run = four_stage_run();
        assert!(!run.enter_quiz());
        run.start();
        assert!(!run.enter_quiz());

        for _ in 0..4 {
            run.advance();
        }
        assert!(run.enter_quiz());
        assert!(run.is_quiz_open());

        // Exiting returns to Finished, never to a stage.
        assert!(run.exit_quiz());
        assert_eq!(run.state(), ModuleState::Finished);
        assert!(!run.exit_quiz());
    }

    #[test]
    fn test_no_jump_while_quiz_open() {
        let mut run = four_stage_run();
        run.start();
        for _ in 0..4 {
            run.advance();
        }
        run.enter_quiz();
        assert!(!run.jump_to(0));
        run.exit_quiz();
        assert!(run.jump_to(0));
    }

    #[test]
    fn test_restart_resets_watermark_and_quiz() {
        let mut run = four_stage_run();
        run.start();
        for _ in 0..4 {
            run.advance();
        }
        run.enter_quiz();
        run.restart();
        assert_eq!(run.state(), ModuleState::NotStarted);
        assert_eq!(run.watermark(), None);
        assert!(!run.is_quiz_open());
        // After restart, nothing is jumpable until stages are re-visited.
        assert!(!run.jump_to(0));
    }

    #[test]
    fn test_hooks_fire_once() {
        struct CountingHook {
            started: Arc<AtomicUsize>,
            completed: Arc<AtomicUsize>,
        }
        impl ProgressHook for CountingHook {
            fn on_module_started(&self, _module: &str) {
                self.started.fetch_add(1, Ordering::SeqCst);
            }
            fn on_module_completed(&self, _module: &str) {
                self.completed.fetch_add(1, Ordering::SeqCst);
            }
        }

        let started = Arc::new(AtomicUsize::new(0));
        let completed = Arc::new(AtomicUsize::new(0));
        let mut run = four_stage_run();
        run.add_hook(Box::new(CountingHook {
            started: Arc::clone(&started),
            completed: Arc::clone(&completed),
        }));

        run.start();
        for _ in 0..4 {
            run.advance();
        }
        // Walk it all again: latches keep the notifications at once-per-run.
        run.restart();
        run.start();
        for _ in 0..4 {
            run.advance();
        }

        assert_eq!(started.load(Ordering::SeqCst), 1);
        assert_eq!(completed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_resume_from_cursor() {
        let plan = four_stage_run().plan().clone();

        let fresh = ModuleProgress::resume("demo", plan.clone(), -1);
        assert_eq!(fresh.state(), ModuleState::NotStarted);

        let mid = ModuleProgress::resume("demo", plan.clone(), 2);
        assert_eq!(mid.state(), ModuleState::Active(2));
        assert_eq!(mid.watermark(), Some(2));

        let done = ModuleProgress::resume("demo", plan, 4);
        assert_eq!(done.state(), ModuleState::Finished);
        assert_eq!(done.watermark(), Some(3));
    }

    #[test]
    fn test_resumed_run_does_not_refire_notifications() {
        let started = Arc::new(AtomicUsize::new(0));

        struct StartHook(Arc<AtomicUsize>);
        impl ProgressHook for StartHook {
            fn on_module_started(&self, _module: &str) {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }

        let plan = four_stage_run().plan().clone();
        let mut run = ModuleProgress::resume("demo", plan, 2);
        run.add_hook(Box::new(StartHook(Arc::clone(&started))));
        run.retreat();
        run.advance();
        assert_eq!(started.load(Ordering::SeqCst), 0);
    }
}
