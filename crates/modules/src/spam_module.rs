//! The Precision & Recall walkthrough module.
//!
//! Wires the classification engine into a stage plan: the learner drags a
//! decision threshold across a fixed inbox and watches the confusion
//! matrix, the derived metrics, and the precision-recall curve respond.
//!
//! The curve depends only on the population, so it is computed once at
//! construction; the single-point classification and report recompute on
//! every threshold change. Both come from the same engine, so the curve
//! and the readout can never disagree.

use tracing::debug;

use tutorlab_core::{
    HintSet, ModuleProgress, ProgressHook, ProgressStore, Stage, StagePlan, ToolChip,
};
use tutorlab_metrics::{
    classify, full_sweep, inbox, Classification, CurvePoint, EmailRecord, MetricReport,
    MetricsError,
};

/// The Precision & Recall tutorial module.
pub struct SpamModule {
    progress: ModuleProgress,
    hints: HintSet,
    records: Vec<EmailRecord>,
    threshold: u8,
    classification: Classification,
    report: MetricReport,
    curve: Vec<CurvePoint>,
}

impl SpamModule {
    /// Module key used for persistence and lifecycle notifications.
    pub const KEY: &'static str = "precision-recall";

    /// Where the threshold slider starts.
    pub const DEFAULT_THRESHOLD: u8 = 50;

    /// Build the module over the shipped inbox, resuming any persisted
    /// progress.
    ///
    /// # Errors
    ///
    /// Propagates [`MetricsError`] from classification. Unreachable with
    /// the shipped 100-record inbox, but the contract stays honest for
    /// hosts that swap the population.
    pub fn new(store: &dyn ProgressStore) -> Result<Self, MetricsError> {
        let cursor = store.load(Self::KEY).unwrap_or(-1);
        let progress = ModuleProgress::resume(Self::KEY, Self::stage_plan(), cursor);

        let records = inbox();
        let threshold = Self::DEFAULT_THRESHOLD;
        let classification = classify(&records, threshold)?;
        let report = MetricReport::from_counts(&classification.counts);
        let curve = full_sweep(&records)?;

        Ok(Self {
            progress,
            hints: HintSet::new(),
            records,
            threshold,
            classification,
            report,
            curve,
        })
    }

    /// The module's fixed content table.
    fn stage_plan() -> StagePlan {
        StagePlan::new(vec![
            Stage::reading(
                "intro",
                "When is a filter good?",
                "A spam filter that flags everything catches all spam, and \
                 buries your inbox with it. This module builds the vocabulary \
                 for that tradeoff.",
            )
            .with_next_label("Open the inbox"),
            Stage::interactive(
                "inbox",
                "The inbox",
                "One hundred emails, each scored by the filter. Twenty are \
                 really spam.",
                vec![ToolChip::new("inbox-table", "Inbox")],
            ),
            Stage::interactive(
                "threshold",
                "The decision threshold",
                "Flag everything scoring at or above the line. Drag it and \
                 watch the four confusion cells trade places.",
                vec![ToolChip::new("threshold-slider", "Threshold")],
            ),
            Stage::interactive(
                "tradeoffs",
                "Precision vs. recall",
                "Every threshold is a point on a curve. There is no free \
                 lunch, only tradeoffs.",
                vec![ToolChip::new("pr-curve", "PR curve")],
            ),
            Stage::reading(
                "recap",
                "Reading the numbers",
                "Precision: of what you flagged, how much was right. Recall: \
                 of what was there, how much you caught. F1 balances the two.",
            )
            .with_next_label("Finish"),
        ])
        .expect("spam stage table is well-formed")
    }

    // ------------------------------------------------------------------
    // Parameters
    // ------------------------------------------------------------------

    /// Move the threshold slider and recompute the single-point readout.
    ///
    /// Values above 100 clamp to 100 (the slider's upper stop).
    ///
    /// # Errors
    ///
    /// Propagates [`MetricsError`]; unreachable for the shipped inbox.
    pub fn set_threshold(&mut self, threshold: u8) -> Result<(), MetricsError> {
        let threshold = threshold.min(100);
        debug!(threshold, "threshold changed");
        self.threshold = threshold;
        self.classification = classify(&self.records, threshold)?;
        self.report = MetricReport::from_counts(&self.classification.counts);
        Ok(())
    }

    /// The active threshold.
    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// The population under classification.
    pub fn records(&self) -> &[EmailRecord] {
        &self.records
    }

    /// Per-record outcomes and counts at the active threshold.
    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    /// Derived metrics at the active threshold.
    pub fn report(&self) -> &MetricReport {
        &self.report
    }

    /// The full precision-recall curve (thresholds 0..=100).
    pub fn curve(&self) -> &[CurvePoint] {
        &self.curve
    }

    // ------------------------------------------------------------------
    // Navigation (persisting the cursor on every effective transition)
    // ------------------------------------------------------------------

    /// Register a lifecycle observer.
    pub fn add_hook(&mut self, hook: Box<dyn ProgressHook>) {
        self.progress.add_hook(hook);
    }

    /// Read-only view of the progress machine.
    pub fn progress(&self) -> &ModuleProgress {
        &self.progress
    }

    /// Session hint state.
    pub fn hints(&self) -> &HintSet {
        &self.hints
    }

    /// Dismiss a hint chip.
    pub fn dismiss_hint(&mut self, key: &str) -> bool {
        self.hints.dismiss(key)
    }

    /// Leave the entry screen.
    pub fn start(&mut self, store: &mut dyn ProgressStore) -> bool {
        self.persisting(store, ModuleProgress::start)
    }

    /// Advance a stage (or finish).
    pub fn advance(&mut self, store: &mut dyn ProgressStore) -> bool {
        self.persisting(store, ModuleProgress::advance)
    }

    /// Step back a stage.
    pub fn retreat(&mut self, store: &mut dyn ProgressStore) -> bool {
        self.persisting(store, ModuleProgress::retreat)
    }

    /// Jump to a visited stage.
    pub fn jump_to(&mut self, store: &mut dyn ProgressStore, target: usize) -> bool {
        self.persisting(store, |p| p.jump_to(target))
    }

    /// Reset the module, clearing hints and returning the threshold to its
    /// default.
    pub fn restart(&mut self, store: &mut dyn ProgressStore) -> Result<(), MetricsError> {
        self.progress.restart();
        self.hints.reset();
        store.save(Self::KEY, self.progress.cursor());
        self.set_threshold(Self::DEFAULT_THRESHOLD)
    }

    /// Open the quiz (recap screen only).
    pub fn enter_quiz(&mut self) -> bool {
        self.progress.enter_quiz()
    }

    /// Close the quiz, back to the recap screen.
    pub fn exit_quiz(&mut self) -> bool {
        self.progress.exit_quiz()
    }

    fn persisting(
        &mut self,
        store: &mut dyn ProgressStore,
        transition: impl FnOnce(&mut ModuleProgress) -> bool,
    ) -> bool {
        let took_effect = transition(&mut self.progress);
        if took_effect {
            store.save(Self::KEY, self.progress.cursor());
        }
        took_effect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutorlab_core::{MemoryStore, ModuleState};

    #[test]
    fn test_default_threshold_readout() {
        let store = MemoryStore::new();
        let module = SpamModule::new(&store).unwrap();
        assert_eq!(module.threshold(), 50);
        assert_eq!(module.classification().counts.total(), 100);
        assert!((module.report().precision - 0.75).abs() < 1e-12);
        assert!((module.report().recall - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_threshold_change_keeps_curve_consistent() {
        let store = MemoryStore::new();
        let mut module = SpamModule::new(&store).unwrap();

        for threshold in [0u8, 25, 50, 75, 100] {
            module.set_threshold(threshold).unwrap();
            let point = module.curve()[threshold as usize];
            assert_eq!(point.threshold, threshold);
            assert_eq!(point.precision, module.report().precision);
            assert_eq!(point.recall, module.report().recall);
        }
    }

    #[test]
    fn test_threshold_clamps_to_slider_range() {
        let store = MemoryStore::new();
        let mut module = SpamModule::new(&store).unwrap();
        module.set_threshold(255).unwrap();
        assert_eq!(module.threshold(), 100);
    }

    #[test]
    fn test_navigation_and_resume() {
        let mut store = MemoryStore::new();
        {
            let mut module = SpamModule::new(&store).unwrap();
            module.start(&mut store);
            module.advance(&mut store);
            module.advance(&mut store);
        }

        let module = SpamModule::new(&store).unwrap();
        assert_eq!(module.progress().state(), ModuleState::Active(2));
        assert_eq!(module.progress().current_stage().unwrap().key, "threshold");
    }

    #[test]
    fn test_restart_returns_threshold_to_default() {
        let mut store = MemoryStore::new();
        let mut module = SpamModule::new(&store).unwrap();
        module.start(&mut store);
        module.set_threshold(80).unwrap();

        module.restart(&mut store).unwrap();
        assert_eq!(module.threshold(), SpamModule::DEFAULT_THRESHOLD);
        assert_eq!(module.progress().state(), ModuleState::NotStarted);
    }
}
