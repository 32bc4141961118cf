//! The Computer Vision walkthrough module.
//!
//! Wires the vision engines into a stage plan: the learner walks from raw
//! pixels to a pooled feature map, steering a kernel picker and a pooling
//! toggle along the way.
//!
//! ```text
//!   cat ──grayscale──▶ intensity ──convolve(kernel)──▶ features ──pool(mode)──▶ pooled
//! ```
//!
//! The pipeline is recomputed once per parameter change and cached on the
//! module; rendering reads the cached maps for any number of frames. Stage
//! navigation persists its cursor through a [`ProgressStore`] on every
//! effective transition.

use tracing::debug;

use tutorlab_core::{
    HintSet, ModuleProgress, ProgressHook, ProgressStore, Stage, StagePlan, ToolChip,
};
use tutorlab_vision::{
    cat_image, clamp_weight, convolve, pool, FeatureMap, IntensityGrid, Kernel, PixelGrid,
    PoolMode, VisionError,
};

/// The five filters the kernel picker offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinKernel {
    EdgeDetect,
    Blur,
    Sharpen,
    HorizontalEdge,
    VerticalEdge,
}

impl BuiltinKernel {
    /// The picker's display label.
    pub fn label(&self) -> &'static str {
        match self {
            BuiltinKernel::EdgeDetect => "Edge detect",
            BuiltinKernel::Blur => "Blur",
            BuiltinKernel::Sharpen => "Sharpen",
            BuiltinKernel::HorizontalEdge => "Horizontal edges",
            BuiltinKernel::VerticalEdge => "Vertical edges",
        }
    }

    /// The filter weights.
    pub fn kernel(&self) -> Kernel {
        match self {
            BuiltinKernel::EdgeDetect => Kernel::edge_detect(),
            BuiltinKernel::Blur => Kernel::blur(),
            BuiltinKernel::Sharpen => Kernel::sharpen(),
            BuiltinKernel::HorizontalEdge => Kernel::horizontal_edge(),
            BuiltinKernel::VerticalEdge => Kernel::vertical_edge(),
        }
    }
}

/// The learner's kernel selection: a named filter or a hand-edited 3x3.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KernelChoice {
    Builtin(BuiltinKernel),
    /// Custom cells as edited in the UI; clamped to the [-9, 9] editor
    /// range when the kernel is built.
    Custom([[f64; 3]; 3]),
}

impl KernelChoice {
    /// Build the kernel this choice denotes.
    pub fn kernel(&self) -> Kernel {
        match self {
            KernelChoice::Builtin(builtin) => builtin.kernel(),
            KernelChoice::Custom(cells) => {
                let clamped = cells.map(|row| row.map(clamp_weight));
                Kernel::custom3(clamped)
            }
        }
    }
}

/// The precomputed display pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct VisionPipeline {
    /// The grayscaled input.
    pub grayscale: IntensityGrid,
    /// Convolution response for the active kernel.
    pub features: FeatureMap,
    /// Pooled response for the active mode.
    pub pooled: FeatureMap,
}

/// The Computer Vision tutorial module.
pub struct VisionModule {
    progress: ModuleProgress,
    hints: HintSet,
    image: PixelGrid,
    kernel_choice: KernelChoice,
    pool_mode: PoolMode,
    pipeline: VisionPipeline,
}

impl VisionModule {
    /// Module key used for persistence and lifecycle notifications.
    pub const KEY: &'static str = "computer-vision";

    /// Build the module, resuming any persisted progress.
    ///
    /// # Errors
    ///
    /// Propagates [`VisionError`] from the initial pipeline computation.
    /// Unreachable with the shipped 16x16 asset, but the contract stays
    /// honest for hosts that swap the image.
    pub fn new(store: &dyn ProgressStore) -> Result<Self, VisionError> {
        let cursor = store.load(Self::KEY).unwrap_or(-1);
        let progress = ModuleProgress::resume(Self::KEY, Self::stage_plan(), cursor);

        let image = cat_image();
        let kernel_choice = KernelChoice::Builtin(BuiltinKernel::EdgeDetect);
        let pool_mode = PoolMode::Max;
        let pipeline = Self::compute(&image, kernel_choice, pool_mode)?;

        Ok(Self {
            progress,
            hints: HintSet::new(),
            image,
            kernel_choice,
            pool_mode,
            pipeline,
        })
    }

    /// The module's fixed content table.
    fn stage_plan() -> StagePlan {
        StagePlan::new(vec![
            Stage::reading(
                "intro",
                "Seeing like a machine",
                "A computer sees this cat as a grid of numbers. This module \
                 follows those numbers through a tiny convolutional pipeline.",
            )
            .with_next_label("Show me the pixels"),
            Stage::interactive(
                "pixels",
                "Pixels",
                "Every cell holds three values: red, green, blue.",
                vec![ToolChip::new("pixel-grid", "Pixel grid")],
            ),
            Stage::interactive(
                "grayscale",
                "Grayscale & channels",
                "Collapse colour to intensity, or peel off one channel.",
                vec![
                    ToolChip::new("grayscale-toggle", "Grayscale"),
                    ToolChip::new("channel-picker", "R / G / B"),
                ],
            ),
            Stage::interactive(
                "convolution",
                "Convolution",
                "Slide a 3x3 kernel across the image and watch features appear.",
                vec![
                    ToolChip::new("kernel-picker", "Kernel"),
                    ToolChip::new("kernel-editor", "Custom kernel"),
                ],
            ),
            Stage::interactive(
                "pooling",
                "Pooling",
                "Shrink the feature map, keeping what matters.",
                vec![ToolChip::new("pool-mode", "Max / Average")],
            ),
            Stage::reading(
                "recap",
                "The pipeline, end to end",
                "Pixels to intensity to features to a pooled summary: that is \
                 the heart of a convolutional network.",
            )
            .with_next_label("Finish"),
        ])
        .expect("vision stage table is well-formed")
    }

    fn compute(
        image: &PixelGrid,
        choice: KernelChoice,
        mode: PoolMode,
    ) -> Result<VisionPipeline, VisionError> {
        let grayscale = image.to_grayscale();
        let features = convolve(&grayscale.to_feature_map(), &choice.kernel())?;
        let pooled = pool(&features, mode)?;
        Ok(VisionPipeline {
            grayscale,
            features,
            pooled,
        })
    }

    fn recompute(&mut self) -> Result<(), VisionError> {
        self.pipeline = Self::compute(&self.image, self.kernel_choice, self.pool_mode)?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Parameters
    // ------------------------------------------------------------------

    /// Switch kernels and recompute the pipeline.
    pub fn set_kernel(&mut self, choice: KernelChoice) -> Result<(), VisionError> {
        debug!(?choice, "kernel changed");
        self.kernel_choice = choice;
        self.recompute()
    }

    /// Switch pooling modes and recompute the pipeline.
    pub fn set_pool_mode(&mut self, mode: PoolMode) -> Result<(), VisionError> {
        debug!(?mode, "pool mode changed");
        self.pool_mode = mode;
        self.recompute()
    }

    /// The active kernel selection.
    pub fn kernel_choice(&self) -> KernelChoice {
        self.kernel_choice
    }

    /// The active pooling mode.
    pub fn pool_mode(&self) -> PoolMode {
        self.pool_mode
    }

    /// The teaching image.
    pub fn image(&self) -> &PixelGrid {
        &self.image
    }

    /// The precomputed display pipeline.
    pub fn pipeline(&self) -> &VisionPipeline {
        &self.pipeline
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

    /// Reset the module, clearing hints with it.
    pub fn restart(&mut self, store: &mut dyn ProgressStore) {
        self.progress.restart();
        self.hints.reset();
        store.save(Self::KEY, self.progress.cursor());
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
    fn test_default_pipeline_dimensions() {
        let store = MemoryStore::new();
        let module = VisionModule::new(&store).unwrap();
        let pipeline = module.pipeline();
        assert_eq!(pipeline.grayscale.height(), 16);
        assert_eq!(pipeline.features.height(), 14);
        assert_eq!(pipeline.pooled.height(), 7);
    }

    #[test]
    fn test_parameter_change_recomputes_once() {
        let store = MemoryStore::new();
        let mut module = VisionModule::new(&store).unwrap();
        let before = module.pipeline().clone();

        module.set_kernel(KernelChoice::Builtin(BuiltinKernel::Blur)).unwrap();
        assert_ne!(module.pipeline().features, before.features);
        // Grayscale does not depend on the kernel.
        assert_eq!(module.pipeline().grayscale, before.grayscale);
    }

    #[test]
    fn test_custom_kernel_cells_are_clamped() {
        let choice = KernelChoice::Custom([[42.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, -42.0]]);
        let kernel = choice.kernel();
        assert_eq!(kernel.get(0, 0), 9.0);
        assert_eq!(kernel.get(2, 2), -9.0);
        assert_eq!(kernel.get(1, 1), 1.0);
    }

    #[test]
    fn test_navigation_persists_cursor() {
        let mut store = MemoryStore::new();
        let mut module = VisionModule::new(&store).unwrap();

        module.start(&mut store);
        module.advance(&mut store);
        assert_eq!(store.load(VisionModule::KEY), Some(1));

        // A failed transition writes nothing.
        module.jump_to(&mut store, 5);
        assert_eq!(store.load(VisionModule::KEY), Some(1));
    }

    #[test]
    fn test_resume_from_store() {
        let mut store = MemoryStore::new();
        {
            let mut module = VisionModule::new(&store).unwrap();
            module.start(&mut store);
            module.advance(&mut store);
            module.advance(&mut store);
        }

        let module = VisionModule::new(&store).unwrap();
        assert_eq!(module.progress().state(), ModuleState::Active(2));
    }

    #[test]
    fn test_restart_clears_hints() {
        let mut store = MemoryStore::new();
        let mut module = VisionModule::new(&store).unwrap();
        module.start(&mut store);
        module.dismiss_hint("kernel-picker");
        assert!(module.hints().is_dismissed("kernel-picker"));

        module.restart(&mut store);
        assert!(module.hints().is_empty());
        assert_eq!(store.load(VisionModule::KEY), Some(-1));
    }
}
