//! CNN pipeline: the Computer Vision module end to end.
//!
//! Run with: cargo run -p tutorlab-modules --example cnn_pipeline
//!
//! Walks the module the way a learner would: start it, click through the
//! stages, flip the kernel and the pooling mode, and finish.

use tutorlab_core::{MemoryStore, ModuleState, ProgressStore};
use tutorlab_modules::{BuiltinKernel, KernelChoice, VisionModule};
use tutorlab_vision::PoolMode;

fn main() {
    println!("=== Computer Vision Module ===\n");

    let mut store = MemoryStore::new();
    let mut module = VisionModule::new(&store).expect("shipped asset always computes");

    module.start(&mut store);
    while let Some(stage) = module.progress().current_stage() {
        let tools: Vec<&str> = stage.tools().iter().map(|t| t.label.as_str()).collect();
        println!(
            "Stage {:?}: {} (tools: {})",
            stage.key,
            stage.title,
            if tools.is_empty() {
                "none".to_string()
            } else {
                tools.join(", ")
            }
        );
        module.advance(&mut store);
    }
    assert_eq!(module.progress().state(), ModuleState::Finished);
    println!("\nModule finished; cursor persisted as {:?}\n", store.load(VisionModule::KEY));

    // Play with the parameters the convolution stage exposes.
    for builtin in [
        BuiltinKernel::EdgeDetect,
        BuiltinKernel::Blur,
        BuiltinKernel::Sharpen,
        BuiltinKernel::HorizontalEdge,
        BuiltinKernel::VerticalEdge,
    ] {
        module
            .set_kernel(KernelChoice::Builtin(builtin))
            .expect("3x3 kernels always fit the 16x16 cat");
        let features = &module.pipeline().features;
        println!(
            "{:<17} -> {}x{} feature map",
            builtin.label(),
            features.height(),
            features.width()
        );
    }

    // And a hand-edited kernel, clamped to the editor's range.
    module
        .set_kernel(KernelChoice::Custom([
            [0.0, -20.0, 0.0],
            [-20.0, 99.0, -20.0],
            [0.0, -20.0, 0.0],
        ]))
        .expect("custom kernels always fit");
    println!(
        "\nCustom kernel centre after clamping: {}",
        module.kernel_choice().kernel().get(1, 1)
    );

    module.set_pool_mode(PoolMode::Average).expect("pipeline recomputes");
    let pooled = &module.pipeline().pooled;
    println!(
        "Average-pooled map: {}x{}",
        pooled.height(),
        pooled.width()
    );
}
