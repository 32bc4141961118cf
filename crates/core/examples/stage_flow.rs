//! Stage flow: drive the progress machine from entry screen to quiz.
//!
//! Run with: cargo run -p tutorlab-core --example stage_flow
//!
//! This example narrates the lifecycle every tutorial module shares:
//! start, advance, wander back, jump to the frontier, finish, quiz.

use tutorlab_core::{ModuleProgress, ModuleState, ProgressHook, Stage, StagePlan, ToolChip};

struct Narrator;

impl ProgressHook for Narrator {
    fn on_module_started(&self, module: &str) {
        println!("  [hook] module {module:?} started");
    }
    fn on_module_completed(&self, module: &str) {
        println!("  [hook] module {module:?} completed");
    }
    fn on_stage_entered(&self, _module: &str, stage: usize) {
        println!("  [hook] entered stage {stage}");
    }
}

fn describe(run: &ModuleProgress) -> String {
    match run.state() {
        ModuleState::NotStarted => "entry screen".to_string(),
        ModuleState::Active(i) => {
            let stage = run.current_stage().expect("active stage exists");
            format!("stage {i} ({})", stage.title)
        }
        ModuleState::Finished if run.is_quiz_open() => "quiz".to_string(),
        ModuleState::Finished => "recap screen".to_string(),
    }
}

fn main() {
    println!("=== Stage Flow Demo ===\n");

    let plan = StagePlan::new(vec![
        Stage::reading("intro", "Welcome", "What convolution is about."),
        Stage::interactive(
            "kernels",
            "Kernels",
            "Pick a kernel and watch the sweep.",
            vec![ToolChip::new("kernel-picker", "Kernel")],
        ),
        Stage::interactive(
            "pooling",
            "Pooling",
            "Shrink the map.",
            vec![ToolChip::new("pool-mode", "Max / Average")],
        ),
        Stage::reading("recap", "Recap", "The pipeline, end to end.").with_next_label("Finish"),
    ])
    .expect("demo plan is well-formed");

    let mut run = ModuleProgress::new("vision", plan);
    run.add_hook(Box::new(Narrator));
    println!("Load: {}", describe(&run));

    println!("\n-- start --");
    run.start();
    println!("Now at: {}", describe(&run));

    println!("\n-- advance to the end --");
    while run.state() != ModuleState::Finished {
        run.advance();
        println!("Now at: {} (cursor {})", describe(&run), run.cursor());
    }

    println!("\n-- wander back, then jump to the frontier --");
    run.jump_to(0);
    println!("Now at: {}", describe(&run));
    println!(
        "Watermark still {:?}; can_jump_to(3) = {}",
        run.watermark(),
        run.can_jump_to(3)
    );
    run.jump_to(3);
    println!("Now at: {}", describe(&run));

    println!("\n-- finish again and take the quiz --");
    run.advance();
    println!("Now at: {}", describe(&run));
    run.enter_quiz();
    println!("Now at: {}", describe(&run));
    run.exit_quiz();
    println!("Now at: {}", describe(&run));

    println!("\n-- ungated navigation is forgiving --");
    let took_effect = run.jump_to(7);
    println!("jump_to(7) took effect: {took_effect} (still {})", describe(&run));
}
