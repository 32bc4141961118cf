//! Spam filter: the Precision & Recall module end to end.
//!
//! Run with: cargo run -p tutorlab-modules --example spam_filter
//!
//! Starts the module, walks to the threshold stage, drags the slider, and
//! prints the readout the tradeoffs stage renders.

use tutorlab_core::MemoryStore;
use tutorlab_modules::SpamModule;

fn main() {
    println!("=== Precision & Recall Module ===\n");

    let mut store = MemoryStore::new();
    let mut module = SpamModule::new(&store).expect("shipped inbox always classifies");

    module.start(&mut store);
    module.advance(&mut store); // inbox
    module.advance(&mut store); // threshold
    let stage = module.progress().current_stage().expect("threshold stage is active");
    println!("At stage {:?}: {}\n", stage.key, stage.title);

    println!("  Threshold | Precision | Recall |    F1 | Accuracy");
    println!("  ----------|-----------|--------|-------|---------");
    for threshold in [10u8, 30, 50, 70, 90] {
        module.set_threshold(threshold).expect("inbox is never empty");
        let report = module.report();
        println!(
            "  {:>9} | {:>9.3} | {:>6.3} | {:>5.3} | {:>8.3}",
            threshold, report.precision, report.recall, report.f1, report.accuracy
        );
    }

    // The curve stage shows the same numbers as a path.
    module.set_threshold(50).expect("inbox is never empty");
    let counts = module.classification().counts;
    println!(
        "\nAt the default threshold: TP={} FP={} FN={} TN={}",
        counts.true_positives, counts.false_positives, counts.false_negatives, counts.true_negatives
    );
    println!(
        "Curve has {} points; the point at 50 matches the readout: precision {:.3}, recall {:.3}",
        module.curve().len(),
        module.curve()[50].precision,
        module.curve()[50].recall
    );
}
