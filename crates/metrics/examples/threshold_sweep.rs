//! Threshold sweep: drag the decision threshold across the teaching inbox.
//!
//! Run with: cargo run -p tutorlab-metrics --example threshold_sweep
//!
//! This example prints what the precision/recall stage of the tutorial
//! animates: how the confusion-matrix counts and the derived metrics move
//! as the threshold slides from "flag everything" to "flag nothing".

use tutorlab_metrics::{classify, full_sweep, inbox, MetricReport};

fn main() {
    println!("=== Threshold Sweep over the Teaching Inbox ===\n");

    let records = inbox();
    let spam = records.iter().filter(|r| r.is_spam).count();
    println!(
        "Population: {} emails, {} spam, {} legitimate\n",
        records.len(),
        spam,
        records.len() - spam
    );

    println!("  Threshold |  TP |  FP |  FN |  TN | Precision | Recall |    F1");
    println!("  ----------|-----|-----|-----|-----|-----------|--------|------");
    for threshold in (0..=100).step_by(10) {
        let run = classify(&records, threshold).expect("inbox is never empty");
        let report = MetricReport::from_counts(&run.counts);
        println!(
            "  {:>9} | {:>3} | {:>3} | {:>3} | {:>3} | {:>9.3} | {:>6.3} | {:>5.3}",
            threshold,
            run.counts.true_positives,
            run.counts.false_positives,
            run.counts.false_negatives,
            run.counts.true_negatives,
            report.precision,
            report.recall,
            report.f1,
        );
    }
    println!();

    // The curve is the same computation, point by point.
    let curve = full_sweep(&records).expect("inbox is never empty");
    let knee = curve
        .iter()
        .max_by(|a, b| {
            let fa = 2.0 * a.precision * a.recall / (a.precision + a.recall).max(f64::EPSILON);
            let fb = 2.0 * b.precision * b.recall / (b.precision + b.recall).max(f64::EPSILON);
            fa.total_cmp(&fb)
        })
        .expect("curve has 101 points");
    println!(
        "Best F1 tradeoff on the curve: threshold {} (precision {:.3}, recall {:.3})",
        knee.threshold, knee.precision, knee.recall
    );
}
