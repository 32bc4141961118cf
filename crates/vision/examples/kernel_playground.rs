//! Kernel playground: run every built-in filter over the teaching image.
//!
//! Run with: cargo run -p tutorlab-vision --example kernel_playground
//!
//! This example walks the same pipeline the convolution stage of the
//! tutorial renders: grayscale the cat, sweep a kernel across it, then pool
//! the response map. Swap the kernel and the feature map changes character;
//! the pipeline itself never does.

use tutorlab_vision::{cat_image, convolve, pool, Kernel, PoolMode};

fn print_map(label: &str, rows: &[Vec<i64>]) {
    println!("{label}:");
    for row in rows {
        let cells: Vec<String> = row.iter().map(|v| format!("{v:>5}")).collect();
        println!("  {}", cells.join(""));
    }
    println!();
}

fn main() {
    println!("=== Kernel Playground ===\n");

    let cat = cat_image();
    let gray = cat.to_grayscale().to_feature_map();
    println!(
        "Input: the {}x{} cat, grayscaled.\n",
        cat.height(),
        cat.width()
    );

    let filters = [
        ("edge detect", Kernel::edge_detect()),
        ("blur", Kernel::blur()),
        ("sharpen", Kernel::sharpen()),
        ("horizontal edge", Kernel::horizontal_edge()),
        ("vertical edge", Kernel::vertical_edge()),
    ];

    for (name, kernel) in &filters {
        let features = convolve(&gray, kernel).expect("kernel fits the 16x16 cat");
        println!(
            "{name}: {}x{} feature map, values [{}, {}]",
            features.height(),
            features.width(),
            features
                .values()
                .iter()
                .flatten()
                .cloned()
                .fold(f64::INFINITY, f64::min),
            features
                .values()
                .iter()
                .flatten()
                .cloned()
                .fold(f64::NEG_INFINITY, f64::max),
        );
    }
    println!();

    // Show the full pipeline for one filter.
    let features = convolve(&gray, &Kernel::vertical_edge()).expect("kernel fits");
    print_map("Vertical-edge response (rounded for display)", &features.rounded());

    let pooled = pool(&features, PoolMode::Max).expect("14x14 pools cleanly");
    print_map("After 2x2 max pooling", &pooled.rounded());

    println!("Same map, average pooling:");
    let averaged = pool(&features, PoolMode::Average).expect("14x14 pools cleanly");
    print_map("After 2x2 average pooling", &averaged.rounded());
}
