//! Ready-made label tables for demos, examples, and smoke tests.

use seriegen_core::{LabelRanges, ValueRange};

/// Display name used when presenting the demo table.
pub const DEMO_TABLE_NAME: &str = "Generated Series Data";

/// The five-label demo table.
///
/// | Label | Range |
/// |-------|------------------|
/// | `A` | `[0, 1)` |
/// | `B` | `[0, 50 000)` |
/// | `C` | `[10 000, 15 000)` |
/// | `D` | `[200, 800)` |
/// | `E` | `[500, 1 000)` |
///
/// With the default [`GeneratorConfig`](seriegen_core::GeneratorConfig) this
/// yields a 500-row table.
#[must_use]
pub fn demo_label_ranges() -> LabelRanges {
    LabelRanges::new()
        .with('A', range(0.0, 1.0))
        .with('B', range(0.0, 50_000.0))
        .with('C', range(10_000.0, 15_000.0))
        .with('D', range(200.0, 800.0))
        .with('E', range(500.0, 1_000.0))
}

fn range(min: f64, max: f64) -> ValueRange {
    ValueRange::new(min, max).unwrap()
}
