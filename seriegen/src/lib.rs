//! Seriegen synthesizes labeled demo time series.
//!
//! Overview
//! - Every label in a [`LabelRanges`] table gets its own date window: a shared
//!   anchor date shifted by a per-label random day offset (jitter).
//! - A window holds a fixed number of evenly spaced timestamps; each timestamp
//!   is paired with a value drawn uniformly from the label's `[min, max)`.
//! - All labels' rows are concatenated, in table order, into one
//!   [`SeriesTable`] that renders through a [`PresentationSink`].
//!
//! Key behaviors
//! - Configuration is validated up front: bad ranges are rejected when a
//!   [`ValueRange`] is constructed, and point counts or calendar-edge anchors
//!   that cannot form a window fail [`SeriegenBuilder::build`]. Generation
//!   never produces a partial table.
//! - Randomness is explicit. A fixed seed makes every run reproducible; with
//!   no seed each `generate` call draws fresh OS entropy.
//! - Generation performs no I/O. Rendering happens only when a finished table
//!   is handed to a sink via [`Seriegen::present`].
//!
//! Examples
//! Generating and previewing the bundled five-label demo table:
//! ```
//! use seriegen::{Seriegen, TextPreview, presets};
//!
//! # fn main() -> Result<(), seriegen::SeriegenError> {
//! let generator = Seriegen::builder().seed(42).build()?;
//! let table = generator.generate(&presets::demo_label_ranges())?;
//! assert_eq!(table.len(), 500);
//!
//! let mut sink = TextPreview::new(Vec::new(), 5);
//! generator.present(presets::DEMO_TABLE_NAME, &table, &mut sink)?;
//! # Ok(())
//! # }
//! ```
//!
//! Custom labels and window settings:
//! ```
//! use chrono::NaiveDate;
//! use seriegen::{LabelRanges, Seriegen, ValueRange};
//!
//! # fn main() -> Result<(), seriegen::SeriegenError> {
//! let ranges = LabelRanges::new()
//!     .with('X', ValueRange::new(-10.0, 10.0)?)
//!     .with('Y', ValueRange::new(0.0, 100.0)?);
//!
//! let generator = Seriegen::builder()
//!     .anchor(NaiveDate::from_ymd_opt(2020, 6, 1).unwrap())
//!     .points_per_label(30)
//!     .jitter_days(2)
//!     .seed(7)
//!     .build()?;
//!
//! let table = generator.generate(&ranges)?;
//! assert_eq!(table.len(), 60);
//! # Ok(())
//! # }
//! ```
//!
//! See `seriegen/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
/// Bundled demo configuration: the classic five-label table.
pub mod presets;
/// Presentation sinks that consume finished tables.
pub mod sink;

pub use crate::core::{Seriegen, SeriegenBuilder};
pub use sink::{PresentationSink, TextPreview};

// Re-export core types for convenience
pub use seriegen_core::{
    GeneratorConfig, Label, LabelRanges, Observation, SeriegenError, SeriesTable, SeriesWindow,
    ValueRange,
};
