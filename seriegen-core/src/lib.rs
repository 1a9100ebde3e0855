//! seriegen-core
//!
//! Core building blocks for synthesizing labeled demo time series.
//!
//! - `types`: validated configuration (labels, value ranges, generator settings).
//! - `table`: generated output (observations, per-label windows, the result table).
//! - `series`: window math and the generator itself.
//!
//! Everything in this crate is synchronous and allocation-bounded: a single
//! call to [`generate`] walks the label table once and returns a fully
//! materialized [`SeriesTable`]. Randomness always comes from a caller-supplied
//! `&mut impl Rng`, so an identically seeded generator reproduces the same
//! table row for row.
#![warn(missing_docs)]

/// Unified error type for the seriegen workspace.
pub mod error;
/// Window math and the series generator.
pub mod series;
/// Generated output: observations, windows, and the result table.
pub mod table;
pub mod types;

pub use error::SeriegenError;
pub use series::generate::generate;
pub use series::window::{day_start_utc, evenly_spaced, jittered_start, window_end};
pub use table::{Observation, SeriesTable, SeriesWindow};
pub use types::{GeneratorConfig, Label, LabelRanges, ValueRange};
