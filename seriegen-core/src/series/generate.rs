use rand::Rng;

use crate::error::SeriegenError;
use crate::table::{Observation, SeriesTable, SeriesWindow};
use crate::types::{GeneratorConfig, LabelRanges};

use super::window;

/// Generate the labeled table described by `ranges` and `config`.
///
/// Labels are processed in table insertion order. For each label the
/// generator draws one whole-day offset from the closed interval
/// `[-jitter_days, +jitter_days]`, lays out `points_per_label` evenly spaced
/// timestamps from the jittered start through `start + points_per_label - 1`
/// days, then draws one value per timestamp uniformly from the label's
/// `[min, max)`. Rows are appended in timestamp order, so the finished table
/// holds exactly `points_per_label * ranges.len()` rows.
///
/// Draw order is part of the contract: per label, one jitter draw followed by
/// `points_per_label` value draws. Re-running with an identically seeded RNG
/// reproduces the same table row for row.
///
/// # Errors
/// - `EmptyLabelTable` when `ranges` has no entries.
/// - `TooFewPoints` when `config.points_per_label < 2`.
/// - `WindowOutOfRange` when the anchor, jitter, and point count cannot form
///   a representable calendar window.
///
/// All validation happens before the first draw: a failed call consumes no
/// randomness and never yields a partial table.
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use seriegen_core::{GeneratorConfig, LabelRanges, ValueRange, generate};
///
/// let ranges = LabelRanges::new()
///     .with('A', ValueRange::new(0.0, 1.0).unwrap())
///     .with('B', ValueRange::new(0.0, 50_000.0).unwrap());
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let table = generate(&ranges, &GeneratorConfig::default(), &mut rng).unwrap();
/// assert_eq!(table.len(), 200);
/// assert!(table.rows().iter().all(|r| r.value >= 0.0 && r.value < 50_000.0));
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "seriegen::series::generate",
        skip(ranges, config, rng),
        fields(
            labels = ranges.len(),
            points = config.points_per_label,
            jitter_days = config.jitter_days,
        ),
    )
)]
pub fn generate<R: Rng + ?Sized>(
    ranges: &LabelRanges,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<SeriesTable, SeriegenError> {
    if ranges.is_empty() {
        return Err(SeriegenError::EmptyLabelTable);
    }
    config.validate()?;

    let out_of_range = || SeriegenError::WindowOutOfRange {
        anchor: config.anchor,
        jitter_days: config.jitter_days,
        points: config.points_per_label,
    };

    let mut rows = Vec::with_capacity(config.points_per_label.saturating_mul(ranges.len()));
    let mut windows = Vec::with_capacity(ranges.len());

    for (label, range) in ranges.iter() {
        let start = window::jittered_start(config.anchor, config.jitter_days, rng)
            .ok_or_else(out_of_range)?;
        let end = window::window_end(start, config.points_per_label).ok_or_else(out_of_range)?;

        let start_ts = window::day_start_utc(start);
        let end_ts = window::day_start_utc(end);
        let timestamps = window::evenly_spaced(start_ts, end_ts, config.points_per_label)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(label = %label, start = %start, end = %end, "placed label window");

        for ts in timestamps {
            // ValueRange guarantees min < max with finite bounds and width,
            // which random_range requires.
            let value = rng.random_range(range.min()..range.max());
            rows.push(Observation { ts, value, label });
        }

        windows.push(SeriesWindow {
            label,
            start: start_ts,
            end: end_ts,
            points: config.points_per_label,
        });
    }

    Ok(SeriesTable::from_parts(rows, windows))
}
