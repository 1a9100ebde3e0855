use chrono::NaiveDate;
use thiserror::Error;

/// Unified error type for the seriegen workspace.
///
/// Every variant except `Presentation` is a configuration problem detected
/// before the first random draw, so a failed call never leaves a partial
/// table behind. `Presentation` wraps sink-tagged failures raised while a
/// finished table is being rendered.
#[derive(Debug, Error)]
pub enum SeriegenError {
    /// The label table has no entries, so there is nothing to generate.
    #[error("empty label table: at least one label range is required")]
    EmptyLabelTable,

    /// A value range failed validation.
    #[error("invalid value range: min={min}, max={max} (expected finite bounds and width with min < max)")]
    InvalidRange {
        /// Lower bound that was supplied.
        min: f64,
        /// Upper bound that was supplied.
        max: f64,
    },

    /// The per-label point count is too small to span a window.
    #[error("too few points per label: {points} (minimum is 2)")]
    TooFewPoints {
        /// Point count that was supplied.
        points: usize,
    },

    /// The anchor, jitter, and point count cannot form a representable
    /// calendar window.
    #[error("window out of range: anchor {anchor}, jitter {jitter_days} days, {points} points")]
    WindowOutOfRange {
        /// Configured anchor date.
        anchor: NaiveDate,
        /// Configured jitter half-width in days.
        jitter_days: u32,
        /// Configured points per label.
        points: usize,
    },

    /// A presentation sink failed while consuming a finished table.
    #[error("{sink} failed: {msg}")]
    Presentation {
        /// Sink name that failed.
        sink: String,
        /// Human-readable error message.
        msg: String,
    },
}

impl SeriegenError {
    /// Helper: build an `InvalidRange` error from the offending bounds.
    #[must_use]
    pub const fn invalid_range(min: f64, max: f64) -> Self {
        Self::InvalidRange { min, max }
    }

    /// Helper: build a `TooFewPoints` error for the supplied count.
    #[must_use]
    pub const fn too_few_points(points: usize) -> Self {
        Self::TooFewPoints { points }
    }

    /// Helper: build a `Presentation` error with the sink name and message.
    pub fn presentation(sink: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Presentation {
            sink: sink.into(),
            msg: msg.into(),
        }
    }
}
