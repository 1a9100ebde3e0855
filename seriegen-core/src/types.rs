//! Configuration types for the generator: labels, value ranges, and settings.

use std::fmt;

use chrono::{NaiveDate, TimeDelta};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::SeriegenError;
use crate::series::window;

/// Single-character category label identifying one sub-series.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Label(pub char);

impl Label {
    /// The label as a `char`.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }
}

impl From<char> for Label {
    fn from(c: char) -> Self {
        Self(c)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Half-open value interval `[min, max)` sampled uniformly for one label.
///
/// Construction validates the bounds once, so every `ValueRange` held by a
/// [`LabelRanges`] table has finite bounds, a finite width `max - min`, and
/// `min < max`. The width constraint matters: uniform sampling scales by the
/// width, so a pair like `(-f64::MAX, f64::MAX)` whose difference overflows
/// to infinity is rejected even though both bounds are finite. The upper
/// bound is exclusive: sampled values satisfy `min <= v < max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawValueRange")]
pub struct ValueRange {
    min: f64,
    max: f64,
}

#[derive(Deserialize)]
struct RawValueRange {
    min: f64,
    max: f64,
}

impl TryFrom<RawValueRange> for ValueRange {
    type Error = SeriegenError;

    fn try_from(raw: RawValueRange) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max)
    }
}

impl ValueRange {
    /// Validate and build a range.
    ///
    /// # Errors
    /// Returns `InvalidRange` if either bound is non-finite, `min >= max`,
    /// or the width `max - min` overflows to infinity.
    ///
    /// ```
    /// use seriegen_core::ValueRange;
    ///
    /// let r = ValueRange::new(0.0, 1.0).unwrap();
    /// assert_eq!(r.min(), 0.0);
    /// assert_eq!(r.max(), 1.0);
    /// assert!(ValueRange::new(5.0, 5.0).is_err());
    /// assert!(ValueRange::new(3.0, -1.0).is_err());
    /// assert!(ValueRange::new(f64::NAN, 1.0).is_err());
    /// assert!(ValueRange::new(-f64::MAX, f64::MAX).is_err());
    /// ```
    pub fn new(min: f64, max: f64) -> Result<Self, SeriegenError> {
        if !min.is_finite() || !max.is_finite() || min >= max || !(max - min).is_finite() {
            return Err(SeriegenError::invalid_range(min, max));
        }
        Ok(Self { min, max })
    }

    /// Inclusive lower bound.
    #[must_use]
    pub const fn min(self) -> f64 {
        self.min
    }

    /// Exclusive upper bound.
    #[must_use]
    pub const fn max(self) -> f64 {
        self.max
    }
}

/// Ordered mapping from [`Label`] to its validated [`ValueRange`].
///
/// Iteration follows insertion order; re-inserting an existing label replaces
/// its range without moving it. The table is pure configuration: generation
/// reads it but never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelRanges {
    ranges: IndexMap<Label, ValueRange>,
}

impl LabelRanges {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ranges: IndexMap::new(),
        }
    }

    /// Insert or replace the range for `label`.
    ///
    /// A replaced label keeps its original position in the iteration order.
    pub fn insert(&mut self, label: impl Into<Label>, range: ValueRange) {
        self.ranges.insert(label.into(), range);
    }

    /// Builder-style [`insert`](Self::insert) for writing tables inline.
    #[must_use]
    pub fn with(mut self, label: impl Into<Label>, range: ValueRange) -> Self {
        self.insert(label, range);
        self
    }

    /// Range for `label`, if present.
    #[must_use]
    pub fn get(&self, label: Label) -> Option<ValueRange> {
        self.ranges.get(&label).copied()
    }

    /// Number of labels in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Whether the table has no labels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Iterate `(label, range)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Label, ValueRange)> + '_ {
        self.ranges.iter().map(|(l, r)| (*l, *r))
    }

    /// Labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = Label> + '_ {
        self.ranges.keys().copied()
    }
}

impl FromIterator<(Label, ValueRange)> for LabelRanges {
    fn from_iter<I: IntoIterator<Item = (Label, ValueRange)>>(iter: I) -> Self {
        Self {
            ranges: iter.into_iter().collect(),
        }
    }
}

/// Settings for one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Nominal start date shared by every label before jitter is applied.
    pub anchor: NaiveDate,
    /// Number of observations generated per label.
    pub points_per_label: usize,
    /// Half-width, in days, of the closed jitter interval around `anchor`.
    pub jitter_days: u32,
}

impl GeneratorConfig {
    /// Anchor date used by [`Default`]: 2024-01-01.
    pub const DEFAULT_ANCHOR: NaiveDate = match NaiveDate::from_ymd_opt(2024, 1, 1) {
        Some(d) => d,
        None => panic!("2024-01-01 is a valid calendar date"),
    };
    /// Points per label used by [`Default`].
    pub const DEFAULT_POINTS_PER_LABEL: usize = 100;
    /// Jitter half-width used by [`Default`].
    pub const DEFAULT_JITTER_DAYS: u32 = 5;

    /// Check that this configuration can produce a table.
    ///
    /// The point count must be at least 2, and the widest window any jitter
    /// draw could produce (`anchor - jitter_days` through
    /// `anchor + jitter_days + points_per_label - 1` days) must stay within
    /// the representable calendar range. Date arithmetic performed after a
    /// successful `validate` cannot fail.
    ///
    /// # Errors
    /// Returns `TooFewPoints` or `WindowOutOfRange` accordingly.
    pub fn validate(&self) -> Result<(), SeriegenError> {
        if self.points_per_label < 2 {
            return Err(SeriegenError::too_few_points(self.points_per_label));
        }
        let out_of_range = || SeriegenError::WindowOutOfRange {
            anchor: self.anchor,
            jitter_days: self.jitter_days,
            points: self.points_per_label,
        };
        let jitter =
            TimeDelta::try_days(i64::from(self.jitter_days)).ok_or_else(out_of_range)?;
        self.anchor
            .checked_sub_signed(jitter)
            .ok_or_else(out_of_range)?;
        let latest_start = self
            .anchor
            .checked_add_signed(jitter)
            .ok_or_else(out_of_range)?;
        window::window_end(latest_start, self.points_per_label).ok_or_else(out_of_range)?;
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            anchor: Self::DEFAULT_ANCHOR,
            points_per_label: Self::DEFAULT_POINTS_PER_LABEL,
            jitter_days: Self::DEFAULT_JITTER_DAYS,
        }
    }
}
