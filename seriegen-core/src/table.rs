//! Generated output: observations, per-label windows, and the result table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Label;

#[cfg(feature = "dataframe")]
use polars::prelude::{Column, DataFrame, DataType, PlSmallStr, PolarsResult, TimeUnit};

/// One generated row: a timestamp, a sampled value, and the owning label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Timestamp of the observation. In the default configuration this is a
    /// midnight UTC instant, one per calendar day.
    pub ts: DateTime<Utc>,
    /// Sampled value, always within `[min, max)` of the label's range.
    pub value: f64,
    /// Label this observation belongs to.
    pub label: Label,
}

/// Summary of the date window generated for one label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesWindow {
    /// Label the window belongs to.
    pub label: Label,
    /// First timestamp of the window (the jittered start, at midnight UTC).
    pub start: DateTime<Utc>,
    /// Last timestamp of the window, `points - 1` days after `start`.
    pub end: DateTime<Utc>,
    /// Number of observations in the window.
    pub points: usize,
}

/// Final concatenated output of one generation run.
///
/// Rows are ordered by label-table insertion order, then by timestamp within
/// each label's block. A table is created fresh per run and handed to a
/// presentation sink; it carries no persistence guarantees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesTable {
    rows: Vec<Observation>,
    windows: Vec<SeriesWindow>,
}

impl SeriesTable {
    /// Column name for timestamps when the table is rendered or exported.
    pub const COL_TIMESTAMP: &'static str = "X";
    /// Column name for sampled values.
    pub const COL_VALUE: &'static str = "Y";
    /// Column name for labels.
    pub const COL_LABEL: &'static str = "Legend";

    pub(crate) fn from_parts(rows: Vec<Observation>, windows: Vec<SeriesWindow>) -> Self {
        Self { rows, windows }
    }

    /// All rows in generation order.
    #[must_use]
    pub fn rows(&self) -> &[Observation] {
        &self.rows
    }

    /// Per-label window summaries, one per generated label, in table order.
    #[must_use]
    pub fn windows(&self) -> &[SeriesWindow] {
        &self.windows
    }

    /// Window summary for `label`, if the label was generated.
    #[must_use]
    pub fn window(&self, label: Label) -> Option<&SeriesWindow> {
        self.windows.iter().find(|w| w.label == label)
    }

    /// Number of rows in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First `n` rows, or the whole table when it is shorter than `n`.
    #[must_use]
    pub fn head(&self, n: usize) -> &[Observation] {
        &self.rows[..self.rows.len().min(n)]
    }
}

#[cfg(feature = "dataframe")]
impl SeriesTable {
    /// Convert the table into a polars [`DataFrame`] with the
    /// [`X`](Self::COL_TIMESTAMP), [`Y`](Self::COL_VALUE), and
    /// [`Legend`](Self::COL_LABEL) columns. Timestamps become a
    /// millisecond-resolution datetime column.
    ///
    /// # Errors
    /// Propagates any `PolarsError` raised while assembling the columns.
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let ts: Vec<i64> = self.rows.iter().map(|r| r.ts.timestamp_millis()).collect();
        let values: Vec<f64> = self.rows.iter().map(|r| r.value).collect();
        let labels: Vec<String> = self.rows.iter().map(|r| r.label.to_string()).collect();

        let x = Column::new(PlSmallStr::from_static(Self::COL_TIMESTAMP), ts)
            .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?;
        let y = Column::new(PlSmallStr::from_static(Self::COL_VALUE), values);
        let legend = Column::new(PlSmallStr::from_static(Self::COL_LABEL), labels);
        DataFrame::new(vec![x, y, legend])
    }
}
