//! Presentation sinks: where finished tables get handed off.
//!
//! Generation and presentation are kept apart on purpose. The generator
//! produces a [`SeriesTable`] and knows nothing about rendering; a
//! [`PresentationSink`] receives the finished table together with a display
//! name and decides what to do with it. [`TextPreview`] is the built-in sink
//! for quick terminal inspection; plotting or export layers implement the
//! same trait.

use std::io::{self, Write};

use seriegen_core::{SeriegenError, SeriesTable};

/// Receives finished tables for display or export.
pub trait PresentationSink {
    /// Short identifier used in `Presentation` errors, e.g. `"text-preview"`.
    fn name(&self) -> &'static str;

    /// Present `table` under the display name `name`.
    ///
    /// # Errors
    /// Returns a `Presentation` error when the sink fails to render or
    /// deliver the table.
    fn present(&mut self, name: &str, table: &SeriesTable) -> Result<(), SeriegenError>;
}

/// Sink that writes a short textual preview of the table.
///
/// The preview shows the display name, the column header, the first
/// `head_rows` rows, and a trailer with the full row count. Generic over the
/// writer so tests can capture output in a `Vec<u8>`.
pub struct TextPreview<W> {
    writer: W,
    head_rows: usize,
}

impl TextPreview<io::Stdout> {
    /// Preview on standard output, showing
    /// [`DEFAULT_HEAD_ROWS`](Self::DEFAULT_HEAD_ROWS) rows.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout(), Self::DEFAULT_HEAD_ROWS)
    }
}

impl<W: Write> TextPreview<W> {
    /// Rows shown by [`stdout`](Self::stdout).
    pub const DEFAULT_HEAD_ROWS: usize = 5;

    /// Preview into `writer`, showing at most `head_rows` rows.
    #[must_use]
    pub const fn new(writer: W, head_rows: usize) -> Self {
        Self { writer, head_rows }
    }

    /// Consume the sink and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn render(&mut self, name: &str, table: &SeriesTable) -> io::Result<()> {
        writeln!(self.writer, "{name}")?;
        writeln!(
            self.writer,
            "{:<22} {:>14}  {}",
            SeriesTable::COL_TIMESTAMP,
            SeriesTable::COL_VALUE,
            SeriesTable::COL_LABEL,
        )?;
        for row in table.head(self.head_rows) {
            let ts = row.ts.format("%Y-%m-%d %H:%M:%S").to_string();
            writeln!(self.writer, "{ts:<22} {:>14.6}  {}", row.value, row.label)?;
        }
        writeln!(self.writer, "[{} rows x 3 columns]", table.len())
    }
}

impl<W: Write> PresentationSink for TextPreview<W> {
    fn name(&self) -> &'static str {
        "text-preview"
    }

    fn present(&mut self, name: &str, table: &SeriesTable) -> Result<(), SeriegenError> {
        let sink = self.name();
        self.render(name, table)
            .map_err(|e| SeriegenError::presentation(sink, e.to_string()))
    }
}
