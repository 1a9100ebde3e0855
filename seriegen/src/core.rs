use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use seriegen_core::{GeneratorConfig, LabelRanges, SeriegenError, SeriesTable};

use crate::sink::PresentationSink;

/// Configured entry point that turns label tables into series tables.
pub struct Seriegen {
    pub(crate) cfg: GeneratorConfig,
    pub(crate) seed: Option<u64>,
}

/// Builder for constructing a [`Seriegen`] with custom settings.
pub struct SeriegenBuilder {
    cfg: GeneratorConfig,
    seed: Option<u64>,
}

impl Default for SeriegenBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SeriegenBuilder {
    /// Create a builder with the stock settings.
    ///
    /// Behavior and trade-offs:
    /// - Starts from [`GeneratorConfig::default`]: anchor 2024-01-01, 100
    ///   points per label, 5 days of jitter.
    /// - No seed is set, so each `generate` call draws fresh OS entropy. Use
    ///   [`seed`](Self::seed) when runs must be reproducible.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cfg: GeneratorConfig::default(),
            seed: None,
        }
    }

    /// Set the anchor date shared by every label.
    ///
    /// Behavior and trade-offs:
    /// - The anchor is the nominal window start; each label then shifts it by
    ///   its own jitter draw, so windows cluster around the anchor rather than
    ///   starting on it exactly.
    /// - Anchors near the edges of the representable calendar range are
    ///   rejected by [`build`](Self::build) when the full jitter window would
    ///   not fit.
    #[must_use]
    pub const fn anchor(mut self, anchor: NaiveDate) -> Self {
        self.cfg.anchor = anchor;
        self
    }

    /// Set how many observations each label receives.
    ///
    /// Behavior and trade-offs:
    /// - Also fixes each window's span: `points - 1` days from the jittered
    ///   start, one evenly spaced timestamp per point.
    /// - Counts below 2 are rejected by [`build`](Self::build); a window
    ///   needs both of its endpoints.
    #[must_use]
    pub const fn points_per_label(mut self, points: usize) -> Self {
        self.cfg.points_per_label = points;
        self
    }

    /// Set the jitter half-width in days.
    ///
    /// Behavior and trade-offs:
    /// - Each label's window starts a uniformly drawn whole number of days
    ///   away from the anchor, at most `days` in either direction (inclusive).
    /// - Zero disables jitter without changing how much randomness a run
    ///   consumes, so seeded output stays comparable across jitter settings.
    #[must_use]
    pub const fn jitter_days(mut self, days: u32) -> Self {
        self.cfg.jitter_days = days;
        self
    }

    /// Fix the RNG seed.
    ///
    /// Behavior and trade-offs:
    /// - Every `generate` call reseeds from this value, so repeated calls on
    ///   one instance return identical tables; use
    ///   [`generate_with`](Seriegen::generate_with) to draw from a continuing
    ///   stream instead.
    /// - Without a seed, each call draws fresh OS entropy.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the configured [`Seriegen`].
    ///
    /// # Errors
    /// Returns `TooFewPoints` when fewer than 2 points per label were
    /// requested, or `WindowOutOfRange` when the anchor, jitter, and point
    /// count cannot form a representable calendar window.
    pub fn build(self) -> Result<Seriegen, SeriegenError> {
        self.cfg.validate()?;
        Ok(Seriegen {
            cfg: self.cfg,
            seed: self.seed,
        })
    }
}

impl Seriegen {
    /// Start building a new `Seriegen` instance.
    ///
    /// Typical usage chains the window settings and an optional seed:
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use seriegen::Seriegen;
    ///
    /// # fn main() -> Result<(), seriegen::SeriegenError> {
    /// let generator = Seriegen::builder()
    ///     .anchor(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    ///     .points_per_label(100)
    ///     .jitter_days(5)
    ///     .seed(42)
    ///     .build()?;
    /// # let _ = generator;
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn builder() -> SeriegenBuilder {
        SeriegenBuilder::new()
    }

    /// The validated configuration this instance generates with.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.cfg
    }

    /// Generate one table from `ranges`.
    ///
    /// Each call seeds a fresh RNG: from the configured seed when one was
    /// set, otherwise from OS entropy. With a fixed seed, repeated calls on
    /// the same instance return identical tables.
    ///
    /// # Errors
    /// Returns `EmptyLabelTable` when `ranges` has no entries. The window
    /// configuration itself was validated at build time.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "seriegen::generate",
            skip(self, ranges),
            fields(labels = ranges.len(), seeded = self.seed.is_some()),
        )
    )]
    pub fn generate(&self, ranges: &LabelRanges) -> Result<SeriesTable, SeriegenError> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.generate_with(ranges, &mut rng)
    }

    /// Generate one table from `ranges` using a caller-supplied RNG.
    ///
    /// This is the injection point for tests and for callers that manage
    /// their own RNG stream across multiple runs.
    ///
    /// # Errors
    /// Same conditions as [`generate`](Self::generate).
    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        ranges: &LabelRanges,
        rng: &mut R,
    ) -> Result<SeriesTable, SeriegenError> {
        seriegen_core::generate(ranges, &self.cfg, rng)
    }

    /// Hand a finished table to `sink` under the display name `name`.
    ///
    /// # Errors
    /// Propagates the sink's `Presentation` error when rendering fails.
    pub fn present(
        &self,
        name: &str,
        table: &SeriesTable,
        sink: &mut dyn PresentationSink,
    ) -> Result<(), SeriegenError> {
        sink.present(name, table)
    }
}
