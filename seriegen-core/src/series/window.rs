use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};
use rand::Rng;

use crate::error::SeriegenError;

/// Midnight UTC at the start of `date`.
#[must_use]
pub fn day_start_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Draw a window start for one label: `anchor` shifted by a whole number of
/// days drawn uniformly from the closed interval
/// `[-jitter_days, +jitter_days]`.
///
/// Consumes exactly one draw from `rng`, including when `jitter_days` is 0.
/// Returns `None` when the shifted date would leave the representable
/// calendar range.
pub fn jittered_start<R: Rng + ?Sized>(
    anchor: NaiveDate,
    jitter_days: u32,
    rng: &mut R,
) -> Option<NaiveDate> {
    let jitter = i64::from(jitter_days);
    let offset = rng.random_range(-jitter..=jitter);
    anchor.checked_add_signed(TimeDelta::try_days(offset)?)
}

/// Last day of a window that starts at `start` and holds `points`
/// observations one day apart: `start + (points - 1)` days.
///
/// Returns `None` when `points` is 0 or the end date would leave the
/// representable calendar range.
///
/// ```
/// use chrono::NaiveDate;
/// use seriegen_core::window_end;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let end = window_end(start, 100).unwrap();
/// assert_eq!(end, NaiveDate::from_ymd_opt(2024, 4, 9).unwrap());
/// assert_eq!((end - start).num_days(), 99);
/// ```
#[must_use]
pub fn window_end(start: NaiveDate, points: usize) -> Option<NaiveDate> {
    let days = i64::try_from(points.checked_sub(1)?).ok()?;
    start.checked_add_signed(TimeDelta::try_days(days)?)
}

/// Exactly `points` timestamps spanning `start` through `end` inclusive,
/// evenly spaced by linear interpolation at whole-second resolution.
///
/// The first timestamp is always `start` and the last is always `end`;
/// intermediate points land on `start + span * i / (points - 1)` seconds,
/// truncated toward zero. When the span covers `points - 1` whole days the
/// sequence reduces to one timestamp per calendar day.
///
/// # Errors
/// Returns `TooFewPoints` when `points < 2`; both endpoints are required.
///
/// ```
/// use chrono::{NaiveDate, TimeDelta};
/// use seriegen_core::{day_start_utc, evenly_spaced};
///
/// let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let start = day_start_utc(d);
/// let end = start + TimeDelta::days(1);
///
/// // Three points across one day: midnight, noon, midnight.
/// let ts = evenly_spaced(start, end, 3).unwrap();
/// assert_eq!(ts[0], start);
/// assert_eq!(ts[1], start + TimeDelta::hours(12));
/// assert_eq!(ts[2], end);
/// ```
pub fn evenly_spaced(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    points: usize,
) -> Result<Vec<DateTime<Utc>>, SeriegenError> {
    if points < 2 {
        return Err(SeriegenError::too_few_points(points));
    }

    // Interpolate in whole seconds; i128 keeps span * i from overflowing.
    let span_secs = i128::from((end - start).num_seconds());
    let last = (points - 1) as i128;

    let mut out = Vec::with_capacity(points);
    for i in 0..points {
        let offset = span_secs * (i as i128) / last;
        let secs = i64::try_from(offset).unwrap_or(0);
        let ts = start
            .checked_add_signed(TimeDelta::seconds(secs))
            .unwrap_or(end);
        out.push(ts);
    }
    Ok(out)
}
