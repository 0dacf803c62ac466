//! Worked-hours arithmetic used by the pairing engine.

use chrono::NaiveDateTime;

/// Default sanity cutoff for a single shift.
pub const MAX_SHIFT_HOURS: f64 = 24.0;

/// Fractional hours between two scans.
///
/// `None` when a timestamp is missing, when `end` precedes `start`, or when
/// the span exceeds `max_hours`.
pub fn elapsed_hours(
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    max_hours: f64,
) -> Option<f64> {
    let (start, end) = (start?, end?);
    let hours = (end - start).num_seconds() as f64 / 3600.0;

    if hours < 0.0 || hours > max_hours {
        return None;
    }
    Some(hours)
}

/// Payroll rounding: below .5 → down, [.5, .75) → .5, from .75 → next hour.
pub fn custom_round(value: f64) -> f64 {
    let whole = value.floor();
    let frac = value - whole;

    if frac < 0.5 {
        whole
    } else if frac < 0.75 {
        whole + 0.5
    } else {
        whole + 1.0
    }
}

/// Elapsed hours already rounded, ready for the "Giờ lương" column.
pub fn shift_hours(
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    max_hours: f64,
) -> Option<f64> {
    elapsed_hours(start, end, max_hours).map(custom_round)
}
