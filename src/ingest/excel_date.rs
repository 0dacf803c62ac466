// src/ingest/excel_date.rs

use chrono::{Days, NaiveDate, NaiveDateTime, TimeDelta};

/// Convert an Excel serial (days since 1899-12-30, fraction = time of day)
/// into a naive date-time. Seconds are rounded to the nearest whole second.
pub(crate) fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }

    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;

    let days = serial.trunc() as u64;
    let secs = ((serial - serial.trunc()) * 86_400.0).round() as i64;

    let date = epoch.checked_add_days(Days::new(days))?;
    date.and_hms_opt(0, 0, 0)?
        .checked_add_signed(TimeDelta::seconds(secs))
}
