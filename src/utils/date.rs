use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};

/// Formats accepted in the "Ngày" column of the time-clock export.
const CLOCK_FORMATS: [&str; 2] = ["%d/%m/%Y %H:%M", "%d/%m/%Y %H:%M:%S"];

/// ISO forms used by spreadsheet readers for typed date cells (e.g. .ods).
const ISO_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a "dd/mm/yyyy hh:mm" timestamp. `None` if the text does not match.
///
/// Seconds are accepted but dropped: worked hours count whole minutes only.
pub fn parse_clock_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    CLOCK_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .and_then(truncate_to_minute)
}

/// Parse an ISO date-time ("2025-02-13T08:00:00") or plain ISO date.
pub fn parse_iso_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    ISO_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .and_then(truncate_to_minute)
}

fn truncate_to_minute(dt: NaiveDateTime) -> Option<NaiveDateTime> {
    dt.with_second(0)?.with_nanosecond(0)
}

/// Render a timestamp the same way the clock export writes it.
pub fn format_clock_timestamp(dt: &NaiveDateTime) -> String {
    dt.format("%d/%m/%Y %H:%M").to_string()
}

/// Date stamp embedded in output file names: dd_mm_yyyy
pub fn file_stamp(d: &NaiveDate) -> String {
    d.format("%d_%m_%Y").to_string()
}
