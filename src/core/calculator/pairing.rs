use crate::core::calculator::hours::shift_hours;
use crate::models::attendance_event::AttendanceEvent;
use crate::models::processed_row::{AnomalyKind, ProcessedRow};

/// Sort the scans of one employee and pair every clock-in with the
/// clock-out right after it.
///
/// - IN followed by OUT → IN row carries the rounded hours, OUT row is blank
/// - IN not followed by OUT → IN row blank + `MissingClockOut` marker after it
/// - OUT right after another OUT → `MissingClockIn` marker right before it
///
/// Never fails: bad timestamps only leave the hours blank.
pub fn pair_shifts(events: &[AttendanceEvent], max_hours: f64) -> Vec<ProcessedRow> {
    let sorted = sort_chronologically(events);
    let mut rows = Vec::with_capacity(sorted.len());

    for (i, ev) in sorted.iter().enumerate() {
        let prev = i.checked_sub(1).map(|p| sorted[p]);
        let next = sorted.get(i + 1).copied();

        if ev.kind.is_out() && prev.is_some_and(|p| p.kind.is_out()) {
            rows.push(ProcessedRow::Anomaly(AnomalyKind::MissingClockIn));
        }

        if ev.kind.is_in() {
            match next.filter(|n| n.kind.is_out()) {
                Some(out) => rows.push(ProcessedRow::Shift {
                    event: (*ev).clone(),
                    hours: shift_hours(ev.timestamp, out.timestamp, max_hours),
                }),
                None => {
                    rows.push(ProcessedRow::Shift {
                        event: (*ev).clone(),
                        hours: None,
                    });
                    rows.push(ProcessedRow::Anomaly(AnomalyKind::MissingClockOut));
                }
            }
            continue;
        }

        rows.push(ProcessedRow::Shift {
            event: (*ev).clone(),
            hours: None,
        });
    }

    rows
}

/// Stable ascending sort by timestamp. Unparseable timestamps go last,
/// in input order.
fn sort_chronologically(events: &[AttendanceEvent]) -> Vec<&AttendanceEvent> {
    let mut sorted: Vec<&AttendanceEvent> = events.iter().collect();
    sorted.sort_by_key(|e| (e.timestamp.is_none(), e.timestamp));
    sorted
}
