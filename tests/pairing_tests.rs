mod common;
use common::{clock_in, clock_out};
use rtimesheet::core::calculator::hours::MAX_SHIFT_HOURS;
use rtimesheet::core::calculator::pairing::pair_shifts;
use rtimesheet::models::attendance_event::AttendanceEvent;
use rtimesheet::models::event_kind::EventKind;
use rtimesheet::models::processed_row::{AnomalyKind, ProcessedRow};

/// Compact view of the output: ("in"/"out"/anomaly label, hours)
fn shape(rows: &[ProcessedRow]) -> Vec<(String, Option<f64>)> {
    rows.iter()
        .map(|r| match r {
            ProcessedRow::Shift { event, hours } => {
                let k = match &event.kind {
                    EventKind::ClockIn => "in".to_string(),
                    EventKind::ClockOut => "out".to_string(),
                    EventKind::Other(s) => s.clone(),
                };
                (k, *hours)
            }
            ProcessedRow::Anomaly(a) => (format!("{:?}", a), None),
        })
        .collect()
}

fn s(k: &str, h: Option<f64>) -> (String, Option<f64>) {
    (k.to_string(), h)
}

#[test]
fn test_simple_pair() {
    let rows = pair_shifts(
        &[clock_in("13/02/2025 08:00"), clock_out("13/02/2025 17:00")],
        MAX_SHIFT_HOURS,
    );
    assert_eq!(shape(&rows), vec![s("in", Some(9.0)), s("out", None)]);
    assert!(rows.iter().all(|r| !r.is_anomaly()));
}

#[test]
fn test_lonely_clock_in_gets_missing_clock_out() {
    let rows = pair_shifts(&[clock_in("13/02/2025 08:00")], MAX_SHIFT_HOURS);
    assert_eq!(
        shape(&rows),
        vec![s("in", None), s("MissingClockOut", None)]
    );
}

#[test]
fn test_two_clock_ins_in_a_row() {
    let rows = pair_shifts(
        &[clock_in("13/02/2025 08:00"), clock_in("13/02/2025 09:00")],
        MAX_SHIFT_HOURS,
    );
    assert_eq!(
        shape(&rows),
        vec![
            s("in", None),
            s("MissingClockOut", None),
            s("in", None),
            s("MissingClockOut", None),
        ]
    );
}

#[test]
fn test_second_clock_in_pairs_normally() {
    let rows = pair_shifts(
        &[
            clock_in("13/02/2025 08:00"),
            clock_in("13/02/2025 09:00"),
            clock_out("13/02/2025 17:00"),
        ],
        MAX_SHIFT_HOURS,
    );
    assert_eq!(
        shape(&rows),
        vec![
            s("in", None),
            s("MissingClockOut", None),
            s("in", Some(8.0)),
            s("out", None),
        ]
    );
}

#[test]
fn test_consecutive_clock_outs_get_missing_clock_in() {
    let rows = pair_shifts(
        &[clock_out("13/02/2025 08:00"), clock_out("13/02/2025 17:00")],
        MAX_SHIFT_HOURS,
    );
    assert_eq!(
        shape(&rows),
        vec![s("out", None), s("MissingClockIn", None), s("out", None)]
    );
}

#[test]
fn test_pair_then_extra_clock_out() {
    let rows = pair_shifts(
        &[
            clock_in("13/02/2025 08:00"),
            clock_out("13/02/2025 12:00"),
            clock_out("13/02/2025 17:00"),
        ],
        MAX_SHIFT_HOURS,
    );
    assert_eq!(
        shape(&rows),
        vec![
            s("in", Some(4.0)),
            s("out", None),
            s("MissingClockIn", None),
            s("out", None),
        ]
    );
}

#[test]
fn test_events_are_sorted_before_pairing() {
    let rows = pair_shifts(
        &[
            clock_out("14/02/2025 17:30"),
            clock_in("13/02/2025 08:00"),
            clock_in("14/02/2025 08:00"),
            clock_out("13/02/2025 16:00"),
        ],
        MAX_SHIFT_HOURS,
    );
    assert_eq!(
        shape(&rows),
        vec![
            s("in", Some(8.0)),
            s("out", None),
            s("in", Some(9.5)),
            s("out", None),
        ]
    );
}

#[test]
fn test_sort_is_stable_for_equal_timestamps() {
    let first = AttendanceEvent::new("13/02/2025 08:00", "A", "Tan Ca", "first");
    let second = AttendanceEvent::new("13/02/2025 08:00", "A", "Tan Ca", "second");

    let rows = pair_shifts(&[first, second], MAX_SHIFT_HOURS);

    let branches: Vec<&str> = rows
        .iter()
        .filter_map(|r| match r {
            ProcessedRow::Shift { event, .. } => Some(event.branch.as_str()),
            ProcessedRow::Anomaly(_) => None,
        })
        .collect();
    assert_eq!(branches, vec!["first", "second"]);
}

#[test]
fn test_cutoff_leaves_hours_blank_without_anomaly() {
    let rows = pair_shifts(
        &[clock_in("13/02/2025 08:00"), clock_out("15/02/2025 09:00")],
        MAX_SHIFT_HOURS,
    );
    assert_eq!(shape(&rows), vec![s("in", None), s("out", None)]);
}

#[test]
fn test_custom_cutoff_is_honoured() {
    let rows = pair_shifts(
        &[clock_in("13/02/2025 08:00"), clock_out("13/02/2025 22:00")],
        12.0,
    );
    assert_eq!(rows[0].hours(), None);
}

#[test]
fn test_bad_timestamp_degrades_to_blank() {
    let rows = pair_shifts(
        &[clock_in("not a date"), clock_out("also not a date")],
        MAX_SHIFT_HOURS,
    );
    assert_eq!(shape(&rows), vec![s("in", None), s("out", None)]);
}

#[test]
fn test_unparseable_timestamps_sort_last() {
    let rows = pair_shifts(
        &[
            clock_out("garbage"),
            clock_in("13/02/2025 08:00"),
            clock_out("13/02/2025 17:00"),
        ],
        MAX_SHIFT_HOURS,
    );
    assert_eq!(
        shape(&rows),
        vec![
            s("in", Some(9.0)),
            s("out", None),
            s("MissingClockIn", None),
            s("out", None),
        ]
    );
}

#[test]
fn test_unknown_kind_is_kept_but_never_paired() {
    let odd = AttendanceEvent::new("13/02/2025 12:00", "A", "Nghỉ trưa", "HCM");
    let rows = pair_shifts(
        &[
            clock_in("13/02/2025 08:00"),
            odd,
            clock_out("13/02/2025 17:00"),
        ],
        MAX_SHIFT_HOURS,
    );
    assert_eq!(
        shape(&rows),
        vec![
            s("in", None),
            s("MissingClockOut", None),
            s("Nghỉ trưa", None),
            s("out", None),
        ]
    );
}

#[test]
fn test_rerun_is_idempotent() {
    let events = vec![
        clock_in("13/02/2025 08:00"),
        clock_out("13/02/2025 17:30"),
        clock_in("14/02/2025 08:00"),
        clock_out("14/02/2025 16:45"),
    ];

    let first = shape(&pair_shifts(&events, MAX_SHIFT_HOURS));
    let second = shape(&pair_shifts(&events, MAX_SHIFT_HOURS));

    assert_eq!(first, second);
    assert_eq!(first.len(), 4);
    assert_eq!(first[2], s("in", Some(9.0)));
}

#[test]
fn test_empty_input_gives_no_rows() {
    assert!(pair_shifts(&[], MAX_SHIFT_HOURS).is_empty());
}

#[test]
fn test_anomaly_labels() {
    assert_eq!(AnomalyKind::MissingClockIn.label(), "Không chấm vào ca");
    assert_eq!(AnomalyKind::MissingClockOut.label(), "Không chấm tan ca");
}
