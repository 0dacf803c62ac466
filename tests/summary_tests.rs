mod common;
use common::{HEADERS, clock_in, clock_out, table};
use rtimesheet::config::Config;
use rtimesheet::core::calculator::hours::MAX_SHIFT_HOURS;
use rtimesheet::core::calculator::pairing::pair_shifts;
use rtimesheet::core::logic::Core;
use rtimesheet::core::summary::{
    PayRates, SheetLayout, SummaryValue, build_summary, column_letter,
};
use rtimesheet::export::sheet_name::sheet_names;

fn formula(v: &SummaryValue) -> &str {
    match v {
        SummaryValue::Formula(f) => f,
        SummaryValue::Number(n) => panic!("expected formula, got {n}"),
    }
}

#[test]
fn test_column_letters() {
    assert_eq!(column_letter(0), "A");
    assert_eq!(column_letter(4), "E");
    assert_eq!(column_letter(25), "Z");
    assert_eq!(column_letter(26), "AA");
    assert_eq!(column_letter(27), "AB");
    assert_eq!(column_letter(701), "ZZ");
    assert_eq!(column_letter(702), "AAA");
}

#[test]
fn test_summary_rows_for_two_data_rows() {
    let rows = pair_shifts(
        &[clock_in("13/02/2025 08:00"), clock_out("13/02/2025 17:30")],
        MAX_SHIFT_HOURS,
    );
    let s = build_summary(&rows, &SheetLayout::default(), &PayRates::default());

    assert_eq!(s.total_hours.row, 4);
    assert_eq!(formula(&s.total_hours.value), "SUM(E2:E3)");

    assert_eq!(s.hourly_rate.row, 5);
    assert_eq!(s.hourly_rate.value, SummaryValue::Number(15000.0));

    assert_eq!(s.gross_pay.row, 6);
    assert_eq!(formula(&s.gross_pay.value), "E4*E5");

    assert_eq!(s.advance.row, 7);
    assert_eq!(s.advance.value, SummaryValue::Number(0.0));

    assert_eq!(s.net_pay.row, 8);
    assert_eq!(formula(&s.net_pay.value), "E6 - E7");

    assert_eq!(s.preview.total_hours, 9.5);
    assert_eq!(s.preview.gross_pay, 142_500.0);
    assert_eq!(s.preview.net_pay, 142_500.0);
}

#[test]
fn test_summary_offsets_follow_anomaly_rows() {
    // OUT, [missing in], OUT, IN, [missing out] → 5 data rows
    let rows = pair_shifts(
        &[
            clock_out("13/02/2025 08:00"),
            clock_out("13/02/2025 17:00"),
            clock_in("14/02/2025 08:00"),
        ],
        MAX_SHIFT_HOURS,
    );
    assert_eq!(rows.len(), 5);

    let s = build_summary(&rows, &SheetLayout::default(), &PayRates::default());
    assert_eq!(formula(&s.total_hours.value), "SUM(E2:E6)");
    assert_eq!(formula(&s.gross_pay.value), "E7*E8");
    assert_eq!(formula(&s.net_pay.value), "E9 - E10");
}

#[test]
fn test_summary_uses_custom_rates() {
    let rows = pair_shifts(
        &[clock_in("13/02/2025 08:00"), clock_out("13/02/2025 12:00")],
        MAX_SHIFT_HOURS,
    );
    let rates = PayRates {
        hourly_rate: 20000.0,
        advance: 10000.0,
    };
    let s = build_summary(&rows, &SheetLayout::default(), &rates);

    assert_eq!(s.hourly_rate.value, SummaryValue::Number(20000.0));
    assert_eq!(s.advance.value, SummaryValue::Number(10000.0));
    assert_eq!(s.preview.net_pay, 70_000.0);
}

#[test]
fn test_summary_labels_in_sheet_order() {
    let s = build_summary(&[], &SheetLayout::default(), &PayRates::default());
    let labels: Vec<&str> = s.rows().iter().map(|r| r.label).collect();
    assert_eq!(
        labels,
        vec![
            "Tổng giờ lương",
            "Lương mỗi giờ",
            "Tổng lương",
            "Tạm ứng",
            "Thực lãnh"
        ]
    );
    assert_eq!(formula(&s.total_hours.value), "SUM(E2:E1)");
}

#[test]
fn test_end_to_end_single_employee() {
    let t = table(
        &HEADERS,
        &[
            &["13/02/2025 08:00", "A", "Vào Ca", "HCM"],
            &["13/02/2025 17:30", "A", "Tan Ca", "HCM"],
        ],
    );

    let sheets = Core::build_worksheets(&t, &Config::default()).expect("build");
    assert_eq!(sheets.len(), 1);

    let sheet = &sheets[0];
    assert_eq!(sheet.display_name, "A");
    assert_eq!(sheet.rows.len(), 2);
    assert_eq!(sheet.rows[0].hours(), Some(9.5));
    assert_eq!(sheet.rows[1].hours(), None);
    assert_eq!(formula(&sheet.summary.total_hours.value), "SUM(E2:E3)");
    assert_eq!(sheet.anomaly_count(), 0);
}

#[test]
fn test_one_broken_employee_does_not_block_others() {
    let t = table(
        &HEADERS,
        &[
            &["13/02/2025 08:00", "A", "Vào Ca", "HCM"],
            &["13/02/2025 17:00", "B", "Tan Ca", "HN"],
            &["13/02/2025 17:00", "A", "Tan Ca", "HCM"],
            &["13/02/2025 18:00", "b", "Tan Ca", "HN"],
            &["bad date", "C", "Vào Ca", "HN"],
            &["13/02/2025 17:00", "C", "Tan Ca", "HN"],
        ],
    );

    let sheets = Core::build_worksheets(&t, &Config::default()).expect("build");
    let names: Vec<&str> = sheets.iter().map(|s| s.display_name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);

    assert_eq!(sheets[0].summary.preview.total_hours, 9.0);
    assert_eq!(sheets[1].anomaly_count(), 1);
    assert_eq!(sheets[1].rows.len(), 3);
    assert_eq!(formula(&sheets[1].summary.total_hours.value), "SUM(E2:E4)");

    // C: parsed OUT sorts first, unparsed IN last → anomaly, no hours
    assert_eq!(sheets[2].summary.preview.total_hours, 0.0);
    assert_eq!(sheets[2].anomaly_count(), 1);
}

#[test]
fn test_blank_pairings_are_counted() {
    let t = table(
        &HEADERS,
        &[
            &["13/02/2025 08:00", "A", "Vào Ca", "HCM"],
            &["16/02/2025 08:00", "A", "Tan Ca", "HCM"],
        ],
    );

    let sheets = Core::build_worksheets(&t, &Config::default()).expect("build");
    assert_eq!(sheets[0].blank_pairings(), 1);
    assert_eq!(sheets[0].anomaly_count(), 0);
}

#[test]
fn test_sheet_names_are_sanitized_and_unique() {
    let names = sheet_names([
        "Nguyen/Van:A",
        "A name that is definitely longer than thirty-one characters",
        "A name that is definitely longer than thirty-one chars too",
        "'Quoted'",
    ]);

    assert_eq!(names[0], "Nguyen_Van_A");
    assert_eq!(names[1].chars().count(), 31);
    assert_ne!(names[1], names[2]);
    assert!(names[2].ends_with(" (2)"));
    assert_eq!(names[2].chars().count(), 31);
    assert_eq!(names[3], "Quoted");
}
