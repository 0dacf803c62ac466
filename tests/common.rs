#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rtimesheet::ingest::RawTable;
use rtimesheet::models::attendance_event::AttendanceEvent;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const HEADERS: [&str; 4] = ["Ngày", "Tên", "Vào/Tan Ca", "Chi nhánh"];

pub fn rts() -> Command {
    cargo_bin_cmd!("rtimesheet")
}

/// Config path that never exists, so every CLI test runs on defaults
pub fn no_config() -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push("rtimesheet_tests_missing.conf");
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a CSV time-clock export with the standard header
pub fn write_input_csv(name: &str, rows: &[[&str; 4]]) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_in.csv", name));

    let mut wtr = csv::Writer::from_path(&path).expect("create csv");
    wtr.write_record(HEADERS).expect("write header");
    for r in rows {
        wtr.write_record(r).expect("write row");
    }
    wtr.flush().expect("flush csv");

    path.to_string_lossy().to_string()
}

pub fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
    RawTable {
        headers: headers.iter().map(|h| h.to_string()).collect(),
        rows: rows
            .iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect(),
    }
}

pub fn clock_in(ts: &str) -> AttendanceEvent {
    AttendanceEvent::new(ts, "A", "Vào Ca", "HCM")
}

pub fn clock_out(ts: &str) -> AttendanceEvent {
    AttendanceEvent::new(ts, "A", "Tan Ca", "HCM")
}
