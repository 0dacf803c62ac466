//! Formatting utilities used for CLI outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Hours with one decimal, as in the "0.0" cell format of the worksheet.
pub fn format_hours(hours: Option<f64>) -> String {
    match hours {
        Some(h) => format!("{:.1}", h),
        None => String::new(),
    }
}

/// Money amounts without decimals and with dot thousands separators (15.000).
pub fn format_amount(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }

    if rounded < 0 {
        format!("-{out}")
    } else {
        out
    }
}
