// src/export/sheet_name.rs

use std::collections::HashSet;

/// Excel limit on worksheet names.
const MAX_SHEET_NAME: usize = 31;

/// Turn employee display names into valid, unique worksheet names.
///
/// Characters Excel rejects (`[]:*?/\`) become `_`, names are cut to 31
/// chars, and names that collide (Excel compares case-insensitively) get a
/// ` (2)`, ` (3)`, ... suffix.
pub fn sheet_names<'a>(display_names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut taken: HashSet<String> = HashSet::new();
    let mut out = Vec::new();

    for name in display_names {
        let base = sanitize(name);
        let mut candidate = base.clone();
        let mut n = 2;

        while !taken.insert(candidate.to_lowercase()) {
            let suffix = format!(" ({n})");
            let keep = MAX_SHEET_NAME - suffix.chars().count();
            candidate = format!("{}{}", truncate(&base, keep), suffix);
            n += 1;
        }

        out.push(candidate);
    }

    out
}

fn sanitize(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '[' | ']' | ':' | '*' | '?' | '/' | '\\' => '_',
            c => c,
        })
        .collect();

    let cleaned = cleaned.trim_matches('\'');
    if cleaned.is_empty() {
        return "Sheet".to_string();
    }

    truncate(cleaned, MAX_SHEET_NAME)
}

fn truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
