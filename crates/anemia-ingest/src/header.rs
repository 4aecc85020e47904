//! Header name normalization.

use std::collections::HashSet;

/// Normalizes a header value: trims whitespace and a leading byte-order mark.
pub fn normalize_header(value: &str) -> String {
    value.trim().trim_start_matches('\u{feff}').trim().to_string()
}

/// Normalizes every header, naming blank ones `column_<n>` (1-based).
///
/// Repeated names get a `_<k>` suffix (`HGB`, `HGB_1`, `HGB_2`) so no column
/// is dropped when rows are keyed by name.
pub fn normalize_headers<I, S>(headers: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    headers
        .into_iter()
        .enumerate()
        .map(|(idx, raw)| {
            let mut name = normalize_header(raw.as_ref());
            if name.is_empty() {
                name = format!("column_{}", idx + 1);
            }
            if seen.contains(&name) {
                let base = name;
                let mut suffix = 1usize;
                name = format!("{base}_{suffix}");
                while seen.contains(&name) {
                    suffix += 1;
                    name = format!("{base}_{suffix}");
                }
            }
            seen.insert(name.clone());
            name
        })
        .collect()
}
