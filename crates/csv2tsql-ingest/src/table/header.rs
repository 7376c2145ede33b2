//! Header sanitization and duplicate detection.

use std::collections::BTreeMap;

use csv2tsql_model::sanitize_column_header;

/// Sanitizes raw header tokens positionally.
///
/// A byte-order mark on the first token is dropped before sanitizing.
pub fn sanitize_headers<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    raw.iter()
        .enumerate()
        .map(|(idx, token)| {
            let token = token.as_ref();
            let token = if idx == 0 {
                token.trim_start_matches('\u{feff}')
            } else {
                token
            };
            sanitize_column_header(token, idx)
        })
        .collect()
}

/// Returns header names that occur more than once, in first-seen order.
pub fn duplicate_headers(headers: &[String]) -> Vec<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for header in headers {
        *counts.entry(header.as_str()).or_insert(0) += 1;
    }
    let mut duplicates: Vec<String> = Vec::new();
    for header in headers {
        if counts.get(header.as_str()).copied().unwrap_or(0) > 1 && !duplicates.contains(header) {
            duplicates.push(header.clone());
        }
    }
    duplicates
}
