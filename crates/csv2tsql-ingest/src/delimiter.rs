//! Delimiter sniffing from a content sample.
//!
//! The heuristic counts each candidate separator per sample line (ignoring
//! occurrences inside double quotes) and keeps candidates whose modal
//! per-line count is non-zero and shared by nearly every line. The most
//! consistent candidate wins; ties go to the earlier entry in
//! [`CANDIDATE_DELIMITERS`].

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::SniffError;

/// Number of leading bytes inspected when sniffing a file.
pub const SNIFF_SAMPLE_BYTES: usize = 1024;

/// Delimiter used whenever sniffing cannot decide.
pub const DEFAULT_DELIMITER: u8 = b',';

/// Candidate separators in preference order.
pub const CANDIDATE_DELIMITERS: [u8; 6] = [b',', b'\t', b';', b'|', b':', b' '];

/// Minimum share of sample lines that must agree on a candidate's count.
const MIN_CONSISTENCY: f64 = 0.9;

#[derive(Debug, Clone, Copy)]
struct CandidateScore {
    delimiter: u8,
    mode: usize,
    consistency: f64,
}

/// Decode the sample, tolerating a multi-byte character cut at the end.
///
/// The flag is true when trailing bytes had to be dropped.
fn decode_sample(sample: &[u8]) -> Result<(&str, bool), SniffError> {
    match std::str::from_utf8(sample) {
        Ok(text) => Ok((text, false)),
        Err(err) if err.error_len().is_none() => {
            let valid = err.valid_up_to();
            std::str::from_utf8(&sample[..valid])
                .map(|text| (text, true))
                .map_err(|_| SniffError::InvalidUtf8 { offset: valid })
        }
        Err(err) => Err(SniffError::InvalidUtf8 {
            offset: err.valid_up_to(),
        }),
    }
}

fn sample_lines(text: &str, truncated: bool) -> Vec<&str> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines: Vec<&str> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();
    // The last line of a full window is usually cut mid-record.
    if truncated && lines.len() > 1 && !text.ends_with('\n') {
        lines.pop();
    }
    lines
}

fn count_unquoted(line: &str, delimiter: u8) -> usize {
    let mut in_quotes = false;
    let mut count = 0;
    for byte in line.bytes() {
        if byte == b'"' {
            in_quotes = !in_quotes;
        } else if byte == delimiter && !in_quotes {
            count += 1;
        }
    }
    count
}

fn score_candidate(lines: &[&str], delimiter: u8) -> CandidateScore {
    let mut histogram: BTreeMap<usize, usize> = BTreeMap::new();
    for line in lines {
        *histogram.entry(count_unquoted(line, delimiter)).or_insert(0) += 1;
    }
    // Highest frequency wins; on a tie prefer the larger per-line count.
    let (mode, frequency) = histogram
        .iter()
        .max_by(|a, b| a.1.cmp(b.1).then(a.0.cmp(b.0)))
        .map(|(count, freq)| (*count, *freq))
        .unwrap_or((0, 0));
    let consistency = if lines.is_empty() {
        0.0
    } else {
        frequency as f64 / lines.len() as f64
    };
    CandidateScore {
        delimiter,
        mode,
        consistency,
    }
}

/// Infer the field separator used in `sample`.
///
/// # Errors
///
/// Returns [`SniffError`] when the sample is empty, is not UTF-8, or no
/// candidate separator is used consistently.
pub fn sniff_delimiter(sample: &[u8]) -> Result<u8, SniffError> {
    let (text, cut) = decode_sample(sample)?;
    let lines = sample_lines(text, cut || sample.len() >= SNIFF_SAMPLE_BYTES);
    if lines.is_empty() {
        return Err(SniffError::EmptySample);
    }

    let mut best: Option<CandidateScore> = None;
    for delimiter in CANDIDATE_DELIMITERS {
        let score = score_candidate(&lines, delimiter);
        if score.mode == 0 || score.consistency < MIN_CONSISTENCY {
            continue;
        }
        match best {
            Some(current) if current.consistency >= score.consistency => {}
            _ => best = Some(score),
        }
    }

    best.map(|score| score.delimiter)
        .ok_or(SniffError::NoConsistentDelimiter { lines: lines.len() })
}

/// Infer the separator of `sample`, falling back to a comma on any failure.
pub fn detect_delimiter(sample: &[u8]) -> u8 {
    match sniff_delimiter(sample) {
        Ok(delimiter) => {
            debug!(delimiter = %display_delimiter(delimiter), "Detected delimiter");
            delimiter
        }
        Err(err) => {
            warn!(error = %err, "Could not detect delimiter, using comma");
            DEFAULT_DELIMITER
        }
    }
}

/// Sniff the separator of the file at `path` from its first
/// [`SNIFF_SAMPLE_BYTES`] bytes.
pub fn detect_file_delimiter(path: &Path) -> u8 {
    match read_sample(path, SNIFF_SAMPLE_BYTES) {
        Ok(sample) => {
            let delimiter = detect_delimiter(&sample);
            debug!(
                path = %path.display(),
                delimiter = %display_delimiter(delimiter),
                "Delimiter selected"
            );
            delimiter
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                error = %err,
                "Could not sample file for delimiter detection, using comma"
            );
            DEFAULT_DELIMITER
        }
    }
}

fn read_sample(path: &Path, limit: usize) -> std::io::Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut sample = Vec::with_capacity(limit);
    file.take(limit as u64).read_to_end(&mut sample)?;
    Ok(sample)
}

/// Printable form of a delimiter for diagnostics (`\t` for tab).
pub fn display_delimiter(delimiter: u8) -> String {
    char::from(delimiter).escape_default().to_string()
}
