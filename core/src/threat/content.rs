//! threat/content.rs
//!
//! Best-effort search for command-interpreter strings anywhere in the upload.
//! Matching is ASCII case-insensitive over raw bytes, which is what a lossy
//! text decode would expose for these needles. False negatives are accepted;
//! this tier only catches trivial droppers.

use crate::threat::types::{ScanOutcome, Threat, ThreatKind};

/// Needles, lowercase.
pub static DANGEROUS_STRINGS: &[&str] = &[
    "cmd.exe",
    "powershell",
    "/bin/sh",
    "/bin/bash",
    "wscript",
    "cscript",
    "rundll32",
    "<script",
];

/// First hit, if any.
pub fn scan_content(buf: &[u8]) -> ScanOutcome {
    DANGEROUS_STRINGS
        .iter()
        .filter_map(|needle| find_ascii_ci(buf, needle.as_bytes()).map(|at| threat(needle, at)))
        .min_by_key(|t| t.offset)
        .map(ScanOutcome::Rejected)
        .unwrap_or(ScanOutcome::Clean)
}

/// One record per needle found, ordered by offset.
pub fn content_threats(buf: &[u8]) -> Vec<Threat> {
    let mut found: Vec<Threat> = DANGEROUS_STRINGS
        .iter()
        .filter_map(|needle| find_ascii_ci(buf, needle.as_bytes()).map(|at| threat(needle, at)))
        .collect();
    found.sort_by_key(|t| t.offset);
    found
}

fn threat(needle: &'static str, offset: usize) -> Threat {
    Threat { kind: ThreatKind::DangerousContent, label: needle, offset }
}

/// `needle` must be lowercase ASCII.
fn find_ascii_ci(hay: &[u8], needle: &[u8]) -> Option<usize> {
    let (&first, rest) = needle.split_first()?;
    if hay.len() < needle.len() {
        return None;
    }
    (0..=hay.len() - needle.len()).find(|&i| {
        hay[i].to_ascii_lowercase() == first
            && hay[i + 1..i + needle.len()].eq_ignore_ascii_case(rest)
    })
}
