//! Text truncation by character count or UTF-8 byte length

use serde::{Deserialize, Serialize};

/// Suffix appended when truncation actually occurs
pub const DEFAULT_SUFFIX: &str = "...";

/// Truncation limit interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TruncateMode {
    /// Limit counts characters
    Chars,
    /// Limit counts UTF-8 bytes; a multi-byte character is never split
    Bytes,
}

impl std::str::FromStr for TruncateMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chars" | "characters" => Ok(TruncateMode::Chars),
            "bytes" => Ok(TruncateMode::Bytes),
            other => Err(format!("Invalid mode: {other}. Valid modes: chars, bytes")),
        }
    }
}

/// Truncate `input` to `limit` characters or bytes, appending `suffix` only
/// when truncation occurs. Input already within the limit is returned
/// unchanged.
///
/// In byte mode the kept prefix is the longest character-aligned prefix whose
/// UTF-8 encoding does not exceed the limit, found by a monotonic search over
/// prefix lengths. The function is stable on its own output: input that is
/// already a fitting prefix plus the suffix is returned unchanged.
pub fn truncate_text(input: &str, limit: usize, mode: TruncateMode, suffix: &str) -> String {
    let fits = |s: &str| match mode {
        TruncateMode::Chars => s.chars().count() <= limit,
        TruncateMode::Bytes => s.len() <= limit,
    };

    if fits(input) {
        return input.to_string();
    }

    if !suffix.is_empty() {
        if let Some(prefix) = input.strip_suffix(suffix) {
            if fits(prefix) {
                return input.to_string();
            }
        }
    }

    let prefix = match mode {
        TruncateMode::Chars => {
            let end = input
                .char_indices()
                .nth(limit)
                .map_or(input.len(), |(i, _)| i);
            &input[..end]
        }
        TruncateMode::Bytes => longest_prefix_within_bytes(input, limit),
    };
    format!("{prefix}{suffix}")
}

/// Binary search over prefix character counts. The encoded byte length is
/// monotone in the number of characters kept, so the search converges on the
/// longest prefix that still fits.
fn longest_prefix_within_bytes(input: &str, limit: usize) -> &str {
    let char_boundaries: Vec<usize> = input
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(input.len()))
        .collect();

    let mut lo = 0;
    let mut hi = char_boundaries.len() - 1;
    while lo < hi {
        let mid = (lo + hi + 1) / 2;
        if char_boundaries[mid] <= limit {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }

    &input[..char_boundaries[lo]]
}
