//! First-name cleanup heuristics.
//!
//! Three rules, applied in order: initials are left alone and flagged
//! for review, a quoted nickname wins over the surrounding text, and
//! otherwise the first whitespace token is capitalized.

use std::sync::LazyLock;

use regex::Regex;

/// Whole-string initials pattern: 1 to 3 letters, each optionally
/// followed by a period and/or separated by a single space or period,
/// with an optional trailing period ("A.B.", "A B", "AB").
static INITIALS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z](?:[. ]?[A-Za-z]){0,2}\.?$").expect("initials pattern")
});

/// Straight or curly double quotes around a nickname.
static DOUBLE_QUOTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("\"([^\"]+)\"|\u{201C}([^\u{201C}\u{201D}]+)\u{201D}").expect("double quote pattern")
});

/// Straight single quotes around a nickname.
static SINGLE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("'([^']+)'").expect("single quote pattern"));

/// Outcome of cleaning one raw first-name value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedName {
    /// The value to write back into the name column.
    pub cleaned: String,
    /// False when the normalizer left the value for operator review.
    pub confident: bool,
}

/// True when the trimmed value looks like bare initials rather than a
/// name. The pattern is anchored to the whole string so longer names
/// never match.
pub fn is_initials(name: &str) -> bool {
    INITIALS.is_match(name.trim())
}

/// Clean a raw first-name cell.
///
/// Empty values and initials come back unchanged (aside from trimming
/// initials) with `confident = false`; the caller records those for the
/// report. A quoted nickname replaces the whole value. Anything else is
/// reduced to its first token with standard capitalization.
pub fn normalize(raw: &str) -> NormalizedName {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return NormalizedName {
            cleaned: raw.to_string(),
            confident: false,
        };
    }
    if is_initials(trimmed) {
        return NormalizedName {
            cleaned: trimmed.to_string(),
            confident: false,
        };
    }
    if let Some(nickname) = quoted_nickname(trimmed) {
        return NormalizedName {
            cleaned: nickname,
            confident: true,
        };
    }
    let first_token = trimmed.split_whitespace().next().unwrap_or(trimmed);
    NormalizedName {
        cleaned: capitalize(first_token),
        confident: true,
    }
}

/// First substring enclosed in a matching pair of quotes, double quotes
/// taking priority over single.
fn quoted_nickname(name: &str) -> Option<String> {
    for pattern in [&*DOUBLE_QUOTED, &*SINGLE_QUOTED] {
        if let Some(captures) = pattern.captures(name) {
            let quoted = captures
                .iter()
                .skip(1)
                .flatten()
                .next()
                .map(|group| group.as_str().trim());
            if let Some(quoted) = quoted.filter(|text| !text.is_empty()) {
                return Some(quoted.to_string());
            }
        }
    }
    None
}

/// Uppercase the first letter, lowercase the rest.
fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
