/*!
 * Line cleanup for raw OCR text.
 *
 * OCR output of scanned forms carries table borders, bullet glyphs, stray
 * control characters and irregular spacing. Lines are cleaned here before
 * any header or task matching happens.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Runs of whitespace, collapsed to a single space
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+").expect("Invalid whitespace regex")
});

/// One leading run of table-border or bullet glyphs left behind by OCR.
///
/// A run only counts as noise when whitespace or the end of the line follows
/// it, so "-1", "~30 min" and "*item" keep their first character.
static LEADING_NOISE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[|•·*_~=>\-–—]+(?:\s+|$)").expect("Invalid leading noise regex")
});

/// Trailing punctuation ignored when classifying a line
static TRAILING_PUNCTUATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\s.,;:!]+$").expect("Invalid trailing punctuation regex")
});

/// Clean a single raw line.
///
/// With `strip_noise` off the line is only trimmed.
pub fn clean_line(line: &str, strip_noise: bool) -> String {
    if !strip_noise {
        return line.trim().to_string();
    }

    let printable: String = line
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    let collapsed = WHITESPACE_RUN.replace_all(printable.trim(), " ");
    strip_leading_noise(&collapsed).trim().to_string()
}

/// Drop leading glyph runs one at a time; a run followed by a number is a
/// comparison or sign ("> 50%", "- 1") and ends the stripping.
fn strip_leading_noise(line: &str) -> &str {
    let mut rest = line;
    while let Some(m) = LEADING_NOISE.find(rest) {
        let after = &rest[m.end()..];
        if after.starts_with(|c: char| c.is_ascii_digit()) {
            break;
        }
        rest = after;
    }
    rest
}

/// Strip trailing punctuation so "Chad will shower." and "Chad will shower" read the same
pub fn strip_trailing_punctuation(line: &str) -> &str {
    match TRAILING_PUNCTUATION.find(line) {
        Some(m) => &line[..m.start()],
        None => line,
    }
}
