//! Generic text helpers.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Default maximal length of a [`summary`].
pub const SUMMARY_LENGTH: usize = 70;

/// Shorten `text` to at most `max_length` characters on word boundaries.
///
/// Whitespace is normalized to single spaces. If words had to be dropped the
/// result ends with `" ..."`, which is not counted against `max_length`.
pub fn summary(text: &str, max_length: usize) -> String {
    let mut result = String::new();
    let mut length = 0;
    let mut words = text.split_whitespace().peekable();

    while let Some(word) = words.peek() {
        let word_length = word.chars().count();
        // Each word is counted with its leading separator.
        if length + word_length + 1 > max_length {
            break;
        }
        if !result.is_empty() {
            result.push(' ');
        }
        result.push_str(word);
        length += word_length + 1;
        words.next();
    }

    if words.peek().is_some() {
        if result.is_empty() {
            result.push_str("...");
        } else {
            result.push_str(" ...");
        }
    }
    result
}

/// Condense a string into a lowercase ASCII identifier.
///
/// Letters are decomposed first so that accented letters keep their base
/// letter. Then only ASCII letters and digits survive; everything else,
/// including whitespace and punctuation, is dropped.
pub fn slug(s: &str) -> String {
    s.nfd()
        .filter(|&c| !is_combining_mark(c))
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Human-readable byte size, e.g. `1.5KB`.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["bytes", "KB", "MB", "GB"];

    let mut size = bytes as f64;
    for unit in UNITS {
        if size < 1024.0 {
            return format!("{:.1}{}", size, unit);
        }
        size /= 1024.0;
    }
    format!("{:.1}TB", size)
}

/// Remove the C0 control characters that XML 1.0 forbids.
///
/// Tab, line feed and carriage return are kept. Other characters, including
/// the noncharacters U+FFFE and U+FFFF, pass through unchanged.
pub fn xmlchars(text: &str) -> String {
    text.chars().filter(|&c| !is_forbidden_control(c)).collect()
}

fn is_forbidden_control(c: char) -> bool {
    matches!(c, '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}')
}
