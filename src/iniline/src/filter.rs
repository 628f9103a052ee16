// iniline/src/filter.rs

//! Line classification.
//!
//! Only the trimmed view of a line is inspected here; callers keep the raw
//! text for output so rewrites never touch lines they do not target.

/// Characters that start a whole-line comment.
pub const COMMENT_CHARS: [char; 2] = [';', '#'];

/// Kind of a physical line in an INI file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace only
    Blank,
    /// Starts with `;` or `#`
    Comment,
    /// Starts with `[`
    Header,
    /// Contains `=`
    Entry,
    /// Anything else; carries no data
    Other,
}

fn trim_blanks(line: &str) -> &str {
    line.trim_matches(|c| c == ' ' || c == '\t')
}

/// Classify a raw line (without its line terminator).
pub fn classify(line: &str) -> LineKind {
    let trimmed = trim_blanks(line);
    match trimmed.chars().next() {
        None => LineKind::Blank,
        Some(c) if COMMENT_CHARS.contains(&c) => LineKind::Comment,
        Some('[') => LineKind::Header,
        Some(_) if trimmed.contains('=') => LineKind::Entry,
        Some(_) => LineKind::Other,
    }
}

/// Whether a line carries data, i.e. is neither blank nor a comment.
pub fn is_content(line: &str) -> bool {
    !matches!(classify(line), LineKind::Blank | LineKind::Comment)
}

/// Whether a line is a comment introduced by `marker`.
pub fn is_comment_with(line: &str, marker: char) -> bool {
    trim_blanks(line).starts_with(marker)
}

/// Split a `key=value` line at the first `=`, trimming both tokens.
///
/// Returns `None` when there is no `=` or the key is empty.
pub fn split_entry(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value.trim()))
}

/// Extract the name of a `[name]` header: the text between the first `[`
/// and the first `]`, trimmed. Returns `None` when there is no closing bracket.
pub fn header_name(line: &str) -> Option<&str> {
    let open = line.find('[')?;
    let close = line.find(']')?;
    if close < open {
        return None;
    }
    Some(line[open + 1..close].trim())
}
