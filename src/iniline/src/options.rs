// iniline/src/options.rs

//! Options for controlling how edits are written back.

/// Formatting choices for the rewrite engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    /// Marker prepended to comments that do not already start with it.
    /// Also identifies the old comment line replaced by a new one.
    pub comment_marker: char,
    /// Whether to put a blank line before a newly appended section header
    pub separate_sections: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            comment_marker: ';',
            separate_sections: true,
        }
    }
}

impl WriteOptions {
    pub fn with_comment_marker(mut self, marker: char) -> Self {
        self.comment_marker = marker;
        self
    }

    pub fn with_separate_sections(mut self, separate: bool) -> Self {
        self.separate_sections = separate;
        self
    }

    /// Render a comment as a full line, adding the marker when missing.
    pub fn comment_line(&self, comment: &str) -> String {
        if comment.starts_with(self.comment_marker) {
            comment.to_string()
        } else {
            format!("{}{}", self.comment_marker, comment)
        }
    }
}
