// iniline/src/rewrite.rs

//! Line-preserving rewrite engine.
//!
//! Given the original text, the document parsed from that same text and an
//! [`Edit`], this module produces the new file contents. Only the targeted
//! line (plus an adjoining comment line) changes; everything else is copied
//! through in order. Writing the result to disk is the manager's job.

use crate::error::{IniError, Result};
use crate::filter;
use crate::model::Document;
use crate::options::WriteOptions;
use log::debug;

/// Characters that cannot appear in a header we write ourselves.
const HEADER_SPECIAL_CHARS: [char; 3] = ['[', ']', '='];

/// A single `set` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edit<'a> {
    pub section: &'a str,
    pub key: &'a str,
    pub value: &'a str,
    /// Empty for no comment
    pub comment: &'a str,
}

impl<'a> Edit<'a> {
    pub fn new(section: &'a str, key: &'a str, value: &'a str) -> Self {
        Self {
            section,
            key,
            value,
            comment: "",
        }
    }

    pub fn with_comment(mut self, comment: &'a str) -> Self {
        self.comment = comment;
        self
    }

    /// Reject edits that would produce an unreadable or ambiguous line.
    pub fn validate(&self) -> Result<()> {
        let reject = |reason| Err(IniError::invalid_entry(self.section, self.key, reason));

        if self.key.trim().is_empty() {
            return reject("empty key");
        }
        if self.value.trim().is_empty() {
            return reject("empty value");
        }
        if self.key.contains('=') {
            return reject("key contains '='");
        }
        if let Some(first) = self.key.trim().chars().next() {
            if first == '[' || filter::COMMENT_CHARS.contains(&first) {
                return reject("key would read back as a comment or header");
            }
        }
        let breaks = |s: &str| s.contains(['\n', '\r']);
        if breaks(self.section) || breaks(self.key) || breaks(self.value) || breaks(self.comment) {
            return reject("line break in entry");
        }
        Ok(())
    }

    /// The line(s) injected for this edit: optional comment, then `key=value`.
    fn compose(&self, options: &WriteOptions) -> Vec<String> {
        let mut lines = Vec::with_capacity(2);
        if !self.comment.is_empty() {
            lines.push(options.comment_line(self.comment));
        }
        lines.push(format!("{}={}", self.key.trim(), self.value.trim()));
        lines
    }
}

/// Where an edit landed in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The key's existing line was replaced
    Replaced { line: usize },
    /// The key was added after the last line of its existing section
    AppendedToSection { after: usize },
    /// The key was added to the unnamed section at the head of the file
    UnnamedAtHead,
    /// A new `[section]` block was appended at the end of the file
    NewSectionAtEnd,
    /// The section name cannot be written as a header; the key was
    /// appended at the end without one
    HeaderlessAtEnd,
}

/// Result of planning an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub text: String,
    pub placement: Placement,
}

/// Whether `name` can be written between brackets and read back unchanged.
pub fn is_valid_section_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(HEADER_SPECIAL_CHARS)
}

/// Apply `edit` to `original`, using `document` (parsed from `original`)
/// to locate lines.
pub fn rewrite(
    original: &str,
    document: &Document,
    edit: &Edit<'_>,
    options: &WriteOptions,
) -> Result<Rewrite> {
    edit.validate()?;
    let injected = edit.compose(options);
    let key = edit.key.trim();
    let section_name = edit.section.trim();

    let rewrite = match document.section(section_name) {
        Some(section) => match section.line_of(key) {
            Some(line) => replace_line(original, line, &injected, !edit.comment.is_empty(), options),
            None => match section.end_line() {
                Some(end) => insert_after(original, end, &injected),
                None => append_at_end(original, &[], &injected, Placement::HeaderlessAtEnd),
            },
        },
        None if section_name.is_empty() => insert_at_head(original, &injected),
        None if is_valid_section_name(section_name) => {
            let mut header = Vec::with_capacity(2);
            if options.separate_sections && !document.is_empty() {
                header.push(String::new());
            }
            header.push(format!("[{}]", section_name));
            append_at_end(original, &header, &injected, Placement::NewSectionAtEnd)
        }
        None => append_at_end(original, &[], &injected, Placement::HeaderlessAtEnd),
    };

    debug!("rewrite [{section_name}] {key}: {:?}", rewrite.placement);
    Ok(rewrite)
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

/// Case A: swap line `target` for the injected lines. When a comment is
/// being written, a comment directly above the target is dropped.
fn replace_line(
    original: &str,
    target: usize,
    injected: &[String],
    drop_old_comment: bool,
    options: &WriteOptions,
) -> Rewrite {
    let mut text = String::with_capacity(original.len() + 64);

    for (index, line) in original.lines().enumerate() {
        let line_number = index + 1;
        if drop_old_comment
            && line_number + 1 == target
            && filter::is_comment_with(line, options.comment_marker)
        {
            continue;
        }
        if line_number == target {
            for new_line in injected {
                push_line(&mut text, new_line);
            }
        } else {
            push_line(&mut text, line);
        }
    }

    Rewrite {
        text,
        placement: Placement::Replaced { line: target },
    }
}

/// Case B: inject right after line `end`, or at EOF if the file is shorter.
fn insert_after(original: &str, end: usize, injected: &[String]) -> Rewrite {
    let mut text = String::with_capacity(original.len() + 64);
    let mut done = false;

    for (index, line) in original.lines().enumerate() {
        push_line(&mut text, line);
        if index + 1 == end {
            for new_line in injected {
                push_line(&mut text, new_line);
            }
            done = true;
        }
    }

    if !done {
        for new_line in injected {
            push_line(&mut text, new_line);
        }
    }

    Rewrite {
        text,
        placement: Placement::AppendedToSection { after: end },
    }
}

/// Case C, unnamed section: new entries go before everything else.
fn insert_at_head(original: &str, injected: &[String]) -> Rewrite {
    let mut text = String::with_capacity(original.len() + 64);
    for new_line in injected {
        push_line(&mut text, new_line);
    }
    for line in original.lines() {
        push_line(&mut text, line);
    }

    Rewrite {
        text,
        placement: Placement::UnnamedAtHead,
    }
}

/// Case C, named section: copy the file, then the header (if any) and the
/// injected lines.
fn append_at_end(
    original: &str,
    header: &[String],
    injected: &[String],
    placement: Placement,
) -> Rewrite {
    let mut text = String::with_capacity(original.len() + 64);
    for line in original.lines().chain(header.iter().map(String::as_str)) {
        push_line(&mut text, line);
    }
    for new_line in injected {
        push_line(&mut text, new_line);
    }

    Rewrite { text, placement }
}
