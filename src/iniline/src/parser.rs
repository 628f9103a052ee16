// iniline/src/parser.rs

//! Single-pass INI parser that records source line numbers.
//!
//! The parser never fails: malformed headers and lines without `=` are
//! skipped, but every physical line still advances the line counter so
//! recorded positions always match the file.

use crate::filter::{self, LineKind};
use crate::model::{Document, Section};
use log::{debug, trace, warn};

/// Line-numbering parser over borrowed text.
pub struct Parser<'a> {
    input: &'a str,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }

    /// Parse the input into a fresh document.
    pub fn parse(&self) -> Document {
        let mut document = Document::new();
        let mut current = Section::new("");

        for (index, line) in self.input.lines().enumerate() {
            let line_number = index + 1;

            match filter::classify(line) {
                LineKind::Blank | LineKind::Comment => continue,
                LineKind::Header => {
                    let Some(name) = filter::header_name(line) else {
                        warn!("line {line_number}: section header without ']', skipped");
                        continue;
                    };
                    let finished =
                        std::mem::replace(&mut current, Section::with_header(name, line_number));
                    Self::flush(&mut document, finished);
                }
                LineKind::Entry => match filter::split_entry(line) {
                    Some((key, value)) => {
                        trace!("line {line_number}: [{}] {key}={value}", current.name());
                        current.set_value(key, value, Some(line_number));
                    }
                    None => trace!("line {line_number}: entry without key, skipped"),
                },
                LineKind::Other => trace!("line {line_number}: no '=' found, skipped"),
            }
        }

        Self::flush(&mut document, current);
        debug!("parsed {} section(s)", document.len());
        document
    }

    /// Move a finished section into the document unless it is the unnamed
    /// section with nothing in it.
    fn flush(document: &mut Document, section: Section) {
        if section.is_empty() && section.is_unnamed() {
            return;
        }
        trace!(
            "flushing [{}] with {} entr(ies)",
            section.name(),
            section.len()
        );
        document.add_section(section);
    }
}

/// Parse INI text into a document.
pub fn parse(input: &str) -> Document {
    Parser::new(input).parse()
}
