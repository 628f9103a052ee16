// iniline/src/manager.rs

//! File-backed facade tying the parser and the rewrite engine together.
//!
//! Every mutation goes through the file: the manager reparses, computes the
//! new text, atomically replaces the file and reparses again. The in-memory
//! document is never patched directly.

use crate::access::ValueRef;
use crate::convert::{self, IniValue};
use crate::error::{IniError, Result};
use crate::model::{Document, Section};
use crate::options::WriteOptions;
use crate::parser;
use crate::rewrite::{self, Edit, Placement};
use linked_hash_map::LinkedHashMap;
use log::debug;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tempfile::NamedTempFile;

/// Owns the path of an INI file and the document parsed from it.
#[derive(Debug, Default)]
pub struct IniManager {
    path: Option<PathBuf>,
    document: Document,
    options: WriteOptions,
}

impl IniManager {
    /// Create a manager with no file bound yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind to `path` and parse it. A missing file is treated as empty and
    /// is created by the first successful `set`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut manager = Self::new();
        manager.set_file_name(path);
        manager.parse()?;
        Ok(manager)
    }

    pub fn with_options(mut self, options: WriteOptions) -> Self {
        self.options = options;
        self
    }

    /// Bind to a different file. Call [`parse`](Self::parse) to load it.
    pub fn set_file_name<P: AsRef<Path>>(&mut self, path: P) {
        self.path = Some(path.as_ref().to_path_buf());
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn options(&self) -> &WriteOptions {
        &self.options
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Rebuild the document from disk. On failure the previous document is
    /// kept.
    pub fn parse(&mut self) -> Result<()> {
        let (_, document) = self.load()?;
        self.document = document;
        Ok(())
    }

    fn bound_path(&self) -> Result<&Path> {
        self.path.as_deref().ok_or(IniError::NoFileBound)
    }

    fn read_source(&self) -> Result<String> {
        let path = self.bound_path()?;
        match fs_err::read_to_string(path) {
            Ok(text) => Ok(text),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("{} does not exist yet, treating as empty", path.display());
                Ok(String::new())
            }
            Err(err) => Err(err.into()),
        }
    }

    fn load(&self) -> Result<(String, Document)> {
        let text = self.read_source()?;
        let document = parser::parse(&text);
        Ok((text, document))
    }

    /// Write `text` to a temporary file next to the target and rename it
    /// into place. An existing target's permissions carry over.
    fn persist(&self, text: &str) -> Result<()> {
        let path = self.bound_path()?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(text.as_bytes())?;
        temp.flush()?;
        if let Ok(metadata) = fs_err::metadata(path) {
            temp.as_file().set_permissions(metadata.permissions())?;
        }
        temp.persist(path)?;
        debug!("wrote {} byte(s) to {}", text.len(), path.display());
        Ok(())
    }

    pub fn is_section_exists(&self, name: &str) -> bool {
        self.document.is_section_exists(name)
    }

    pub fn is_key_exist(&self, section: &str, key: &str) -> bool {
        self.document.is_key_exist(section, key)
    }

    /// Names of all sections; includes `""` only when the unnamed section
    /// has entries.
    pub fn sections_list(&self) -> Vec<String> {
        self.document.section_names()
    }

    /// Snapshot of a section's entries, empty if the section is unknown.
    pub fn section_map(&self, name: &str) -> LinkedHashMap<String, String> {
        self.document
            .section(name)
            .map(Section::to_map)
            .unwrap_or_default()
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.document.section(name)
    }

    /// Fail-fast lookup of a single value.
    pub fn value<'a>(&'a self, section: &'a str, key: &'a str) -> Result<ValueRef<'a>> {
        self.document
            .section(section)
            .ok_or_else(|| IniError::SectionNotFound {
                section: section.to_string(),
            })?
            .entry(key)
    }

    /// Fail-fast lookup parsed into `T`.
    pub fn get<T: FromStr>(&self, section: &str, key: &str) -> Result<T> {
        self.value(section, key)?.parse()
    }

    pub fn get_string(&self, section: &str, key: &str) -> String {
        self.document
            .section(section)
            .map(|s| s.get_string(key))
            .unwrap_or_default()
    }

    pub fn get_int(&self, section: &str, key: &str) -> i64 {
        self.document.section(section).map_or(0, |s| s.get_int(key))
    }

    pub fn get_double(&self, section: &str, key: &str) -> f64 {
        self.document
            .section(section)
            .map_or(0.0, |s| s.get_double(key))
    }

    /// Write `key=value` into `section`, optionally preceded by a comment.
    ///
    /// Invalid entries are rejected before the file is touched. On success
    /// the file has been replaced and the document reflects its new content.
    pub fn set(&mut self, section: &str, key: &str, value: &str, comment: &str) -> Result<Placement> {
        let edit = Edit::new(section, key, value).with_comment(comment);
        edit.validate()?;

        let (original, document) = self.load()?;
        let rewrite = rewrite::rewrite(&original, &document, &edit, &self.options)?;
        self.persist(&rewrite.text)?;
        self.parse()?;
        Ok(rewrite.placement)
    }

    /// Stringify `value` and [`set`](Self::set) it.
    pub fn set_value<V: IniValue + ?Sized>(
        &mut self,
        section: &str,
        key: &str,
        value: &V,
        comment: &str,
    ) -> Result<Placement> {
        self.set(section, key, &value.to_ini_string(), comment)
    }

    /// Decode UTF-16 `value` and [`set`](Self::set) it.
    pub fn set_wide(
        &mut self,
        section: &str,
        key: &str,
        value: &[u16],
        comment: &str,
    ) -> Result<Placement> {
        let value = convert::from_wide(value).ok_or_else(|| IniError::Utf16 {
            section: section.to_string(),
            key: key.to_string(),
        })?;
        self.set(section, key, &value, comment)
    }

    /// Replace the comment above `key`, rewriting the key with its current
    /// value.
    pub fn set_comment(&mut self, section: &str, key: &str, comment: &str) -> Result<Placement> {
        self.parse()?;
        let value = self.get_string(section, key);
        self.set(section, key, &value, comment)
    }

    /// [`set_comment`](Self::set_comment) for a key in the unnamed section.
    pub fn set_unnamed_comment(&mut self, key: &str, comment: &str) -> Result<Placement> {
        self.set_comment("", key, comment)
    }
}
