// iniline/src/model/document.rs

//! The whole-file model: sections keyed by name.

use super::section::Section;
use linked_hash_map::LinkedHashMap;
use serde::Serialize;

/// Parsed INI file. Sections keep the order in which they first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    sections: LinkedHashMap<String, Section>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a section, merging into an existing one with the same name.
    pub fn add_section(&mut self, section: Section) {
        if let Some(existing) = self.sections.get_mut(section.name()) {
            existing.append(section);
            return;
        }
        self.sections.insert(section.name().to_string(), section);
    }

    /// Drop a section from the model. The file is not touched.
    pub fn remove_section(&mut self, name: &str) -> Option<Section> {
        self.sections.remove(name)
    }

    pub fn is_section_exists(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    pub fn is_key_exist(&self, section: &str, key: &str) -> bool {
        self.section(section)
            .map_or(false, |section| section.is_key_exist(key))
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.get_mut(name)
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    /// Names of all known sections, in file order.
    ///
    /// The unnamed section only exists once it holds entries, so it never
    /// shows up here empty.
    pub fn section_names(&self) -> Vec<String> {
        self.sections.keys().cloned().collect()
    }

    pub fn value(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section)?.value(key)
    }

    pub fn line_of(&self, section: &str, key: &str) -> Option<usize> {
        self.section(section)?.line_of(key)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn clear(&mut self) {
        self.sections.clear();
    }
}
