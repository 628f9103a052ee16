// iniline/src/model/section.rs

//! Section data structure and typed getters.

use crate::convert;
use linked_hash_map::LinkedHashMap;
use serde::Serialize;

/// A stored value and the 1-based line it was read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueNode {
    pub value: String,
    /// `None` until the value has been read back from disk
    pub source_line: Option<usize>,
}

impl ValueNode {
    pub fn new<S: Into<String>>(value: S, source_line: Option<usize>) -> Self {
        Self {
            value: value.into(),
            source_line,
        }
    }
}

/// One `[name]` block. The empty name is the unnamed section holding the
/// entries that precede any header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Section {
    name: String,
    header_line: Option<usize>,
    entries: LinkedHashMap<String, ValueNode>,
}

impl Section {
    /// Create an empty section with no header line.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            header_line: None,
            entries: LinkedHashMap::new(),
        }
    }

    /// Create an empty section whose header was read at `line`.
    pub fn with_header<S: Into<String>>(name: S, line: usize) -> Self {
        Self {
            header_line: Some(line),
            ..Self::new(name)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn header_line(&self) -> Option<usize> {
        self.header_line
    }

    /// Whether this is the unnamed section.
    pub fn is_unnamed(&self) -> bool {
        self.name.is_empty()
    }

    /// Insert or overwrite an entry. An existing key keeps its position.
    pub fn set_value<K, V>(&mut self, key: K, value: V, line: Option<usize>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        let node = ValueNode::new(value, line);
        match self.entries.get_mut(&key) {
            Some(existing) => *existing = node,
            None => {
                self.entries.insert(key, node);
            }
        }
    }

    /// Union `other` into this section. Colliding keys take `other`'s value.
    pub fn append(&mut self, other: Section) {
        for (key, node) in other.entries {
            match self.entries.get_mut(&key) {
                Some(existing) => *existing = node,
                None => {
                    self.entries.insert(key, node);
                }
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&ValueNode> {
        self.entries.get(key)
    }

    /// Raw stored text for a key.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|node| node.value.as_str())
    }

    pub fn is_key_exist(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Line on which `key` was read.
    pub fn line_of(&self, key: &str) -> Option<usize> {
        self.entries.get(key).and_then(|node| node.source_line)
    }

    /// Last line that belongs to this section: the highest entry line, or
    /// the header line when the section has no entries on disk.
    pub fn end_line(&self) -> Option<usize> {
        self.entries
            .values()
            .filter_map(|node| node.source_line)
            .max()
            .or(self.header_line)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over `(key, value)` pairs in file order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, node)| (key.as_str(), node.value.as_str()))
    }

    /// Snapshot of the section as a plain key/value map.
    pub fn to_map(&self) -> LinkedHashMap<String, String> {
        self.entries
            .iter()
            .map(|(key, node)| (key.clone(), node.value.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// String value, or `""` when the key is missing.
    pub fn get_string(&self, key: &str) -> String {
        self.value(key).unwrap_or_default().to_string()
    }

    /// Integer value, or `0` when missing or not a number.
    pub fn get_int(&self, key: &str) -> i64 {
        self.value(key)
            .and_then(convert::parse_int_lenient)
            .unwrap_or(0)
    }

    /// Floating-point value, or `0.0` when missing or not a number.
    pub fn get_double(&self, key: &str) -> f64 {
        self.value(key).and_then(convert::parse_float).unwrap_or(0.0)
    }
}
