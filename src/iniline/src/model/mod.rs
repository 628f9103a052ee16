// iniline/src/model/mod.rs

//! In-memory model of an INI file.
//!
//! The model is derived state: it is rebuilt from the file on every parse
//! and records where each entry was found so the rewrite engine can target
//! individual lines.

pub mod document;
pub mod section;

pub use document::Document;
pub use section::{Section, ValueNode};
