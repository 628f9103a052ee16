// iniline/src/lib.rs

//! Read, query and rewrite INI files in place.
//!
//! This library provides functionality to:
//! - Parse INI text into sections of key/value pairs annotated with the
//!   line each entry was read from
//! - Query values with never-fail getters or fail-fast typed accessors
//! - Write single entries back into the original file, replacing or
//!   inserting only the lines involved and leaving the rest untouched
//!
//! ```no_run
//! fn main() -> Result<(), iniline::IniError> {
//!     let mut ini = iniline::IniManager::open("config.ini")?;
//!     ini.set("rtsp", "port", "554", "listen port")?;
//!     assert_eq!(ini.get_int("rtsp", "port"), 554);
//!     Ok(())
//! }
//! ```

pub mod access;
pub mod convert;
pub mod error;
pub mod filter;
pub mod manager;
pub mod model;
pub mod options;
pub mod parser;
pub mod rewrite;

use std::path::Path;

pub use access::ValueRef;
pub use convert::IniValue;
pub use error::{IniError, Result};
pub use manager::IniManager;
pub use model::{Document, Section, ValueNode};
pub use options::WriteOptions;
pub use rewrite::{Edit, Placement};

/// Parse an INI file from a path.
///
/// # Examples
///
/// ```no_run
/// fn main() -> Result<(), iniline::IniError> {
///     let doc = iniline::read("config.ini")?;
///     println!("{:?}", doc.section_names());
///     Ok(())
/// }
/// ```
pub fn read<P: AsRef<Path>>(path: P) -> Result<Document> {
    let contents = fs_err::read_to_string(path.as_ref())?;
    Ok(reads(&contents))
}

/// Parse INI text.
///
/// # Examples
///
/// ```
/// let doc = iniline::reads("[rtsp]\nport=554\n");
/// assert_eq!(doc.value("rtsp", "port"), Some("554"));
/// ```
pub fn reads(content: &str) -> Document {
    parser::parse(content)
}

#[cfg(feature = "json")]
/// Convert a document, including source line numbers, to a JSON string.
pub fn to_json(doc: &Document) -> Result<String> {
    serde_json::to_string_pretty(doc).map_err(IniError::from)
}
