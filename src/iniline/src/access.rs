// iniline/src/access.rs

//! Fail-fast value access.
//!
//! The getters on [`Section`] never fail and fall back to zero values.
//! [`ValueRef`] is the strict alternative: a borrowed view of one stored
//! value whose conversions report exactly which entry could not be read.

use crate::convert;
use crate::error::{IniError, Result};
use crate::model::Section;
use std::str::FromStr;

/// A borrowed view of one stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRef<'a> {
    section: &'a str,
    key: &'a str,
    text: &'a str,
}

impl<'a> ValueRef<'a> {
    pub fn section(&self) -> &'a str {
        self.section
    }

    pub fn key(&self) -> &'a str {
        self.key
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }

    pub fn as_string(&self) -> String {
        self.text.to_string()
    }

    pub fn as_int(&self) -> Result<i64> {
        convert::parse_int(self.text).ok_or_else(|| self.conversion_error("integer"))
    }

    pub fn as_float(&self) -> Result<f64> {
        convert::parse_float(self.text).ok_or_else(|| self.conversion_error("float"))
    }

    pub fn as_bool(&self) -> Result<bool> {
        convert::parse_bool(self.text).ok_or_else(|| self.conversion_error("bool"))
    }

    /// UTF-16 encoding of the value.
    pub fn as_wide(&self) -> Vec<u16> {
        convert::to_wide(self.text)
    }

    /// Parse into any `FromStr` type, e.g. `u16` or `std::net::IpAddr`.
    pub fn parse<T: FromStr>(&self) -> Result<T> {
        self.text
            .trim()
            .parse()
            .map_err(|_| self.conversion_error(std::any::type_name::<T>()))
    }

    fn conversion_error(&self, target: &'static str) -> IniError {
        IniError::conversion(self.section, self.key, self.text, target)
    }
}

impl Section {
    /// Look up `key`, failing with [`IniError::KeyNotFound`] when absent.
    pub fn entry<'a>(&'a self, key: &'a str) -> Result<ValueRef<'a>> {
        let text = self
            .value(key)
            .ok_or_else(|| IniError::key_not_found(self.name(), key))?;
        Ok(ValueRef {
            section: self.name(),
            key,
            text,
        })
    }
}
