// iniline/src/convert.rs

//! Conversions between stored text and Rust values.
//!
//! Everything stored in an INI file is text. This module parses that text
//! into numbers and booleans, turns Rust values back into text for writing,
//! and converts to and from UTF-16 for callers working with wide strings.

/// Parse an integer, tolerating surrounding whitespace.
pub fn parse_int(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

/// Parse an integer, falling back to truncating a finite float.
///
/// `"3.1415926"` yields `3`. Used by the never-fail getters.
pub fn parse_int_lenient(text: &str) -> Option<i64> {
    parse_int(text).or_else(|| {
        let f = parse_float(text)?;
        if f.is_finite() && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
            Some(f.trunc() as i64)
        } else {
            None
        }
    })
}

/// Parse a floating-point number. Decimal point is always `.`.
pub fn parse_float(text: &str) -> Option<f64> {
    text.trim().parse().ok()
}

/// Parse a boolean.
///
/// `0`, `false` and `no` (any case) are false; every other non-empty text
/// is true. Empty text is not a boolean.
pub fn parse_bool(text: &str) -> Option<bool> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let falsy = text == "0" || text.eq_ignore_ascii_case("false") || text.eq_ignore_ascii_case("no");
    Some(!falsy)
}

/// Encode text as UTF-16 code units.
pub fn to_wide(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}

/// Decode UTF-16 code units. Returns `None` on unpaired surrogates.
pub fn from_wide(units: &[u16]) -> Option<String> {
    char::decode_utf16(units.iter().copied())
        .collect::<Result<String, _>>()
        .ok()
}

/// Values that can be written into an INI file.
///
/// Formatting never depends on locale: integers are plain decimal and
/// floats use Rust's shortest round-trip representation.
pub trait IniValue {
    fn to_ini_string(&self) -> String;
}

impl IniValue for str {
    fn to_ini_string(&self) -> String {
        self.to_string()
    }
}

impl IniValue for String {
    fn to_ini_string(&self) -> String {
        self.clone()
    }
}

impl<T: IniValue + ?Sized> IniValue for &T {
    fn to_ini_string(&self) -> String {
        (**self).to_ini_string()
    }
}

impl IniValue for char {
    fn to_ini_string(&self) -> String {
        self.to_string()
    }
}

impl IniValue for bool {
    fn to_ini_string(&self) -> String {
        let text = if *self { "true" } else { "false" };
        text.to_string()
    }
}

macro_rules! impl_ini_value_display {
    ($($ty:ty),*) => {
        $(
            impl IniValue for $ty {
                fn to_ini_string(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_ini_value_display!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
