//! Untyped spreadsheet cell values.
//!
//! Uploaded datasets mix numeric and textual spellings of the same concept
//! (`11.2`, `"11.2"`, `"11.2 g/dL"`). [`CellValue`] keeps the original shape and
//! [`CellValue::as_f64`] applies one explicit parsing rule to all of them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single scalar cell from an uploaded dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum CellValue {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl CellValue {
    /// Builds a text cell, collapsing blank text to [`CellValue::Missing`].
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.trim().is_empty() {
            Self::Missing
        } else {
            Self::Text(value)
        }
    }

    /// Returns the numeric reading of this cell.
    ///
    /// - `Number` yields its value when finite.
    /// - `Text` yields the leading decimal literal after trimming, so
    ///   `"11.2 g/dL"` reads as `11.2` while `"bad"` has no value.
    /// - `Missing` never has a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use anemia_model::CellValue;
    ///
    /// assert_eq!(CellValue::Number(12.5).as_f64(), Some(12.5));
    /// assert_eq!(CellValue::text(" 10 ").as_f64(), Some(10.0));
    /// assert_eq!(CellValue::text("9.4 g/dL").as_f64(), Some(9.4));
    /// assert_eq!(CellValue::text("bad").as_f64(), None);
    /// assert_eq!(CellValue::Missing.as_f64(), None);
    /// ```
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => value.is_finite().then_some(*value),
            Self::Text(text) => parse_leading_f64(text),
            Self::Missing => None,
        }
    }

    /// True for numbers and non-blank text.
    pub fn has_value(&self) -> bool {
        match self {
            Self::Number(_) => true,
            Self::Text(text) => !text.trim().is_empty(),
            Self::Missing => false,
        }
    }

    /// Returns the text content, if this is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{}", format_numeric(*value)),
            Self::Text(text) => write!(f, "{text}"),
            Self::Missing => Ok(()),
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::text(value)
    }
}

impl<T> From<Option<T>> for CellValue
where
    T: Into<CellValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

/// Formats a floating-point number as a string without trailing zeros.
///
/// # Examples
///
/// ```
/// use anemia_model::format_numeric;
///
/// assert_eq!(format_numeric(12.0), "12");
/// assert_eq!(format_numeric(11.50), "11.5");
/// assert_eq!(format_numeric(0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Parses the longest leading decimal literal of `value`.
///
/// Accepts an optional sign, digits with an optional fraction, and an optional
/// exponent. Anything after the literal is ignored. Non-finite results are
/// rejected.
pub fn parse_leading_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    let bytes = trimmed.as_bytes();
    let mut end = 0usize;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }
    if digits == 0 {
        return None;
    }
    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    trimmed[..end]
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leading_plain_numbers() {
        assert_eq!(parse_leading_f64("10"), Some(10.0));
        assert_eq!(parse_leading_f64("  -3.25 "), Some(-3.25));
        assert_eq!(parse_leading_f64("+7"), Some(7.0));
        assert_eq!(parse_leading_f64(".5"), Some(0.5));
        assert_eq!(parse_leading_f64("1.2e1"), Some(12.0));
    }

    #[test]
    fn test_parse_leading_ignores_suffix() {
        assert_eq!(parse_leading_f64("11.2 g/dL"), Some(11.2));
        assert_eq!(parse_leading_f64("9abc"), Some(9.0));
        // Dangling exponent marker belongs to the suffix
        assert_eq!(parse_leading_f64("4e"), Some(4.0));
        assert_eq!(parse_leading_f64("4e+x"), Some(4.0));
    }

    #[test]
    fn test_parse_leading_rejects_non_numeric() {
        assert_eq!(parse_leading_f64(""), None);
        assert_eq!(parse_leading_f64("   "), None);
        assert_eq!(parse_leading_f64("bad"), None);
        assert_eq!(parse_leading_f64("-"), None);
        assert_eq!(parse_leading_f64("."), None);
        assert_eq!(parse_leading_f64("NaN"), None);
        assert_eq!(parse_leading_f64("inf"), None);
        assert_eq!(parse_leading_f64("1e999"), None);
    }

    #[test]
    fn test_number_cells() {
        assert_eq!(CellValue::Number(8.0).as_f64(), Some(8.0));
        assert_eq!(CellValue::Number(f64::NAN).as_f64(), None);
        assert_eq!(CellValue::Number(f64::INFINITY).as_f64(), None);
    }

    #[test]
    fn test_blank_text_is_missing() {
        assert_eq!(CellValue::text("  "), CellValue::Missing);
        assert!(!CellValue::Missing.has_value());
        assert!(CellValue::Number(0.0).has_value());
        assert!(CellValue::text("F").has_value());
    }

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Number(12.0).to_string(), "12");
        assert_eq!(CellValue::Number(9.75).to_string(), "9.75");
        assert_eq!(CellValue::text("Mild").to_string(), "Mild");
        assert_eq!(CellValue::Missing.to_string(), "");
    }

    #[test]
    fn test_from_option() {
        assert_eq!(CellValue::from(None::<f64>), CellValue::Missing);
        assert_eq!(CellValue::from(Some("x")), CellValue::Text("x".to_string()));
    }

    #[test]
    fn test_format_numeric() {
        assert_eq!(format_numeric(100.0), "100");
        assert_eq!(format_numeric(-0.0), "-0");
        assert_eq!(format_numeric(1.25), "1.25");
    }
}
