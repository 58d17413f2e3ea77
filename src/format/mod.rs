//! Value normalization and formatting engine
//!
//! This module turns free-form numeric text into a canonical decimal value
//! and a separator-formatted display string. It is the core of the crate;
//! the field and widget layers are thin shells around [`format`] and
//! [`parse`].
//!
//! Control flow: raw value → [`parse`] normalizes abbreviations →
//! [`format`] cleans, truncates and groups → `FormatResult` carries the
//! `(raw, numeric, display)` triple back to the host.

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

pub(crate) mod decimal;
mod formatter;
mod parser;
mod scanner;


// ─────────────────────────────────────────────────────────────────────────────
// Re-exports
// ─────────────────────────────────────────────────────────────────────────────

pub use formatter::format;
pub use parser::parse;

// ─────────────────────────────────────────────────────────────────────────────
// Types
// ─────────────────────────────────────────────────────────────────────────────

/// Input accepted by [`format`]: the host may hand either the canonical
/// string it owns or a plain number.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Text, either user-typed or canonical
    Str(String),
    /// A numeric value (stringified through fixed-point, never exponent form)
    Num(f64),
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self {
        Self::Num(v)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&String> for RawValue {
    fn from(s: &String) -> Self {
        Self::Str(s.clone())
    }
}

/// Outcome of one normalization pass
///
/// Invariants: `numeric` is the IEEE-754 parse of `raw`; `display` is `raw`
/// with separators applied and the fraction capped to the configured
/// decimal limit.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatResult {
    /// Canonical value: `.` decimal point, no thousand separators
    pub raw: String,
    /// `raw` parsed as a double (`NaN` for empty, `Infinity` for overflow)
    pub numeric: f64,
    /// Separator-formatted text to show in the field
    pub display: String,
}

impl FormatResult {
    /// Empty result for input with no numeric content
    pub(crate) fn empty() -> Self {
        Self {
            raw: String::new(),
            numeric: f64::NAN,
            display: String::new(),
        }
    }

    /// Sentinel for magnitudes beyond the representable exponent bound
    pub(crate) fn overflow() -> Self {
        Self {
            raw: String::new(),
            numeric: f64::INFINITY,
            display: String::new(),
        }
    }

    /// True when the input had no numeric content at all
    pub fn is_empty(&self) -> bool {
        self.display.is_empty() && self.numeric.is_nan()
    }

    /// True when the value overflowed the representable bound.
    ///
    /// Overflow is reported through the normal change callback, never a
    /// separate error channel; this is the check hosts should make.
    pub fn is_overflow(&self) -> bool {
        self.display.is_empty() && self.numeric.is_infinite()
    }
}
