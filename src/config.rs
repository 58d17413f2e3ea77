//! Formatting configuration supplied by the host
//!
//! `FormatConfig` is immutable per render: the host constructs (or
//! deserializes) one and hands it to the field. Invalid settings are
//! clamped rather than rejected, so parse/format stay total functions.

use serde::{Deserialize, Serialize};

/// Highest number of fractional digits the engine will retain.
///
/// Values outside `0..=MAX_DECIMAL_LIMIT` are silently clamped into range.
pub const MAX_DECIMAL_LIMIT: u8 = 15;

/// Formatting configuration for a numeric input field
///
/// All fields have sensible defaults (`,` grouping, `.` decimal point,
/// two fractional digits, negatives disallowed, step of 1), so hosts can
/// use struct-update syntax:
///
/// ```
/// use numfield::FormatConfig;
///
/// let config = FormatConfig {
///     decimal_limit: 3,
///     allow_negative: true,
///     ..FormatConfig::default()
/// };
/// assert_eq!(config.thousand_separator, ',');
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Separator inserted every three digits in the integer part
    pub thousand_separator: char,

    /// Separator between integer and fractional parts
    pub decimal_separator: char,

    /// Max digits kept after the decimal separator (clamped to 0..=15)
    pub decimal_limit: u8,

    /// Whether a leading `-` is honored (when false the sign is discarded)
    pub allow_negative: bool,

    /// Lower bound applied to arrow-key stepping
    pub min: Option<f64>,

    /// Upper bound applied to arrow-key stepping
    pub max: Option<f64>,

    /// Increment applied by the Up/Down arrow keys
    pub step: f64,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            thousand_separator: ',',
            decimal_separator: '.',
            decimal_limit: 2,
            allow_negative: false,
            min: None,
            max: None,
            step: 1.0,
        }
    }
}

impl FormatConfig {
    /// Decimal limit clamped into the supported range
    pub fn effective_decimal_limit(&self) -> usize {
        self.decimal_limit.min(MAX_DECIMAL_LIMIT) as usize
    }

    /// Thousand separator, unless it collides with the decimal separator.
    ///
    /// When both separators are configured to the same character the decimal
    /// separator wins and grouping is suppressed, so the two roles can never
    /// be confused while scanning.
    pub fn grouping_separator(&self) -> Option<char> {
        if self.thousand_separator == self.decimal_separator {
            None
        } else {
            Some(self.thousand_separator)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = FormatConfig::default();
        assert_eq!(config.thousand_separator, ',');
        assert_eq!(config.decimal_separator, '.');
        assert_eq!(config.decimal_limit, 2);
        assert!(!config.allow_negative);
        assert_eq!(config.step, 1.0);
        assert!(config.min.is_none());
        assert!(config.max.is_none());
    }

    #[test]
    fn decimal_limit_is_clamped() {
        let config = FormatConfig {
            decimal_limit: 99,
            ..FormatConfig::default()
        };
        assert_eq!(config.effective_decimal_limit(), 15);
    }

    #[test]
    fn equal_separators_suppress_grouping() {
        let config = FormatConfig {
            thousand_separator: '.',
            decimal_separator: '.',
            ..FormatConfig::default()
        };
        assert_eq!(config.grouping_separator(), None);

        let config = FormatConfig::default();
        assert_eq!(config.grouping_separator(), Some(','));
    }
}
