//! Raw text → canonical value
//!
//! The parser's only transformation is abbreviation expansion: `"2.5k"`
//! becomes `"2500"`. Everything else passes through trimmed but otherwise
//! untouched (separators intact) for the formatter to clean, mirroring how
//! the field behaves while the user is mid-keystroke.

use tracing::trace;

use crate::config::FormatConfig;
use crate::format::decimal::Decimal;
use crate::format::scanner;

/// Marker returned when a suffix is applied to non-numeric input.
///
/// Downstream cleaning strips it to the empty (malformed) result; it exists
/// so the parser's contract stays "always returns a string".
pub(crate) const NAN_MARKER: &str = "NaN";

/// Normalize raw user text into a canonical decimal string.
///
/// The canonical form uses `.` as the decimal point and carries no thousand
/// separators. Input without an abbreviation suffix is returned trimmed but
/// uncleaned; [`format`](crate::format::format) finishes the job.
///
/// ```
/// use numfield::{parse, FormatConfig};
///
/// let config = FormatConfig::default();
/// assert_eq!(parse("2.5k", &config), "2500");
/// assert_eq!(parse("1b", &config), "1000000000");
/// assert_eq!(parse("1,234", &config), "1,234"); // passthrough
/// ```
pub fn parse(text: &str, config: &FormatConfig) -> String {
    parse_inner(text, config).text
}

/// Parse result carrying whether an abbreviation was expanded.
///
/// Expanded output is in canonical form (`.` decimal point); the formatter
/// needs to know so it can re-localize the separator before splitting.
pub(crate) struct Parsed {
    pub(crate) text: String,
    pub(crate) expanded: bool,
}

pub(crate) fn parse_inner(text: &str, config: &FormatConfig) -> Parsed {
    let trimmed = text.trim();

    // A leading minus recurses on the remainder so the sign survives
    // whatever expansion happens to the magnitude.
    if config.allow_negative {
        if let Some(rest) = trimmed.strip_prefix('-') {
            let inner = parse_inner(rest, config);
            return Parsed {
                text: format!("-{}", inner.text),
                expanded: inner.expanded,
            };
        }
    }

    if let Some(scan) = scanner::scan(trimmed, config) {
        if let Some(suffix) = scan.suffix {
            if scan.is_digitless() {
                // Suffix with nothing to multiply ("k" on its own).
                return Parsed {
                    text: NAN_MARKER.to_string(),
                    expanded: true,
                };
            }
            let mut dec = Decimal::from_parts(scan.negative, &scan.int_digits, &scan.frac_digits);
            dec.shift(suffix.power());
            let text = dec.to_fixed_string();
            trace!(input = trimmed, canonical = %text, "expanded abbreviation");
            return Parsed {
                text,
                expanded: true,
            };
        }
    }

    Parsed {
        text: trimmed.to_string(),
        expanded: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_default(text: &str) -> String {
        parse(text, &FormatConfig::default())
    }

    #[test]
    fn expands_abbreviations() {
        assert_eq!(parse_default("2.5k"), "2500");
        assert_eq!(parse_default("1m"), "1000000");
        assert_eq!(parse_default("1b"), "1000000000");
        assert_eq!(parse_default("3t"), "3000000000000");
    }

    #[test]
    fn fraction_survives_expansion() {
        // 1.2345k keeps sub-unit precision: 1234.5.
        assert_eq!(parse_default("1.2345k"), "1234.5");
    }

    #[test]
    fn expansion_is_exact_at_large_magnitudes() {
        assert_eq!(parse_default("999999999k"), "999999999000");
        assert_eq!(parse_default("999999999t"), "999999999000000000000");
    }

    #[test]
    fn negative_sign_recurses_when_allowed() {
        let config = FormatConfig {
            allow_negative: true,
            ..FormatConfig::default()
        };
        assert_eq!(parse("-2.5k", &config), "-2500");
        assert_eq!(parse("-50", &config), "-50");
    }

    #[test]
    fn suffix_without_digits_yields_nan_marker() {
        assert_eq!(parse_default("k"), NAN_MARKER);
        assert_eq!(parse_default("m"), NAN_MARKER);
    }

    #[test]
    fn passthrough_keeps_separators() {
        assert_eq!(parse_default("1,234.56"), "1,234.56");
        assert_eq!(parse_default("  12  "), "12");
        assert_eq!(parse_default("hello"), "hello");
    }

    #[test]
    fn suffix_consumed_once() {
        // The second k is trailing garbage, not a second multiplier.
        assert_eq!(parse_default("1kk"), "1000");
    }

    #[test]
    fn pasted_grouped_text_expands() {
        assert_eq!(parse_default("1,234k"), "1234000");
    }
}
