//! Hand-written numeric scanner
//!
//! An anchored prefix scan over the raw input, parameterized by the
//! configured separator characters. Because no pattern is ever compiled,
//! separators that happen to be regex metacharacters (`.`, `$`, `*`, ...)
//! need no escaping and cannot be misinterpreted.
//!
//! Grammar, matched greedily from the start of the string:
//!
//! ```text
//! [+|-] (digit | thousand-sep)* [decimal-sep] digit* [k|m|b|t]
//! ```
//!
//! Anything after the matched prefix is ignored, which is what keeps
//! mid-edit garbage ("1kk", "12x") from poisoning the whole parse.

use crate::config::FormatConfig;

/// Power-of-ten abbreviation suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Suffix {
    Kilo,
    Million,
    Billion,
    Trillion,
}

impl Suffix {
    /// Case-insensitive suffix letter lookup
    pub(crate) fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'k' => Some(Self::Kilo),
            'm' => Some(Self::Million),
            'b' => Some(Self::Billion),
            't' => Some(Self::Trillion),
            _ => None,
        }
    }

    /// Power of ten this suffix multiplies by
    pub(crate) fn power(self) -> i32 {
        match self {
            Self::Kilo => 3,
            Self::Million => 6,
            Self::Billion => 9,
            Self::Trillion => 12,
        }
    }
}

/// Result of scanning the numeric prefix of an input string
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Scan {
    /// Leading `-` was present
    pub(crate) negative: bool,
    /// Integer digits with thousand separators already stripped
    pub(crate) int_digits: String,
    /// Fractional digits (after the decimal separator)
    pub(crate) frac_digits: String,
    /// At most one abbreviation letter, consumed right after the number
    pub(crate) suffix: Option<Suffix>,
}

impl Scan {
    /// No digits at all on either side of the decimal separator
    pub(crate) fn is_digitless(&self) -> bool {
        self.int_digits.is_empty() && self.frac_digits.is_empty()
    }
}

/// Scan the numeric prefix of `text`.
///
/// Returns `None` only when the input contributes nothing numeric at all
/// (no sign, no digit, no separator, no suffix at the front).
pub(crate) fn scan(text: &str, config: &FormatConfig) -> Option<Scan> {
    let decimal_sep = config.decimal_separator;
    let grouping_sep = config.grouping_separator();

    let mut chars = text.chars().peekable();
    let mut consumed = false;

    let negative = match chars.peek() {
        Some('-') => {
            chars.next();
            consumed = true;
            true
        }
        Some('+') => {
            chars.next();
            consumed = true;
            false
        }
        _ => false,
    };

    let mut int_digits = String::new();
    let mut frac_digits = String::new();
    let mut in_fraction = false;
    let mut suffix = None;

    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() {
            if in_fraction {
                frac_digits.push(c);
            } else {
                int_digits.push(c);
            }
        } else if !in_fraction && Some(c) == grouping_sep {
            // Thousand separators are permitted (and dropped) anywhere in
            // the integer part; the user may paste pre-formatted text.
        } else if !in_fraction && c == decimal_sep {
            in_fraction = true;
        } else if let Some(s) = Suffix::from_char(c) {
            suffix = Some(s);
            chars.next();
            break;
        } else {
            break;
        }
        chars.next();
        consumed = true;
    }

    if !consumed && suffix.is_none() {
        return None;
    }

    Some(Scan {
        negative,
        int_digits,
        frac_digits,
        suffix,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_default(text: &str) -> Option<Scan> {
        scan(text, &FormatConfig::default())
    }

    #[test]
    fn scans_plain_integer() {
        let s = scan_default("1234").unwrap();
        assert_eq!(s.int_digits, "1234");
        assert_eq!(s.frac_digits, "");
        assert!(!s.negative);
        assert_eq!(s.suffix, None);
    }

    #[test]
    fn strips_thousand_separators() {
        let s = scan_default("1,234,567.89").unwrap();
        assert_eq!(s.int_digits, "1234567");
        assert_eq!(s.frac_digits, "89");
    }

    #[test]
    fn scans_sign_and_suffix() {
        let s = scan_default("-2.5k").unwrap();
        assert!(s.negative);
        assert_eq!(s.int_digits, "2");
        assert_eq!(s.frac_digits, "5");
        assert_eq!(s.suffix, Some(Suffix::Kilo));
    }

    #[test]
    fn suffix_is_case_insensitive() {
        assert_eq!(scan_default("1K").unwrap().suffix, Some(Suffix::Kilo));
        assert_eq!(scan_default("1M").unwrap().suffix, Some(Suffix::Million));
        assert_eq!(scan_default("1b").unwrap().suffix, Some(Suffix::Billion));
        assert_eq!(scan_default("1T").unwrap().suffix, Some(Suffix::Trillion));
    }

    #[test]
    fn suffix_consumed_at_most_once() {
        // "1kk": the first k terminates the scan, the second is trailing trash.
        let s = scan_default("1kk").unwrap();
        assert_eq!(s.int_digits, "1");
        assert_eq!(s.suffix, Some(Suffix::Kilo));
    }

    #[test]
    fn trailing_garbage_is_ignored() {
        let s = scan_default("12.5 apples").unwrap();
        assert_eq!(s.int_digits, "12");
        assert_eq!(s.frac_digits, "5");
        assert_eq!(s.suffix, None);
    }

    #[test]
    fn non_numeric_input_scans_to_none() {
        assert!(scan_default("").is_none());
        assert!(scan_default("apples").is_none());
    }

    #[test]
    fn suffix_without_digits_is_digitless() {
        let s = scan_default("k").unwrap();
        assert!(s.is_digitless());
        assert_eq!(s.suffix, Some(Suffix::Kilo));
    }

    #[test]
    fn metacharacter_separators_are_safe() {
        // '.' grouping with ',' decimal (continental style): both are regex
        // metacharacters in the original implementation, here just chars.
        let config = FormatConfig {
            thousand_separator: '.',
            decimal_separator: ',',
            ..FormatConfig::default()
        };
        let s = scan("1.234.567,89", &config).unwrap();
        assert_eq!(s.int_digits, "1234567");
        assert_eq!(s.frac_digits, "89");

        let config = FormatConfig {
            thousand_separator: '$',
            decimal_separator: '*',
            ..FormatConfig::default()
        };
        let s = scan("1$234*5", &config).unwrap();
        assert_eq!(s.int_digits, "1234");
        assert_eq!(s.frac_digits, "5");
    }

    #[test]
    fn second_decimal_separator_ends_the_scan() {
        let s = scan_default("12.5.6").unwrap();
        assert_eq!(s.int_digits, "12");
        assert_eq!(s.frac_digits, "5");
    }
}
