//! Canonical value → display string
//!
//! One synchronous pass: stringify, truncate precision, expand
//! abbreviations, strip and re-apply separators, guard magnitude, group
//! thousands. Total function: malformed input degrades to the empty result
//! and overflow to the sentinel, never a panic or an `Err`.

use tracing::debug;

use crate::config::FormatConfig;
use crate::format::decimal::Decimal;
use crate::format::parser;
use crate::format::{FormatResult, RawValue};

/// Largest power of ten the engine will represent.
///
/// `f64` keeps a fixed-point shortest rendering up to 1e21; past that the
/// round-trip through a double stops being faithful, so such magnitudes
/// collapse to the overflow sentinel. Each retained fractional digit
/// tightens the bound by one.
const MAX_EXPONENT: i32 = 21;

/// Normalize and format a raw value.
///
/// `initial_load` marks values arriving from the host in canonical form
/// (`.` decimal point) rather than user-typed text: only then is a literal
/// `.` rewritten to the configured decimal separator before cleaning.
///
/// ```
/// use numfield::{format, FormatConfig};
///
/// let config = FormatConfig::default();
/// let res = format("1234567", &config, false);
/// assert_eq!(res.display, "1,234,567");
/// assert_eq!(res.numeric, 1234567.0);
/// assert_eq!(res.raw, "1234567");
/// ```
pub fn format(input: impl Into<RawValue>, config: &FormatConfig, initial_load: bool) -> FormatResult {
    format_raw(input.into(), config, initial_load)
}

fn format_raw(input: RawValue, config: &FormatConfig, initial_load: bool) -> FormatResult {
    let limit = config.effective_decimal_limit();
    let decimal_sep = config.decimal_separator;

    // Stringify to fixed-point form. Numeric input and strings carrying an
    // exponent marker go through Decimal so no exponent notation survives;
    // both come out in canonical form.
    let (text, canonical) = match input {
        RawValue::Num(v) if v.is_nan() => return FormatResult::empty(),
        RawValue::Num(v) if v.is_infinite() => {
            debug!("non-finite host value, degrading to overflow sentinel");
            return FormatResult::overflow();
        }
        RawValue::Num(v) => {
            let Some(mut dec) = Decimal::parse(&v.to_string()) else {
                return FormatResult::empty();
            };
            if dec.fraction_len() > limit {
                dec.truncate(limit);
            }
            (dec.to_fixed_string(), true)
        }
        RawValue::Str(s) => {
            let s = s.trim().to_string();
            match s.contains(['e', 'E']).then(|| Decimal::parse(&s)).flatten() {
                Some(mut dec) => {
                    if dec.fraction_len() > limit {
                        dec.truncate(limit);
                    }
                    (dec.to_fixed_string(), true)
                }
                None => (s, initial_load),
            }
        }
    };

    // Canonical values use '.'; localize it before the separator-aware steps.
    let text = if canonical && decimal_sep != '.' {
        text.replace('.', &decimal_sep.to_string())
    } else {
        text
    };

    // Abbreviation expansion. Expanded output is canonical again.
    let parsed = parser::parse_inner(&text, config);
    let mut cleaned = parsed.text;
    if parsed.expanded && decimal_sep != '.' {
        cleaned = cleaned.replace('.', &decimal_sep.to_string());
    }

    if let Some(grouping_sep) = config.grouping_separator() {
        cleaned = cleaned.replace(grouping_sep, "");
    }

    // Mid-entry state like "12." or "12.0" must survive formatting, or the
    // separator would vanish under the user's cursor.
    let trailing = cleaned.ends_with(decimal_sep)
        || cleaned.ends_with(&format!("{decimal_sep}0"));

    let (int_raw, frac_raw) = match cleaned.split_once(decimal_sep) {
        Some((i, f)) => (i, f),
        None => (cleaned.as_str(), ""),
    };

    // Sign is honored only when negatives are allowed; otherwise it is
    // stripped along with every other non-digit.
    let (negative, mut int_digits) = match int_raw.strip_prefix('-') {
        Some(rest) if config.allow_negative => (true, digits_of(rest)),
        _ => (false, digits_of(int_raw)),
    };

    // "000" and friends render as a single zero.
    if !int_digits.is_empty() && int_digits.bytes().all(|b| b == b'0') {
        int_digits = "0".to_string();
    }

    let mut frac = digits_of(frac_raw);
    frac.truncate(limit);
    let frac_is_zero = frac.bytes().all(|b| b == b'0');

    // Fraction kept in the display: always under the trailing rule (even
    // when empty or "0"), otherwise only when it carries a nonzero value.
    let display_frac = if trailing {
        Some(frac.clone())
    } else if !frac.is_empty() && !frac_is_zero {
        Some(frac.clone())
    } else {
        None
    };

    let has_content =
        negative || trailing || !int_digits.is_empty() || display_frac.is_some();
    if !has_content {
        return FormatResult::empty();
    }

    // A bare fraction still needs an integer part to hang off of.
    if int_digits.is_empty() && display_frac.as_deref().is_some_and(|f| !f.is_empty()) {
        int_digits = "0".to_string();
    }

    // The canonical raw value drops a zero-valued fraction; display may
    // still show it via the trailing rule.
    let raw_frac = (!frac.is_empty() && !frac_is_zero).then_some(frac.as_str());

    // Magnitude guard: the representable exponent bound shrinks by one per
    // retained fractional digit.
    let significant = int_digits.trim_start_matches('0').len() as i32;
    let frac_len = raw_frac.map_or(0, str::len) as i32;
    if significant > MAX_EXPONENT - frac_len {
        debug!(
            int_digits = significant,
            frac_digits = frac_len,
            "magnitude exceeds representable bound, degrading to overflow sentinel"
        );
        return FormatResult::overflow();
    }

    let mut raw = String::new();
    if negative {
        raw.push('-');
    }
    raw.push_str(&int_digits);
    if let Some(f) = raw_frac {
        raw.push('.');
        raw.push_str(f);
    }

    let numeric = if raw.is_empty() {
        f64::NAN
    } else {
        raw.parse().unwrap_or(f64::NAN)
    };
    if numeric.is_infinite() {
        return FormatResult::overflow();
    }

    let grouped = match config.grouping_separator() {
        Some(sep) => group_thousands(&int_digits, sep),
        None => int_digits.clone(),
    };

    let mut display = String::new();
    if negative {
        display.push('-');
    }
    display.push_str(&grouped);
    if let Some(f) = &display_frac {
        display.push(decimal_sep);
        display.push_str(f);
    }

    FormatResult {
        raw,
        numeric,
        display,
    }
}

/// Keep only ASCII digits
fn digits_of(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

/// Insert `sep` every three digits from the right.
///
/// The fractional part never goes through here; grouping applies to the
/// integer digits only.
fn group_thousands(digits: &str, sep: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (count, ch) in digits.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            out.insert(0, sep);
        }
        out.insert(0, ch);
    }
    out
}

#[cfg(test)]
mod grouping_tests {
    use super::group_thousands;

    #[test]
    fn groups_every_three_from_the_right() {
        assert_eq!(group_thousands("1234567", ','), "1,234,567");
        assert_eq!(group_thousands("123", ','), "123");
        assert_eq!(group_thousands("1234", '.'), "1.234");
        assert_eq!(group_thousands("0", ','), "0");
        assert_eq!(group_thousands("", ','), "");
    }
}
