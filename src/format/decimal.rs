//! Bounded fixed-point decimal representation
//!
//! The formatting engine never multiplies floats: abbreviation suffixes and
//! precision limits are applied as exact operations on a digit string with a
//! scale, so `"999999999k"` expands without intermediate rounding. The value
//! represented is `±digits × 10^-scale`.

/// A decimal number as a digit string plus a scale.
///
/// `digits` holds ASCII digits with no leading zeros (an empty string is
/// zero); `scale` counts how many of those digits sit right of the decimal
/// point. A negative scale means trailing integer zeros, e.g. digits `"25"`
/// with scale `-2` is `2500`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Decimal {
    negative: bool,
    digits: String,
    scale: i32,
}

impl Decimal {
    /// Build from already-scanned digit runs (`int_digits` left of the
    /// point, `frac_digits` right of it). Both must be pure ASCII digits.
    pub(crate) fn from_parts(negative: bool, int_digits: &str, frac_digits: &str) -> Self {
        let mut digits = String::with_capacity(int_digits.len() + frac_digits.len());
        digits.push_str(int_digits);
        digits.push_str(frac_digits);
        Self {
            negative,
            digits,
            scale: frac_digits.len() as i32,
        }
        .normalized()
    }

    /// Parse a fixed-point or scientific (`1.5e3`) decimal string.
    ///
    /// Returns `None` when the string is not wholly numeric. The whole
    /// string must match; this is stricter than the input scanner because
    /// it only ever sees machine-produced values.
    pub(crate) fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let mut chars = s.chars().peekable();

        let negative = match chars.peek() {
            Some('-') => {
                chars.next();
                true
            }
            Some('+') => {
                chars.next();
                false
            }
            _ => false,
        };

        let mut int_digits = String::new();
        let mut frac_digits = String::new();
        let mut in_fraction = false;
        let mut seen_digit = false;
        let mut exponent: i32 = 0;

        while let Some(c) = chars.next() {
            match c {
                '0'..='9' => {
                    seen_digit = true;
                    if in_fraction {
                        frac_digits.push(c);
                    } else {
                        int_digits.push(c);
                    }
                }
                '.' if !in_fraction => in_fraction = true,
                'e' | 'E' if seen_digit => {
                    let rest: String = chars.collect();
                    exponent = rest.parse().ok()?;
                    break;
                }
                _ => return None,
            }
        }

        if !seen_digit {
            return None;
        }

        let mut dec = Self::from_parts(negative, &int_digits, &frac_digits);
        dec.shift(exponent);
        Some(dec)
    }

    /// Exact multiplication by 10^`power` (the exponent-safe multiply).
    pub(crate) fn shift(&mut self, power: i32) {
        self.scale -= power;
    }

    /// Number of retained fractional digits.
    pub(crate) fn fraction_len(&self) -> usize {
        self.scale.max(0) as usize
    }

    /// Drop fractional digits beyond `limit`. Truncation, never rounding.
    pub(crate) fn truncate(&mut self, limit: usize) {
        let limit = limit as i32;
        if self.scale <= limit {
            return;
        }
        let drop = (self.scale - limit) as usize;
        if drop >= self.digits.len() {
            self.digits.clear();
        } else {
            let keep = self.digits.len() - drop;
            self.digits.truncate(keep);
        }
        self.scale = limit;
    }

    pub(crate) fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Render without exponent notation. Zero renders as `"0"` regardless
    /// of sign; fractions below one get a leading `0`.
    pub(crate) fn to_fixed_string(&self) -> String {
        if self.is_zero() {
            return "0".to_string();
        }

        let mut s = self.digits.clone();
        if self.scale <= 0 {
            // Pure integer, possibly with trailing zeros to restore.
            for _ in 0..(-self.scale) {
                s.push('0');
            }
        } else {
            let scale = self.scale as usize;
            if scale >= s.len() {
                let mut padded = String::from("0.");
                for _ in 0..(scale - s.len()) {
                    padded.push('0');
                }
                padded.push_str(&s);
                s = padded;
            } else {
                let point = s.len() - scale;
                s.insert(point, '.');
            }
        }

        if self.negative {
            s.insert(0, '-');
        }
        s
    }

    /// Strip leading zeros so the digit-count invariant holds.
    fn normalized(mut self) -> Self {
        let zeros = self.digits.bytes().take_while(|&b| b == b'0').count();
        if zeros > 0 {
            self.digits.drain(..zeros);
        }
        // All-zero input collapses to canonical zero.
        if self.digits.is_empty() {
            self.scale = self.scale.max(0);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Decimal {
        Decimal::parse(s).unwrap()
    }

    #[test]
    fn parses_fixed_point() {
        assert_eq!(parse("1234").to_fixed_string(), "1234");
        assert_eq!(parse("12.34").to_fixed_string(), "12.34");
        assert_eq!(parse("-0.5").to_fixed_string(), "-0.5");
        assert_eq!(parse("+7").to_fixed_string(), "7");
        assert_eq!(parse("0.001").to_fixed_string(), "0.001");
    }

    #[test]
    fn parses_scientific_notation() {
        assert_eq!(parse("1.5e3").to_fixed_string(), "1500");
        assert_eq!(parse("2e-3").to_fixed_string(), "0.002");
        assert_eq!(parse("-9.99e2").to_fixed_string(), "-999");
        assert_eq!(parse("1E2").to_fixed_string(), "100");
    }

    #[test]
    fn rejects_non_numeric() {
        assert!(Decimal::parse("").is_none());
        assert!(Decimal::parse("abc").is_none());
        assert!(Decimal::parse("-").is_none());
        assert!(Decimal::parse("1.2.3").is_none());
        assert!(Decimal::parse("1e").is_none());
    }

    #[test]
    fn shift_is_exact_at_large_magnitudes() {
        // 999999999 * 1000: float multiplication is fine here, but the
        // shift must hold digit-for-digit at any magnitude.
        let mut d = parse("999999999");
        d.shift(3);
        assert_eq!(d.to_fixed_string(), "999999999000");

        let mut d = parse("999999999999.9");
        d.shift(12);
        assert_eq!(d.to_fixed_string(), "999999999999900000000000");
    }

    #[test]
    fn shift_moves_the_point_both_ways() {
        let mut d = parse("2.5");
        d.shift(3);
        assert_eq!(d.to_fixed_string(), "2500");

        let mut d = parse("2500");
        d.shift(-3);
        assert_eq!(d.to_fixed_string(), "2.5");
    }

    #[test]
    fn truncate_drops_without_rounding() {
        let mut d = parse("1.23456");
        d.truncate(2);
        assert_eq!(d.to_fixed_string(), "1.23");

        let mut d = parse("1.999");
        d.truncate(0);
        assert_eq!(d.to_fixed_string(), "1");

        // Fraction entirely below the limit collapses to zero.
        let mut d = parse("0.001");
        d.truncate(2);
        assert_eq!(d.to_fixed_string(), "0");
    }

    #[test]
    fn fraction_len_counts_retained_digits() {
        assert_eq!(parse("12.34").fraction_len(), 2);
        assert_eq!(parse("12").fraction_len(), 0);
        assert_eq!(parse("1e3").fraction_len(), 0);
    }

    #[test]
    fn zero_is_canonical() {
        assert_eq!(parse("0").to_fixed_string(), "0");
        assert_eq!(parse("0.000").to_fixed_string(), "0");
        assert_eq!(parse("-0").to_fixed_string(), "0");
        assert!(parse("000").is_zero());
    }
}
