//! Conversions between fixed strings and numbers.
//!
//! Formatting constructors produce the textual form of a value and apply the
//! usual truncation policy when it does not fit: the longest fitting prefix
//! is kept. Parsing is checked and reports failure through
//! [`ParseIntError`] instead of truncating or wrapping.

use core::fmt;

use crate::string::FixedString;

#[cfg(feature = "alloc")]
use alloc::string::String;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// The error type returned when parsing an integer out of a string fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseIntError {
    /// The input contained no digits.
    Empty,
    /// The first character after the optional sign was not a digit in the
    /// requested radix.
    InvalidDigit,
    /// The parsed value does not fit in the target integer type.
    Overflow,
}

impl fmt::Display for ParseIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParseIntError::Empty => "cannot parse integer from empty string",
            ParseIntError::InvalidDigit => "invalid digit found in string",
            ParseIntError::Overflow => "number too large to fit in target type",
        })
    }
}

static DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Writes the digits of `value` into `buf` and returns how many were
/// written. Digits come out least-significant first and are reversed in
/// place at the end.
///
/// `buf` must be large enough for the worst case in the given radix;
/// callers pass a scratch array sized for 128 binary digits plus a sign.
fn emit_digits(buf: &mut [u8], mut value: u128, radix: u128) -> usize {
    if value == 0 {
        buf[0] = b'0';
        return 1;
    }

    let mut pos = 0;
    while value > 0 {
        buf[pos] = DIGITS[(value % radix) as usize];
        value /= radix;
        pos += 1;
    }

    buf[..pos].reverse();
    pos
}

impl<const N: usize> FixedString<N> {
    /// Formats an unsigned integer in decimal.
    ///
    /// # Examples
    /// ```
    /// use fixstr::FixedString;
    ///
    /// assert_eq!(FixedString::<8>::from_u64(0), "0");
    /// assert_eq!(FixedString::<8>::from_u64(12345), "12345");
    /// ```
    pub fn from_u64(value: u64) -> Self {
        Self::from_u64_radix(value, 10)
    }

    /// Formats an unsigned integer in the given radix, using lowercase
    /// letters for digit values 10 and above. If the result does not fit,
    /// the most significant digits are kept.
    ///
    /// # Panics
    /// Panics if `radix` is outside the range `2..=36`.
    ///
    /// # Examples
    /// ```
    /// use fixstr::FixedString;
    ///
    /// assert_eq!(FixedString::<8>::from_u64_radix(255, 16), "ff");
    /// assert_eq!(FixedString::<8>::from_u64_radix(6, 2), "110");
    /// ```
    pub fn from_u64_radix(value: u64, radix: u32) -> Self {
        assert!(
            (2..=36).contains(&radix),
            "radix must lie in the range 2..=36 (is {})",
            radix
        );

        let mut scratch = [0u8; 128];
        let len = emit_digits(&mut scratch, value as u128, radix as u128);
        Self::from_bytes(&scratch[..len])
    }

    /// Formats a signed integer in decimal.
    ///
    /// # Examples
    /// ```
    /// use fixstr::FixedString;
    ///
    /// assert_eq!(FixedString::<8>::from_i64(-128), "-128");
    /// assert_eq!(FixedString::<8>::from_i64(42), "42");
    /// ```
    pub fn from_i64(value: i64) -> Self {
        Self::from_i64_radix(value, 10)
    }

    /// Formats a signed integer in the given radix. Negative values are
    /// prefixed with `-`; the magnitude is taken with
    /// [`unsigned_abs`](i64::unsigned_abs), so [`i64::MIN`] formats
    /// correctly.
    ///
    /// # Panics
    /// Panics if `radix` is outside the range `2..=36`.
    pub fn from_i64_radix(value: i64, radix: u32) -> Self {
        assert!(
            (2..=36).contains(&radix),
            "radix must lie in the range 2..=36 (is {})",
            radix
        );

        let mut scratch = [0u8; 129];
        let mut pos = 0;
        if value < 0 {
            scratch[pos] = b'-';
            pos += 1;
        }

        pos += emit_digits(&mut scratch[pos..], value.unsigned_abs() as u128, radix as u128);
        Self::from_bytes(&scratch[..pos])
    }

    /// Formats a float in plain decimal notation with exactly `precision`
    /// fractional digits, rounding half away from zero. `precision` is
    /// clamped to 17, past which `f64` carries no information anyway.
    ///
    /// Non-finite values format as `nan`, `inf`, and `-inf`. The sign of
    /// negative zero is preserved. Magnitudes of 2^128 and above are scaled
    /// down by powers of ten before digit emission, so digits beyond the
    /// ~17 significant digits an `f64` carries come out approximate.
    ///
    /// # Examples
    /// ```
    /// use fixstr::FixedString;
    ///
    /// assert_eq!(FixedString::<16>::from_f64(0.125, 2), "0.13");
    /// assert_eq!(FixedString::<16>::from_f64(-2.5, 0), "-3");
    /// assert_eq!(FixedString::<16>::from_f64(1.0, 3), "1.000");
    /// ```
    pub fn from_f64(value: f64, precision: usize) -> Self {
        if value.is_nan() {
            return Self::from_bytes(b"nan");
        }

        let mut result = Self::new();
        let magnitude = if value.is_sign_negative() {
            result.push(b'-');
            -value
        } else {
            value
        };

        if magnitude == f64::INFINITY {
            result.append(b"inf");
            return result;
        }

        let precision = precision.min(17);

        // 2^128, the first magnitude whose integer part exceeds a u128;
        // a plain `as u128` cast would saturate instead of truncating.
        const HUGE: f64 = 340282366920938463463374607431768211456.0;

        let mut scaled = magnitude;
        let mut shift = 0;
        while scaled >= HUGE {
            scaled /= 10.0;
            shift += 1;
        }

        let mut int_part = scaled as u128;
        let frac = if shift == 0 {
            magnitude - int_part as f64
        } else {
            0.0
        };

        let mut scratch = [0u8; 128];
        if precision == 0 {
            if frac >= 0.5 {
                int_part = int_part.saturating_add(1);
            }
            let len = emit_digits(&mut scratch, int_part, 10);
            result.append(&scratch[..len]);
            for _ in 0..shift {
                result.push(b'0');
            }
            return result;
        }

        let mut scale = 1u64;
        for _ in 0..precision {
            scale *= 10;
        }

        let mut scaled_frac = (frac * scale as f64 + 0.5) as u64;
        if scaled_frac >= scale {
            // Rounding carried into the integer part.
            int_part = int_part.saturating_add(1);
            scaled_frac -= scale;
        }

        let len = emit_digits(&mut scratch, int_part, 10);
        result.append(&scratch[..len]);
        for _ in 0..shift {
            result.push(b'0');
        }
        result.push(b'.');

        let frac_len = emit_digits(&mut scratch, scaled_frac as u128, 10);
        for _ in frac_len..precision {
            result.push(b'0');
        }
        result.append(&scratch[..frac_len]);

        result
    }

    /// Parses the content as an unsigned integer in the given radix.
    ///
    /// See the free function [`parse_u64`] for the accepted syntax.
    pub fn parse_u64(&self, radix: u32) -> Result<u64, ParseIntError> {
        parse_u64(self.as_bytes(), radix)
    }

    /// Parses the content as a signed integer in the given radix.
    ///
    /// See the free function [`parse_i64`] for the accepted syntax.
    pub fn parse_i64(&self, radix: u32) -> Result<i64, ParseIntError> {
        parse_i64(self.as_bytes(), radix)
    }
}

#[cfg(feature = "alloc")]
#[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
impl<const N: usize> FixedString<N> {
    /// Copies the content into an owned [`String`], substituting U+FFFD
    /// for invalid UTF-8 sequences.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(self.as_bytes()).into_owned()
    }

    /// Copies the content into an owned [`Vec<u8>`].
    pub fn to_vec(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

#[cfg(feature = "alloc")]
#[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
impl<const N: usize> From<&FixedString<N>> for Vec<u8> {
    fn from(s: &FixedString<N>) -> Self {
        s.to_vec()
    }
}

fn digit_value(byte: u8, radix: u32) -> Option<u64> {
    let value = match byte {
        b'0'..=b'9' => (byte - b'0') as u32,
        b'a'..=b'z' => (byte - b'a') as u32 + 10,
        b'A'..=b'Z' => (byte - b'A') as u32 + 10,
        _ => return None,
    };

    if value < radix {
        Some(value as u64)
    } else {
        None
    }
}

/// Parses an unsigned integer from the start of `text` in the given radix.
///
/// An optional leading `+` is accepted. Digits above 9 may be in either
/// case. Parsing stops at the first byte that is not a digit in the radix;
/// it is an error only when no digit precedes it. Values that do not fit in
/// a `u64` report [`ParseIntError::Overflow`].
///
/// # Panics
/// Panics if `radix` is outside the range `2..=36`.
///
/// # Examples
/// ```
/// use fixstr::{parse_u64, ParseIntError};
///
/// assert_eq!(parse_u64(b"FF", 16), Ok(255));
/// assert_eq!(parse_u64(b"12abc", 10), Ok(12));
/// assert_eq!(parse_u64(b"", 10), Err(ParseIntError::Empty));
/// ```
pub fn parse_u64(text: impl AsRef<[u8]>, radix: u32) -> Result<u64, ParseIntError> {
    assert!(
        (2..=36).contains(&radix),
        "radix must lie in the range 2..=36 (is {})",
        radix
    );

    let mut text = text.as_ref();
    if text.is_empty() {
        return Err(ParseIntError::Empty);
    }

    if text[0] == b'+' {
        text = &text[1..];
    }

    let mut digits = text.iter().map_while(|&b| digit_value(b, radix));
    let mut result = digits.next().ok_or(ParseIntError::InvalidDigit)?;

    for digit in digits {
        result = result
            .checked_mul(radix as u64)
            .and_then(|r| r.checked_add(digit))
            .ok_or(ParseIntError::Overflow)?;
    }

    Ok(result)
}

/// Parses a signed integer from the start of `text` in the given radix.
///
/// Accepts an optional leading `+` or `-`, then behaves like
/// [`parse_u64`]. The magnitude is accumulated negatively, so
/// [`i64::MIN`] parses without overflow.
///
/// # Panics
/// Panics if `radix` is outside the range `2..=36`.
///
/// # Examples
/// ```
/// use fixstr::{parse_i64, ParseIntError};
///
/// assert_eq!(parse_i64(b"-42", 10), Ok(-42));
/// assert_eq!(parse_i64(b"-", 10), Err(ParseIntError::InvalidDigit));
/// ```
pub fn parse_i64(text: impl AsRef<[u8]>, radix: u32) -> Result<i64, ParseIntError> {
    assert!(
        (2..=36).contains(&radix),
        "radix must lie in the range 2..=36 (is {})",
        radix
    );

    let mut text = text.as_ref();
    if text.is_empty() {
        return Err(ParseIntError::Empty);
    }

    let negative = match text[0] {
        b'+' => {
            text = &text[1..];
            false
        }
        b'-' => {
            text = &text[1..];
            true
        }
        _ => false,
    };

    let mut digits = text.iter().map_while(|&b| digit_value(b, radix));
    let first = digits.next().ok_or(ParseIntError::InvalidDigit)?;

    let mut result = -(first as i64);
    for digit in digits {
        result = result
            .checked_mul(radix as i64)
            .and_then(|r| r.checked_sub(digit as i64))
            .ok_or(ParseIntError::Overflow)?;
    }

    if negative {
        Ok(result)
    } else {
        result.checked_neg().ok_or(ParseIntError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn unsigned_formatting() {
        assert_eq!(FixedString::<24>::from_u64(0), "0");
        assert_eq!(FixedString::<24>::from_u64(12345), "12345");
        assert_eq!(FixedString::<24>::from_u64(u64::MAX), "18446744073709551615");

        assert_eq!(FixedString::<24>::from_u64_radix(255, 16), "ff");
        assert_eq!(FixedString::<24>::from_u64_radix(6, 2), "110");
        assert_eq!(FixedString::<24>::from_u64_radix(35, 36), "z");
        assert_eq!(FixedString::<24>::from_u64_radix(0, 2), "0");
    }

    #[test]
    fn signed_formatting() {
        assert_eq!(FixedString::<24>::from_i64(-128), "-128");
        assert_eq!(FixedString::<24>::from_i64(42), "42");
        assert_eq!(FixedString::<24>::from_i64(0), "0");
        assert_eq!(
            FixedString::<24>::from_i64(i64::MIN),
            "-9223372036854775808"
        );
        assert_eq!(FixedString::<24>::from_i64_radix(-255, 16), "-ff");
    }

    #[test]
    fn formatting_keeps_the_most_significant_digits() {
        assert_eq!(FixedString::<2>::from_u64(12345), "12");
        assert_eq!(FixedString::<3>::from_i64(-12345), "-12");
        assert_eq!(FixedString::<0>::from_u64(7), "");
    }

    #[test]
    #[should_panic]
    fn radix_out_of_range_panics() {
        let _ = FixedString::<8>::from_u64_radix(1, 37);
    }

    #[test]
    fn float_formatting() {
        assert_eq!(FixedString::<16>::from_f64(0.125, 2), "0.13");
        assert_eq!(FixedString::<16>::from_f64(-0.125, 2), "-0.13");
        assert_eq!(FixedString::<16>::from_f64(2.5, 0), "3");
        assert_eq!(FixedString::<16>::from_f64(-2.5, 0), "-3");
        assert_eq!(FixedString::<16>::from_f64(0.49, 0), "0");
        assert_eq!(FixedString::<16>::from_f64(1.0 / 3.0, 4), "0.3333");
        assert_eq!(FixedString::<16>::from_f64(1.0, 3), "1.000");
        assert_eq!(FixedString::<16>::from_f64(0.0, 2), "0.00");
        assert_eq!(FixedString::<16>::from_f64(123.456, 1), "123.5");
        // Rounding carries into the integer part.
        assert_eq!(FixedString::<16>::from_f64(9.99, 1), "10.0");
    }

    #[test]
    fn float_formatting_of_huge_magnitudes() {
        // 2^130 is exactly representable and its integer part overflows
        // a u128, so it exercises the scale-down path deterministically.
        let pow = FixedString::<48>::from_f64(1361129467683753853853498429727072845824.0, 0);
        assert_eq!(pow.len(), 40);
        assert!(pow.starts_with("1361129467683"));

        let max = FixedString::<320>::from_f64(f64::MAX, 0);
        assert_eq!(max.len(), 309);
        assert!(max.starts_with("17976931348"));

        let neg = FixedString::<320>::from_f64(-f64::MAX, 2);
        assert_eq!(neg.len(), 313);
        assert!(neg.starts_with("-17976931348"));
        assert!(neg.ends_with(".00"));
    }

    #[test]
    fn float_special_values() {
        assert_eq!(FixedString::<16>::from_f64(f64::NAN, 2), "nan");
        assert_eq!(FixedString::<16>::from_f64(f64::INFINITY, 2), "inf");
        assert_eq!(FixedString::<16>::from_f64(f64::NEG_INFINITY, 2), "-inf");
        assert_eq!(FixedString::<16>::from_f64(-0.0, 2), "-0.00");
    }

    #[test]
    fn unsigned_parsing() {
        assert_eq!(parse_u64(b"FF", 16), Ok(255));
        assert_eq!(parse_u64(b"ff", 16), Ok(255));
        assert_eq!(parse_u64(b"0", 10), Ok(0));
        assert_eq!(parse_u64(b"+42", 10), Ok(42));
        assert_eq!(parse_u64(b"12abc", 10), Ok(12));
        assert_eq!(parse_u64(b"z", 36), Ok(35));
        assert_eq!(parse_u64(b"18446744073709551615", 10), Ok(u64::MAX));

        assert_eq!(parse_u64(b"", 10), Err(ParseIntError::Empty));
        assert_eq!(parse_u64(b"abc", 10), Err(ParseIntError::InvalidDigit));
        assert_eq!(parse_u64(b"-5", 10), Err(ParseIntError::InvalidDigit));
        assert_eq!(
            parse_u64(b"99999999999999999999", 10),
            Err(ParseIntError::Overflow)
        );
    }

    #[test]
    fn signed_parsing() {
        assert_eq!(parse_i64(b"-42", 10), Ok(-42));
        assert_eq!(parse_i64(b"+42", 10), Ok(42));
        assert_eq!(parse_i64(b"42", 10), Ok(42));
        assert_eq!(parse_i64(b"-ff", 16), Ok(-255));
        assert_eq!(parse_i64(b"-9223372036854775808", 10), Ok(i64::MIN));
        assert_eq!(parse_i64(b"9223372036854775807", 10), Ok(i64::MAX));

        assert_eq!(parse_i64(b"", 10), Err(ParseIntError::Empty));
        assert_eq!(parse_i64(b"-", 10), Err(ParseIntError::InvalidDigit));
        assert_eq!(
            parse_i64(b"9223372036854775808", 10),
            Err(ParseIntError::Overflow)
        );
        assert_eq!(
            parse_i64(b"-9223372036854775809", 10),
            Err(ParseIntError::Overflow)
        );
    }

    #[test]
    fn parsing_through_the_string_type() {
        let s = FixedString::<8>::from("FF");
        assert_eq!(s.parse_u64(16), Ok(255));

        let s = FixedString::<8>::from("-128");
        assert_eq!(s.parse_i64(10), Ok(-128));

        let empty = FixedString::<8>::new();
        assert_eq!(empty.parse_u64(10), Err(ParseIntError::Empty));
    }

    #[test]
    fn formatting_and_parsing_roundtrip() {
        let mut rng = SmallRng::seed_from_u64(0x5eed);
        for _ in 0..500 {
            let value: i64 = rng.gen();
            let radix = rng.gen_range(2..=36);

            let s = FixedString::<80>::from_i64_radix(value, radix);
            assert_eq!(s.parse_i64(radix), Ok(value));
        }
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn alloc_bridges() {
        let s = FixedString::<8>::from("hello");
        assert_eq!(s.to_string_lossy(), "hello");
        assert_eq!(s.to_vec(), b"hello");
        assert_eq!(Vec::from(&s), b"hello");

        let invalid = FixedString::<8>::from_bytes(b"ab\xffcd");
        assert_eq!(invalid.to_string_lossy(), "ab\u{fffd}cd");
    }
}
