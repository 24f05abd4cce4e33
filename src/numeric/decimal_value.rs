// ============================================================================
// Decimal Value
// Exact decimal text input, validated once at each codec entry point
// ============================================================================

use super::errors::{CodecError, CodecResult};
use super::signed_integer::SignedInteger;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::fmt;
use std::str::FromStr;

/// Largest accepted magnitude of a scientific-notation exponent.
const MAX_DECIMAL_EXPONENT: i64 = 4096;

/// Exact decimal number: `±(integer + fraction / 10^fraction_digits)`.
///
/// Parsed from text so that no binary floating point ever touches the input.
/// The fraction is kept normalized (no trailing zero digits), so `"3.0"` is
/// integral.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DecimalValue {
    negative: bool,
    integer: BigUint,
    fraction: BigUint,
    fraction_digits: u32,
}

impl DecimalValue {
    /// Parse decimal text: `[+-]digits[.digits][(e|E)[+-]digits]`.
    ///
    /// # Errors
    /// Returns `InvalidFormat` for anything else, including empty input and
    /// exponents beyond ±4096.
    ///
    /// # Examples
    /// - "10" -> 10
    /// - "-2.50" -> -2.5
    /// - ".5e1" -> 5
    pub fn parse(input: &str) -> CodecResult<Self> {
        let s = input.trim();

        let (negative, body) = if let Some(rest) = s.strip_prefix('-') {
            (true, rest)
        } else if let Some(rest) = s.strip_prefix('+') {
            (false, rest)
        } else {
            (false, s)
        };

        let (mantissa, exponent) = match body.find(|c: char| c == 'e' || c == 'E') {
            Some(pos) => (&body[..pos], parse_exponent(&body[pos + 1..])?),
            None => (body, 0),
        };

        let (int_digits, frac_digits) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if int_digits.is_empty() && frac_digits.is_empty() {
            return Err(CodecError::InvalidFormat);
        }
        if !int_digits
            .bytes()
            .chain(frac_digits.bytes())
            .all(|b| b.is_ascii_digit())
        {
            return Err(CodecError::InvalidFormat);
        }

        // Move the decimal point by the exponent
        let mut digits = String::with_capacity(int_digits.len() + frac_digits.len());
        digits.push_str(int_digits);
        digits.push_str(frac_digits);
        let mut point = int_digits.len() as i64 + exponent;
        if point < 0 {
            digits.insert_str(0, &"0".repeat(point.unsigned_abs() as usize));
            point = 0;
        }
        let point = point as usize;
        if point > digits.len() {
            let padding = point - digits.len();
            digits.push_str(&"0".repeat(padding));
        }

        let (int_part, frac_part) = digits.split_at(point);
        let frac_part = frac_part.trim_end_matches('0');

        Ok(Self {
            negative,
            integer: parse_digits(int_part)?,
            fraction: parse_digits(frac_part)?,
            fraction_digits: frac_part.len() as u32,
        })
    }

    /// Convert from `rust_decimal::Decimal` (for API boundaries).
    pub fn from_decimal(d: rust_decimal::Decimal) -> CodecResult<Self> {
        Self::parse(&d.to_string())
    }

    /// Sign as written, set for `-0`.
    #[inline]
    pub fn is_sign_negative(&self) -> bool {
        self.negative
    }

    /// Strictly below zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative && !self.is_zero()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.integer.is_zero() && self.fraction.is_zero()
    }

    #[inline]
    pub fn is_integral(&self) -> bool {
        self.fraction.is_zero()
    }

    /// Magnitude of the integer part.
    #[inline]
    pub fn integer_part(&self) -> &BigUint {
        &self.integer
    }

    /// The value as an integer.
    ///
    /// # Errors
    /// Returns `InvalidFormat` if the value has a non-zero fractional part.
    pub fn to_integer(&self) -> CodecResult<SignedInteger> {
        if !self.is_integral() {
            return Err(CodecError::InvalidFormat);
        }
        Ok(SignedInteger::new(self.is_negative(), self.integer.clone()))
    }

    /// Binary digits of the fractional magnitude, by repeated doubling.
    #[inline]
    pub fn fraction_bits(&self) -> BinaryFraction {
        BinaryFraction {
            remainder: self.fraction.clone(),
            unit: pow10(self.fraction_digits),
        }
    }
}

fn parse_exponent(s: &str) -> CodecResult<i64> {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CodecError::InvalidFormat);
    }
    let exponent: i64 = s.parse().map_err(|_| CodecError::InvalidFormat)?;
    if exponent.abs() > MAX_DECIMAL_EXPONENT {
        return Err(CodecError::InvalidFormat);
    }
    Ok(exponent)
}

fn parse_digits(digits: &str) -> CodecResult<BigUint> {
    if digits.is_empty() {
        return Ok(BigUint::zero());
    }
    BigUint::parse_bytes(digits.as_bytes(), 10).ok_or(CodecError::InvalidFormat)
}

fn pow10(n: u32) -> BigUint {
    if n == 0 {
        BigUint::one()
    } else {
        BigUint::from(10u32).pow(n)
    }
}

impl FromStr for DecimalValue {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<i64> for DecimalValue {
    fn from(value: i64) -> Self {
        Self {
            negative: value < 0,
            integer: BigUint::from(value.unsigned_abs()),
            fraction: BigUint::zero(),
            fraction_digits: 0,
        }
    }
}

impl fmt::Display for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        write!(f, "{}", self.integer)?;
        if !self.fraction.is_zero() {
            write!(
                f,
                ".{:0>width$}",
                self.fraction.to_string(),
                width = self.fraction_digits as usize
            )?;
        }
        Ok(())
    }
}

// ============================================================================
// Binary Fraction
// ============================================================================

/// Iterator over the binary digits of a decimal fraction.
///
/// Each step doubles the remainder and emits `1` (subtracting one unit) when
/// it reaches a whole. Ends once the remainder is exactly zero; non-dyadic
/// fractions never end, so callers bound it with `take`.
#[derive(Debug, Clone)]
pub struct BinaryFraction {
    remainder: BigUint,
    unit: BigUint,
}

impl BinaryFraction {
    /// True once every remaining digit is zero.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.remainder.is_zero()
    }
}

impl Iterator for BinaryFraction {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.remainder.is_zero() {
            return None;
        }
        self.remainder <<= 1u32;
        if self.remainder >= self.unit {
            self.remainder -= &self.unit;
            Some(true)
        } else {
            Some(false)
        }
    }
}

// ============================================================================
// IEEE Input
// ============================================================================

/// Decimal input for IEEE-754 encoding, including the special values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IeeeInput {
    Finite(DecimalValue),
    Infinity { negative: bool },
    NaN,
}

impl IeeeInput {
    /// Parse decimal text, or `inf`/`infinity`/`nan` (any case, optional sign).
    pub fn parse(input: &str) -> CodecResult<Self> {
        let lowered = input.trim().to_ascii_lowercase();
        let (negative, word) = if let Some(rest) = lowered.strip_prefix('-') {
            (true, rest)
        } else {
            (false, lowered.strip_prefix('+').unwrap_or(&lowered))
        };

        match word {
            "inf" | "infinity" => Ok(IeeeInput::Infinity { negative }),
            "nan" => Ok(IeeeInput::NaN),
            _ => DecimalValue::parse(input).map(IeeeInput::Finite),
        }
    }
}

impl FromStr for IeeeInput {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        let value = DecimalValue::parse("10").unwrap();
        assert!(value.is_integral());
        assert_eq!(value.integer_part(), &BigUint::from(10u32));
        assert_eq!(value.to_integer().unwrap().to_i64(), Some(10));
    }

    #[test]
    fn test_parse_fraction_normalized() {
        let value = DecimalValue::parse("-2.50").unwrap();
        assert!(value.is_negative());
        assert_eq!(value.to_string(), "-2.5");

        let whole = DecimalValue::parse("3.000").unwrap();
        assert!(whole.is_integral());
        assert_eq!(whole.to_integer().unwrap().to_i64(), Some(3));
    }

    #[test]
    fn test_parse_exponent() {
        assert_eq!(DecimalValue::parse(".5e1").unwrap().to_string(), "5");
        assert_eq!(DecimalValue::parse("125E-3").unwrap().to_string(), "0.125");
        assert_eq!(DecimalValue::parse("1.5e+2").unwrap().to_string(), "150");
        assert_eq!(DecimalValue::parse("7e-2").unwrap().to_string(), "0.07");
    }

    #[test]
    fn test_parse_invalid() {
        for input in ["", "-", ".", "abc", "1,000", "1.2.3", "1e", "1e5000", "0x10", "--1"] {
            assert_eq!(
                DecimalValue::parse(input),
                Err(CodecError::InvalidFormat),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_negative_zero() {
        let value = DecimalValue::parse("-0.0").unwrap();
        assert!(value.is_zero());
        assert!(value.is_sign_negative());
        assert!(!value.is_negative());
        assert!(!value.to_integer().unwrap().is_sign_negative());
    }

    #[test]
    fn test_fractional_to_integer_fails() {
        let value = DecimalValue::parse("2.5").unwrap();
        assert_eq!(value.to_integer(), Err(CodecError::InvalidFormat));
    }

    #[test]
    fn test_fraction_bits_dyadic() {
        let value = DecimalValue::parse("0.625").unwrap();
        let bits: Vec<bool> = value.fraction_bits().collect();
        assert_eq!(bits, vec![true, false, true]);
    }

    #[test]
    fn test_fraction_bits_non_terminating() {
        // 0.1 = 0.000110011...
        let value = DecimalValue::parse("0.1").unwrap();
        let mut fraction = value.fraction_bits();
        let bits: Vec<bool> = fraction.by_ref().take(8).collect();
        assert_eq!(
            bits,
            vec![false, false, false, true, true, false, false, true]
        );
        assert!(!fraction.is_exhausted());
    }

    #[test]
    fn test_from_decimal() {
        let d = rust_decimal::Decimal::new(-12345, 2);
        let value = DecimalValue::from_decimal(d).unwrap();
        assert_eq!(value.to_string(), "-123.45");
    }

    #[test]
    fn test_ieee_input() {
        assert_eq!(
            IeeeInput::parse("-Inf").unwrap(),
            IeeeInput::Infinity { negative: true }
        );
        assert_eq!(
            IeeeInput::parse("infinity").unwrap(),
            IeeeInput::Infinity { negative: false }
        );
        assert_eq!(IeeeInput::parse("NaN").unwrap(), IeeeInput::NaN);
        assert!(matches!(
            IeeeInput::parse("1.5").unwrap(),
            IeeeInput::Finite(_)
        ));
        assert_eq!(IeeeInput::parse("infinite"), Err(CodecError::InvalidFormat));
    }
}
