//! Provides an exact, arbitrary-precision decimal type for swap amounts.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::One;
use num_traits::Signed;
use num_traits::Zero;
use thiserror::Error;

use crate::rounding::Rounding;

/// Largest exponent magnitude accepted by the parser.
///
/// `1e1000` already expands to a 1001-digit integer; larger exponents are
/// rejected to bound the size of the representation.
pub const MAX_EXPONENT: i64 = 1_000;

/// An error that can occur when parsing a string into an `Amount`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseAmountError {
    /// The string is empty.
    #[error("amount is empty")]
    Empty,
    /// The string is not in a valid decimal format (e.g., "abc", "1.2.3").
    #[error("invalid amount format")]
    InvalidFormat,
    /// The exponent magnitude exceeds [`MAX_EXPONENT`] (e.g., "1e99999").
    #[error("amount exponent is out of range")]
    ExponentOutOfRange,
}

/// An error for amounts that parse but cannot be used in a swap.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AmountError {
    #[error(transparent)]
    Parse(#[from] ParseAmountError),
    /// Zero and negative amounts are rejected.
    #[error("amount must be greater than zero")]
    NotPositive,
}

/// A decimal number stored as `units / 10^scale`.
///
/// Every operation is exact; precision is only dropped by an explicit call to
/// [`Amount::round_to`] with a [`Rounding`] mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amount {
    units: BigInt,
    scale: u32,
}

impl Amount {
    // --- Constructors ---

    /// Creates an amount directly from its scaled integer representation.
    ///
    /// # Example
    /// ```
    /// use swap_types::amount::Amount;
    /// let amount = Amount::from_units(12345, 2);
    /// assert_eq!(amount.to_string(), "123.45");
    /// ```
    pub fn from_units(units: impl Into<BigInt>, scale: u32) -> Self {
        Self {
            units: units.into(),
            scale,
        }
    }

    pub fn zero() -> Self {
        Self::from_units(0, 0)
    }

    /// Parses a string and requires the result to be strictly positive.
    pub fn parse_positive(s: &str) -> Result<Self, AmountError> {
        let amount = Self::from_str(s)?;
        if amount.is_positive() {
            Ok(amount)
        } else {
            Err(AmountError::NotPositive)
        }
    }

    // --- Getters ---

    pub fn is_positive(&self) -> bool {
        self.units.is_positive()
    }

    pub fn is_zero(&self) -> bool {
        self.units.is_zero()
    }

    // --- Arithmetic ---

    /// Exact product. The scale of the result is the sum of both scales.
    pub fn mul_exact(&self, rhs: &Amount) -> Amount {
        Amount {
            units: &self.units * &rhs.units,
            scale: self.scale + rhs.scale,
        }
    }

    /// Divides by `divisor` and keeps `places` fractional digits.
    ///
    /// Returns `None` when `divisor` is zero.
    pub fn div_to(&self, divisor: &Amount, places: u32, rounding: Rounding) -> Option<Amount> {
        if divisor.is_zero() {
            return None;
        }
        // (a / 10^sa) / (b / 10^sb) scaled by 10^places
        let numerator = &self.units * pow10(divisor.scale + places);
        let denominator = &divisor.units * pow10(self.scale);
        Some(Amount {
            units: divide_rounded(&numerator, &denominator, rounding),
            scale: places,
        })
    }

    /// Rescales to exactly `places` fractional digits.
    pub fn round_to(&self, places: u32, rounding: Rounding) -> Amount {
        let units = if self.scale <= places {
            &self.units * pow10(places - self.scale)
        } else {
            divide_rounded(&self.units, &pow10(self.scale - places), rounding)
        };
        Amount {
            units,
            scale: places,
        }
    }

    // --- Display Methods ---

    /// Formats with exactly `places` fractional digits (e.g., "85.00").
    pub fn to_fixed(&self, places: u32, rounding: Rounding) -> String {
        self.round_to(places, rounding).to_string()
    }
}

/// Formats the exact value using the amount's own scale.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.units.is_negative() { "-" } else { "" };
        let digits = self.units.abs().to_string();
        let scale = self.scale as usize;

        if scale == 0 {
            return write!(f, "{sign}{digits}");
        }

        let padded = format!("{:0>width$}", digits, width = scale + 1);
        let (major, minor) = padded.split_at(padded.len() - scale);
        write!(f, "{sign}{major}.{minor}")
    }
}

/// Parses standard decimal notation: an optional sign, digits with an optional
/// fractional part (`5`, `5.`, `.5`, `5.25`), and an optional exponent (`2.5e3`).
/// Surrounding whitespace is ignored.
impl FromStr for Amount {
    type Err = ParseAmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseAmountError::Empty);
        }

        let (is_negative, s) = match s.as_bytes()[0] {
            b'-' => (true, &s[1..]),
            b'+' => (false, &s[1..]),
            _ => (false, s),
        };

        let (mantissa, exponent) = match s.find(['e', 'E']) {
            Some(idx) => (&s[..idx], parse_exponent(&s[idx + 1..])?),
            None => (s, 0),
        };

        let mut parts = mantissa.split('.');
        let major_str = parts.next().unwrap_or("");
        let minor_str = parts.next().unwrap_or("");

        if parts.next().is_some() || (major_str.is_empty() && minor_str.is_empty()) {
            return Err(ParseAmountError::InvalidFormat);
        }
        if !is_digits(major_str) || !is_digits(minor_str) {
            return Err(ParseAmountError::InvalidFormat);
        }

        let digits = format!("{major_str}{minor_str}");
        let mut units = BigInt::parse_bytes(digits.as_bytes(), 10)
            .ok_or(ParseAmountError::InvalidFormat)?;

        let mut scale = minor_str.len() as i64 - exponent;
        if scale < 0 {
            units *= pow10(scale.unsigned_abs() as u32);
            scale = 0;
        }
        if is_negative {
            units = -units;
        }

        Ok(Self {
            units,
            scale: scale as u32,
        })
    }
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_exponent(s: &str) -> Result<i64, ParseAmountError> {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    if digits.is_empty() || !is_digits(digits) {
        return Err(ParseAmountError::InvalidFormat);
    }
    let exponent = s
        .parse::<i64>()
        .map_err(|_| ParseAmountError::ExponentOutOfRange)?;
    if exponent.abs() > MAX_EXPONENT {
        return Err(ParseAmountError::ExponentOutOfRange);
    }
    Ok(exponent)
}

pub(crate) fn pow10(exp: u32) -> BigInt {
    BigInt::from(10u32).pow(exp)
}

/// Integer division of `numerator / denominator` under `rounding`.
pub(crate) fn divide_rounded(numerator: &BigInt, denominator: &BigInt, rounding: Rounding) -> BigInt {
    // `/` and `%` truncate toward zero.
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    if remainder.is_zero() {
        return quotient;
    }
    let away_from_zero = if numerator.is_negative() == denominator.is_negative() {
        BigInt::one()
    } else {
        -BigInt::one()
    };
    match rounding {
        Rounding::Down => quotient,
        Rounding::Up => quotient + away_from_zero,
        Rounding::HalfUp => {
            if remainder.abs() * 2 >= denominator.abs() {
                quotient + away_from_zero
            } else {
                quotient
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn amount(s: &str) -> Amount {
        s.parse().unwrap()
    }

    #[test]
    fn parses_plain_and_fractional_forms() {
        assert_eq!(amount("100"), Amount::from_units(100, 0));
        assert_eq!(amount("12.34"), Amount::from_units(1234, 2));
        assert_eq!(amount(".5"), Amount::from_units(5, 1));
        assert_eq!(amount("5."), Amount::from_units(5, 0));
        assert_eq!(amount("+7"), Amount::from_units(7, 0));
        assert_eq!(amount("-0.25"), Amount::from_units(-25, 2));
        assert_eq!(amount("007.50"), Amount::from_units(750, 2));
    }

    #[test]
    fn ignores_surrounding_whitespace() {
        assert_eq!(amount(" 1"), Amount::from_units(1, 0));
        assert_eq!(amount("100 "), Amount::from_units(100, 0));
        assert_eq!(amount("\t2.5\n"), Amount::from_units(25, 1));
        assert_eq!(Amount::from_str("   "), Err(ParseAmountError::Empty));
    }

    #[test]
    fn parses_exponent_notation() {
        assert_eq!(amount("1e3"), Amount::from_units(1000, 0));
        assert_eq!(amount("2.5E-3"), Amount::from_units(25, 4));
        assert_eq!(amount("1.5e+1"), Amount::from_units(15, 0));
    }

    #[test]
    fn rejects_non_decimal_strings() {
        assert_eq!(Amount::from_str(""), Err(ParseAmountError::Empty));
        for bad in [
            "abc", ".", "-", "1.2.3", "1,5", "1 000", "- 1", "NaN", "Infinity", "0x10", "1e",
            "e5", "1e+", "1_000", "--1",
        ] {
            assert_eq!(
                Amount::from_str(bad),
                Err(ParseAmountError::InvalidFormat),
                "input {bad:?}"
            );
        }
    }

    #[test]
    fn rejects_huge_exponents() {
        assert_eq!(
            Amount::from_str("1e1001"),
            Err(ParseAmountError::ExponentOutOfRange)
        );
        assert_eq!(
            Amount::from_str("1e-99999999999999999999"),
            Err(ParseAmountError::ExponentOutOfRange)
        );
        assert!(amount("1e1000").is_positive());
    }

    #[test]
    fn parse_positive_rejects_zero_and_negatives() {
        assert_eq!(Amount::parse_positive("0"), Err(AmountError::NotPositive));
        assert_eq!(Amount::parse_positive("-0"), Err(AmountError::NotPositive));
        assert_eq!(Amount::parse_positive("0.000"), Err(AmountError::NotPositive));
        assert_eq!(Amount::parse_positive("-5"), Err(AmountError::NotPositive));
        assert_eq!(
            Amount::parse_positive("x"),
            Err(AmountError::Parse(ParseAmountError::InvalidFormat))
        );
        assert!(Amount::parse_positive("0.01").is_ok());
    }

    #[test]
    fn displays_exact_value() {
        assert_eq!(Amount::from_units(8500, 2).to_string(), "85.00");
        assert_eq!(Amount::from_units(5, 3).to_string(), "0.005");
        assert_eq!(Amount::from_units(-5, 3).to_string(), "-0.005");
        assert_eq!(Amount::from_units(42, 0).to_string(), "42");
        assert_eq!(Amount::from_units(0, 2).to_string(), "0.00");
    }

    #[test]
    fn round_to_honours_mode() {
        let x = amount("11.765");
        assert_eq!(x.to_fixed(2, Rounding::Down), "11.76");
        assert_eq!(x.to_fixed(2, Rounding::HalfUp), "11.77");
        assert_eq!(x.to_fixed(2, Rounding::Up), "11.77");
        assert_eq!(amount("-11.765").to_fixed(2, Rounding::Down), "-11.76");
        assert_eq!(amount("3").to_fixed(4, Rounding::Down), "3.0000");
    }

    #[test]
    fn div_to_truncates() {
        let ten = amount("10");
        let rate = amount("0.85");
        assert_eq!(
            ten.div_to(&rate, 2, Rounding::Down).unwrap().to_string(),
            "11.76"
        );
        assert_eq!(ten.div_to(&Amount::zero(), 2, Rounding::Down), None);
    }
}
