use crate::errors::{BsonliteError, BsonliteResult, ErrorKind};
use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter};
use std::hash::Hash;
use std::str::FromStr;

/// Smallest exponent a decimal value may carry.
const MIN_EXPONENT: i64 = -6176;
/// Largest exponent a decimal value may carry.
const MAX_EXPONENT: i64 = 6111;

/// A 128-bit exact base-10 decimal floating point value.
///
/// The value is `coefficient * 10^exponent`, held as a signed 128-bit
/// coefficient and a small exponent. Values are parsed from and rendered to
/// decimal strings without ever passing through a binary float, so a literal
/// like `"12345.6789"` round-trips exactly with no rounding artifacts.
///
/// Equality and ordering compare numeric value: `1.00` equals `1`, and both
/// hash identically.
///
/// # Examples
///
/// ```rust,ignore
/// use bsonlite::types::Decimal128;
///
/// let price: Decimal128 = "12345.6789".parse()?;
/// assert_eq!(price.to_string(), "12345.6789");
/// assert_eq!(price, "12345.67890".parse()?);
/// ```
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Decimal128 {
    coefficient: i128,
    exponent: i32,
}

impl Decimal128 {
    /// Creates a decimal from an explicit coefficient and base-10 exponent.
    ///
    /// # Arguments
    ///
    /// * `coefficient` - The signed significand
    /// * `exponent` - Power of ten the coefficient is scaled by
    ///
    /// # Returns
    ///
    /// `Ok(Decimal128)` if the exponent is within the representable range,
    /// otherwise an `ErrorKind::ValidationError` error.
    pub fn from_parts(coefficient: i128, exponent: i32) -> BsonliteResult<Decimal128> {
        if !(MIN_EXPONENT..=MAX_EXPONENT).contains(&(exponent as i64)) {
            log::error!("Decimal128 exponent {} out of range", exponent);
            return Err(BsonliteError::new(
                &format!(
                    "Decimal128 validation error: exponent must be in [{}, {}], got {}",
                    MIN_EXPONENT, MAX_EXPONENT, exponent
                ),
                ErrorKind::ValidationError,
            ));
        }
        Ok(Decimal128 {
            coefficient,
            exponent,
        })
    }

    /// Gets the signed coefficient.
    pub fn coefficient(&self) -> i128 {
        self.coefficient
    }

    /// Gets the base-10 exponent.
    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Checks whether this decimal is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.coefficient == 0
    }

    /// Converts this decimal to the nearest 64-bit binary float.
    ///
    /// This is lossy by nature and exists only for cross-type numeric
    /// comparison against double values; it is never used on the exact
    /// parse/format path.
    pub fn to_f64(&self) -> f64 {
        self.to_string().parse::<f64>().unwrap_or(f64::NAN)
    }

    /// Canonical (coefficient, exponent) with trailing coefficient zeros moved
    /// into the exponent; zero canonicalizes to (0, 0). Basis for `Hash`.
    fn normalized(&self) -> (i128, i32) {
        if self.coefficient == 0 {
            return (0, 0);
        }
        let mut coefficient = self.coefficient;
        let mut exponent = self.exponent;
        while coefficient % 10 == 0 && (exponent as i64) < MAX_EXPONENT {
            coefficient /= 10;
            exponent += 1;
        }
        (coefficient, exponent)
    }
}

impl FromStr for Decimal128 {
    type Err = BsonliteError;

    /// Parses a decimal string: optional sign, digits with an optional
    /// fraction, and an optional `e`/`E` exponent.
    fn from_str(input: &str) -> BsonliteResult<Decimal128> {
        let parse_error = |detail: &str| {
            BsonliteError::new(
                &format!("Invalid Decimal128 literal '{}': {}", input, detail),
                ErrorKind::EncodingError,
            )
        };

        let (negative, rest) = match input.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, input.strip_prefix('+').unwrap_or(input)),
        };

        let (mantissa, explicit_exponent) = match rest.split_once(['e', 'E']) {
            Some((mantissa, exponent_str)) => {
                let exponent = exponent_str
                    .parse::<i64>()
                    .map_err(|_| parse_error("malformed exponent"))?;
                (mantissa, exponent)
            }
            None => (rest, 0),
        };

        let (integer_part, fraction_part) = match mantissa.split_once('.') {
            Some((integer_part, fraction_part)) => {
                if fraction_part.contains('.') {
                    return Err(parse_error("multiple decimal points"));
                }
                (integer_part, fraction_part)
            }
            None => (mantissa, ""),
        };

        let digits = [integer_part, fraction_part].concat();
        if digits.is_empty() {
            return Err(parse_error("no digits"));
        }

        let mut coefficient: i128 = 0;
        for character in digits.chars() {
            let digit = character
                .to_digit(10)
                .ok_or_else(|| parse_error("non-digit character"))?;
            coefficient = coefficient
                .checked_mul(10)
                .and_then(|c| c.checked_add(digit as i128))
                .ok_or_else(|| parse_error("coefficient overflow"))?;
        }
        if negative {
            coefficient = -coefficient;
        }

        let exponent = explicit_exponent - fraction_part.len() as i64;
        if !(MIN_EXPONENT..=MAX_EXPONENT).contains(&exponent) {
            return Err(parse_error("exponent out of range"));
        }

        Ok(Decimal128 {
            coefficient,
            exponent: exponent as i32,
        })
    }
}

impl Display for Decimal128 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.coefficient < 0 {
            write!(f, "-")?;
        }
        let digits = self.coefficient.unsigned_abs().to_string();
        if self.exponent >= 0 {
            write!(f, "{}", digits)?;
            for _ in 0..self.exponent {
                write!(f, "0")?;
            }
            return Ok(());
        }

        let point = digits.len() as i64 + self.exponent as i64;
        if point > 0 {
            let (integer_part, fraction_part) = digits.split_at(point as usize);
            write!(f, "{}.{}", integer_part, fraction_part)
        } else {
            write!(f, "0.")?;
            for _ in 0..-point {
                write!(f, "0")?;
            }
            write!(f, "{}", digits)
        }
    }
}

impl Debug for Decimal128 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Decimal128(\"{}\")", self)
    }
}

impl PartialEq for Decimal128 {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal128 {}

impl PartialOrd for Decimal128 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal128 {
    fn cmp(&self, other: &Self) -> Ordering {
        let self_sign = self.coefficient.signum();
        let other_sign = other.coefficient.signum();
        if self_sign != other_sign {
            return self_sign.cmp(&other_sign);
        }
        if self_sign == 0 {
            return Ordering::Equal;
        }

        let magnitude = cmp_magnitude(
            self.coefficient.unsigned_abs(),
            self.exponent,
            other.coefficient.unsigned_abs(),
            other.exponent,
        );
        if self_sign > 0 {
            magnitude
        } else {
            magnitude.reverse()
        }
    }
}

impl Hash for Decimal128 {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        let (coefficient, exponent) = self.normalized();
        coefficient.hash(state);
        exponent.hash(state);
    }
}

impl From<i32> for Decimal128 {
    fn from(value: i32) -> Self {
        Decimal128 {
            coefficient: value as i128,
            exponent: 0,
        }
    }
}

impl From<i64> for Decimal128 {
    fn from(value: i64) -> Self {
        Decimal128 {
            coefficient: value as i128,
            exponent: 0,
        }
    }
}

/// Compares `a * 10^ea` against `b * 10^eb`, both non-zero magnitudes.
fn cmp_magnitude(a: u128, ea: i32, b: u128, eb: i32) -> Ordering {
    if ea == eb {
        return a.cmp(&b);
    }
    if ea > eb {
        // bring a to b's exponent by scaling its coefficient up; overflow means a is strictly larger
        match scale_up(a, (ea - eb) as u32) {
            Some(scaled) => scaled.cmp(&b),
            None => Ordering::Greater,
        }
    } else {
        cmp_magnitude(b, eb, a, ea).reverse()
    }
}

fn scale_up(value: u128, power: u32) -> Option<u128> {
    let mut result = value;
    for _ in 0..power {
        result = result.checked_mul(10)?;
    }
    Some(result)
}
