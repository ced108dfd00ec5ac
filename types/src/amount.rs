//! Arbitrary-precision ledger quantities.
//!
//! Coin amounts, fees and native-asset quantities are unbounded integers on
//! the wire. Native-asset quantities in particular routinely exceed what a
//! 64-bit integer (let alone an `f64`) can hold, so every quantity is kept as
//! a [`BigInt`] and travels through JSON as an exact integer literal.
//!
//! The node may encode a quantity either as a JSON number or as a decimal
//! string; both decode to the same [`Amount`]. Encoding always produces a
//! JSON number carrying the exact digits.

use num_bigint::{BigInt, Sign};
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::ParseAmountError;

/// An integer quantity of unbounded magnitude.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(BigInt);

impl Amount {
    pub fn new(value: BigInt) -> Self {
        Self(value)
    }

    pub fn zero() -> Self {
        Self(BigInt::ZERO)
    }

    pub fn as_bigint(&self) -> &BigInt {
        &self.0
    }

    pub fn into_bigint(self) -> BigInt {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.sign() == Sign::NoSign
    }

    pub fn is_negative(&self) -> bool {
        self.0.sign() == Sign::Minus
    }

    /// The quantity as a `u64`, if it fits.
    pub fn to_u64(&self) -> Option<u64> {
        u64::try_from(&self.0).ok()
    }

    /// The quantity as an `i64`, if it fits.
    pub fn to_i64(&self) -> Option<i64> {
        i64::try_from(&self.0).ok()
    }
}

impl FromStr for Amount {
    type Err = ParseAmountError;

    /// Parse a base-10 integer literal: an optional `-` followed by ASCII digits.
    ///
    /// Stricter than `BigInt`'s own parser, which also accepts `+` and `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('-').unwrap_or(s);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseAmountError(s.to_string()));
        }
        BigInt::from_str(s)
            .map(Self)
            .map_err(|_| ParseAmountError(s.to_string()))
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(BigInt::from(value))
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self(BigInt::from(value))
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(BigInt::from(value))
    }
}

impl From<BigInt> for Amount {
    fn from(value: BigInt) -> Self {
        Self(value)
    }
}

impl Add for Amount {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl<'a> Add<&'a Amount> for &'a Amount {
    type Output = Amount;
    fn add(self, rhs: &'a Amount) -> Amount {
        Amount(&self.0 + &rhs.0)
    }
}

impl Sub for Amount {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Goes through `serde_json::Number` so the JSON serializer writes the
        // digits verbatim instead of rounding through f64.
        let number: serde_json::Number = self
            .0
            .to_string()
            .parse()
            .map_err(|e| {
                <S::Error as ser::Error>::custom(format!("amount {} is not a JSON number: {e}", self.0))
            })?;
        number.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let literal = match value {
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::String(s) => s,
            other => {
                return Err(de::Error::custom(format!(
                    "expected an integer amount, got {other}"
                )))
            }
        };
        literal.parse().map_err(de::Error::custom)
    }
}
