//! Provides a self-contained type for representing referral reward amounts.

use std::fmt;

use num_bigint::BigInt;
use num_bigint::BigUint;
use num_bigint::Sign;
use serde::Deserialize;
use serde::Deserializer;

/// Represents a reward paid out for a referral, denominated in `$RWA`.
///
/// Internally, the amount is stored as an arbitrary-precision integer count of
/// hundredths of a token. The wire float is rounded from its exact binary
/// value, never from an intermediate product, so `41.955` (stored just below
/// the midpoint) shows as `41.95`.
/// The default `Display` implementation formats this as a plain numeric string
/// with exactly two decimals.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RewardAmount {
    hundredths: BigInt,
}

impl RewardAmount {
    /// Number of decimal places rewards are displayed with.
    pub const DECIMALS: u32 = 2;

    /// Ticker appended by [`RewardAmount::to_string_with_code`].
    pub const CODE: &'static str = "$RWA";

    /// Creates a new `RewardAmount` from a floating-point value, typically from an API.
    ///
    /// The exact value of the float is rounded to the nearest hundredth, ties
    /// away from zero. Non-finite values become zero.
    ///
    /// # Examples
    /// ```
    /// use api::reward_amount::RewardAmount;
    ///
    /// // 2.675 is stored as 2.67499999..., so it rounds down
    /// assert_eq!(RewardAmount::new_from_float(2.675).to_string(), "2.67");
    /// assert_eq!(RewardAmount::new_from_float(0.125).to_string(), "0.13");
    /// ```
    pub fn new_from_float(value: f64) -> Self {
        if !value.is_finite() {
            return Self::default();
        }

        // value == mantissa * 2^exponent, exactly
        let bits = value.to_bits();
        let biased_exponent = ((bits >> 52) & 0x7ff) as i64;
        let fraction = bits & ((1u64 << 52) - 1);
        let (mantissa, exponent) = if biased_exponent == 0 {
            (fraction, -1074)
        } else {
            (fraction | (1u64 << 52), biased_exponent - 1075)
        };

        let scaled = BigUint::from(mantissa) * 10u32.pow(Self::DECIMALS);
        let magnitude = if exponent >= 0 {
            scaled << exponent as usize
        } else {
            let shift = exponent.unsigned_abs();
            let quotient = &scaled >> shift as usize;
            // the remainder is at least half of 2^shift iff its top bit is set
            if scaled.bit(shift - 1) {
                quotient + 1u32
            } else {
                quotient
            }
        };

        let sign = if value.is_sign_negative() {
            Sign::Minus
        } else {
            Sign::Plus
        };

        Self {
            hundredths: BigInt::from_biguint(sign, magnitude),
        }
    }

    /// Formats the amount with its ticker (e.g., "12.50 $RWA").
    ///
    /// # Examples
    /// ```
    /// use api::reward_amount::RewardAmount;
    ///
    /// assert_eq!(RewardAmount::new_from_float(3.0).to_string_with_code(), "3.00 $RWA");
    /// ```
    pub fn to_string_with_code(&self) -> String {
        format!("{} {}", self, Self::CODE)
    }
}

/// Formats the amount as a numeric string with two decimals (e.g., "12.50").
impl fmt::Display for RewardAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let divisor = BigUint::from(10u32.pow(Self::DECIMALS));
        let sign = if self.hundredths.sign() == Sign::Minus {
            "-"
        } else {
            ""
        };
        let magnitude = self.hundredths.magnitude();
        let major_units = magnitude / &divisor;
        let minor_units = (magnitude % &divisor).to_string();

        write!(
            f,
            "{}{}.{:0>width$}",
            sign,
            major_units,
            minor_units,
            width = Self::DECIMALS as usize
        )
    }
}

/// Rewards travel as plain JSON numbers.
impl<'de> Deserialize<'de> for RewardAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Self::new_from_float)
    }
}
