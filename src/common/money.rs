use bigdecimal::BigDecimal;
use bigdecimal::ParseBigDecimalError;
use num_traits::{FromPrimitive, ToPrimitive, Zero};
use std::fmt;
use std::ops::{Add, AddAssign};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
/// A monetary amount: a court fee or a per-person share of one.
///
/// # Why Use Money? It is a Value Object.
/// Wrapping the amount keeps court costs from mixing with other numbers and
/// pins down the two places where precision matters. Report totals are
/// accumulated on an exact decimal, so summing many shares never drifts.
/// The persisted document carries plain JSON numbers, so amounts cross the
/// storage boundary as `f64` and shares are split in `f64` to stay faithful
/// to documents written by earlier deployments.
///
/// # Examples
/// ```
/// use buddy_ledger::common::money::Money;
///
/// let cost = Money::from_f64(13.1);
/// assert_eq!(cost.to_string(), "13.10");
/// assert_eq!(cost.split_between(2).to_string(), "6.55");
/// ```
pub struct Money(BigDecimal);

impl Money {
    pub fn zero() -> Self {
        Money(BigDecimal::zero())
    }

    /// Builds an amount from the document's wire representation.
    /// Non-finite input collapses to zero; JSON numbers are always finite,
    /// so document loads never take that branch.
    pub fn from_f64(value: f64) -> Self {
        Money(BigDecimal::from_f64(value).unwrap_or_else(BigDecimal::zero))
    }

    /// The wire representation: the nearest IEEE double.
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(0.0)
    }

    pub fn is_negative(&self) -> bool {
        self.0 < BigDecimal::zero()
    }

    /// Even split across `heads` payers, computed in `f64` exactly like the
    /// shares already stored in old documents. `heads` must be at least
    /// one; session validation guarantees it before any split is taken.
    pub fn split_between(&self, heads: usize) -> Money {
        Money::from_f64(self.to_f64() / heads as f64)
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;
        Ok(Money(bd))
    }
}

impl fmt::Display for Money {
    /// Rounded to two decimal places. Display only; stored values keep
    /// full precision.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.to_f64())
    }
}

impl serde::Serialize for Money {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_f64())
    }
}

impl<'de> serde::Deserialize<'de> for Money {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value: f64 = serde::Deserialize::deserialize(deserializer)?;
        Ok(Money::from_f64(value))
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}
