//! Monetary amounts.
//!
//! Prices are kept in cents so that totals are exact. Catalog files carry
//! prices as plain numbers of reais; display follows the pt-BR number format
//! (`.` for thousands, `,` for decimals, no trailing zero decimals).

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ModelError;

/// A non-negative amount of money, in cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn from_reais(reais: u64) -> Self {
        Self(reais.saturating_mul(100))
    }

    /// Convert a decimal amount of reais, rounding to the nearest cent.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn try_from_reais(reais: f64) -> Result<Self, ModelError> {
        if !reais.is_finite() || reais < 0.0 {
            return Err(ModelError::InvalidPrice(reais));
        }
        Ok(Self((reais * 100.0).round() as u64))
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn as_reais(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Price of `qty` units.
    #[must_use]
    pub fn times(self, qty: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(qty)))
    }

    /// Value of one of `count` interest-free installments, rounded up to
    /// whole reais.
    #[must_use]
    pub fn installment(self, count: u32) -> Self {
        let count = u64::from(count.max(1));
        Self::from_reais(self.0.div_ceil(100 * count))
    }

    /// The amount without the currency prefix, e.g. `1.299,9`.
    pub fn amount_label(self) -> String {
        let reais = self.0 / 100;
        let cents = self.0 % 100;

        let digits = reais.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }

        if cents != 0 {
            let fraction = format!("{cents:02}");
            grouped.push(',');
            grouped.push_str(fraction.trim_end_matches('0'));
        }
        grouped
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R$ {}", self.amount_label())
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % 100 == 0 {
            serializer.serialize_u64(self.0 / 100)
        } else {
            serializer.serialize_f64(self.as_reais())
        }
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let reais = f64::deserialize(deserializer)?;
        Self::try_from_reais(reais).map_err(serde::de::Error::custom)
    }
}
