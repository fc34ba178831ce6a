//! Arbitrary-precision non-negative integers stored as decimal digits.
//!
//! Only the operations the stone rules need are provided: digit count,
//! splitting into halves, and multiplication by a small constant with manual
//! carry propagation.

use std::fmt;
use std::str::FromStr;

use anyhow::{Result, bail};

/// Decimal digits, most significant first, without leading zeros.
/// Zero is the single digit `0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digits(Vec<u8>);

impl Digits {
    pub fn zero() -> Self {
        Self(vec![0])
    }

    pub fn one() -> Self {
        Self(vec![1])
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0]
    }

    /// Number of decimal digits (1 for zero).
    pub fn digit_count(&self) -> usize {
        self.0.len()
    }

    /// Split into left and right halves of the digit string, each with leading
    /// zeros stripped. `None` when the digit count is odd.
    pub fn split_even(&self) -> Option<(Digits, Digits)> {
        if self.0.len() % 2 != 0 {
            return None;
        }
        let (left, right) = self.0.split_at(self.0.len() / 2);
        Some((Self::normalized(left), Self::normalized(right)))
    }

    /// Multiply by `factor`, propagating carries from the least significant
    /// digit upward.
    pub fn mul_small(&self, factor: u32) -> Digits {
        if factor == 0 || self.is_zero() {
            return Self::zero();
        }

        let factor = u64::from(factor);
        let mut reversed = Vec::with_capacity(self.0.len() + 10);
        let mut carry = 0u64;
        for &digit in self.0.iter().rev() {
            let product = u64::from(digit) * factor + carry;
            reversed.push((product % 10) as u8);
            carry = product / 10;
        }
        while carry > 0 {
            reversed.push((carry % 10) as u8);
            carry /= 10;
        }
        reversed.reverse();
        Self(reversed)
    }

    fn normalized(digits: &[u8]) -> Digits {
        match digits.iter().position(|&digit| digit != 0) {
            Some(first) => Self(digits[first..].to_vec()),
            None => Self::zero(),
        }
    }
}

impl From<u64> for Digits {
    fn from(mut value: u64) -> Self {
        if value == 0 {
            return Self::zero();
        }
        let mut reversed = Vec::new();
        while value > 0 {
            reversed.push((value % 10) as u8);
            value /= 10;
        }
        reversed.reverse();
        Self(reversed)
    }
}

impl FromStr for Digits {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            bail!("empty number");
        }
        let mut digits = Vec::with_capacity(s.len());
        for ch in s.chars() {
            match ch.to_digit(10) {
                Some(digit) => digits.push(digit as u8),
                None => bail!("invalid digit '{ch}' in '{s}'"),
            }
        }
        Ok(Self::normalized(&digits))
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.0 {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}
