use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// An amount of currency in the smallest unit.
/// Amounts are signed: a transaction may declare a negative amount, and it is
/// validation's job to reject it.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct Coin(i64);

impl Coin {
    pub const fn new(amount: i64) -> Self {
        Coin(amount)
    }

    pub fn zero() -> Self {
        Self::new(0)
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns None if the sum doesn't fit the underlying representation.
    pub fn checked_add(self, rhs: Coin) -> Option<Coin> {
        self.0.checked_add(rhs.0).map(Coin)
    }

    pub fn to_be_bytes(&self) -> [u8; 8] {
        self.0.to_be_bytes()
    }
}

impl From<i64> for Coin {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Coin {
    fn from(value: i32) -> Self {
        Self(value as i64)
    }
}

impl Display for Coin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} MNC", self.0)
    }
}
