//! Trading direction, order payloads, and fill notifications.

use crate::{Price, Qty};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position direction.
///
/// A flat engine holds no `Position` at all, so there is no `Flat`
/// variant here; absence of a position is represented with `Option`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Long,
    Short,
}

impl Direction {
    /// +1 for long, -1 for short. Used when offsetting prices from entry.
    pub fn sign(&self) -> i64 {
        match self {
            Self::Long => 1,
            Self::Short => -1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Long => write!(f, "long"),
            Self::Short => write!(f, "short"),
        }
    }
}

/// Entry order issued when a signal passes the risk gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryOrder {
    pub direction: Direction,
    pub qty: Qty,
    pub price: Price,
}

/// Stop order. Cancelled and reissued on every quantity-affecting event;
/// its quantity always equals the position's remaining quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopOrder {
    pub qty: Qty,
    pub price: Price,
}

/// One rung of the take-profit ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TakeProfitTier {
    pub qty: Qty,
    pub price: Price,
}

/// Fill notification from the execution collaborator.
///
/// The sole mutation trigger for position state. Reported exactly once
/// per executed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fill {
    pub price: Price,
    pub qty: Qty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_sign() {
        assert_eq!(Direction::Long.sign(), 1);
        assert_eq!(Direction::Short.sign(), -1);
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::Long.to_string(), "long");
        assert_eq!(Direction::Short.to_string(), "short");
    }
}
