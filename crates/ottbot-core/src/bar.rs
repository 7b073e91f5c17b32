//! Candle history with a fixed trailing window.
//!
//! Bars arrive in timestamp order and are append-only. The window keeps
//! the most recent `capacity` bars and assigns each appended bar a
//! monotonically increasing index, which the indicator cache uses as its
//! memoization key.

use crate::Price;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Default trailing window length fed to the indicators.
pub const DEFAULT_WINDOW: usize = 240;

/// A single OHLCV candle. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bar {
    /// Bar open timestamp.
    pub timestamp: DateTime<Utc>,
    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,
    pub volume: Decimal,
}

impl Bar {
    pub fn new(
        timestamp: DateTime<Utc>,
        open: Price,
        high: Price,
        low: Price,
        close: Price,
        volume: Decimal,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// Fixed-capacity trailing bar window.
///
/// Evicts the oldest bar once `capacity` is exceeded. The index returned
/// by [`BarWindow::push`] counts every bar ever appended, so it keeps
/// increasing across evictions.
#[derive(Debug, Clone)]
pub struct BarWindow {
    capacity: usize,
    bars: VecDeque<Bar>,
    appended: u64,
}

impl BarWindow {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            bars: VecDeque::with_capacity(capacity),
            appended: 0,
        }
    }

    /// Append a bar, returning its monotone index (0-based).
    pub fn push(&mut self, bar: Bar) -> u64 {
        if self.bars.len() == self.capacity {
            self.bars.pop_front();
        }
        self.bars.push_back(bar);
        let index = self.appended;
        self.appended += 1;
        index
    }

    /// Trailing close series, oldest first.
    pub fn closes(&self) -> Vec<Decimal> {
        self.bars.iter().map(|b| b.close.inner()).collect()
    }

    /// Most recent bar, if any.
    pub fn last(&self) -> Option<&Bar> {
        self.bars.back()
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Whether at least `n` bars of history are available.
    pub fn is_warm(&self, n: usize) -> bool {
        self.bars.len() >= n
    }

    /// Index of the most recently appended bar, if any.
    pub fn last_index(&self) -> Option<u64> {
        self.appended.checked_sub(1)
    }
}

impl Default for BarWindow {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}
