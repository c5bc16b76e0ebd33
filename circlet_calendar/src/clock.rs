// Copyright 2025 the Circlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sources of "today".

use core::cell::Cell;

use chrono::NaiveDate;

/// Tells the grids what day it is.
pub trait Clock {
    /// The current local date.
    fn today(&self) -> NaiveDate;
}

/// A clock that reports a settable date. Useful for tests and previews.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedClock {
    date: Cell<NaiveDate>,
}

impl FixedClock {
    /// Create a clock stuck on `date`.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date: Cell::new(date),
        }
    }

    /// Move the clock to `date`. Grids pick this up on their next recompute.
    pub fn set(&self, date: NaiveDate) {
        self.date.set(date);
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date.get()
    }
}

/// The system's local date.
#[cfg(feature = "std")]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}
