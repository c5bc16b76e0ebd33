// Copyright 2025 the Circlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Weekday rotation and labels.
//!
//! Grids are laid out relative to a configurable first day of the week. Position `i` of a
//! week starting on `first_day` is `first_day` advanced by `i` days, wrapping after seven.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use chrono::Weekday;

/// First day of the week when none is configured.
pub const DEFAULT_FIRST_DAY: Weekday = Weekday::Mon;

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Weekday at `position` of a week starting on `first_day`. Positions wrap modulo seven.
pub fn weekday_at(first_day: Weekday, position: usize) -> Weekday {
    WEEK[(first_day.num_days_from_monday() as usize + position) % 7]
}

/// Position of `weekday` in a week starting on `first_day`, in `0..7`.
pub fn position_of(first_day: Weekday, weekday: Weekday) -> usize {
    (7 + weekday.num_days_from_monday() as usize - first_day.num_days_from_monday() as usize) % 7
}

/// Weekday for a Monday-based number (Monday = 1 … Sunday = 7).
pub fn from_monday_number(number: u32) -> Option<Weekday> {
    match number {
        1..=7 => Some(WEEK[number as usize - 1]),
        _ => None,
    }
}

/// Weekday for a Sunday-based number (Sunday = 1 … Saturday = 7), the convention many
/// locale databases use for their first day of the week.
pub fn from_sunday_number(number: u32) -> Option<Weekday> {
    match number {
        1..=7 => from_monday_number((number + 5) % 7 + 1),
        _ => None,
    }
}

/// Produces the label shown for a weekday in a header or week bar.
pub trait WeekdayFormatter {
    /// Short label for `weekday`.
    fn short_name(&self, weekday: Weekday) -> String;
}

/// English three-letter abbreviations ("Mon", "Tue", …).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ShortWeekdayNames;

impl WeekdayFormatter for ShortWeekdayNames {
    fn short_name(&self, weekday: Weekday) -> String {
        format!("{weekday}")
    }
}

impl<F> WeekdayFormatter for F
where
    F: Fn(Weekday) -> String,
{
    fn short_name(&self, weekday: Weekday) -> String {
        self(weekday)
    }
}

/// Labels for a full week starting on `first_day`.
pub fn week_labels(first_day: Weekday, formatter: &dyn WeekdayFormatter) -> Vec<String> {
    (0..7)
        .map(|i| formatter.short_name(weekday_at(first_day, i)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_wraps() {
        assert_eq!(weekday_at(Weekday::Mon, 0), Weekday::Mon);
        assert_eq!(weekday_at(Weekday::Mon, 2), Weekday::Wed);
        assert_eq!(weekday_at(Weekday::Sun, 1), Weekday::Mon);
        assert_eq!(weekday_at(Weekday::Sat, 9), Weekday::Mon);
        for first in WEEK {
            for i in 0..7 {
                assert_eq!(position_of(first, weekday_at(first, i)), i);
            }
        }
    }

    #[test]
    fn numbering_conventions() {
        assert_eq!(from_monday_number(1), Some(Weekday::Mon));
        assert_eq!(from_monday_number(7), Some(Weekday::Sun));
        assert_eq!(from_monday_number(0), None);
        assert_eq!(from_sunday_number(1), Some(Weekday::Sun));
        assert_eq!(from_sunday_number(2), Some(Weekday::Mon));
        assert_eq!(from_sunday_number(7), Some(Weekday::Sat));
        assert_eq!(from_sunday_number(8), None);
    }

    #[test]
    fn labels_follow_first_day() {
        assert_eq!(
            week_labels(Weekday::Sun, &ShortWeekdayNames),
            ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
        );
        let initials = |d: Weekday| -> String { format!("{d}")[..1].into() };
        assert_eq!(week_labels(Weekday::Mon, &initials)[6], "S");
    }
}
