// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar value types.
//!
//! [`Year`], [`Month`], [`DayOfMonth`] and [`DayOfYear`] are thin wrappers
//! around an `i32`. None of them validates on construction: `Month::new(200)`
//! is a perfectly good value. Range checks are explicit and opt-in through the
//! `is_valid` methods, so that conversions on already-trusted data pay nothing.
//!
//! The only fallible constructor is [`Month::from_name`], which resolves a
//! short (`"Jan"`) or long (`"January"`) month name, ignoring ASCII case.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{CalendarError, CalendarResult};

// ── Static tables ─────────────────────────────────────────────────────────

/// Month lengths in days for a non-leap year.
pub(crate) const MONTH_LENGTHS: [i32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days elapsed at the end of each month: row 0 non-leap, row 1 leap.
/// Index `m` holds the day-of-year of the last day of month `m` (index 0 is 0).
#[rustfmt::skip]
pub(crate) const CUMULATIVE_DAYS: [[i32; 13]; 2] = [
    [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334, 365],
    [0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335, 366],
];

const SHORT_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const LONG_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// ── Leap-year rule ────────────────────────────────────────────────────────

/// Gregorian leap-year rule.
///
/// A year is leap when divisible by 4, except centuries, which must also be
/// divisible by 400. Applies proleptically to negative years.
#[inline]
pub const fn is_leap(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Length of `month` in `year`; `month` must already be in `1..=12`.
#[inline]
pub(crate) const fn month_length(year: i32, month: i32) -> i32 {
    let leap = if month == 2 && is_leap(year) { 1 } else { 0 };
    MONTH_LENGTHS[(month - 1) as usize] + leap
}

/// Row of [`CUMULATIVE_DAYS`] to use for `year`.
#[inline]
pub(crate) const fn cumulative_row(year: i32) -> [i32; 13] {
    CUMULATIVE_DAYS[is_leap(year) as usize]
}

// ── Year ──────────────────────────────────────────────────────────────────

/// A calendar year. Any integer is accepted, including negative
/// (proleptic) years.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(i32);

impl Year {
    #[inline]
    pub const fn new(year: i32) -> Self {
        Self(year)
    }

    /// The wrapped integer.
    #[inline]
    pub const fn as_underlying_type(&self) -> i32 {
        self.0
    }

    /// See [`is_leap`].
    #[inline]
    pub const fn is_leap(&self) -> bool {
        is_leap(self.0)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

// ── Month ─────────────────────────────────────────────────────────────────

/// A calendar month, conventionally in `1..=12` (never `0..=11`).
///
/// Out-of-range values are representable; check them with
/// [`Month::is_valid`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(i32);

impl Month {
    #[inline]
    pub const fn new(month: i32) -> Self {
        Self(month)
    }

    /// Resolve a month from its name.
    ///
    /// A 3-character input is matched against the short names (`"Jan"` ..
    /// `"Dec"`); anything longer is matched against the full names
    /// (`"January"` .. `"December"`). Matching ignores ASCII case but not
    /// length, so `"Janu"` and `"Ja"` are both rejected.
    ///
    /// # Errors
    ///
    /// [`CalendarError::InvalidMonthName`] carrying `name` when nothing matches.
    ///
    /// ```
    /// use tempoch_calendar::Month;
    ///
    /// assert_eq!(Month::from_name("sep").unwrap(), Month::new(9));
    /// assert_eq!(Month::from_name("SEPTEMBER").unwrap(), Month::new(9));
    /// assert!(Month::from_name("Sept").is_err());
    /// ```
    pub fn from_name(name: &str) -> CalendarResult<Self> {
        let found = match name.len() {
            3 => lookup(&SHORT_NAMES, name),
            n if n > 3 => lookup(&LONG_NAMES, name),
            _ => None,
        };

        found.ok_or_else(|| {
            debug!(name, "unrecognised month name");
            CalendarError::InvalidMonthName(name.to_owned())
        })
    }

    /// The wrapped integer.
    #[inline]
    pub const fn as_underlying_type(&self) -> i32 {
        self.0
    }

    /// `true` iff the month lies in `1..=12`.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.0 >= 1 && self.0 <= 12
    }

    /// Three-letter name, e.g. `"Jan"`; `None` for an invalid month.
    pub const fn short_name(&self) -> Option<&'static str> {
        if self.is_valid() {
            Some(SHORT_NAMES[(self.0 - 1) as usize])
        } else {
            None
        }
    }

    /// Full name, e.g. `"January"`; `None` for an invalid month.
    pub const fn long_name(&self) -> Option<&'static str> {
        if self.is_valid() {
            Some(LONG_NAMES[(self.0 - 1) as usize])
        } else {
            None
        }
    }
}

fn lookup(table: &[&str; 12], name: &str) -> Option<Month> {
    table
        .iter()
        .position(|candidate| candidate.eq_ignore_ascii_case(name))
        .map(|index| Month::new(index as i32 + 1))
}

impl Default for Month {
    fn default() -> Self {
        Self(1)
    }
}

impl FromStr for Month {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

// ── DayOfMonth ────────────────────────────────────────────────────────────

/// Day within a month. Any integer is accepted, negatives included.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayOfMonth(i32);

impl DayOfMonth {
    #[inline]
    pub const fn new(day: i32) -> Self {
        Self(day)
    }

    /// The wrapped integer.
    #[inline]
    pub const fn as_underlying_type(&self) -> i32 {
        self.0
    }

    /// Check the day against the length of `month` in `year`.
    ///
    /// Returns `false` for an invalid month. February gains a 29th day in
    /// leap years.
    pub const fn is_valid(&self, year: Year, month: Month) -> bool {
        if self.0 <= 0 || self.0 >= 32 || !month.is_valid() {
            return false;
        }
        self.0 <= month_length(year.as_underlying_type(), month.as_underlying_type())
    }
}

impl fmt::Display for DayOfMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

// ── DayOfYear ─────────────────────────────────────────────────────────────

/// 1-based day within a year. Unchecked; see [`DayOfYear::is_valid`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayOfYear(i32);

impl DayOfYear {
    #[inline]
    pub const fn new(day: i32) -> Self {
        Self(day)
    }

    /// The wrapped integer.
    #[inline]
    pub const fn as_underlying_type(&self) -> i32 {
        self.0
    }

    /// `true` iff the day lies in `1..=365`, or `1..=366` for a leap `year`.
    pub const fn is_valid(&self, year: Year) -> bool {
        self.0 >= 1 && self.0 <= cumulative_row(year.as_underlying_type())[12]
    }
}

impl fmt::Display for DayOfYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.0)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
