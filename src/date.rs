// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Composite calendar dates.
//!
//! - [`YmdDate`]: year, month, day of month.
//! - [`YdoyDate`]: year, day of year.
//!
//! Both convert into each other directly through the cumulative
//! days-per-month table, without going through a Modified Julian Day.

use std::fmt;

use crate::calendar::{cumulative_row, DayOfMonth, DayOfYear, Month, Year};
use crate::error::CalendarResult;
use crate::mjd::{cal2mjd, ydoy2mjd, ModifiedJulianDay};

/// Linear month estimate: `doy * 0.032` lands on the right month or the one
/// before it, for every day of year 1..=366. One correction step follows.
const MONTH_ESTIMATE_FACTOR: f64 = 0.032;

/// Calendar date as (year, month, day of month). Unchecked.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YmdDate {
    pub year: Year,
    pub month: Month,
    pub day: DayOfMonth,
}

impl YmdDate {
    #[inline]
    pub const fn new(year: Year, month: Month, day: DayOfMonth) -> Self {
        Self { year, month, day }
    }

    /// `true` if the month and the day of month are both valid for the year.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.day.is_valid(self.year, self.month)
    }

    /// Modified Julian Day of this date.
    ///
    /// # Errors
    ///
    /// Propagates the out-of-range errors of [`cal2mjd`].
    #[inline]
    pub fn to_mjd(&self) -> CalendarResult<ModifiedJulianDay> {
        cal2mjd(self.year, self.month, self.day)
    }

    /// Day of year, read off the cumulative table.
    ///
    /// Months outside `1..=12` are folded onto the nearest table entry; the
    /// result is then meaningless. Validate with [`YmdDate::is_valid`] first
    /// when it matters.
    pub fn to_ydoy(&self) -> YdoyDate {
        let row = cumulative_row(self.year.as_underlying_type());
        let index = (self.month.as_underlying_type() - 1).clamp(0, 11) as usize;
        YdoyDate::new(
            self.year,
            DayOfYear::new(row[index] + self.day.as_underlying_type()),
        )
    }
}

impl fmt::Display for YmdDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month, self.day)
    }
}

impl From<ModifiedJulianDay> for YmdDate {
    #[inline]
    fn from(mjd: ModifiedJulianDay) -> Self {
        mjd.to_ymd()
    }
}

/// Calendar date as (year, day of year). Unchecked.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YdoyDate {
    pub year: Year,
    pub doy: DayOfYear,
}

impl YdoyDate {
    #[inline]
    pub const fn new(year: Year, doy: DayOfYear) -> Self {
        Self { year, doy }
    }

    /// `true` if the day of year exists in the year.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.doy.is_valid(self.year)
    }

    /// Modified Julian Day of this date; see [`ydoy2mjd`].
    #[inline]
    pub const fn to_mjd(&self) -> ModifiedJulianDay {
        ydoy2mjd(self.year, self.doy)
    }

    /// Month and day of month.
    ///
    /// Estimates the month linearly from the day of year, then moves one
    /// month forward if the day lies past the end of the estimated month.
    /// Out-of-range days of year never panic but give meaningless dates.
    pub fn to_ymd(&self) -> YmdDate {
        let doy = self.doy.as_underlying_type();
        let row = cumulative_row(self.year.as_underlying_type());

        let guess = ((f64::from(doy) * MONTH_ESTIMATE_FACTOR) as i32).clamp(0, 10) as usize;
        let month_index = guess + usize::from(doy > row[guess + 1]);

        YmdDate::new(
            self.year,
            Month::new(month_index as i32 + 1),
            DayOfMonth::new(doy - row[month_index]),
        )
    }
}

impl fmt::Display for YdoyDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.year, self.doy)
    }
}

impl From<ModifiedJulianDay> for YdoyDate {
    #[inline]
    fn from(mjd: ModifiedJulianDay) -> Self {
        mjd.to_ydoy()
    }
}
