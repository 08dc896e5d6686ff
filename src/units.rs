// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Short factory functions for every unit type.
//!
//! ```
//! use tempoch_calendar::units::*;
//! use tempoch_calendar::cal2mjd;
//!
//! let mjd = cal2mjd(year_of(2024), month_of(2), day_of_month_of(29)).unwrap();
//! assert_eq!(mjd, mjd_of(60_369));
//! assert_eq!(seconds_of(90).to_hmsf().1, minutes_of(1));
//! ```

use crate::calendar::{DayOfMonth, DayOfYear, Month, Year};
use crate::duration::{Hours, Microseconds, Milliseconds, Minutes, Seconds};
use crate::mjd::ModifiedJulianDay;

#[inline]
pub const fn year_of(value: i32) -> Year {
    Year::new(value)
}

#[inline]
pub const fn month_of(value: i32) -> Month {
    Month::new(value)
}

#[inline]
pub const fn day_of_month_of(value: i32) -> DayOfMonth {
    DayOfMonth::new(value)
}

#[inline]
pub const fn day_of_year_of(value: i32) -> DayOfYear {
    DayOfYear::new(value)
}

#[inline]
pub const fn mjd_of(value: i64) -> ModifiedJulianDay {
    ModifiedJulianDay::new(value)
}

#[inline]
pub const fn hours_of(value: i32) -> Hours {
    Hours::new(value)
}

#[inline]
pub const fn minutes_of(value: i32) -> Minutes {
    Minutes::new(value)
}

#[inline]
pub const fn seconds_of(value: i64) -> Seconds {
    Seconds::new(value)
}

#[inline]
pub const fn milliseconds_of(value: i64) -> Milliseconds {
    Milliseconds::new(value)
}

#[inline]
pub const fn microseconds_of(value: i64) -> Microseconds {
    Microseconds::new(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factories_wrap_values() {
        assert_eq!(year_of(2024).as_underlying_type(), 2024);
        assert_eq!(month_of(7).as_underlying_type(), 7);
        assert_eq!(day_of_month_of(31).as_underlying_type(), 31);
        assert_eq!(day_of_year_of(366).as_underlying_type(), 366);
        assert_eq!(mjd_of(51_544).as_underlying_type(), 51_544);
        assert_eq!(hours_of(23).as_underlying_type(), 23);
        assert_eq!(minutes_of(59).as_underlying_type(), 59);
        assert_eq!(seconds_of(30).as_underlying_type(), 30);
        assert_eq!(milliseconds_of(1_500).as_underlying_type(), 1_500);
        assert_eq!(microseconds_of(42).as_underlying_type(), 42);
    }

    #[test]
    fn test_factories_compose() {
        const NOON: Microseconds =
            Microseconds::from_hms(hours_of(12), minutes_of(0), microseconds_of(0));
        assert_eq!(NOON.fractional_days(), 0.5);
    }
}
