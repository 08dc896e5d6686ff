// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Modified Julian Day and the calendar ⇄ MJD converters.
//!
//! [`ModifiedJulianDay`] is an integral day count since 1858-11-17; it carries
//! no time of day. Three integer algorithms connect it to calendar dates:
//!
//! | Direction | Function | Validity |
//! |-----------|----------|----------|
//! | (y, m, d) → MJD | [`cal2mjd`], [`calendar_to_mjd`] | proleptic Gregorian from −4800-03-01 |
//! | MJD → (y, m, d) | [`ModifiedJulianDay::to_ymd`] | same range |
//! | MJD → (y, doy) | [`ModifiedJulianDay::to_ydoy`] | 1901-01-01 .. 2099-12-31 |
//! | (y, doy) → MJD | [`ydoy2mjd`] | 1901-01-01 .. 2099-12-31 |
//!
//! All divisions are truncating integer divisions and the operation order
//! follows the reference formulas exactly: truncation is not associative, so
//! an algebraically equivalent rearrangement would give different results.
//!
//! Only [`cal2mjd`] validates its input. The other conversions are total and
//! return a value for any input, meaningful or not.
//!
//! ## References
//! * Fliegel & Van Flandern (1968), Comm. ACM 11, 657 (SOFA `iauCal2jd`)
//! * B. W. Remondi, "Date/Time Algorithms", NGS GPS Toolbox

use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use chrono::{Datelike, NaiveDate};
use qtty::Days;
use tracing::debug;

use crate::calendar::{month_length, DayOfMonth, DayOfYear, Month, Year};
use crate::constants::{JAN_1_1901_MJD, MJD0_JD};
use crate::date::{YdoyDate, YmdDate};
use crate::error::{CalendarError, CalendarResult};

/// `NaiveDate::num_days_from_ce()` of 1858-11-17 (MJD 0).
const MJD0_DAYS_FROM_CE: i64 = 678_576;

/// Offset between MJD and the Fliegel & Van Flandern day number used by the
/// inverse algorithm (`2400001 + 68569`).
const YMD_SHIFT: i64 = 68_569 + 2_400_000 + 1;

// ═══════════════════════════════════════════════════════════════════════════
// ModifiedJulianDay
// ═══════════════════════════════════════════════════════════════════════════

/// Integral Modified Julian Day. Only represents a date, never a datetime.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModifiedJulianDay(i64);

impl ModifiedJulianDay {
    #[inline]
    pub const fn new(mjd: i64) -> Self {
        Self(mjd)
    }

    /// Build from a year and day of year; see [`ydoy2mjd`].
    #[inline]
    pub const fn from_ydoy(year: Year, doy: DayOfYear) -> Self {
        ydoy2mjd(year, doy)
    }

    /// The wrapped day count.
    #[inline]
    pub const fn as_underlying_type(&self) -> i64 {
        self.0
    }

    /// Step back one day in place.
    #[inline]
    pub fn decrement(&mut self) -> &mut Self {
        self.0 -= 1;
        self
    }

    /// Step forward one day in place.
    #[inline]
    pub fn increment(&mut self) -> &mut Self {
        self.0 += 1;
        self
    }

    /// Year and day of year, by 4-year block decomposition from 1901-01-01.
    ///
    /// Exact for 1901-01-01 .. 2099-12-31 only: the decomposition assumes
    /// every fourth year is leap, which breaks at 1900 and 2100. Any day count
    /// is accepted; arithmetic wraps instead of overflowing, and the year is
    /// truncated to `i32` for |MJD| beyond roughly 7.8e11.
    pub const fn to_ydoy(&self) -> YdoyDate {
        let days_since_anchor = self.0.wrapping_sub(JAN_1_1901_MJD.as_underlying_type());
        let four_year_blocks = days_since_anchor / 1461;
        let years_elapsed = 1901_i64.wrapping_add(4_i64.wrapping_mul(four_year_blocks));
        let days_left = days_since_anchor.wrapping_sub(1461_i64.wrapping_mul(four_year_blocks));
        let extra_years = days_left / 365 - days_left / 1460;

        YdoyDate::new(
            Year::new(years_elapsed.wrapping_add(extra_years) as i32),
            DayOfYear::new((days_left - 365 * extra_years + 1) as i32),
        )
    }

    /// Gregorian calendar date.
    ///
    /// Any day count is accepted; arithmetic wraps instead of overflowing, so
    /// extreme values give meaningless dates. The year is truncated to `i32`
    /// for |MJD| beyond roughly 7.8e11.
    pub const fn to_ymd(&self) -> YmdDate {
        let mut l = self.0.wrapping_add(YMD_SHIFT);
        let n = l.wrapping_mul(4) / 146_097;
        l = l.wrapping_sub(146_097_i64.wrapping_mul(n).wrapping_add(3) / 4);
        let i = 4000_i64.wrapping_mul(l.wrapping_add(1)) / 1_461_001;
        l = l.wrapping_sub(1461_i64.wrapping_mul(i) / 4 - 31);
        let k = 80_i64.wrapping_mul(l) / 2447;
        let day = l.wrapping_sub(2447_i64.wrapping_mul(k) / 80);
        l = k / 11;
        let month = k.wrapping_add(2).wrapping_sub(12 * l);
        let year = 100_i64
            .wrapping_mul(n - 49)
            .wrapping_add(i)
            .wrapping_add(l);

        YmdDate::new(
            Year::new(year as i32),
            Month::new(month as i32),
            DayOfMonth::new(day as i32),
        )
    }

    /// The day count as a floating [`Days`] quantity.
    #[inline]
    pub fn to_days(&self) -> Days {
        Days::new(self.0 as f64)
    }

    /// Julian Date at 0h of this day.
    #[inline]
    pub fn to_julian_day(&self) -> Days {
        self.to_days() + MJD0_JD
    }

    /// Build from a `chrono` date (proleptic Gregorian, astronomical years).
    pub fn from_naive_date(date: NaiveDate) -> Self {
        Self(i64::from(date.num_days_from_ce()) - MJD0_DAYS_FROM_CE)
    }

    /// Convert to a `chrono` date.
    ///
    /// Returns `None` if the day falls outside chrono's representable range.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        let days = self.0.checked_add(MJD0_DAYS_FROM_CE)?;
        NaiveDate::from_num_days_from_ce_opt(i32::try_from(days).ok()?)
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl fmt::Display for ModifiedJulianDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MJD {}", self.0)
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Add for ModifiedJulianDay {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for ModifiedJulianDay {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for ModifiedJulianDay {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for ModifiedJulianDay {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

// ── Conversions ───────────────────────────────────────────────────────────

impl From<NaiveDate> for ModifiedJulianDay {
    #[inline]
    fn from(date: NaiveDate) -> Self {
        Self::from_naive_date(date)
    }
}

impl From<YdoyDate> for ModifiedJulianDay {
    #[inline]
    fn from(date: YdoyDate) -> Self {
        ydoy2mjd(date.year, date.doy)
    }
}

impl TryFrom<YmdDate> for ModifiedJulianDay {
    type Error = CalendarError;

    fn try_from(date: YmdDate) -> Result<Self, Self::Error> {
        cal2mjd(date.year, date.month, date.day)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Free conversion functions
// ═══════════════════════════════════════════════════════════════════════════

/// Calendar date (plain integers) to Modified Julian Day.
///
/// # Errors
///
/// * [`CalendarError::InvalidMonth`] if `month` is outside `1..=12`.
/// * [`CalendarError::InvalidDayOfMonth`] if `day` is outside the month,
///   taking leap years into account.
///
/// ```
/// use tempoch_calendar::calendar_to_mjd;
///
/// assert_eq!(calendar_to_mjd(2000, 1, 1).unwrap(), 51_544);
/// assert!(calendar_to_mjd(2021, 2, 29).is_err());
/// ```
pub fn calendar_to_mjd(year: i32, month: i32, day: i32) -> CalendarResult<i64> {
    if !(1..=12).contains(&month) {
        debug!(year, month, day, "rejected calendar date: invalid month");
        return Err(CalendarError::InvalidMonth { month });
    }

    if day < 1 || day > month_length(year, month) {
        debug!(year, month, day, "rejected calendar date: invalid day of month");
        return Err(CalendarError::InvalidDayOfMonth { year, month, day });
    }

    let my = i64::from((month - 14) / 12);
    let iypmy = i64::from(year) + my;
    let im = i64::from(month);

    Ok((1461 * (iypmy + 4800)) / 4 + (367 * (im - 2 - 12 * my)) / 12
        - (3 * ((iypmy + 4900) / 100)) / 4
        + i64::from(day)
        - 2_432_076)
}

/// Typed wrapper around [`calendar_to_mjd`].
///
/// # Errors
///
/// Fails exactly when [`calendar_to_mjd`] does.
pub fn cal2mjd(year: Year, month: Month, day: DayOfMonth) -> CalendarResult<ModifiedJulianDay> {
    calendar_to_mjd(
        year.as_underlying_type(),
        month.as_underlying_type(),
        day.as_underlying_type(),
    )
    .map(ModifiedJulianDay::new)
}

/// Year and day of year to Modified Julian Day.
///
/// Unchecked: a day of year past the end of `year` silently lands in a
/// following year. Exact for 1901 .. 2099.
pub const fn ydoy2mjd(year: Year, doy: DayOfYear) -> ModifiedJulianDay {
    let iyr = year.as_underlying_type() as i64;
    let idy = doy.as_underlying_type() as i64;

    ModifiedJulianDay::new(
        ((iyr - 1901) / 4) * 1461 + ((iyr - 1901) % 4) * 365 + idy - 1
            + JAN_1_1901_MJD.as_underlying_type(),
    )
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn ymd(year: i32, month: i32, day: i32) -> YmdDate {
        YmdDate::new(Year::new(year), Month::new(month), DayOfMonth::new(day))
    }

    #[test]
    fn test_cal2mjd_known_dates() {
        assert_eq!(calendar_to_mjd(1858, 11, 17).unwrap(), 0);
        assert_eq!(calendar_to_mjd(1901, 1, 1).unwrap(), 15_385);
        assert_eq!(calendar_to_mjd(1980, 1, 6).unwrap(), 44_244);
        assert_eq!(calendar_to_mjd(2000, 1, 1).unwrap(), 51_544);
        assert_eq!(calendar_to_mjd(2020, 1, 1).unwrap(), 58_849);
    }

    #[test]
    fn test_cal2mjd_earliest_supported_date() {
        assert_eq!(calendar_to_mjd(-4800, 3, 1).unwrap(), -2_432_045);
        assert_eq!(ModifiedJulianDay::new(-2_432_045).to_ymd(), ymd(-4800, 3, 1));
    }

    #[test]
    fn test_cal2mjd_leap_day() {
        let mjd = cal2mjd(Year::new(2020), Month::new(2), DayOfMonth::new(29)).unwrap();
        assert_eq!(mjd, ModifiedJulianDay::new(58_908));

        let err = cal2mjd(Year::new(2021), Month::new(2), DayOfMonth::new(29)).unwrap_err();
        assert_eq!(
            err,
            CalendarError::InvalidDayOfMonth {
                year: 2021,
                month: 2,
                day: 29
            }
        );
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn test_cal2mjd_rejects_bad_month_and_day() {
        assert_eq!(
            calendar_to_mjd(2021, 0, 1),
            Err(CalendarError::InvalidMonth { month: 0 })
        );
        assert_eq!(
            calendar_to_mjd(2021, 13, 1),
            Err(CalendarError::InvalidMonth { month: 13 })
        );
        assert!(calendar_to_mjd(2021, 4, 31).is_err());
        assert!(calendar_to_mjd(2021, 4, 0).is_err());
        assert!(calendar_to_mjd(1900, 2, 29).is_err());
        assert!(calendar_to_mjd(2000, 2, 29).is_ok());
    }

    #[test]
    fn test_to_ymd_known_dates() {
        assert_eq!(ModifiedJulianDay::new(51_544).to_ymd(), ymd(2000, 1, 1));
        assert_eq!(ModifiedJulianDay::new(0).to_ymd(), ymd(1858, 11, 17));
        assert_eq!(ModifiedJulianDay::new(44_244).to_ymd(), ymd(1980, 1, 6));
        assert_eq!(ModifiedJulianDay::new(58_908).to_ymd(), ymd(2020, 2, 29));
    }

    #[test]
    fn test_to_ydoy_known_dates() {
        let ydoy = ModifiedJulianDay::new(51_544).to_ydoy();
        assert_eq!(ydoy.year, Year::new(2000));
        assert_eq!(ydoy.doy, DayOfYear::new(1));

        // Last day of a leap year.
        let ydoy = ModifiedJulianDay::new(51_909).to_ydoy();
        assert_eq!(ydoy.year, Year::new(2000));
        assert_eq!(ydoy.doy, DayOfYear::new(366));

        let ydoy = JAN_1_1901_MJD.to_ydoy();
        assert_eq!(ydoy.year, Year::new(1901));
        assert_eq!(ydoy.doy, DayOfYear::new(1));
    }

    #[test]
    fn test_date_conversions_are_total_for_extreme_days() {
        for value in [
            i64::MIN,
            i64::MIN / 2,
            -1_000_000_000_000,
            1_000_000_000_000,
            i64::MAX / 2,
            i64::MAX,
        ] {
            let mjd = ModifiedJulianDay::new(value);
            let _ = mjd.to_ymd();
            let _ = mjd.to_ydoy();
        }

        // Around 2.7e9 years the year no longer fits an i32 and wraps negative.
        let far = ModifiedJulianDay::new(1_000_000_000_000);
        assert!(far.to_ymd().year.as_underlying_type() < 0);
        assert!(far.to_ydoy().year.as_underlying_type() < 0);

        // Wrapping arithmetic leaves the in-range results untouched.
        assert_eq!(ModifiedJulianDay::new(51_544).to_ymd(), ymd(2000, 1, 1));
        assert_eq!(ModifiedJulianDay::new(51_544).to_ydoy().doy, DayOfYear::new(1));
    }

    #[test]
    fn test_ydoy2mjd_known_dates() {
        assert_eq!(
            ydoy2mjd(Year::new(2000), DayOfYear::new(1)),
            ModifiedJulianDay::new(51_544)
        );
        assert_eq!(
            ModifiedJulianDay::from_ydoy(Year::new(2020), DayOfYear::new(60)),
            ModifiedJulianDay::new(58_908)
        );
    }

    #[test]
    fn test_ydoy2mjd_is_unchecked() {
        // Day 366 of a non-leap year is 1 January of the next one.
        let mjd = ydoy2mjd(Year::new(2021), DayOfYear::new(366));
        assert_eq!(mjd, ModifiedJulianDay::new(calendar_to_mjd(2022, 1, 1).unwrap()));
    }

    #[test]
    fn test_ydoy_roundtrip_within_valid_window() {
        let first = calendar_to_mjd(1901, 1, 1).unwrap();
        let last = calendar_to_mjd(2099, 12, 31).unwrap();
        for value in first..=last {
            let mjd = ModifiedJulianDay::new(value);
            let ydoy = mjd.to_ydoy();
            assert_eq!(ydoy2mjd(ydoy.year, ydoy.doy), mjd, "MJD {value}");
        }
    }

    #[test]
    fn test_arithmetic_and_ordering() {
        let a = ModifiedJulianDay::new(59_001);
        let b = ModifiedJulianDay::new(59_000);
        assert_eq!(a - b, ModifiedJulianDay::new(1));
        assert_eq!(a + b, ModifiedJulianDay::new(118_001));
        assert!(b < a);
        assert!(a >= b);

        let mut c = b;
        c += ModifiedJulianDay::new(10);
        assert_eq!(c, ModifiedJulianDay::new(59_010));
        c -= ModifiedJulianDay::new(5);
        assert_eq!(c, ModifiedJulianDay::new(59_005));
        c.decrement();
        assert_eq!(c, ModifiedJulianDay::new(59_004));
        c.increment().increment();
        assert_eq!(c, ModifiedJulianDay::new(59_006));
    }

    #[test]
    fn test_floating_interop() {
        let mjd = ModifiedJulianDay::new(51_544);
        assert_eq!(mjd.to_days(), Days::new(51_544.0));
        assert_eq!(mjd.to_julian_day(), Days::new(2_451_544.5));
    }

    #[test]
    fn test_chrono_interop() {
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let mjd = ModifiedJulianDay::from(date);
        assert_eq!(mjd, ModifiedJulianDay::new(51_544));
        assert_eq!(mjd.to_naive_date(), Some(date));

        let epoch = NaiveDate::from_ymd_opt(1858, 11, 17).unwrap();
        assert_eq!(ModifiedJulianDay::from_naive_date(epoch).as_underlying_type(), 0);

        assert_eq!(ModifiedJulianDay::new(i64::MAX).to_naive_date(), None);
        assert_eq!(ModifiedJulianDay::new(i64::from(i32::MAX)).to_naive_date(), None);
    }

    #[test]
    fn test_composite_conversions() {
        let mjd = ModifiedJulianDay::try_from(ymd(2024, 3, 1)).unwrap();
        assert_eq!(mjd.to_ymd(), ymd(2024, 3, 1));
        assert!(ModifiedJulianDay::try_from(ymd(2023, 2, 29)).is_err());

        let from_doy = ModifiedJulianDay::from(mjd.to_ydoy());
        assert_eq!(from_doy, mjd);
    }

    #[test]
    fn test_display() {
        assert_eq!(ModifiedJulianDay::new(51_544).to_string(), "MJD 51544");
    }
}
