// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Fixed-point time-of-day durations.
//!
//! [`Duration<R>`] stores a signed integer count of resolution units, where
//! the compile-time marker `R: Resolution` fixes how many units make up one
//! second. All behaviour (arithmetic, day-overflow extraction, decomposition
//! into hours/minutes/seconds) is written once, generically; the three
//! resolutions only differ by their constant factor, which the compiler folds.
//!
//! | Alias | Marker | Units per second |
//! |-------|--------|------------------|
//! | [`Seconds`] | [`Sec`] | 1 |
//! | [`Milliseconds`] | [`Millisec`] | 1 000 |
//! | [`Microseconds`] | [`Microsec`] | 1 000 000 |
//!
//! Arithmetic is plain `i64` arithmetic: no saturation and no overflow
//! detection. An `i64` holds far more than the two days of microseconds a
//! running time-of-day accumulator needs before [`Duration::remove_days`]
//! folds it back.
//!
//! [`Hours`] and [`Minutes`] are simple integer wrappers used to build and
//! decompose durations.

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, Sub, SubAssign};

use qtty::Days;

use crate::mjd::ModifiedJulianDay;

const SECONDS_PER_DAY: i64 = 86_400;

const _: () = assert!(
    SECONDS_PER_DAY * 1_000_000 * 2 < i64::MAX,
    "i64 must hold two days in microseconds"
);

// ═══════════════════════════════════════════════════════════════════════════
// Hours / Minutes
// ═══════════════════════════════════════════════════════════════════════════

/// Integral hours. No range is enforced.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hours(i32);

impl Hours {
    #[inline]
    pub const fn new(hours: i32) -> Self {
        Self(hours)
    }

    #[inline]
    pub const fn as_underlying_type(&self) -> i32 {
        self.0
    }
}

/// Integral minutes. No range is enforced.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Minutes(i32);

impl Minutes {
    #[inline]
    pub const fn new(minutes: i32) -> Self {
        Self(minutes)
    }

    #[inline]
    pub const fn as_underlying_type(&self) -> i32 {
        self.0
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Resolution trait
// ═══════════════════════════════════════════════════════════════════════════

/// Marker trait for sub-minute duration resolutions.
///
/// A resolution defines how many of its units make up one second, and the
/// number of decimal digits needed to print the sub-second part.
pub trait Resolution:
    Copy + Clone + fmt::Debug + Default + PartialEq + Eq + PartialOrd + Ord + Hash + 'static
{
    /// Unit label used by [`Duration`] debug output.
    const LABEL: &'static str;

    /// Number of units in one second.
    const UNITS_PER_SECOND: i64;

    /// Decimal digits of the sub-second remainder.
    const FRACTION_DIGITS: usize;
}

/// Whole seconds.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sec;

impl Resolution for Sec {
    const LABEL: &'static str = "s";
    const UNITS_PER_SECOND: i64 = 1;
    const FRACTION_DIGITS: usize = 0;
}

/// Milliseconds (10⁻³ s).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Millisec;

impl Resolution for Millisec {
    const LABEL: &'static str = "ms";
    const UNITS_PER_SECOND: i64 = 1_000;
    const FRACTION_DIGITS: usize = 3;
}

/// Microseconds (10⁻⁶ s).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Microsec;

impl Resolution for Microsec {
    const LABEL: &'static str = "µs";
    const UNITS_PER_SECOND: i64 = 1_000_000;
    const FRACTION_DIGITS: usize = 6;
}

/// Resolutions that `Self` may be narrowed to, truncating toward zero.
///
/// Only fine → coarse casts exist: microseconds to milliseconds or seconds,
/// milliseconds to seconds.
pub trait NarrowsTo<T: Resolution>: Resolution {}

impl NarrowsTo<Millisec> for Microsec {}
impl NarrowsTo<Sec> for Microsec {}
impl NarrowsTo<Sec> for Millisec {}

// ═══════════════════════════════════════════════════════════════════════════
// Duration<R>
// ═══════════════════════════════════════════════════════════════════════════

/// A signed integer count of `R` units.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration<R: Resolution> {
    count: i64,
    _resolution: PhantomData<R>,
}

/// Whole-second duration.
pub type Seconds = Duration<Sec>;

/// Millisecond duration.
pub type Milliseconds = Duration<Millisec>;

/// Microsecond duration.
pub type Microseconds = Duration<Microsec>;

impl<R: Resolution> Duration<R> {
    /// Units per second at this resolution.
    pub const UNITS_PER_SECOND: i64 = R::UNITS_PER_SECOND;

    /// Units in one calendar day at this resolution.
    pub const MAX_IN_DAY: i64 = SECONDS_PER_DAY * R::UNITS_PER_SECOND;

    const PER_MINUTE: i64 = 60 * R::UNITS_PER_SECOND;
    const PER_HOUR: i64 = 3600 * R::UNITS_PER_SECOND;

    // ── constructors ──────────────────────────────────────────────────

    /// Create from a raw count of `R` units.
    #[inline]
    pub const fn new(count: i64) -> Self {
        Self {
            count,
            _resolution: PhantomData,
        }
    }

    /// `h` hours + `m` minutes + `sub` (already at this resolution).
    #[inline]
    pub const fn from_hms(h: Hours, m: Minutes, sub: Self) -> Self {
        Self::new(
            sub.count
                + (m.as_underlying_type() as i64 * 60 + h.as_underlying_type() as i64 * 3600)
                    * R::UNITS_PER_SECOND,
        )
    }

    /// `h` hours + `m` minutes + `fs` fractional seconds.
    ///
    /// The seconds are scaled to this resolution and truncated toward zero.
    #[inline]
    pub fn from_hms_fractional(h: Hours, m: Minutes, fs: f64) -> Self {
        Self::new(
            (fs * R::UNITS_PER_SECOND as f64) as i64
                + (i64::from(m.as_underlying_type()) * 60
                    + i64::from(h.as_underlying_type()) * 3600)
                    * R::UNITS_PER_SECOND,
        )
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The raw count of `R` units.
    #[inline]
    pub const fn as_underlying_type(&self) -> i64 {
        self.count
    }

    // ── day handling ──────────────────────────────────────────────────

    /// `true` if the duration is strictly longer than one day.
    ///
    /// Exactly one day is *not* more than a day.
    #[inline]
    pub const fn more_than_day(&self) -> bool {
        self.count > Self::MAX_IN_DAY
    }

    /// Strip whole days off the duration and return how many were removed.
    ///
    /// Afterwards the duration holds only the time within the last day, so a
    /// running time-of-day accumulator can hand its overflow to a day counter:
    ///
    /// ```
    /// use tempoch_calendar::{Microseconds, ModifiedJulianDay};
    ///
    /// let mut mjd = ModifiedJulianDay::new(51_544);
    /// let mut tod = Microseconds::new(Microseconds::MAX_IN_DAY + 1);
    /// mjd += ModifiedJulianDay::new(tod.remove_days());
    /// assert_eq!(mjd, ModifiedJulianDay::new(51_545));
    /// assert_eq!(tod.as_underlying_type(), 1);
    /// ```
    ///
    /// Negative counts truncate toward zero: `-1` µs removes no day and stays
    /// `-1`.
    #[inline]
    pub fn remove_days(&mut self) -> i64 {
        let days = self.count / Self::MAX_IN_DAY;
        self.count %= Self::MAX_IN_DAY;
        days
    }

    /// Whole days contained in the duration, without modifying it.
    #[inline]
    pub const fn to_days(&self) -> i64 {
        self.count / Self::MAX_IN_DAY
    }

    // ── floating interop ──────────────────────────────────────────────

    /// The duration as a fraction of a day.
    #[inline]
    pub fn fractional_days(&self) -> f64 {
        self.count as f64 / Self::MAX_IN_DAY as f64
    }

    /// The duration in (fractional) seconds.
    #[inline]
    pub fn to_fractional_seconds(&self) -> f64 {
        self.count as f64 / R::UNITS_PER_SECOND as f64
    }

    /// The duration as a typed [`qtty::Seconds`] quantity.
    #[inline]
    pub fn to_quantity(&self) -> qtty::Seconds {
        qtty::Seconds::new(self.to_fractional_seconds())
    }

    /// The duration as a typed [`Days`] quantity.
    #[inline]
    pub fn as_days(&self) -> Days {
        Days::new(self.fractional_days())
    }

    // ── decomposition ─────────────────────────────────────────────────

    /// Split into hours, minutes, whole seconds and the remainder in `R` units.
    ///
    /// The remainder is always 0 for [`Seconds`]. Negative durations
    /// decompose component-wise toward zero.
    pub const fn to_hmsf(&self) -> (Hours, Minutes, Seconds, i64) {
        let hr = self.count / Self::PER_HOUR;
        let mn = (self.count % Self::PER_HOUR) / Self::PER_MINUTE;
        let sc = ((self.count % Self::PER_HOUR) % Self::PER_MINUTE) / R::UNITS_PER_SECOND;
        let rem = self.count - ((hr * 60 + mn) * 60 + sc) * R::UNITS_PER_SECOND;

        (
            Hours::new(hr as i32),
            Minutes::new(mn as i32),
            Seconds::new(sc),
            rem,
        )
    }

    /// Whole seconds and the leftover fraction of a second.
    pub fn resolve_sec(&self) -> (Seconds, f64) {
        let whole = self.count / R::UNITS_PER_SECOND;
        let fraction = (self.count % R::UNITS_PER_SECOND) as f64 / R::UNITS_PER_SECOND as f64;
        (Seconds::new(whole), fraction)
    }

    // ── resolution casts ──────────────────────────────────────────────

    /// Cast to a coarser resolution, truncating toward zero.
    ///
    /// ```
    /// use tempoch_calendar::{Microseconds, Milliseconds, Millisec, Sec, Seconds};
    ///
    /// let us = Microseconds::new(1_999_999);
    /// assert_eq!(us.narrow::<Millisec>(), Milliseconds::new(1_999));
    /// assert_eq!(us.narrow::<Sec>(), Seconds::new(1));
    /// ```
    #[inline]
    pub const fn narrow<T: Resolution>(self) -> Duration<T>
    where
        R: NarrowsTo<T>,
    {
        Duration::new(self.count / (R::UNITS_PER_SECOND / T::UNITS_PER_SECOND))
    }
}

// ── Debug / Display ───────────────────────────────────────────────────────

impl<R: Resolution> fmt::Debug for Duration<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Duration({} {})", self.count, R::LABEL)
    }
}

/// `hh:mm:ss` followed by the sub-second part at this resolution's precision.
impl<R: Resolution> fmt::Display for Duration<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s, rem) = self.to_hmsf();
        let sign = if self.count < 0 { "-" } else { "" };
        write!(
            f,
            "{sign}{:02}:{:02}:{:02}",
            h.as_underlying_type().unsigned_abs(),
            m.as_underlying_type().unsigned_abs(),
            s.as_underlying_type().unsigned_abs()
        )?;
        if R::FRACTION_DIGITS > 0 {
            write!(f, ".{:0width$}", rem.unsigned_abs(), width = R::FRACTION_DIGITS)?;
        }
        Ok(())
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl<R: Resolution> Add for Duration<R> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.count + rhs.count)
    }
}

impl<R: Resolution> AddAssign for Duration<R> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.count += rhs.count;
    }
}

impl<R: Resolution> Sub for Duration<R> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.count - rhs.count)
    }
}

impl<R: Resolution> SubAssign for Duration<R> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.count -= rhs.count;
    }
}

/// Integer division between counts; panics on a zero divisor like `i64`.
impl<R: Resolution> Div for Duration<R> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        Self::new(self.count / rhs.count)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// MJD differences
// ═══════════════════════════════════════════════════════════════════════════

/// Difference `mjd1 − mjd2` expressed as a duration at resolution `R`.
///
/// Exact, since two Modified Julian Days are always a whole number of days
/// apart.
#[inline]
pub const fn mjd_duration_diff<R: Resolution>(
    mjd1: ModifiedJulianDay,
    mjd2: ModifiedJulianDay,
) -> Duration<R> {
    Duration::new(
        (mjd1.as_underlying_type() - mjd2.as_underlying_type()) * Duration::<R>::MAX_IN_DAY,
    )
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
