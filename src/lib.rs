// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar Module
//!
//! Integer calendar and time-of-day primitives for GNSS and geodetic work.
//! Every type is a small `Copy` value; every conversion is allocation-free.
//!
//! # Core types
//!
//! - [`Year`], [`Month`], [`DayOfMonth`], [`DayOfYear`] — unchecked calendar
//!   components with opt-in `is_valid` checks.
//! - [`ModifiedJulianDay`] — integral day count since 1858-11-17.
//! - [`YmdDate`] / [`YdoyDate`] — composite (y, m, d) and (y, doy) dates.
//! - [`Duration<R>`] — fixed-point duration parameterised by a [`Resolution`]
//!   marker, with [`Hours`] and [`Minutes`] as building blocks.
//!
//! # Conversions
//!
//! | From | To | Function |
//! |------|----|----------|
//! | (y, m, d) | MJD | [`cal2mjd`] / [`calendar_to_mjd`] (validating) |
//! | MJD | (y, m, d) | [`ModifiedJulianDay::to_ymd`] |
//! | MJD | (y, doy) | [`ModifiedJulianDay::to_ydoy`] |
//! | (y, doy) | MJD | [`ydoy2mjd`] |
//! | (y, m, d) | (y, doy) | [`YmdDate::to_ydoy`] |
//! | (y, doy) | (y, m, d) | [`YdoyDate::to_ymd`] |
//! | MJD − MJD | `Duration<R>` | [`mjd_duration_diff`] |
//!
//! # Resolutions
//!
//! | Marker | Alias | Units per second |
//! |--------|-------|------------------|
//! | [`Sec`] | [`Seconds`] | 1 |
//! | [`Millisec`] | [`Milliseconds`] | 10³ |
//! | [`Microsec`] | [`Microseconds`] | 10⁶ |
//!
//! # Quick example
//!
//! ```
//! use tempoch_calendar::{cal2mjd, DayOfMonth, Microseconds, ModifiedJulianDay, Month, Year};
//!
//! let mut mjd = cal2mjd(Year::new(2000), Month::new(1), DayOfMonth::new(1)).unwrap();
//! assert_eq!(mjd, ModifiedJulianDay::new(51_544));
//!
//! let mut tod = Microseconds::new(Microseconds::MAX_IN_DAY + 250);
//! mjd += ModifiedJulianDay::new(tod.remove_days());
//! assert_eq!(mjd.to_ymd().to_string(), "2000-01-02");
//! assert_eq!(tod.as_underlying_type(), 250);
//! ```

mod calendar;
pub mod constants;
mod date;
mod duration;
mod error;
mod mjd;
pub mod units;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::{is_leap, DayOfMonth, DayOfYear, Month, Year};
pub use date::{YdoyDate, YmdDate};
pub use duration::{
    mjd_duration_diff, Duration, Hours, Microsec, Microseconds, Millisec, Milliseconds, Minutes,
    NarrowsTo, Resolution, Sec, Seconds,
};
pub use error::{CalendarError, CalendarResult, ErrorKind};
pub use mjd::{cal2mjd, calendar_to_mjd, ydoy2mjd, ModifiedJulianDay};
