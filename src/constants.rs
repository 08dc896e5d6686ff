// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Fixed reference values for building instant types on top of this crate.
//!
//! Values with a physical unit are typed with `qtty` quantities; epochs on
//! the integral day axis are [`ModifiedJulianDay`]s.

use qtty::{Days, Seconds};

use crate::mjd::ModifiedJulianDay;

/// 1901-01-01, anchor of the year/day-of-year algorithms.
pub const JAN_1_1901_MJD: ModifiedJulianDay = ModifiedJulianDay::new(15_385);

/// 1980-01-06, the GPS time epoch.
pub const GPS_EPOCH_MJD: ModifiedJulianDay = ModifiedJulianDay::new(44_244);

/// Seconds per day.
pub const SEC_PER_DAY: f64 = 86_400.0;

/// Days per Julian year.
pub const DAYS_IN_JULIAN_YEAR: Days = Days::new(365.25);

/// Days per Julian century.
pub const DAYS_IN_JULIAN_CENTURY: Days = Days::new(36_525.0);

/// J2000.0 epoch (2000-01-01T12:00:00 TT) as a Julian Date.
pub const J2000_JD: Days = Days::new(2_451_545.0);

/// J2000.0 epoch as a Modified Julian Date.
pub const J2000_MJD: Days = Days::new(51_544.5);

/// Julian Date of MJD zero: `JD = MJD + MJD0_JD`.
pub const MJD0_JD: Days = Days::new(2_400_000.5);

/// `TT − TAI`.
pub const TT_MINUS_TAI: Seconds = Seconds::new(32.184);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mjd::calendar_to_mjd;

    #[test]
    fn test_epoch_anchors_match_calendar() {
        assert_eq!(
            calendar_to_mjd(1901, 1, 1).unwrap(),
            JAN_1_1901_MJD.as_underlying_type()
        );
        assert_eq!(
            calendar_to_mjd(1980, 1, 6).unwrap(),
            GPS_EPOCH_MJD.as_underlying_type()
        );
    }

    #[test]
    fn test_j2000_forms_agree() {
        assert_eq!(J2000_MJD + MJD0_JD, J2000_JD);
        assert_eq!(DAYS_IN_JULIAN_CENTURY, DAYS_IN_JULIAN_YEAR * 100.0);
        assert_eq!(SEC_PER_DAY, crate::Seconds::MAX_IN_DAY as f64);
    }
}
