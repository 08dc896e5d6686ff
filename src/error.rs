// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for calendar conversions.
//!
//! Only two operations in this crate can fail:
//!
//! | Operation | Variant | Kind |
//! |-----------|---------|------|
//! | [`cal2mjd`](crate::cal2mjd) | [`InvalidMonth`](CalendarError::InvalidMonth) | [`ErrorKind::OutOfRange`] |
//! | [`cal2mjd`](crate::cal2mjd) | [`InvalidDayOfMonth`](CalendarError::InvalidDayOfMonth) | [`ErrorKind::OutOfRange`] |
//! | [`Month::from_name`](crate::Month::from_name) | [`InvalidMonthName`](CalendarError::InvalidMonthName) | [`ErrorKind::InvalidArgument`] |
//!
//! Every other conversion is total: out-of-range inputs are accepted and
//! produce consistent (if meaningless) output. Validation is opt-in through
//! the `is_valid` methods of the calendar value types.

use thiserror::Error;

/// Broad failure family of a [`CalendarError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A numeric calendar component lies outside its allowed range.
    OutOfRange,
    /// A textual argument could not be interpreted.
    InvalidArgument,
}

/// Failure raised by calendar conversions and month-name parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// Month outside `1..=12`.
    #[error("invalid month {month}: expected a value in 1..=12")]
    InvalidMonth { month: i32 },

    /// Day of month outside the length of the given month (leap years included).
    #[error("invalid day of month {day} for {year}-{month:02}")]
    InvalidDayOfMonth { year: i32, month: i32, day: i32 },

    /// No short or long month name matches the given text.
    #[error("failed to resolve month from string \"{0}\"")]
    InvalidMonthName(String),
}

impl CalendarError {
    /// The failure family this error belongs to.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidMonth { .. } | Self::InvalidDayOfMonth { .. } => ErrorKind::OutOfRange,
            Self::InvalidMonthName(_) => ErrorKind::InvalidArgument,
        }
    }
}

/// Convenience alias used by every fallible function in the crate.
pub type CalendarResult<T> = Result<T, CalendarError>;
