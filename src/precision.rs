#[cfg(not(feature = "std"))]
use core as std;

use std::{fmt, time::Duration};

use crate::Error;

/// Represents the resolution of the timestamp a slug is derived from.
///
/// Each precision carries a fixed number of decimal digits, which is also the number of letters
/// in the resulting slug (the separator excluded).
///
/// | Precision        | Digits | Slug example           |
/// | ---------------- | ------ | ---------------------- |
/// | [`Seconds`]      | 10     | `QJUuq-SjJcC`          |
/// | [`Milliseconds`] | 13     | `QJUuqS-jJcCwqP`       |
/// | [`Microseconds`] | 16     | `QJUuqSjJ-cCwqPUGx`    |
/// | [`Nanoseconds`]  | 19     | `QJUuqSjJc-CwqPUGxeIo` |
///
/// [`Seconds`]: Precision::Seconds
/// [`Milliseconds`]: Precision::Milliseconds
/// [`Microseconds`]: Precision::Microseconds
/// [`Nanoseconds`]: Precision::Nanoseconds
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub enum Precision {
    /// Whole seconds since the Unix epoch (10 digits).
    Seconds,

    /// Milliseconds since the Unix epoch (13 digits).
    Milliseconds,

    /// Microseconds since the Unix epoch (16 digits).
    #[default]
    Microseconds,

    /// Nanoseconds since the Unix epoch (19 digits).
    Nanoseconds,
}

impl Precision {
    /// All precisions, from the coarsest to the finest.
    pub const ALL: [Self; 4] = [
        Self::Seconds,
        Self::Milliseconds,
        Self::Microseconds,
        Self::Nanoseconds,
    ];

    /// The largest digit count of all precisions.
    pub const MAX_DIGITS: usize = 19;

    /// Returns the number of decimal digits a timestamp of this precision is rendered with.
    pub const fn digit_count(self) -> usize {
        match self {
            Self::Seconds => 10,
            Self::Milliseconds => 13,
            Self::Microseconds => 16,
            Self::Nanoseconds => 19,
        }
    }

    /// Returns the precision whose digit count equals `length`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] unless `length` is one of 10, 13, 16, or 19.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_slug::{Error, Precision};
    ///
    /// assert_eq!(Precision::from_length(13)?, Precision::Milliseconds);
    /// assert!(matches!(Precision::from_length(11), Err(Error::InvalidParameter(11))));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_length(length: i32) -> Result<Self, Error> {
        usize::try_from(length)
            .ok()
            .and_then(Self::from_digit_count)
            .ok_or(Error::InvalidParameter(length))
    }

    /// Returns the precision whose digit count equals `count`, if any.
    pub const fn from_digit_count(count: usize) -> Option<Self> {
        match count {
            10 => Some(Self::Seconds),
            13 => Some(Self::Milliseconds),
            16 => Some(Self::Microseconds),
            19 => Some(Self::Nanoseconds),
            _ => None,
        }
    }

    /// Returns the number of units of this precision elapsed in `unix_time`.
    pub const fn scale(self, unix_time: Duration) -> u128 {
        let secs = unix_time.as_secs() as u128;
        let nanos = unix_time.subsec_nanos() as u128;
        match self {
            Self::Seconds => secs,
            Self::Milliseconds => secs * 1_000 + nanos / 1_000_000,
            Self::Microseconds => secs * 1_000_000 + nanos / 1_000,
            Self::Nanoseconds => secs * 1_000_000_000 + nanos,
        }
    }

    /// Returns the time span that `value` units of this precision stand for.
    pub const fn unscale(self, value: u64) -> Duration {
        match self {
            Self::Seconds => Duration::from_secs(value),
            Self::Milliseconds => Duration::from_millis(value),
            Self::Microseconds => Duration::from_micros(value),
            Self::Nanoseconds => Duration::from_nanos(value),
        }
    }
}

impl TryFrom<i32> for Precision {
    type Error = Error;

    fn try_from(length: i32) -> Result<Self, Self::Error> {
        Self::from_length(length)
    }
}

impl From<Precision> for usize {
    fn from(src: Precision) -> Self {
        src.digit_count()
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Seconds => "seconds",
            Self::Milliseconds => "milliseconds",
            Self::Microseconds => "microseconds",
            Self::Nanoseconds => "nanoseconds",
        })
    }
}
