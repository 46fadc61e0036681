//! Clock access and fixed-width timestamp digits.

#[cfg(not(feature = "std"))]
use core as std;

use std::{fmt, ops, str, time::Duration};

use crate::{Error, ParseError, Precision};

/// A trait that defines the minimum system clock interface for [`SlugGenerator`].
///
/// [`SlugGenerator`]: crate::SlugGenerator
pub trait TimeSource {
    /// Returns the current time as the span elapsed since the Unix epoch.
    ///
    /// Implementations report a clock failure as [`Error::ClockUnavailable`].
    fn unix_time(&mut self) -> Result<Duration, Error>;
}

/// The default [`TimeSource`] that reads [`std::time::SystemTime`].
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub struct StdSystemTime;

#[cfg(feature = "std")]
impl TimeSource for StdSystemTime {
    fn unix_time(&mut self) -> Result<Duration, Error> {
        use std::time;
        time::SystemTime::now()
            .duration_since(time::UNIX_EPOCH)
            .map_err(|_| Error::ClockUnavailable("system clock is set before the Unix epoch"))
    }
}

/// Represents a point in time as a left-zero-padded decimal digit string whose length equals the
/// digit count of its [`Precision`].
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use unique_slug::{Precision, TimestampDigits};
///
/// let t = Duration::new(1_732_056_789, 123_456_789);
/// let digits = TimestampDigits::from_unix_time(t, Precision::Milliseconds)?;
/// assert_eq!(&digits as &str, "1732056789123");
///
/// let early = TimestampDigits::from_unix_time(Duration::from_secs(42), Precision::Seconds)?;
/// assert_eq!(&early as &str, "0000000042");
/// # Ok::<(), unique_slug::Error>(())
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TimestampDigits {
    digits: [u8; Precision::MAX_DIGITS],
    precision: Precision,
}

impl TimestampDigits {
    /// Reads `time_source` and renders the current time at `precision`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClockUnavailable`] if the clock cannot be read, or
    /// [`Error::TimestampOutOfRange`] if the current time needs more digits than `precision`
    /// allows.
    pub fn now<T: TimeSource>(time_source: &mut T, precision: Precision) -> Result<Self, Error> {
        Self::from_unix_time(time_source.unix_time()?, precision)
    }

    /// Renders `unix_time` at `precision`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TimestampOutOfRange`] if the scaled value needs more digits than
    /// `precision` allows. The value is never truncated.
    pub fn from_unix_time(unix_time: Duration, precision: Precision) -> Result<Self, Error> {
        let value = precision.scale(unix_time);
        let len = precision.digit_count();

        let mut digits = [b'0'; Precision::MAX_DIGITS];
        let mut rest = value;
        for e in digits[..len].iter_mut().rev() {
            *e = b'0' + (rest % 10) as u8;
            rest /= 10;
        }

        if rest == 0 {
            Ok(Self { digits, precision })
        } else {
            Err(Error::TimestampOutOfRange { value, digits: len })
        }
    }

    /// Returns the precision of the digits.
    pub const fn precision(&self) -> Precision {
        self.precision
    }

    /// Returns the digits as ASCII bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.digits[..self.precision.digit_count()]
    }

    /// Returns the digits as a string slice.
    pub fn as_str(&self) -> &str {
        debug_assert!(self.as_bytes().is_ascii());
        unsafe { str::from_utf8_unchecked(self.as_bytes()) }
    }

    /// Returns the integer value of the digits.
    pub fn value(&self) -> u64 {
        self.as_bytes()
            .iter()
            .fold(0, |acc, e| acc * 10 + (e - b'0') as u64)
    }

    /// Returns the time span since the Unix epoch that the digits stand for.
    pub fn unix_time(&self) -> Duration {
        self.precision.unscale(self.value())
    }

    /// Creates digits at `precision` from digit values in `0..10`.
    pub(crate) fn from_digit_values(
        values: impl IntoIterator<Item = u8>,
        precision: Precision,
    ) -> Self {
        let mut digits = [b'0'; Precision::MAX_DIGITS];
        for (e, d) in digits[..precision.digit_count()].iter_mut().zip(values) {
            debug_assert!(d < 10);
            *e = b'0' + d;
        }
        Self { digits, precision }
    }

    /// Creates digits from ASCII digit bytes whose length is one of the supported digit counts.
    pub(crate) fn from_ascii(src: &[u8]) -> Result<Self, ParseError> {
        let precision = Precision::from_digit_count(src.len()).ok_or(ParseError {})?;
        if !src.iter().all(u8::is_ascii_digit) {
            return Err(ParseError {});
        }

        let mut digits = [b'0'; Precision::MAX_DIGITS];
        digits[..src.len()].copy_from_slice(src);
        Ok(Self { digits, precision })
    }
}

impl ops::Deref for TimestampDigits {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for TimestampDigits {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TimestampDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl str::FromStr for TimestampDigits {
    type Err = ParseError;

    /// Creates an object from a string of 10, 13, 16, or 19 decimal digits.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::from_ascii(src.as_bytes())
    }
}
