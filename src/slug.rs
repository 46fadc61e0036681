#[cfg(not(feature = "std"))]
use core as std;

use std::{fmt, hash, ops, str};

use fstr::FStr;

use crate::{bucket, ParseError, Precision, TimestampDigits};

/// The separator placed between the two halves of a slug.
pub const SEPARATOR: u8 = b'-';

const MAX_LEN: usize = Precision::MAX_DIGITS + 1;

/// Represents a slug: one letter per timestamp digit with a separator at the midpoint.
///
/// A slug is stored on the stack and can be dereferenced as `str` or [`Display`](fmt::Display)ed.
/// Because every letter belongs to exactly one digit bucket, a slug can be decoded back to the
/// timestamp it was derived from.
///
/// # Examples
///
/// ```rust
/// use unique_slug::{Precision, Slug};
///
/// let x = "QJUuq-SjJcC".parse::<Slug>()?;
/// assert_eq!(x.precision(), Precision::Seconds);
/// assert_eq!(&x.timestamp_digits() as &str, "1732056789");
/// assert_eq!(x.to_string(), "QJUuq-SjJcC");
/// # Ok::<(), unique_slug::ParseError>(())
/// ```
#[derive(Copy, Clone)]
pub struct Slug {
    /// Slug text padded with trailing NUL bytes.
    inner: FStr<MAX_LEN>,
    precision: Precision,
}

impl Slug {
    /// Assembles a slug from one letter per digit, inserting the separator at the midpoint.
    ///
    /// `letters` must hold ASCII letters only and its length must equal the digit count of
    /// `precision`.
    pub(crate) fn from_letters(letters: &[u8], precision: Precision) -> Self {
        let len = precision.digit_count();
        let half = len / 2;
        debug_assert_eq!(letters.len(), len);
        debug_assert!(letters.iter().all(u8::is_ascii_alphabetic));

        let mut buffer = [0u8; MAX_LEN];
        buffer[..half].copy_from_slice(&letters[..half]);
        buffer[half] = SEPARATOR;
        buffer[half + 1..len + 1].copy_from_slice(&letters[half..]);
        debug_assert!(buffer.is_ascii());
        Self {
            inner: unsafe { FStr::from_inner_unchecked(buffer) },
            precision,
        }
    }

    /// Returns the precision of the timestamp the slug was derived from.
    pub const fn precision(&self) -> Precision {
        self.precision
    }

    /// Returns the slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner.as_str()[..self.precision.digit_count() + 1]
    }

    /// Returns the letters of the slug without the separator.
    pub fn letters(&self) -> impl Iterator<Item = u8> + '_ {
        let half = self.precision.digit_count() / 2;
        self.as_str()
            .bytes()
            .enumerate()
            .filter(move |&(i, _)| i != half)
            .map(|(_, c)| c)
    }

    /// Decodes the timestamp digits the slug was derived from.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let slug = unique_slug::unique_slug_of_length(19)?;
    /// let digits = slug.timestamp_digits();
    /// assert_eq!(digits.len(), 19);
    /// println!("{slug} was generated {:?} after the Unix epoch", digits.unix_time());
    /// # Ok::<(), unique_slug::Error>(())
    /// ```
    pub fn timestamp_digits(&self) -> TimestampDigits {
        // every stored letter belongs to a bucket
        let values = self.letters().map(|c| bucket::digit_of(c).unwrap_or(0));
        TimestampDigits::from_digit_values(values, self.precision)
    }
}

impl ops::Deref for Slug {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq for Slug {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Slug {}

impl PartialOrd for Slug {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Slug {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl hash::Hash for Slug {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl fmt::Debug for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Slug").field(&self.as_str()).finish()
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl str::FromStr for Slug {
    type Err = ParseError;

    /// Creates an object from a string of 10, 13, 16, or 19 ASCII letters with a separator
    /// inserted at the midpoint.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        const ERR: ParseError = ParseError {};
        let src = src.as_bytes();
        let len = src.len().checked_sub(1).ok_or(ERR)?;
        let precision = Precision::from_digit_count(len).ok_or(ERR)?;
        let half = len / 2;

        if src[half] != SEPARATOR {
            return Err(ERR);
        }

        let mut letters = [0u8; Precision::MAX_DIGITS];
        letters[..half].copy_from_slice(&src[..half]);
        letters[half..len].copy_from_slice(&src[half + 1..]);
        if letters[..len].iter().all(u8::is_ascii_alphabetic) {
            Ok(Self::from_letters(&letters[..len], precision))
        } else {
            Err(ERR)
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::{ParseError, Slug};

    impl From<Slug> for String {
        fn from(src: Slug) -> Self {
            src.as_str().to_owned()
        }
    }

    impl TryFrom<String> for Slug {
        type Error = ParseError;

        fn try_from(src: String) -> Result<Self, Self::Error> {
            src.parse()
        }
    }

    impl TryFrom<&str> for Slug {
        type Error = ParseError;

        fn try_from(src: &str) -> Result<Self, Self::Error> {
            src.parse()
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Slug};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Slug {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.as_str())
        }
    }

    impl<'de> serde::Deserialize<'de> for Slug {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_str(VisitorImpl)
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Slug;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a slug representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            let value = core::str::from_utf8(value).map_err(de::Error::custom)?;
            self.visit_str(value)
        }
    }

}

#[cfg(feature = "std")]
#[cfg(test)]
mod tests {
    use super::Slug;
    use crate::Precision;

    /// Returns a collection of prepared cases
    fn prepare_cases() -> &'static [(&'static str, &'static str)] {
        &[
            ("QJUuq-SjJcC", "1732056789"),
            ("wkiaW-dKXbv", "1732056789"),
            ("QJUuqS-jJcCwqP", "1732056789102"),
            ("QJUuqSjJ-cCwqPUGx", "1732056789102346"),
            ("QJUuqSjJc-CwqPUGxeIo", "1732056789102346022"),
            ("qqqqq-qqqqq", "0000000000"),
            ("MMMMMMMMM-MMMMMMMMMM", "9999999999999999999"),
        ]
    }

    /// Parses and decodes prepared cases correctly
    #[test]
    fn parses_and_decodes_prepared_cases_correctly() {
        for (text, digits) in prepare_cases() {
            let e = text.parse::<Slug>().unwrap();
            assert_eq!(e.as_str(), *text);
            assert_eq!(&e.to_string(), text);
            assert_eq!(e.precision().digit_count(), digits.len());
            assert_eq!(e.timestamp_digits().as_str(), *digits);
            assert_eq!(e.letters().count(), digits.len());
            assert_eq!(Slug::try_from(String::from(e)), Ok(e));
        }
    }

    /// Returns error to invalid string representation
    #[test]
    fn returns_error_to_invalid_string_representation() {
        let cases = [
            "",
            "-",
            "QJUuqSjJcC",
            "QJUuq-SjJcCw",
            "QJUu-qSjJcC",
            "QJUuqS-jJcC",
            " QJUuq-SjJcC",
            "QJUuq-SjJcC ",
            "QJUuq_SjJcC",
            "QJUuq-SjJ1C",
            "QJUuq-SjJ-C",
            "QJUuq-SjJ\u{e9}",
            "QJUuqSjJc-CwqPUGxeIoQ",
        ];

        for e in cases {
            assert!(e.parse::<Slug>().is_err(), "{}", e);
        }
    }

    /// Compares and hashes by text
    #[test]
    fn compares_and_hashes_by_text() {
        use std::collections::HashSet;

        let a: Slug = "QJUuq-SjJcC".parse().unwrap();
        let b: Slug = "QJUuq-SjJcC".parse().unwrap();
        let c: Slug = "QJUuq-SjJcc".parse().unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a < c);
        assert_eq!([a, b, c].into_iter().collect::<HashSet<_>>().len(), 2);
        assert_eq!(format!("{:?}", a), "Slug(\"QJUuq-SjJcC\")");
        assert_eq!(a.precision(), Precision::Seconds);
    }
}
