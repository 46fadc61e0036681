/// Error generating a slug.
///
/// Every variant is fatal for the call that returns it; nothing is retried internally and no
/// partial slug is ever produced.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The requested slug length is not one of 10, 13, 16, or 19.
    #[error(
        "slug length must be 10, 13, 16, or 19, got {0} \
         (10=seconds, 13=milliseconds, 16=microseconds, 19=nanoseconds)"
    )]
    InvalidParameter(i32),

    /// The clock could not be read.
    #[error("clock unavailable: {0}")]
    ClockUnavailable(&'static str),

    /// The strong random source failed to supply bytes.
    #[error("strong random source unavailable: {0}")]
    RandomnessUnavailable(rand::Error),

    /// The current time needs more digits than the requested precision allows.
    #[error("timestamp {value} does not fit in {digits} digits")]
    TimestampOutOfRange {
        /// The scaled timestamp value.
        value: u128,

        /// The digit count of the requested precision.
        digits: usize,
    },
}

/// Error parsing an invalid string representation of a slug or timestamp digits.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[error("invalid string representation")]
pub struct ParseError {}
