//! Slug generator and related types.

use crate::{bucket, Error, Precision, Slug, TimeSource, TimestampDigits};

#[cfg(feature = "std")]
use crate::StdSystemTime;

pub mod with_rand08;


/// A trait that defines the minimum random number generator interface for [`SlugGenerator`].
///
/// Implementations must be cryptographically strong. A failure must be reported as an error and
/// never papered over with weaker data.
pub trait RandSource {
    /// Fills `dest` with random data, or returns an error if the source cannot supply it.
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error>;
}

/// Selects how a random byte is turned into an index into a digit bucket.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Sampling {
    /// Uses `byte % bucket_size`.
    ///
    /// Since neither 5 nor 6 divides 256, the first letters of each bucket are picked slightly
    /// more often than the others (e.g., 52/256 vs. 51/256 for five-letter buckets). This mode
    /// reproduces the letter distribution of slugs generated by earlier versions byte for byte.
    #[default]
    Modulo,

    /// Uses rejection sampling so that every letter of a bucket is equally likely.
    ///
    /// A byte is accepted only if it is below the largest multiple of the bucket size that does
    /// not exceed 256; otherwise a fresh byte is drawn.
    Uniform,
}

/// Represents a slug generator that owns a strong random source and a clock.
///
/// This type provides the interface to customize the random number generator, system clock, and
/// letter selection strategy. The free functions such as [`unique_slug()`](crate::unique_slug)
/// use a thread-local instance instead.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::OsRng;
/// use unique_slug::{Precision, Sampling, SlugGenerator};
///
/// let mut g = SlugGenerator::with_rand08(OsRng).with_sampling(Sampling::Uniform);
/// let slug = g.generate_at(Precision::Milliseconds)?;
/// assert_eq!(slug.len(), 14);
/// assert_eq!(slug.as_bytes()[6], b'-');
/// # Ok::<(), unique_slug::Error>(())
/// ```
///
/// A generator is not shared between threads by the crate itself. Each thread may own one, or
/// callers may wrap one in a lock:
///
/// ```rust
/// use rand::rngs::OsRng;
/// use std::{sync, thread};
/// use unique_slug::SlugGenerator;
///
/// let g = sync::Arc::new(sync::Mutex::new(SlugGenerator::with_rand08(OsRng)));
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = sync::Arc::clone(&g);
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.lock().unwrap().generate().unwrap(), i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct SlugGenerator<R, T> {
    sampling: Sampling,

    /// The random number generator used by the generator.
    rng: R,

    /// The system clock used by the generator.
    time_source: T,
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl<R: RandSource> SlugGenerator<R, StdSystemTime> {
    /// Creates a generator instance that reads the system clock.
    pub const fn new(rng: R) -> Self {
        Self::with_rand_and_time_sources(rng, StdSystemTime)
    }
}

impl<R: RandSource, T: TimeSource> SlugGenerator<R, T> {
    /// Creates a generator instance with specified random number generator and system clock.
    pub const fn with_rand_and_time_sources(rng: R, time_source: T) -> Self {
        Self {
            sampling: Sampling::Modulo,
            rng,
            time_source,
        }
    }

    /// Returns the generator with the letter selection strategy replaced by `sampling`.
    pub fn with_sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }

    /// Returns the current letter selection strategy.
    pub const fn sampling(&self) -> Sampling {
        self.sampling
    }

    /// Generates a new slug at the default precision (microseconds, 16 letters).
    pub fn generate(&mut self) -> Result<Slug, Error> {
        self.generate_at(Precision::default())
    }

    /// Generates a new slug of `length` letters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] unless `length` is one of 10, 13, 16, or 19, in
    /// addition to the errors of [`generate_at`](Self::generate_at).
    pub fn generate_of_length(&mut self, length: i32) -> Result<Slug, Error> {
        self.generate_at(Precision::from_length(length)?)
    }

    /// Generates a new slug from the current timestamp at `precision`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClockUnavailable`] or [`Error::TimestampOutOfRange`] if the timestamp
    /// cannot be obtained, and [`Error::RandomnessUnavailable`] if the random source fails.
    pub fn generate_at(&mut self, precision: Precision) -> Result<Slug, Error> {
        let digits = TimestampDigits::now(&mut self.time_source, precision)?;
        self.encode(&digits)
    }

    /// Maps each digit to a random letter of its bucket and inserts the separator at the
    /// midpoint.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RandomnessUnavailable`] if the random source fails. No fallback source is
    /// tried.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rand::rngs::OsRng;
    /// use unique_slug::{bucket, SlugGenerator, TimestampDigits};
    ///
    /// let digits = "1732056789".parse::<TimestampDigits>()?;
    /// let slug = SlugGenerator::with_rand08(OsRng).encode(&digits)?;
    /// assert_eq!(slug.len(), 11);
    /// assert!(bucket::bucket(1).contains(&slug.as_bytes()[0]));
    /// assert_eq!(slug.timestamp_digits(), digits);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn encode(&mut self, digits: &TimestampDigits) -> Result<Slug, Error> {
        let src = digits.as_bytes();
        let mut letters = [0u8; Precision::MAX_DIGITS];
        let letters = &mut letters[..src.len()];

        // one byte per digit, requested at once
        self.rng
            .try_fill_bytes(letters)
            .map_err(Error::RandomnessUnavailable)?;

        for (e, &c) in letters.iter_mut().zip(src) {
            let bucket = bucket::bucket(c - b'0');
            let index = self.pick_index(*e, bucket.len())?;
            *e = bucket[index];
        }

        Ok(Slug::from_letters(letters, digits.precision()))
    }

    /// Converts a random byte into an index below `size` per the sampling strategy.
    fn pick_index(&mut self, mut byte: u8, size: usize) -> Result<usize, Error> {
        match self.sampling {
            Sampling::Modulo => Ok(byte as usize % size),
            Sampling::Uniform => {
                let limit = 256 - 256 % size;
                while byte as usize >= limit {
                    let mut fresh = [0u8];
                    self.rng
                        .try_fill_bytes(&mut fresh)
                        .map_err(Error::RandomnessUnavailable)?;
                    byte = fresh[0];
                }
                Ok(byte as usize % size)
            }
        }
    }
}
