//! Default generator and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::cell::RefCell;

use crate::{Error, Precision, Slug};
use inner::GlobalGen;

thread_local! {
    static DEFAULT_GENERATOR: RefCell<Option<GlobalGen>> = const { RefCell::new(None) };
}

/// Runs `f` with the thread-local generator, creating one if none exists or if the process ID
/// has changed since it was created.
fn with_global_gen<U>(f: impl FnOnce(&mut GlobalGen) -> Result<U, Error>) -> Result<U, Error> {
    DEFAULT_GENERATOR.with(|g| {
        let mut slot = g.borrow_mut();
        let current = match slot.take() {
            Some(e) if !e.is_stale() => e,
            _ => GlobalGen::new()?,
        };
        f(slot.insert(current))
    })
}

/// Generates a slug of 16 letters from the current microsecond timestamp.
///
/// This is the same as `unique_slug_of_length(16)`. The function employs a thread-local
/// generator seeded from the operating system, so concurrent callers on different threads draw
/// from independent random streams without locking. On Unix, the generator is reseeded when the
/// process ID changes (i.e., upon process forks).
///
/// # Examples
///
/// ```rust
/// let slug = unique_slug::unique_slug()?;
/// println!("{slug}"); // e.g., "QJUuqSjJ-cCwqPUGx"
/// assert_eq!(slug.len(), 17);
/// assert_eq!(slug.as_bytes()[8], b'-');
///
/// let slug_string: String = unique_slug::unique_slug()?.into();
/// # Ok::<(), unique_slug::Error>(())
/// ```
pub fn unique_slug() -> Result<Slug, Error> {
    unique_slug_at(Precision::default())
}

/// Generates a slug of `length` letters from the current timestamp.
///
/// The length selects the timestamp precision: 10 for seconds, 13 for milliseconds, 16 for
/// microseconds, and 19 for nanoseconds. The slug carries `length + 1` characters, with the `-`
/// separator at index `length / 2`.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] for any other length, in addition to the errors of
/// [`unique_slug_at()`].
///
/// # Examples
///
/// ```rust
/// use unique_slug::{unique_slug_of_length, Error};
///
/// let slug = unique_slug_of_length(10)?;
/// assert_eq!(slug.len(), 11);
/// assert_eq!(slug.as_bytes()[5], b'-');
///
/// assert!(matches!(unique_slug_of_length(11), Err(Error::InvalidParameter(11))));
/// # Ok::<(), Error>(())
/// ```
pub fn unique_slug_of_length(length: i32) -> Result<Slug, Error> {
    unique_slug_at(Precision::from_length(length)?)
}

/// Generates a slug from the current timestamp at `precision`.
///
/// # Errors
///
/// Returns [`Error::ClockUnavailable`] if the system clock cannot be read,
/// [`Error::TimestampOutOfRange`] if the current time needs more digits than `precision` allows,
/// and [`Error::RandomnessUnavailable`] if the operating system cannot seed the generator.
pub fn unique_slug_at(precision: Precision) -> Result<Slug, Error> {
    with_global_gen(|g| g.generate_at(precision))
}

mod inner {
    use rand::rngs::{adapter::ReseedingRng, OsRng};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Core;

    use crate::generator::{with_rand08::Adapter, SlugGenerator};
    use crate::{Error, StdSystemTime};

    /// The type alias for the random number generator of the default generator.
    ///
    /// The default generator currently employs [`ChaCha12Core`] with [`ReseedingRng`] wrapper to
    /// emulate the strategy used by [`rand::rngs::ThreadRng`].
    type GlobalGenRng = Adapter<ReseedingRng<ChaCha12Core, OsRng>>;

    /// A thin wrapper to reset the state when the process ID changes (i.e., upon Unix forks).
    pub struct GlobalGen {
        #[cfg(unix)]
        pid: u32,
        generator: SlugGenerator<GlobalGenRng, StdSystemTime>,
    }

    impl GlobalGen {
        /// Creates a generator seeded from the operating system.
        pub fn new() -> Result<Self, Error> {
            let core = ChaCha12Core::from_rng(OsRng).map_err(Error::RandomnessUnavailable)?;
            Ok(Self {
                #[cfg(unix)]
                pid: std::process::id(),
                generator: SlugGenerator::with_rand08(ReseedingRng::new(core, 1024 * 64, OsRng)),
            })
        }

        /// Returns true if the generator was created in another process.
        pub fn is_stale(&self) -> bool {
            #[cfg(unix)]
            return self.pid != std::process::id();

            #[cfg(not(unix))]
            return false;
        }
    }

    impl std::ops::Deref for GlobalGen {
        type Target = SlugGenerator<GlobalGenRng, StdSystemTime>;

        fn deref(&self) -> &Self::Target {
            &self.generator
        }
    }

    impl std::ops::DerefMut for GlobalGen {
        fn deref_mut(&mut self) -> &mut Self::Target {
            &mut self.generator
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{unique_slug, unique_slug_at, unique_slug_of_length};
    use crate::{bucket, Error, Precision, Slug};

    const N_SAMPLES: usize = 100_000;
    thread_local!(static SAMPLES: Vec<String> = (0..N_SAMPLES)
        .map(|_| unique_slug().unwrap().into())
        .collect());

    /// Generates canonical string
    #[test]
    fn generates_canonical_string() {
        let re = regex::Regex::new(r"^[A-Za-z]{8}-[A-Za-z]{8}$").unwrap();
        SAMPLES.with(|samples| {
            for e in samples {
                assert!(re.is_match(e));
            }
        });
    }

    /// Generates canonical string of every length
    #[test]
    fn generates_canonical_string_of_every_length() {
        for length in [10, 13, 16, 19] {
            let half = length / 2;
            let pattern = format!(r"^[A-Za-z]{{{}}}-[A-Za-z]{{{}}}$", half, length - half);
            let re = regex::Regex::new(&pattern).unwrap();
            for _ in 0..1_000 {
                let e = unique_slug_of_length(length).unwrap();
                assert!(re.is_match(&e), "{}", e);
                assert_eq!(e.len(), length as usize + 1);
                assert_eq!(e.find('-'), Some(half as usize));
            }
        }
    }

    /// Generates 100k identifiers without collision
    #[test]
    fn generates_100k_identifiers_without_collision() {
        use std::collections::HashSet;
        SAMPLES.with(|samples| {
            let s: HashSet<&String> = samples.iter().collect();
            assert_eq!(s.len(), N_SAMPLES);
        });
    }

    /// Encodes up-to-date timestamp
    #[test]
    fn encodes_up_to_date_timestamp() {
        use std::time;
        for p in Precision::ALL {
            for _ in 0..1_000 {
                let before = time::SystemTime::now()
                    .duration_since(time::UNIX_EPOCH)
                    .expect("clock may have gone backwards");
                let decoded = unique_slug_at(p).unwrap().timestamp_digits().unix_time();
                let after = time::SystemTime::now()
                    .duration_since(time::UNIX_EPOCH)
                    .expect("clock may have gone backwards");
                assert!(p.scale(before) <= p.scale(decoded));
                assert!(p.scale(decoded) <= p.scale(after));
            }
        }
    }

    /// Decodes every letter to the digit of its bucket
    #[test]
    fn decodes_every_letter_to_the_digit_of_its_bucket() {
        SAMPLES.with(|samples| {
            for e in samples {
                let slug = e.parse::<Slug>().unwrap();
                let digits = slug.timestamp_digits();
                for (c, d) in slug.letters().zip(digits.bytes()) {
                    assert!(bucket::bucket(d - b'0').contains(&c));
                }
            }
        });
    }

    /// Picks letters at modulo rates
    #[test]
    fn picks_letters_at_modulo_rates() {
        // count occurrences of each letter per bucket
        let bins = SAMPLES.with(|samples| {
            let mut bins = [[0u32; 6]; 10];
            for e in samples {
                for c in e.bytes().filter(|&c| c != b'-') {
                    let d = bucket::digit_of(c).unwrap() as usize;
                    let i = bucket::BUCKETS[d].iter().position(|&e| e == c).unwrap();
                    bins[d][i] += 1;
                }
            }
            bins
        });

        for (d, row) in bins.iter().enumerate() {
            let size = bucket::BUCKETS[d].len();
            let n: u32 = row.iter().sum();
            if n < 10_000 {
                continue;
            }
            for (i, &count) in row[..size].iter().enumerate() {
                let p = (0..256).filter(|b| b % size == i).count() as f64 / 256.0;
                // set margin based on binom dist 99.999% confidence interval
                let margin = 4.417173 * (p * (1.0 - p) / n as f64).sqrt();
                let q = count as f64 / n as f64;
                assert!((q - p).abs() < margin, "bucket {} letter {}: {}", d, i, q);
            }
        }
    }

    /// Returns error to invalid lengths
    #[test]
    fn returns_error_to_invalid_lengths() {
        for length in [-1, 0, 1, 9, 11, 12, 15, 17, 20, 100] {
            let e = unique_slug_of_length(length).unwrap_err();
            assert!(matches!(e, Error::InvalidParameter(l) if l == length));
            assert!(e.to_string().contains("10, 13, 16, or 19"));
        }
    }

    /// Generates well-formed slugs under multithreading
    #[test]
    fn generates_well_formed_slugs_under_multithreading(
    ) -> Result<(), Box<dyn std::error::Error>> {
        use std::{collections::HashSet, sync::mpsc, thread};

        let (tx, rx) = mpsc::channel();
        for _ in 0..4 {
            let tx = tx.clone();
            thread::Builder::new()
                .spawn(move || {
                    for _ in 0..10_000 {
                        tx.send(unique_slug_at(Precision::Nanoseconds).unwrap()).unwrap();
                    }
                })
                .map_err(|err| format!("failed to spawn thread: {:?}", err))?;
        }
        drop(tx);

        let mut s = HashSet::new();
        while let Ok(e) = rx.recv() {
            assert_eq!(e.len(), 20);
            assert_eq!(e.as_bytes()[9], b'-');
            s.insert(e);
        }

        assert_eq!(s.len(), 4 * 10_000);
        Ok(())
    }
}
