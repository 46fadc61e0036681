//! Integration with `rand` (v0.8) crate.

use super::{RandSource, SlugGenerator};
use rand::RngCore;

#[cfg(feature = "std")]
use crate::StdSystemTime;

/// An adapter that implements [`RandSource`] for [`RngCore`] types.
///
/// Wrap only cryptographically strong generators, such as [`OsRng`] or [`ThreadRng`].
///
/// [`OsRng`]: https://docs.rs/rand/0.8/rand/rngs/struct.OsRng.html
/// [`ThreadRng`]: https://docs.rs/rand/0.8/rand/rngs/struct.ThreadRng.html
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> RandSource for Adapter<T> {
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.0.try_fill_bytes(dest)
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl<T: RngCore> SlugGenerator<Adapter<T>, StdSystemTime> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.8) crate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_slug::SlugGenerator;
    ///
    /// let mut g = SlugGenerator::with_rand08(rand::rngs::OsRng);
    /// println!("{}", g.generate()?);
    /// # Ok::<(), unique_slug::Error>(())
    /// ```
    pub const fn with_rand08(rng: T) -> Self {
        Self::new(Adapter(rng))
    }
}
