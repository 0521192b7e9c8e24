//! Integration with `rand` (v0.8) crate.

use super::{EntropyError, Generator, RandSource};
use rand::{CryptoRng, RngCore};

/// An adapter that implements [`RandSource`] for cryptographically secure [`RngCore`] types.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore + CryptoRng> RandSource for Adapter<T> {
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.0.try_fill_bytes(dest).map_err(EntropyError::from)
    }
}

impl From<rand::Error> for EntropyError {
    fn from(src: rand::Error) -> Self {
        Self::new(src.code())
    }
}

impl<T: RngCore + CryptoRng> Generator<Adapter<T>> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] and [`CryptoRng`] from `rand` (v0.8) crate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ulid_core::Generator;
    ///
    /// let mut g = Generator::with_rand08(rand::thread_rng());
    /// println!("{}", g.generate()?);
    /// # Ok::<(), ulid_core::EntropyError>(())
    /// ```
    pub const fn with_rand08(rng: T) -> Self {
        Self::new(Adapter(rng))
    }
}
