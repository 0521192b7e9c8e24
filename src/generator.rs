//! ULID generator and related types.

use core::num::NonZeroU32;

use crate::Ulid;

pub mod with_rand08;


/// A trait that defines the random number generator interface for [`Generator`].
///
/// Implementations must supply cryptographically strong random bytes and report failure instead
/// of falling back to a weaker source.
pub trait RandSource {
    /// Fills the whole of `dest` with random data.
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

/// A trait that defines the system clock interface for [`Generator`].
pub trait TimeSource {
    /// Returns the current Unix timestamp in milliseconds.
    fn unix_ts_ms(&mut self) -> u64;
}

/// The default [`TimeSource`] that reads the current time from [`std::time::SystemTime`].
///
/// The [`TimeSource`] implementation is available with the `std` crate feature only.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct StdSystemTime;

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl TimeSource for StdSystemTime {
    fn unix_ts_ms(&mut self) -> u64 {
        use std::time;
        match time::SystemTime::now().duration_since(time::UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_millis() as u64,
            Err(err) => {
                tracing::warn!(
                    behind_ms = err.duration().as_millis() as u64,
                    "system clock reads earlier than the Unix epoch"
                );
                0
            }
        }
    }
}

/// Error returned when the random source could not supply entropy.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[error("random source could not supply entropy")]
pub struct EntropyError {
    code: Option<NonZeroU32>,
}

impl EntropyError {
    /// Creates an error, optionally carrying the numeric code reported by the random source.
    pub const fn new(code: Option<NonZeroU32>) -> Self {
        Self { code }
    }

    /// Returns the numeric code reported by the random source, if any.
    pub const fn code(&self) -> Option<NonZeroU32> {
        self.code
    }
}

/// Represents a ULID generator that combines a clock with a random number generator.
///
/// Every call draws fresh randomness for the 80-bit entropy field. IDs generated within the same
/// millisecond are unique with overwhelming probability but carry no ordering guarantee among
/// themselves.
///
/// The generator is a plain value; wrap it in a lock to share one across threads, or use the
/// per-thread default generator behind [`ulid()`](crate::ulid).
///
/// # Examples
///
/// ```rust
/// use rand::rngs::OsRng;
/// use ulid_core::Generator;
///
/// let mut g = Generator::with_rand08(OsRng);
/// let ulid = g.generate()?;
/// println!("{}", ulid); // e.g., "01ARZ3NDEKTSV4RRFFQ69G5FAV"
/// # Ok::<(), ulid_core::EntropyError>(())
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Generator<R, T = StdSystemTime> {
    rand_source: R,
    time_source: T,
}

impl<R: RandSource> Generator<R> {
    /// Creates a generator object with a specified random number generator. The system clock
    /// is used as the time source.
    pub const fn new(rand_source: R) -> Self {
        Self {
            rand_source,
            time_source: StdSystemTime,
        }
    }
}

impl<R: RandSource, T: TimeSource> Generator<R, T> {
    /// Creates a generator object with specified random number generator and system clock.
    pub const fn with_rand_and_time_sources(rand_source: R, time_source: T) -> Self {
        Self {
            rand_source,
            time_source,
        }
    }

    /// Generates a new ULID object from the current timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError`] if the random source fails.
    pub fn generate(&mut self) -> Result<Ulid, EntropyError> {
        let unix_ts_ms = self.time_source.unix_ts_ms();
        self.generate_core(unix_ts_ms)
    }

    /// Generates a new ULID object from the `unix_ts_ms` passed.
    ///
    /// Only the lower 48 bits of `unix_ts_ms` are encoded.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError`] if the random source fails.
    pub fn generate_core(&mut self, unix_ts_ms: u64) -> Result<Ulid, EntropyError> {
        let mut entropy = [0u8; 10];
        if let Err(err) = self.rand_source.try_fill_bytes(&mut entropy) {
            tracing::warn!(error = %err, code = ?err.code(), "failed to generate ULID");
            return Err(err);
        }
        Ok(Ulid::from_parts(unix_ts_ms, entropy))
    }
}
