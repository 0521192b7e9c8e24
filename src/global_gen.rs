//! Default generator and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::cell::RefCell;

use crate::{EntropyError, Ulid};
use inner::GlobalGenInner;

thread_local! {
    static DEFAULT_GENERATOR: RefCell<Option<GlobalGenInner>> = const { RefCell::new(None) };
}

/// Generates a ULID object.
///
/// This function employs a thread-local generator seeded from the operating system. On Unix,
/// the generator is rebuilt when the process ID changes (i.e., upon process forks) so that a
/// child never replays its parent's random stream.
///
/// # Errors
///
/// Returns [`EntropyError`] if the operating system cannot supply a seed.
///
/// # Examples
///
/// ```rust
/// let ulid = ulid_core::ulid()?;
/// println!("{}", ulid); // e.g., "01ARZ3NDEKTSV4RRFFQ69G5FAV"
/// println!("{:?}", ulid.as_bytes()); // as 16-byte big-endian array
/// # Ok::<(), ulid_core::EntropyError>(())
/// ```
pub fn ulid() -> Result<Ulid, EntropyError> {
    DEFAULT_GENERATOR.with(|slot| {
        let mut slot = slot.borrow_mut();
        let inner = match slot.take() {
            Some(inner) if inner.is_current_process() => inner,
            Some(_) => {
                tracing::debug!("process ID changed; rebuilding ULID generator");
                GlobalGenInner::new()?
            }
            None => GlobalGenInner::new()?,
        };
        slot.insert(inner).generate()
    })
}

/// Generates the 26-digit canonical string representation of a new ULID.
///
/// # Examples
///
/// ```rust
/// let ulid_string: String = ulid_core::ulid_string()?;
/// assert_eq!(ulid_string.len(), 26);
/// # Ok::<(), ulid_core::EntropyError>(())
/// ```
pub fn ulid_string() -> Result<String, EntropyError> {
    ulid().map(String::from)
}

mod inner {
    use rand::rngs::{adapter::ReseedingRng, OsRng};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Core;

    use crate::generator::{with_rand08::Adapter, EntropyError, Generator};
    use crate::Ulid;

    /// Number of generated bytes after which the RNG reseeds from the OS, as in
    /// [`rand::rngs::ThreadRng`].
    const RESEED_THRESHOLD: u64 = 1024 * 64;

    /// The random number generator of the default generator.
    type GlobalGenRng = ReseedingRng<ChaCha12Core, OsRng>;

    /// A thin wrapper that remembers the process the generator was seeded in.
    #[derive(Debug)]
    pub struct GlobalGenInner {
        #[cfg(unix)]
        pid: u32,
        generator: Generator<Adapter<GlobalGenRng>>,
    }

    impl GlobalGenInner {
        pub fn new() -> Result<Self, EntropyError> {
            let core = ChaCha12Core::from_rng(OsRng)?;
            let rng = ReseedingRng::new(core, RESEED_THRESHOLD, OsRng);
            let pid = std::process::id();
            tracing::debug!(pid, "seeded per-thread ULID generator");
            Ok(Self {
                #[cfg(unix)]
                pid,
                generator: Generator::with_rand08(rng),
            })
        }

        #[cfg(unix)]
        pub fn is_current_process(&self) -> bool {
            self.pid == std::process::id()
        }

        #[cfg(not(unix))]
        pub fn is_current_process(&self) -> bool {
            true
        }

        pub fn generate(&mut self) -> Result<Ulid, EntropyError> {
            self.generator.generate()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ulid;
    use crate::Ulid;

    const N_SAMPLES: usize = 10_000;
    thread_local!(static SAMPLES: Vec<Ulid> = (0..N_SAMPLES).map(|_| ulid().unwrap()).collect());

    /// Generates canonical string
    #[test]
    fn generates_canonical_string() {
        let re = regex::Regex::new(r"^[0-7][0-9A-HJKMNP-TV-Z]{25}$").unwrap();
        SAMPLES.with(|samples| {
            for e in samples {
                assert!(re.is_match(&e.to_string()));
            }
        });
        assert!(re.is_match(&super::ulid_string().unwrap()));
    }

    /// Generates 10k identifiers without collision
    #[test]
    fn generates_10k_identifiers_without_collision() {
        use std::collections::HashSet;
        SAMPLES.with(|samples| {
            let s: HashSet<&Ulid> = samples.iter().collect();
            assert_eq!(s.len(), N_SAMPLES);
        });
    }

    /// Encodes up-to-date timestamp
    #[test]
    fn encodes_up_to_date_timestamp() {
        use std::time;
        let now = || {
            time::SystemTime::now()
                .duration_since(time::UNIX_EPOCH)
                .expect("clock may have gone backwards")
                .as_millis() as u64
        };

        let before = now();
        let samples: Vec<Ulid> = (0..N_SAMPLES).map(|_| ulid().unwrap()).collect();
        let after = now();
        for e in samples {
            assert!(before <= e.timestamp_ms() && e.timestamp_ms() <= after);
        }
    }

    /// Sets random bits properly
    #[test]
    fn sets_random_bits_properly() {
        // count '1' of each bit
        let bins = SAMPLES.with(|samples| {
            let mut bins = [0u32; 128];
            for e in samples {
                let n = u128::from(*e);
                for (i, bin) in bins.iter_mut().enumerate() {
                    *bin += (n >> (127 - i)) as u32 & 1;
                }
            }
            bins
        });

        // test if random bits are set to 1 at ~50% probability
        // set margin based on binom dist 99.999% confidence interval
        let margin = 4.417173 * (0.5 * 0.5 / N_SAMPLES as f64).sqrt();
        for (i, &bin) in bins.iter().enumerate().skip(48) {
            let p = bin as f64 / N_SAMPLES as f64;
            assert!((p - 0.5).abs() < margin, "random bit {i}: {p}");
        }
    }

    /// Generates no duplicate IDs under multithreading
    #[test]
    fn generates_no_duplicate_ids_under_multithreading(
    ) -> Result<(), Box<dyn std::error::Error>> {
        use std::{collections::HashSet, sync::mpsc, thread};

        let (tx, rx) = mpsc::channel();
        for _ in 0..4 {
            let tx = tx.clone();
            thread::Builder::new()
                .spawn(move || {
                    for _ in 0..N_SAMPLES {
                        tx.send(ulid().unwrap()).unwrap();
                    }
                })
                .map_err(|err| format!("failed to spawn thread: {:?}", err))?;
        }
        drop(tx);

        let mut s = HashSet::new();
        while let Ok(e) = rx.recv() {
            s.insert(e);
        }

        assert_eq!(s.len(), 4 * N_SAMPLES);
        Ok(())
    }
}
