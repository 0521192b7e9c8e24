//! A compact implementation of ULID, the Universally Unique Lexicographically Sortable Identifier
//!
//! ```rust
//! let ulid = ulid_core::ulid()?;
//! println!("{}", ulid); // e.g. "01ARZ3NDEKTSV4RRFFQ69G5FAV"
//! println!("{:?}", ulid.as_bytes()); // as 16-byte big-endian array
//!
//! let parsed: ulid_core::Ulid = "01arz3ndektsv4rrffq69g5fav".parse().unwrap();
//! assert_eq!(parsed.to_string(), "01ARZ3NDEKTSV4RRFFQ69G5FAV");
//! # Ok::<(), ulid_core::EntropyError>(())
//! ```
//!
//! See the [ULID specification](https://github.com/ulid/spec).
//!
//! # Field and bit layout
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          unix_ts_ms                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          unix_ts_ms           |            entropy            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            entropy                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            entropy                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! - The 48-bit `unix_ts_ms` field holds the Unix timestamp in milliseconds. Timestamps beyond
//!   48 bits (around the year 10889) wrap around.
//! - The 80-bit `entropy` field is filled with a cryptographically strong random number drawn
//!   afresh for every ID. IDs generated within the same millisecond are not ordered among
//!   themselves.
//!
//! # Canonical string representation
//!
//! A ULID is written as 26 digits of the base32 alphabet `0123456789ABCDEFGHJKMNPQRSTVWXYZ`,
//! most significant first. Since 26 digits hold 130 bits, the first digit never exceeds `7`.
//! Parsing accepts lowercase digits as well and fails with a [`ParseError`] on wrong length,
//! characters outside the alphabet, or values that would not fit in 128 bits.
//!
//! # Crate features
//!
//! - `std`: standard library integrations such as [`generator::StdSystemTime`].
//! - `global_gen` (default): the per-thread default generator behind [`ulid()`].
//! - `serde`: `Serialize` and `Deserialize` implementations for [`Ulid`].
//! - `uuid`: conversions between [`Ulid`] and `uuid::Uuid`.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod alphabet;

mod id;
pub use id::{ParseError, Ulid};

pub mod generator;
pub use generator::{EntropyError, Generator};

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{ulid, ulid_string};
