#[cfg(not(feature = "std"))]
use core as std;

use std::{array, fmt, str};

use fstr::FStr;

use crate::alphabet::{DECODE, ENCODE, INVALID};

/// Represents a Universally Unique Lexicographically Sortable Identifier.
///
/// The derived ordering compares the underlying bytes, which is the same as comparing the IDs as
/// 128-bit big-endian integers and the same as comparing their canonical string representations.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Ulid([u8; 16]);

impl Ulid {
    /// Nil ULID (00000000000000000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max ULID (7ZZZZZZZZZZZZZZZZZZZZZZZZZ)
    pub const MAX: Self = Self([0xff; 16]);

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Creates a ULID from a millisecond Unix timestamp and 80 bits of entropy.
    ///
    /// Only the lower 48 bits of `unix_ts_ms` are kept; larger values wrap around silently.
    pub const fn from_parts(unix_ts_ms: u64, entropy: [u8; 10]) -> Self {
        let ts = unix_ts_ms.to_be_bytes();
        let mut bytes = [0u8; 16];
        let mut i = 0;
        while i < 6 {
            bytes[i] = ts[i + 2];
            i += 1;
        }
        while i < 16 {
            bytes[i] = entropy[i - 6];
            i += 1;
        }
        Self(bytes)
    }

    /// Returns the 48-bit timestamp field in milliseconds since the Unix epoch.
    pub const fn timestamp_ms(&self) -> u64 {
        let b = &self.0;
        u64::from_be_bytes([0, 0, b[0], b[1], b[2], b[3], b[4], b[5]])
    }

    /// Returns the 80-bit random field.
    pub fn entropy(&self) -> [u8; 10] {
        let mut dst = [0u8; 10];
        dst.copy_from_slice(&self.0[6..]);
        dst
    }

    /// Returns the 26-digit canonical string representation stored in a stack-allocated
    /// structure that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// This method is primarily for `no_std` environments where heap-allocated string types are
    /// not readily available. Use the [`fmt::Display`] trait usually to get the canonical string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ulid_core::Ulid;
    ///
    /// let x = "01arz3ndektsv4rrffq69g5fav".parse::<Ulid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "01ARZ3NDEKTSV4RRFFQ69G5FAV");
    /// assert_eq!(format!("{}", y), "01ARZ3NDEKTSV4RRFFQ69G5FAV");
    /// # Ok::<(), ulid_core::ParseError>(())
    /// ```
    pub fn encode(&self) -> FStr<26> {
        // 26 digits carry 130 bits; the top two are padding zeros, so the first digit is 0..=7
        let n = u128::from_be_bytes(self.0);
        let mut buffer = [0u8; 26];
        for (i, e) in buffer.iter_mut().rev().enumerate() {
            *e = ENCODE[(n >> (5 * i)) as usize & 0x1f];
        }
        debug_assert!(buffer.is_ascii());
        // SAFETY: every byte comes from the ASCII alphabet
        unsafe { FStr::from_bytes_unchecked(buffer) }
    }
}

impl fmt::Display for Ulid {
    /// Returns the 26-digit canonical string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Ulid {
    type Err = ParseError;

    /// Creates an object from the 26-digit string representation, accepting either case.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        decode(src.as_bytes()).map_err(|err| {
            tracing::debug!(error = %err, len = src.len(), "rejected ULID string");
            err
        })
    }
}

fn decode(src: &[u8]) -> Result<Ulid, ParseError> {
    let src = <&[u8; 26]>::try_from(src).map_err(|_| ParseError::InvalidLength)?;

    let mut digits = [0u8; 26];
    for (d, &c) in digits.iter_mut().zip(src) {
        *d = DECODE[c as usize];
        if *d == INVALID {
            return Err(ParseError::InvalidCharacter);
        }
    }

    if digits[0] > 7 {
        return Err(ParseError::Overflow);
    }

    let n = digits.iter().fold(0u128, |acc, &d| (acc << 5) | d as u128);
    Ok(Ulid(n.to_be_bytes()))
}

impl TryFrom<&str> for Ulid {
    type Error = ParseError;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        src.parse()
    }
}

impl From<Ulid> for [u8; 16] {
    fn from(src: Ulid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Ulid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl TryFrom<&[u8]> for Ulid {
    type Error = array::TryFromSliceError;

    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        <[u8; 16]>::try_from(src).map(Self)
    }
}

impl AsRef<[u8]> for Ulid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Ulid> for u128 {
    fn from(src: Ulid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Ulid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

/// Error parsing an invalid string representation of ULID.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum ParseError {
    /// The input is not exactly 26 bytes long.
    #[error("invalid length: expected 26 digits")]
    InvalidLength,

    /// The input contains a byte outside the base32 alphabet.
    #[error("invalid character: expected base32 digits only")]
    InvalidCharacter,

    /// The input denotes a number that does not fit in 128 bits.
    #[error("overflow: first digit must be 0-7")]
    Overflow,
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::{ParseError, Ulid};

    impl From<Ulid> for String {
        fn from(src: Ulid) -> Self {
            src.to_string()
        }
    }

    impl TryFrom<String> for Ulid {
        type Error = ParseError;

        fn try_from(src: String) -> Result<Self, Self::Error> {
            src.parse()
        }
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Ulid;

    impl From<Ulid> for uuid::Uuid {
        fn from(src: Ulid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Ulid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Ulid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Ulid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Ulid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Ulid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a ULID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Self::Value::try_from(value).map_err(de::Error::custom)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::Ulid;
        use serde_test::{assert_de_tokens_error, assert_tokens, Configure, Token};

        /// Serializes and deserializes prepared cases correctly
        #[test]
        fn serializes_and_deserializes_prepared_cases_correctly() {
            let cases = [
                ("00000000000000000000000000", &[0u8; 16]),
                ("7ZZZZZZZZZZZZZZZZZZZZZZZZZ", &[0xffu8; 16]),
                (
                    "01ARZ3NDEKTSV4RRFFQ69G5FAV",
                    &[
                        1, 86, 62, 58, 181, 211, 214, 118, 76, 97, 239, 185, 147, 2, 189, 91,
                    ],
                ),
                (
                    "01G2Q5J1WCFE0B24SFW5562QXK",
                    &[
                        1, 128, 174, 89, 7, 140, 123, 128, 177, 19, 47, 225, 74, 97, 95, 179,
                    ],
                ),
            ];

            for (text, bytes) in cases {
                let e = text.parse::<Ulid>().unwrap();
                assert_tokens(&e.readable(), &[Token::String(text)]);
                assert_tokens(&e.compact(), &[Token::Bytes(bytes)]);
            }
        }

        /// Reports decoding errors through the deserializer
        #[test]
        fn reports_decoding_errors_through_the_deserializer() {
            assert_de_tokens_error::<serde_test::Readable<Ulid>>(
                &[Token::Str("8ZZZZZZZZZZZZZZZZZZZZZZZZZ")],
                "overflow: first digit must be 0-7",
            );
        }
    }
}
