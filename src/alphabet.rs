//! Canonical base32 alphabet and its inverse lookup table.

/// Marker stored in [`DECODE`] for bytes outside the alphabet.
pub(crate) const INVALID: u8 = 0xff;

/// Maps a 5-bit value to its canonical (uppercase) ASCII digit.
pub(crate) const ENCODE: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Maps an ASCII byte to its 5-bit value, or [`INVALID`].
///
/// Upper- and lowercase letters share a value. `I`, `L`, `O` and `U` are not part of the alphabet
/// and are rejected rather than read as look-alike digits.
pub(crate) const DECODE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ENCODE.len() {
        table[ENCODE[i] as usize] = i as u8;
        table[ENCODE[i].to_ascii_lowercase() as usize] = i as u8;
        i += 1;
    }
    table
};

#[cfg(test)]
mod tests {
    use super::{DECODE, ENCODE, INVALID};

    /// Inverts every alphabet entry in both cases
    #[test]
    fn inverts_every_alphabet_entry_in_both_cases() {
        for (i, &c) in ENCODE.iter().enumerate() {
            assert_eq!(DECODE[c as usize], i as u8);
            assert_eq!(DECODE[c.to_ascii_lowercase() as usize], i as u8);
        }
    }

    /// Rejects ambiguous letters and everything outside the alphabet
    #[test]
    fn rejects_ambiguous_letters_and_everything_outside_the_alphabet() {
        for c in *b"ILOUilou-_ +{}\0" {
            assert_eq!(DECODE[c as usize], INVALID, "byte {c:#04x}");
        }
        for c in 0x80..=0xff {
            assert_eq!(DECODE[c], INVALID);
        }

        let accepted = DECODE.iter().filter(|&&v| v != INVALID).count();
        assert_eq!(accepted, 32 + 22);
    }

    /// Sorts the alphabet in ASCII order
    #[test]
    fn sorts_the_alphabet_in_ascii_order() {
        assert!(ENCODE.windows(2).all(|w| w[0] < w[1]));
    }
}
