use crate::{Error, Result};

/// Base36 digits in ascending value order.
pub const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Numeric base of the identifier alphabet.
pub const BASE: u64 = 36;

const NO_VALUE: u8 = 255;

/// Lookup table for base36 decoding. Only the lowercase alphabet maps to a
/// value; every other byte, uppercase included, is rejected.
const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0_u8;
    while i < 36 {
        lut[ALPHABET[i as usize] as usize] = i;
        i += 1;
    }
    lut
};

/// Returns the digit character for `value`.
///
/// # Panics
///
/// Panics if `value >= 36`.
#[inline]
#[must_use]
pub const fn digit(value: u8) -> u8 {
    ALPHABET[value as usize]
}

/// Returns the numeric value of a base36 digit, or `None` if `byte` is not in
/// the lowercase alphabet.
#[inline]
#[must_use]
pub const fn value(byte: u8) -> Option<u8> {
    match LOOKUP[byte as usize] {
        NO_VALUE => None,
        v => Some(v),
    }
}

/// Returns `true` if `byte` is one of `[0-9a-z]`.
#[inline]
#[must_use]
pub const fn is_digit(byte: u8) -> bool {
    LOOKUP[byte as usize] != NO_VALUE
}

/// Maps every byte of `digits` to its numeric value.
///
/// # Errors
///
/// Returns [`Error::InvalidDigit`] for the first byte outside the alphabet.
pub(crate) fn digit_values(digits: &[u8]) -> Result<Vec<u8>> {
    digits
        .iter()
        .enumerate()
        .map(|(index, &byte)| value(byte).ok_or(Error::InvalidDigit { byte, index }))
        .collect()
}

/// Writes `value` into `buf` as zero-padded base36, most significant digit
/// first.
///
/// The caller guarantees `value < 36^buf.len()`; higher digits are dropped
/// otherwise.
pub(crate) fn encode_u64_padded(mut value: u64, buf: &mut [u8]) {
    for slot in buf.iter_mut().rev() {
        // `value % BASE` is always in 0..36
        *slot = digit((value % BASE) as u8);
        value /= BASE;
    }
    debug_assert_eq!(value, 0, "value does not fit in {} base36 digits", buf.len());
}

/// Decodes a short base36 string into a `u64`.
///
/// # Errors
///
/// Returns [`Error::InvalidDigit`] if a byte is outside the alphabet.
/// Accumulation saturates at `u64::MAX`, which is unreachable for the 7-digit
/// timestamp segment (36^7 < 2^37).
pub(crate) fn decode_u64(digits: &[u8]) -> Result<u64> {
    let mut acc = 0_u64;
    for (index, &byte) in digits.iter().enumerate() {
        let v = value(byte).ok_or(Error::InvalidDigit { byte, index })?;
        acc = acc.saturating_mul(BASE).saturating_add(u64::from(v));
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_inverse_of_alphabet() {
        for (i, &c) in ALPHABET.iter().enumerate() {
            assert_eq!(value(c), Some(i as u8));
            assert_eq!(digit(i as u8), c);
        }
    }

    #[test]
    fn lookup_rejects_uppercase_and_symbols() {
        for b in [b'A', b'Z', b'!', b' ', b'-', b'_', 0x00, 0xff] {
            assert!(!is_digit(b), "{b:#04x} should not be a digit");
            assert_eq!(value(b), None);
        }
    }

    #[test]
    fn encode_padded_fills_left_with_zeros() {
        let mut buf = [0_u8; 7];
        encode_u64_padded(0, &mut buf);
        assert_eq!(&buf, b"0000000");

        encode_u64_padded(35, &mut buf);
        assert_eq!(&buf, b"000000z");

        encode_u64_padded(1_700_000_000, &mut buf);
        assert_eq!(&buf, b"0s44we8");

        encode_u64_padded(36_u64.pow(7) - 1, &mut buf);
        assert_eq!(&buf, b"zzzzzzz");
    }

    #[test]
    fn decode_u64_reads_padded_digits() {
        assert_eq!(decode_u64(b"0000000").unwrap(), 0);
        assert_eq!(decode_u64(b"0s44we8").unwrap(), 1_700_000_000);
        assert_eq!(decode_u64(b"zzzzzzz").unwrap(), 36_u64.pow(7) - 1);
    }

    #[test]
    fn decode_u64_reports_offending_byte() {
        assert_eq!(
            decode_u64(b"00a!").unwrap_err(),
            Error::InvalidDigit {
                byte: b'!',
                index: 3,
            }
        );
    }

    #[test]
    fn digit_values_maps_each_byte() {
        assert_eq!(digit_values(b"09az").unwrap(), vec![0, 9, 10, 35]);
        assert!(matches!(
            digit_values(b"0A"),
            Err(Error::InvalidDigit { byte: b'A', index: 1 })
        ));
    }
}
