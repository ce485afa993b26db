use crate::{
    Backend, Base36Backend, RANDOMNESS_BYTES, RANDOMNESS_LENGTH, RandomBlock, Result, digit,
    digit_values, value,
};

const HEX_RADIX: u32 = 16;
const DECIMAL_RADIX: u32 = 10;
const BASE36_RADIX: u32 = 36;
const HEX_LENGTH: usize = RANDOMNESS_BYTES * 2;

/// Base36 conversion using only machine-word arithmetic.
///
/// Numbers are held as most-significant-first digit vectors in a small radix
/// (hex or decimal) and converted by schoolbook long division and
/// multiply-add. The results are identical to [`crate::NativeBigInt`] for
/// every input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LongDivision;

impl Base36Backend for LongDivision {
    fn kind(&self) -> Backend {
        Backend::LongDivision
    }

    fn bytes_to_digits(&self, bytes: &RandomBlock) -> String {
        // Hex digits share their values with the base36 alphabet.
        let mut nibbles: Vec<u8> = hex::encode(bytes).bytes().filter_map(value).collect();

        let mut out = Vec::with_capacity(RANDOMNESS_LENGTH);
        loop {
            let (quotient, rem) = divide_small(&nibbles, HEX_RADIX, BASE36_RADIX);
            out.push(digit(rem));
            if quotient.is_empty() {
                break;
            }
            nibbles = quotient;
        }
        out.reverse();
        out.into_iter().map(char::from).collect()
    }

    fn digits_to_bytes(&self, digits: &str) -> Result<RandomBlock> {
        let mut decimal = vec![0_u8];
        for v in digit_values(digits.as_bytes())? {
            mul_add(&mut decimal, DECIMAL_RADIX, BASE36_RADIX, v);
        }

        let mut hex_rev = Vec::with_capacity(HEX_LENGTH);
        loop {
            let (quotient, rem) = divide_small(&decimal, DECIMAL_RADIX, HEX_RADIX);
            hex_rev.push(rem);
            if quotient.is_empty() {
                break;
            }
            decimal = quotient;
        }
        // Least significant nibble first: zero-extend or drop the high end.
        hex_rev.resize(HEX_LENGTH, 0);

        let mut out = [0_u8; RANDOMNESS_BYTES];
        for (i, byte) in out.iter_mut().enumerate() {
            let hi = hex_rev[HEX_LENGTH - 1 - 2 * i];
            let lo = hex_rev[HEX_LENGTH - 2 - 2 * i];
            *byte = (hi << 4) | lo;
        }
        Ok(out)
    }
}

/// Divides a most-significant-first digit vector in `radix` by a small
/// `divisor`.
///
/// Returns the quotient with leading zeros stripped (empty when the quotient
/// is zero) and the remainder.
fn divide_small(digits: &[u8], radix: u32, divisor: u32) -> (Vec<u8>, u8) {
    let mut quotient = Vec::with_capacity(digits.len());
    let mut rem = 0_u32;
    for &d in digits {
        let acc = rem * radix + u32::from(d);
        let q = acc / divisor;
        rem = acc % divisor;
        if q != 0 || !quotient.is_empty() {
            // q < radix because rem < divisor carries at most one place
            quotient.push(q as u8);
        }
    }
    (quotient, rem as u8)
}

/// Computes `digits = digits * factor + addend` in place, growing the vector
/// at the front as carries spill over.
fn mul_add(digits: &mut Vec<u8>, radix: u32, factor: u32, addend: u8) {
    let mut carry = u32::from(addend);
    for d in digits.iter_mut().rev() {
        let acc = u32::from(*d) * factor + carry;
        *d = (acc % radix) as u8;
        carry = acc / radix;
    }
    let mut spill = Vec::new();
    while carry > 0 {
        spill.push((carry % radix) as u8);
        carry /= radix;
    }
    if !spill.is_empty() {
        spill.reverse();
        digits.splice(0..0, spill);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divide_small_strips_leading_zeros() {
        // 0x24 / 36 = 1 r 0
        assert_eq!(divide_small(&[2, 4], 16, 36), (vec![1], 0));
        // 0x23 / 36 = 0 r 35
        assert_eq!(divide_small(&[2, 3], 16, 36), (vec![], 35));
        // 1000 / 16 = 62 r 8
        assert_eq!(divide_small(&[1, 0, 0, 0], 10, 16), (vec![6, 2], 8));
        assert_eq!(divide_small(&[0, 0, 0], 16, 36), (vec![], 0));
    }

    #[test]
    fn mul_add_carries_into_new_digits() {
        let mut decimal = vec![0];
        mul_add(&mut decimal, 10, 36, 5);
        assert_eq!(decimal, vec![5]);
        mul_add(&mut decimal, 10, 36, 35);
        // 5 * 36 + 35 = 215
        assert_eq!(decimal, vec![2, 1, 5]);
        mul_add(&mut decimal, 10, 36, 0);
        // 215 * 36 = 7740
        assert_eq!(decimal, vec![7, 7, 4, 0]);
    }

    #[test]
    fn mul_add_on_zero_stays_single_digit() {
        let mut decimal = vec![0];
        mul_add(&mut decimal, 10, 36, 0);
        assert_eq!(decimal, vec![0]);
    }

    #[test]
    fn all_zero_block_encodes_to_single_zero() {
        assert_eq!(LongDivision.bytes_to_digits(&[0; 12]), "0");
    }

    #[test]
    fn known_vectors() {
        let mut thirty_six = [0_u8; 12];
        thirty_six[11] = 36;
        assert_eq!(LongDivision.bytes_to_digits(&thirty_six), "10");
        assert_eq!(
            LongDivision.bytes_to_digits(&[0xff; 12]),
            "7oiylpimjg5u2ca1ypr"
        );

        let block: [u8; 12] = hex::decode("0123456789abcdef01234567")
            .unwrap()
            .try_into()
            .unwrap();
        assert_eq!(LongDivision.bytes_to_digits(&block), "188skr4f4jv458xrhj");
        assert_eq!(LongDivision.digits_to_bytes("188skr4f4jv458xrhj").unwrap(), block);
    }

    #[test]
    fn decode_ignores_leading_zero_digits() {
        assert_eq!(
            LongDivision.digits_to_bytes("0000000000000000000").unwrap(),
            [0; 12]
        );
        assert_eq!(
            LongDivision.digits_to_bytes("07oiylpimjg5u2ca1ypr").unwrap(),
            [0xff; 12]
        );
    }

    #[test]
    fn decode_keeps_low_bytes_on_overflow() {
        let bytes = LongDivision.digits_to_bytes("zzzzzzzzzzzzzzzzzzz").unwrap();
        assert_eq!(hex::encode(bytes), "afcc1eba07ff563fffffffff");
    }

    #[test]
    fn decode_rejects_uppercase() {
        assert!(matches!(
            LongDivision.digits_to_bytes("00Z"),
            Err(crate::Error::InvalidDigit { byte: b'Z', index: 2 })
        ));
    }
}
