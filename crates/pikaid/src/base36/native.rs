use crate::{BASE, Backend, Base36Backend, RANDOMNESS_BYTES, RandomBlock, Result, digit_values};
use num_bigint::BigUint;

/// Base36 conversion backed by [`BigUint`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NativeBigInt;

impl Base36Backend for NativeBigInt {
    fn kind(&self) -> Backend {
        Backend::NativeBigInt
    }

    fn bytes_to_digits(&self, bytes: &RandomBlock) -> String {
        BigUint::from_bytes_be(bytes).to_str_radix(BASE as u32)
    }

    fn digits_to_bytes(&self, digits: &str) -> Result<RandomBlock> {
        let values = digit_values(digits.as_bytes())?;
        // Every value is < 36 after `digit_values`, so this only yields
        // `None` for an empty input.
        let n = BigUint::from_radix_be(&values, BASE as u32).unwrap_or_default();
        Ok(fit_be(&n.to_bytes_be()))
    }
}

/// Left-pads `raw` to 12 bytes, or keeps its 12 least significant bytes.
fn fit_be(raw: &[u8]) -> RandomBlock {
    let mut out = [0_u8; RANDOMNESS_BYTES];
    let take = raw.len().min(RANDOMNESS_BYTES);
    out[RANDOMNESS_BYTES - take..].copy_from_slice(&raw[raw.len() - take..]);
    out
}
